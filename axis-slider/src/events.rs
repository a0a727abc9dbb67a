//! Pointer gesture handling.
//!
//! A gesture is one `pick`, any number of `drag` calls and one `release`.
//! Only the main-axis coordinate takes part in any decision; the orthogonal
//! one is accepted so callers can forward raw pointer positions.

use crate::geometry::{position_ratio, HitZone, SliderGeometry};
use crate::slider::AxisSlider;
use crate::types::Interaction;
use crate::viewport::Viewport;

impl<V: Viewport> AxisSlider<V> {
    /// Start a gesture at canvas pixel `(x, y)`.
    ///
    /// - On a resize handle (resizable sliders only) the gesture grabs that edge.
    /// - On the thumb body the gesture grabs the thumb at the picked point.
    /// - On the bare track the thumb jumps to center on the pointer, then
    ///   the gesture grabs it there. A pointer beyond either end of the track
    ///   grabs the nearest thumb point instead, so dragging back onto the
    ///   track moves the thumb right away.
    ///
    /// No callback fires here; a track jump is reported by the next `drag`.
    pub fn pick(&mut self, x: i32, y: i32) {
        let main = self.orientation.main(x, y) as f32;
        let geom = self.geometry();
        let zone = geom.hit(main, self.resize_margin as f32, self.can_resize());

        self.interaction = match zone {
            HitZone::StartEdge => Interaction::ResizingStart {
                anchor: main - geom.thumb_start,
            },
            HitZone::EndEdge => Interaction::ResizingEnd {
                anchor: geom.thumb_end() - main,
            },
            HitZone::Body => Interaction::Moving {
                anchor: main - geom.thumb_start,
            },
            HitZone::Track => {
                let start = geom.centered_start(main);
                self.position = geom.position_ratio(start);
                // Grab the nearest point of the thumb when the pointer is off the track.
                let anchor = (main - start).clamp(0.0, geom.thumb_length);
                Interaction::Moving { anchor }
            }
        };

        log::debug!(
            "[slider] pick {:?} main={} zone={:?} -> {:?}",
            self.orientation,
            main,
            zone,
            self.interaction
        );
    }

    /// Continue the active gesture with the pointer at canvas pixel `(x, y)`.
    ///
    /// Exactly one callback fires per call while a gesture is active: the
    /// drag callback when moving, the resize callback when resizing. Without
    /// a preceding `pick` this is a no-op.
    ///
    /// A resize moves the position ratio as well, but only the resize
    /// callback hears about it; read the new position from `pos_ratio()`.
    pub fn drag(&mut self, x: i32, y: i32) {
        let main = self.orientation.main(x, y) as f32;
        let geom = self.geometry();

        match self.interaction {
            Interaction::Idle => {
                log::trace!("[slider] drag at {} without pick ignored", main);
            }
            Interaction::Moving { anchor } => {
                let start = geom.clamp_start(main - anchor);
                self.position = geom.position_ratio(start);
                log::trace!("[slider] move start={} pos={}", start, self.position);
                self.notify_drag();
            }
            Interaction::ResizingStart { anchor } => {
                let end = geom.thumb_end();
                let min_length = self.min_thumb_length(&geom);
                let upper = (end - min_length).max(0.0);
                let start = (main - anchor).max(0.0).min(upper);
                self.apply_resize(&geom, start, end);
            }
            Interaction::ResizingEnd { anchor } => {
                let start = geom.thumb_start;
                let min_length = self.min_thumb_length(&geom);
                let lower = (start + min_length).min(geom.track_length);
                let end = (main + anchor).max(lower).min(geom.track_length);
                self.apply_resize(&geom, start, end);
            }
        }
    }

    /// End the active gesture. Safe to call when no gesture is active.
    pub fn release(&mut self) {
        if self.interaction.is_active() {
            log::debug!(
                "[slider] release {:?} pos={} len={}",
                self.orientation,
                self.position,
                self.length
            );
        }
        self.interaction = Interaction::Idle;
    }

    fn min_thumb_length(&self, geom: &SliderGeometry) -> f32 {
        (self.min_slider_pixel_length as f32).min(geom.track_length)
    }

    /// Store the thumb spanning `[start, end]` pixels and report it.
    fn apply_resize(&mut self, geom: &SliderGeometry, start: f32, end: f32) {
        if geom.track_length <= 0.0 {
            // Nothing to measure against; keep the owner's length.
            self.position = 0.0;
            let length = self.length;
            self.notify_resize(0.0, length);
            return;
        }

        let start_ratio = geom.track_ratio(start);
        let end_ratio = geom.track_ratio(end);
        let travel = (geom.track_length - (end - start)).max(0.0);

        self.length = (end_ratio - start_ratio).max(0.0);
        self.position = position_ratio(start, travel);

        log::trace!(
            "[slider] resize [{}, {}] -> start={} end={} pos={}",
            start,
            end,
            start_ratio,
            end_ratio,
            self.position
        );
        self.notify_resize(start_ratio, end_ratio);
    }

    fn notify_drag(&mut self) {
        let position = self.position;
        if let Some(callback) = self.drag_callback.as_mut() {
            callback(position);
        }
    }

    fn notify_resize(&mut self, start_ratio: f32, end_ratio: f32) {
        if let Some(callback) = self.resize_callback.as_mut() {
            callback(start_ratio, end_ratio);
        }
    }
}
