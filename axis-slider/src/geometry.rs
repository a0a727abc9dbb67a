//! Pixel geometry of a slider along its main axis.
//!
//! A `SliderGeometry` is a snapshot: it is computed from the live viewport
//! size on every call and never stored by the slider.

/// What a pick at a given main-axis pixel lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitZone {
    /// Bare track outside the thumb.
    Track,
    /// Thumb body, away from the resize handles.
    Body,
    /// Resize handle at the thumb start.
    StartEdge,
    /// Resize handle at the thumb end.
    EndEdge,
}

/// Derived pixel quantities of one slider, all along the main axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SliderGeometry {
    /// Pixels available to the thumb after the orthogonal reservation.
    pub track_length: f32,
    /// Offset of the thumb start from the track start.
    pub thumb_start: f32,
    /// Thumb length, floored at the minimum length and capped at the track.
    pub thumb_length: f32,
}

impl SliderGeometry {
    /// Lay out a thumb on a track of `track_length` pixels.
    ///
    /// `position` and `length` are the normalized ratios. The thumb never
    /// gets shorter than `min_thumb_length` unless the track itself is shorter,
    /// in which case the thumb fills the track.
    pub fn new(track_length: f32, position: f32, length: f32, min_thumb_length: f32) -> Self {
        let track_length = track_length.max(0.0);
        let thumb_length = (length * track_length)
            .max(min_thumb_length)
            .min(track_length);
        let travel = (track_length - thumb_length).max(0.0);
        Self {
            track_length,
            thumb_start: position.clamp(0.0, 1.0) * travel,
            thumb_length,
        }
    }

    /// Offset of the thumb end from the track start.
    pub fn thumb_end(&self) -> f32 {
        self.thumb_start + self.thumb_length
    }

    /// How far the thumb start can move.
    pub fn travel(&self) -> f32 {
        (self.track_length - self.thumb_length).max(0.0)
    }

    /// Check if a main-axis pixel lies on the thumb (edges included).
    pub fn contains(&self, main: f32) -> bool {
        main >= self.thumb_start && main <= self.thumb_end()
    }

    /// Classify a pick. Handles are only reported when `can_resize` is set;
    /// the start handle wins when both are within `margin`.
    pub fn hit(&self, main: f32, margin: f32, can_resize: bool) -> HitZone {
        if !self.contains(main) {
            return HitZone::Track;
        }
        if can_resize {
            if main - self.thumb_start <= margin {
                return HitZone::StartEdge;
            }
            if self.thumb_end() - main <= margin {
                return HitZone::EndEdge;
            }
        }
        HitZone::Body
    }

    /// Clamp a candidate thumb start so the thumb stays on the track.
    pub fn clamp_start(&self, start: f32) -> f32 {
        start.max(0.0).min(self.travel())
    }

    /// Thumb start that centers the thumb on `main`, kept on the track.
    pub fn centered_start(&self, main: f32) -> f32 {
        self.clamp_start(main - self.thumb_length / 2.0)
    }

    /// Convert a thumb start into a position ratio (0 when there is no travel).
    pub fn position_ratio(&self, start: f32) -> f32 {
        position_ratio(start, self.travel())
    }

    /// Convert a pixel offset into a fraction of the track (0 on an empty track).
    pub fn track_ratio(&self, pixels: f32) -> f32 {
        if self.track_length <= 0.0 {
            return 0.0;
        }
        (pixels / self.track_length).clamp(0.0, 1.0)
    }
}

/// Travel-adjusted position ratio of a thumb start.
pub(crate) fn position_ratio(start: f32, travel: f32) -> f32 {
    if travel <= 0.0 {
        return 0.0;
    }
    (start / travel).clamp(0.0, 1.0)
}

/// Replace non-finite values with 0 and clamp into `[0, 1]`.
pub(crate) fn sanitize_ratio(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
