//! The slider itself: configuration, callbacks and geometry queries.
//!
//! Gesture handling (`pick`, `drag`, `release`) lives in `events`.

use std::fmt;

use crate::config::{ConfigError, SliderConfig};
use crate::geometry::{sanitize_ratio, HitZone, SliderGeometry};
use crate::types::{DragCallback, Interaction, Orientation, Resizability, ResizeCallback};
use crate::viewport::Viewport;

/// Floor on the thumb length in pixels.
pub const DEFAULT_MIN_SLIDER_PIXEL_LENGTH: u32 = 20;

/// Distance from a thumb edge, in pixels, within which a pick grabs the edge.
pub const DEFAULT_RESIZE_MARGIN: u32 = 6;

/// An axis-aligned scrollbar whose thumb can be moved and, optionally,
/// resized by dragging its edges.
///
/// The thumb is described by two ratios. `position` is travel-adjusted:
/// 0 puts the thumb flush with the track start and 1 flush with the track
/// end. `length` is the thumb length as a fraction of the track.
pub struct AxisSlider<V> {
    pub(crate) viewport: V,
    pub(crate) orientation: Orientation,
    pub(crate) resizability: Resizability,
    pub(crate) pixel_height: u32,
    pub(crate) orthogonal_pixel_height: u32,
    pub(crate) min_slider_pixel_length: u32,
    pub(crate) resize_margin: u32,
    pub(crate) position: f32,
    pub(crate) length: f32,
    pub(crate) interaction: Interaction,
    pub(crate) drag_callback: Option<DragCallback>,
    pub(crate) resize_callback: Option<ResizeCallback>,
}

impl<V: Viewport> AxisSlider<V> {
    /// Create a slider at position 0 spanning the whole track.
    pub fn new(viewport: V, orientation: Orientation, resizability: Resizability) -> Self {
        Self {
            viewport,
            orientation,
            resizability,
            pixel_height: 0,
            orthogonal_pixel_height: 0,
            min_slider_pixel_length: DEFAULT_MIN_SLIDER_PIXEL_LENGTH,
            resize_margin: DEFAULT_RESIZE_MARGIN,
            position: 0.0,
            length: 1.0,
            interaction: Interaction::Idle,
            drag_callback: None,
            resize_callback: None,
        }
    }

    /// A resizable slider along x, as used for timeline zoom.
    pub fn horizontal(viewport: V) -> Self {
        Self::new(viewport, Orientation::Horizontal, Resizability::Resizable)
    }

    /// A move-only slider along y.
    pub fn vertical(viewport: V) -> Self {
        Self::new(viewport, Orientation::Vertical, Resizability::Fixed)
    }

    /// Build a slider from a validated configuration.
    pub fn from_config(viewport: V, config: &SliderConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut slider = Self::new(viewport, config.orientation, config.resizability);
        slider.pixel_height = config.pixel_height;
        slider.orthogonal_pixel_height = config.orthogonal_pixel_height;
        slider.min_slider_pixel_length = config.min_slider_pixel_length;
        slider.resize_margin = config.resize_margin;
        slider.position = config.position;
        slider.set_normalized_length(config.length);
        Ok(slider)
    }

    /// Snapshot of the current configuration.
    pub fn config(&self) -> SliderConfig {
        SliderConfig {
            orientation: self.orientation,
            resizability: self.resizability,
            pixel_height: self.pixel_height,
            orthogonal_pixel_height: self.orthogonal_pixel_height,
            min_slider_pixel_length: self.min_slider_pixel_length,
            resize_margin: self.resize_margin,
            position: self.position,
            length: self.length,
        }
    }

    // -------------------------------------------------------------------------
    // Configuration
    // -------------------------------------------------------------------------

    /// Set the slider's own thickness across the main axis.
    pub fn set_pixel_height(&mut self, height: u32) {
        self.pixel_height = height;
    }

    /// Set the space reserved at the track end for the perpendicular slider.
    pub fn set_orthogonal_slider_pixel_height(&mut self, height: u32) {
        self.orthogonal_pixel_height = height;
        self.length = self.floor_length(self.length);
    }

    /// Set the position ratio, clamped into `[0, 1]`.
    pub fn set_normalized_position(&mut self, position: f32) {
        self.position = sanitize_ratio(position);
    }

    /// Set the length ratio, clamped into `[min_length_ratio(), 1]`.
    ///
    /// NaN and non-positive lengths become the smallest showable length.
    pub fn set_normalized_length(&mut self, length: f32) {
        self.length = self.floor_length(length);
    }

    /// Set the thumb length floor. Zero is raised to one pixel.
    pub fn set_min_slider_pixel_length(&mut self, pixels: u32) {
        self.min_slider_pixel_length = pixels.max(1);
        self.length = self.floor_length(self.length);
    }

    /// Set the edge grab distance used by resizable sliders.
    pub fn set_resize_margin(&mut self, pixels: u32) {
        self.resize_margin = pixels;
    }

    /// Register the sink for position changes caused by moving the thumb.
    pub fn set_drag_callback(&mut self, callback: impl FnMut(f32) + 'static) {
        self.drag_callback = Some(Box::new(callback));
    }

    /// Register the sink for `(start, end)` ratio changes caused by resizing.
    pub fn set_resize_callback(&mut self, callback: impl FnMut(f32, f32) + 'static) {
        self.resize_callback = Some(Box::new(callback));
    }

    /// Drop both callbacks; later gestures still update the slider state.
    pub fn clear_callbacks(&mut self) {
        self.drag_callback = None;
        self.resize_callback = None;
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn can_resize(&self) -> bool {
        self.resizability.can_resize()
    }

    pub fn pixel_height(&self) -> u32 {
        self.pixel_height
    }

    pub fn orthogonal_pixel_height(&self) -> u32 {
        self.orthogonal_pixel_height
    }

    pub fn min_slider_pixel_length(&self) -> u32 {
        self.min_slider_pixel_length
    }

    pub fn resize_margin(&self) -> u32 {
        self.resize_margin
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    /// Position ratio. Equals the last value sent to the drag callback unless
    /// a resize has moved the thumb since.
    pub fn pos_ratio(&self) -> f32 {
        self.position
    }

    /// Length ratio, equal to `end - start` of the last resize notification.
    pub fn length_ratio(&self) -> f32 {
        self.length
    }

    /// Current gesture state.
    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    /// True between a pick and its release.
    pub fn is_dragging(&self) -> bool {
        self.interaction.is_active()
    }

    /// Track length in pixels: the main-axis extent minus the reservation.
    pub fn track_pixel_length(&self) -> f32 {
        let extent = self
            .orientation
            .main_extent(self.viewport.width(), self.viewport.height());
        extent.saturating_sub(self.orthogonal_pixel_height) as f32
    }

    /// Lay out the thumb against the current viewport size.
    pub fn geometry(&self) -> SliderGeometry {
        SliderGeometry::new(
            self.track_pixel_length(),
            self.position,
            self.length,
            self.min_slider_pixel_length as f32,
        )
    }

    /// Thumb start in pixels from the track start.
    pub fn pixel_pos(&self) -> f32 {
        self.geometry().thumb_start
    }

    /// Thumb length in pixels.
    pub fn pixel_length(&self) -> f32 {
        self.geometry().thumb_length
    }

    /// What a pick at `main` would grab, without starting a gesture.
    pub fn hit_test(&self, main: i32) -> HitZone {
        self.geometry().hit(main as f32, self.resize_margin as f32, self.can_resize())
    }

    /// Length ratio of a minimum-length thumb on the current track.
    ///
    /// Zero while the track is empty, since any length fits it.
    pub fn min_length_ratio(&self) -> f32 {
        let track = self.track_pixel_length();
        if track <= 0.0 {
            return 0.0;
        }
        (self.min_slider_pixel_length as f32 / track).min(1.0)
    }

    /// Raise a length ratio to the minimum the current track can show.
    fn floor_length(&self, length: f32) -> f32 {
        let floor = self.min_length_ratio();
        if !(length.is_finite() && length > 0.0) {
            // An empty track has no floor to fall back on: fill it.
            return if floor > 0.0 { floor } else { 1.0 };
        }
        sanitize_ratio(length).max(floor)
    }
}

impl<V> fmt::Debug for AxisSlider<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AxisSlider")
            .field("orientation", &self.orientation)
            .field("resizability", &self.resizability)
            .field("pixel_height", &self.pixel_height)
            .field("orthogonal_pixel_height", &self.orthogonal_pixel_height)
            .field("min_slider_pixel_length", &self.min_slider_pixel_length)
            .field("resize_margin", &self.resize_margin)
            .field("position", &self.position)
            .field("length", &self.length)
            .field("interaction", &self.interaction)
            .field("drag_callback", &self.drag_callback.is_some())
            .field("resize_callback", &self.resize_callback.is_some())
            .finish_non_exhaustive()
    }
}
