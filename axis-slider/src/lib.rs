pub mod config;
pub mod events;
pub mod geometry;
pub mod slider;
pub mod types;
pub mod viewport;

pub use config::{ConfigError, SliderConfig};
pub use geometry::{HitZone, SliderGeometry};
pub use slider::{AxisSlider, DEFAULT_MIN_SLIDER_PIXEL_LENGTH, DEFAULT_RESIZE_MARGIN};
pub use types::{DragCallback, Interaction, Orientation, Resizability, ResizeCallback};
pub use viewport::{FixedViewport, SharedViewport, Viewport};
