//! Serializable slider configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::slider::{DEFAULT_MIN_SLIDER_PIXEL_LENGTH, DEFAULT_RESIZE_MARGIN};
use crate::types::{Orientation, Resizability};

/// Everything an owning view sets up once per slider.
///
/// Missing fields fall back to their defaults, so partial documents load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub orientation: Orientation,
    pub resizability: Resizability,
    /// Own thickness across the main axis.
    pub pixel_height: u32,
    /// Space reserved at the track end for the perpendicular slider.
    pub orthogonal_pixel_height: u32,
    pub min_slider_pixel_length: u32,
    pub resize_margin: u32,
    /// Initial position ratio.
    pub position: f32,
    /// Initial length ratio.
    pub length: f32,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            resizability: Resizability::Resizable,
            pixel_height: 0,
            orthogonal_pixel_height: 0,
            min_slider_pixel_length: DEFAULT_MIN_SLIDER_PIXEL_LENGTH,
            resize_margin: DEFAULT_RESIZE_MARGIN,
            position: 0.0,
            length: 1.0,
        }
    }
}

impl SliderConfig {
    /// Create a config for the given orientation with its usual resizability.
    pub fn new(orientation: Orientation) -> Self {
        let resizability = match orientation {
            Orientation::Horizontal => Resizability::Resizable,
            Orientation::Vertical => Resizability::Fixed,
        };
        Self {
            orientation,
            resizability,
            ..Default::default()
        }
    }

    /// Set the own and reserved orthogonal thickness.
    pub fn pixel_heights(mut self, own: u32, orthogonal: u32) -> Self {
        self.pixel_height = own;
        self.orthogonal_pixel_height = orthogonal;
        self
    }

    /// Set the initial position and length ratios.
    pub fn ratios(mut self, position: f32, length: f32) -> Self {
        self.position = position;
        self.length = length;
        self
    }

    pub fn resizability(mut self, resizability: Resizability) -> Self {
        self.resizability = resizability;
        self
    }

    /// Check the values a slider cannot absorb by clamping.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_slider_pixel_length == 0 {
            return Err(ConfigError::ZeroMinLength);
        }
        check_ratio("position", self.position)?;
        check_ratio("length", self.length)?;
        Ok(())
    }
}

fn check_ratio(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidRatio { field, value })
    }
}

/// Errors from loading a `SliderConfig`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A ratio field is non-finite or outside `[0, 1]`.
    #[error("Ratio '{field}' must be within [0, 1], got {value}")]
    InvalidRatio { field: &'static str, value: f32 },

    /// The minimum thumb length must be at least one pixel.
    #[error("Minimum slider pixel length must be positive")]
    ZeroMinLength,
}
