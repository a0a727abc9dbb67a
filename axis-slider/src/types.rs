//! Policy and state types shared by the slider modules.

use serde::{Deserialize, Serialize};

/// Which canvas axis a slider runs along.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Runs along x; reserves space at the right for a vertical sibling.
    #[default]
    Horizontal,
    /// Runs along y; reserves space at the bottom for a horizontal sibling.
    Vertical,
}

impl Orientation {
    /// Select the coordinate along the main axis.
    pub const fn main(self, x: i32, y: i32) -> i32 {
        match self {
            Orientation::Horizontal => x,
            Orientation::Vertical => y,
        }
    }

    /// Select the coordinate across the main axis.
    pub const fn orthogonal(self, x: i32, y: i32) -> i32 {
        match self {
            Orientation::Horizontal => y,
            Orientation::Vertical => x,
        }
    }

    /// Select the canvas extent along the main axis.
    pub const fn main_extent(self, width: u32, height: u32) -> u32 {
        match self {
            Orientation::Horizontal => width,
            Orientation::Vertical => height,
        }
    }
}

/// Whether the thumb edges can be dragged to change its length.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resizability {
    /// Only the whole thumb moves.
    Fixed,
    /// Picks near an edge grab that edge.
    #[default]
    Resizable,
}

impl Resizability {
    pub const fn can_resize(self) -> bool {
        matches!(self, Resizability::Resizable)
    }
}

/// Gesture state between a pick and its release.
///
/// Each active variant carries the anchor captured at pick time: the pixel
/// offset between the pointer and the feature it grabbed.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum Interaction {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Whole thumb follows the pointer. Anchor = pointer - thumb start.
    Moving { anchor: f32 },
    /// Start edge follows the pointer. Anchor = pointer - thumb start.
    ResizingStart { anchor: f32 },
    /// End edge follows the pointer. Anchor = thumb end - pointer.
    ResizingEnd { anchor: f32 },
}

impl Interaction {
    /// True while a gesture is in progress.
    pub const fn is_active(&self) -> bool {
        !matches!(self, Interaction::Idle)
    }

    /// True for either resize gesture.
    pub const fn is_resizing(&self) -> bool {
        matches!(
            self,
            Interaction::ResizingStart { .. } | Interaction::ResizingEnd { .. }
        )
    }

    /// The anchor of the active gesture, if any.
    pub const fn anchor(&self) -> Option<f32> {
        match *self {
            Interaction::Idle => None,
            Interaction::Moving { anchor }
            | Interaction::ResizingStart { anchor }
            | Interaction::ResizingEnd { anchor } => Some(anchor),
        }
    }
}

/// Receives the new position ratio after a move.
pub type DragCallback = Box<dyn FnMut(f32)>;

/// Receives the new `(start, end)` ratios of the thumb after a resize.
pub type ResizeCallback = Box<dyn FnMut(f32, f32)>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_selection() {
        assert_eq!(Orientation::Horizontal.main(3, 7), 3);
        assert_eq!(Orientation::Horizontal.orthogonal(3, 7), 7);
        assert_eq!(Orientation::Vertical.main(3, 7), 7);
        assert_eq!(Orientation::Vertical.orthogonal(3, 7), 3);
        assert_eq!(Orientation::Horizontal.main_extent(150, 1050), 150);
        assert_eq!(Orientation::Vertical.main_extent(150, 1050), 1050);
    }

    #[test]
    fn test_interaction_anchor() {
        assert_eq!(Interaction::Idle.anchor(), None);
        assert!(!Interaction::Idle.is_active());

        let moving = Interaction::Moving { anchor: 4.0 };
        assert_eq!(moving.anchor(), Some(4.0));
        assert!(moving.is_active());
        assert!(!moving.is_resizing());

        assert!(Interaction::ResizingStart { anchor: 1.0 }.is_resizing());
        assert_eq!(Interaction::ResizingEnd { anchor: 2.0 }.anchor(), Some(2.0));
    }
}
