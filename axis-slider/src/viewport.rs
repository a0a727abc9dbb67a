//! Pixel dimensions of the canvas hosting a slider.
//!
//! The slider never caches these values. Every geometry query goes back to
//! the viewport, so a window resize between two calls is picked up
//! immediately.

use std::cell::Cell;
use std::rc::Rc;

/// Source of the current canvas size in pixels.
pub trait Viewport {
    /// Current canvas width.
    fn width(&self) -> u32;

    /// Current canvas height.
    fn height(&self) -> u32;
}

impl<V: Viewport + ?Sized> Viewport for &V {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }
}

impl<V: Viewport + ?Sized> Viewport for Rc<V> {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }
}

impl<V: Viewport + ?Sized> Viewport for Box<V> {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }
}

/// A canvas whose size never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedViewport {
    pub width: u32,
    pub height: u32,
}

impl FixedViewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Viewport for FixedViewport {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

/// A canvas size the owning view updates in place (e.g. on window resize).
///
/// Wrap it in an `Rc` and hand clones to every slider living on the canvas.
#[derive(Debug, Default)]
pub struct SharedViewport {
    width: Cell<u32>,
    height: Cell<u32>,
}

impl SharedViewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: Cell::new(width),
            height: Cell::new(height),
        }
    }

    /// Record a new canvas size.
    pub fn resize(&self, width: u32, height: u32) {
        log::trace!("[viewport] resize {}x{}", width, height);
        self.width.set(width);
        self.height.set(height);
    }
}

impl Viewport for SharedViewport {
    fn width(&self) -> u32 {
        self.width.get()
    }

    fn height(&self) -> u32 {
        self.height.get()
    }
}
