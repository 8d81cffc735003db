//! Layout geometry and hit-testing
//!
//! Pure functions over the workspace model, shared between the renderer
//! (what to draw where) and input handling (what is under the pointer).

mod geometry;

pub use geometry::{
    compute_layout, Layout, PanelRects, HANDLE_THICKNESS, HEADER_EXTENT, TOGGLE_INSET, TOGGLE_SIZE,
};
pub use hit_test::{hit_test, HitTarget};

use serde::Serialize;

/// A point in logical units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in logical units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a rect; negative sizes collapse to zero
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.x
            && pt.x < self.x + self.width
            && pt.y >= self.y
            && pt.y < self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}
