//! Toolkit-neutral pointer events
//!
//! Positions are in logical units. `winit_adapter` converts raw window
//! events into these.

pub mod winit_adapter;

use crate::layout::Point;

/// Phase of a pointer interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    Down,
    Move,
    Up,
}

/// Which button a press or release came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
    Other,
}

/// A single pointer event delivered to the workspace
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub position: Point,
    /// None for moves
    pub button: Option<PointerButton>,
}

impl PointerEvent {
    pub fn down(x: f32, y: f32) -> Self {
        Self {
            kind: PointerKind::Down,
            position: Point::new(x, y),
            button: Some(PointerButton::Primary),
        }
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self {
            kind: PointerKind::Move,
            position: Point::new(x, y),
            button: None,
        }
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self {
            kind: PointerKind::Up,
            position: Point::new(x, y),
            button: Some(PointerButton::Primary),
        }
    }

    /// Whether this event can start or end a resize gesture
    pub fn is_primary(&self) -> bool {
        matches!(self.button, None | Some(PointerButton::Primary))
    }
}
