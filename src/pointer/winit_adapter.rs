//! Adapter to convert winit mouse input to our PointerEvent type

use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton};

use super::{PointerButton, PointerEvent, PointerKind};
use crate::layout::Point;

/// Convert a physical cursor position into logical units
pub fn logical_point(position: PhysicalPosition<f64>, scale_factor: f64) -> Point {
    let scale = if scale_factor > 0.0 { scale_factor } else { 1.0 };
    Point::new((position.x / scale) as f32, (position.y / scale) as f32)
}

pub fn pointer_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        MouseButton::Middle => PointerButton::Middle,
        _ => PointerButton::Other,
    }
}

/// Convert `WindowEvent::CursorMoved` data to a Move event
pub fn pointer_from_cursor_moved(
    position: PhysicalPosition<f64>,
    scale_factor: f64,
) -> PointerEvent {
    PointerEvent {
        kind: PointerKind::Move,
        position: logical_point(position, scale_factor),
        button: None,
    }
}

/// Convert `WindowEvent::MouseInput` data to a Down or Up event
///
/// winit reports button changes without a position, so the caller passes
/// the last known cursor position (in physical pixels).
pub fn pointer_from_mouse_input(
    state: ElementState,
    button: MouseButton,
    last_position: PhysicalPosition<f64>,
    scale_factor: f64,
) -> PointerEvent {
    let kind = match state {
        ElementState::Pressed => PointerKind::Down,
        ElementState::Released => PointerKind::Up,
    };
    PointerEvent {
        kind,
        position: logical_point(last_position, scale_factor),
        button: Some(pointer_button(button)),
    }
}
