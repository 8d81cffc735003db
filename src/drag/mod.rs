//! Pointer drag sessions
//!
//! A resize gesture moves through `Idle -> Dragging -> Idle`. While dragging,
//! the session holds a `ListenerRegistration` on the interaction surface;
//! leaving the `Dragging` state (pointer-up, unmount, drop) releases it.

mod surface;

pub use surface::{InteractionSurface, ListenerId, ListenerRegistration};

/// One in-progress resize gesture
#[derive(Debug)]
pub struct DragSession {
    /// Pointer coordinate along the panel's axis at gesture start
    pub origin_pointer: f32,
    /// Panel dimension at gesture start
    pub origin_dimension: f32,
    _listeners: ListenerRegistration,
}

impl DragSession {
    pub fn new(origin_pointer: f32, origin_dimension: f32, listeners: ListenerRegistration) -> Self {
        Self {
            origin_pointer,
            origin_dimension,
            _listeners: listeners,
        }
    }

    /// Dimension requested for the pointer at `pointer` along the axis
    ///
    /// Depends only on the latest position, so intermediate moves never
    /// accumulate.
    #[inline]
    pub fn requested_dimension(&self, pointer: f32) -> f32 {
        self.origin_dimension + (pointer - self.origin_pointer)
    }
}

/// Drag state machine for a single panel
#[derive(Debug, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging(_))
    }

    pub fn session(&self) -> Option<&DragSession> {
        match self {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }
}
