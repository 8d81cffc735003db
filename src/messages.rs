//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::time::Duration;

use crate::layout::Point;
use crate::notifications::{NotificationId, Severity};
use crate::panel::{PanelId, PanelOptions};
use crate::pointer::PointerEvent;

/// Panel lifecycle and direct manipulation
#[derive(Debug, Clone)]
pub enum PanelMsg {
    /// Create and mount a panel
    Mount(PanelOptions),
    /// Remove a panel; tears down any drag in progress
    Unmount(PanelId),
    /// Pointer pressed on a panel's resize handle (already hit-tested)
    HandlePressed { id: PanelId, position: Point },
    /// Flip minimized/expanded
    ToggleMinimized(PanelId),
    /// Caller-driven resize, clamped like a drag
    SetDimension { id: PanelId, dimension: f32 },
}

/// Notification manager messages
#[derive(Debug, Clone)]
pub enum NotificationMsg {
    /// Post a notification; `ttl` of None keeps it until dismissed
    Post {
        severity: Severity,
        title: String,
        ttl: Option<Duration>,
    },
    Dismiss(NotificationId),
    /// Drop notifications whose TTL has elapsed
    PruneExpired,
}

/// Application-level messages (window events)
#[derive(Debug, Clone)]
pub enum AppMsg {
    /// Window resized (physical pixels)
    Resize(u32, u32),
    /// Display scale factor changed (e.g., moving between monitors)
    ScaleFactorChanged(f64),
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    /// Panel messages (mount, minimize, resize)
    Panel(PanelMsg),
    /// Raw pointer input from the whole surface
    Pointer(PointerEvent),
    /// Notification messages (post, dismiss)
    Notification(NotificationMsg),
    /// App messages (window)
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    pub fn pointer(event: PointerEvent) -> Self {
        Msg::Pointer(event)
    }

    pub fn toggle_minimized(id: PanelId) -> Self {
        Msg::Panel(PanelMsg::ToggleMinimized(id))
    }

    /// Create a resize message
    pub fn resize(width: u32, height: u32) -> Self {
        Msg::App(AppMsg::Resize(width, height))
    }
}
