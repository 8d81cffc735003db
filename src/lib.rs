//! Dockyard - headless resizable panel layout engine
//!
//! This crate provides the core types and logic for resizable, collapsible
//! workspace panels, implementing the Elm Architecture pattern: a `Workspace`
//! model, `Msg` inputs, an `update()` function, and `Cmd` side effects.

pub mod commands;
pub mod config;
pub mod config_paths;
pub mod drag;
pub mod layout;
pub mod messages;
pub mod model;
pub mod notifications;
pub mod panel;
pub mod pointer;
pub mod presence;
pub mod session;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::LayoutConfig;
pub use messages::Msg;
pub use model::Workspace;
pub use panel::{Axis, Panel, PanelId, PanelOptions};
