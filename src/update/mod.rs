//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions. Each call runs
//! to completion before the next message is handled, so pointer moves are
//! applied strictly in delivery order.

mod app;
mod notification;
mod panel;
mod pointer;

use tracing::{debug, span, Level};

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::Workspace;
use crate::pointer::PointerKind;

pub use app::update_app;
pub use notification::update_notification;
pub use panel::update_panel;
pub use pointer::update_pointer;

/// Main update function - dispatches to sub-handlers
pub fn update(model: &mut Workspace, msg: Msg) -> Option<Cmd> {
    // Pointer moves arrive per frame; keep them out of the debug log
    let is_noisy = matches!(&msg, Msg::Pointer(e) if e.kind == PointerKind::Move);

    let _span = if is_noisy {
        None
    } else {
        let msg_name = msg_type_name(&msg);
        debug!(target: "message", msg = %msg_name, "processing");
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    match msg {
        Msg::Panel(m) => update_panel(model, m),
        Msg::Pointer(e) => update_pointer(model, e),
        Msg::Notification(m) => update_notification(model, m),
        Msg::App(m) => update_app(model, m),
    }
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Panel::ToggleMinimized(PanelId(0))`
/// - `Pointer::Down`
/// - `App::Resize(1920, 1080)`
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Panel(m) => format!("Panel::{:?}", m),
        Msg::Pointer(e) => format!("Pointer::{:?}", e.kind),
        Msg::Notification(m) => format!("Notification::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
