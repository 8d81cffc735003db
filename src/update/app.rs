//! App message handlers (window events)

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::Workspace;

/// Handle app messages (window events)
pub fn update_app(model: &mut Workspace, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Resize(width, height) => {
            if model.window_size == (width, height) {
                return None;
            }
            model.window_size = (width, height);
            Some(Cmd::Redraw)
        }

        AppMsg::ScaleFactorChanged(scale_factor) => {
            if !(scale_factor.is_finite() && scale_factor > 0.0) {
                tracing::warn!(scale_factor, "Ignoring invalid scale factor");
                return None;
            }
            model.scale_factor = scale_factor;
            Some(Cmd::Redraw)
        }
    }
}
