//! Panel update handlers
//!
//! Handles panel lifecycle, minimize toggling and caller-driven resizing.

use crate::commands::Cmd;
use crate::layout::compute_layout;
use crate::messages::PanelMsg;
use crate::model::Workspace;
use crate::panel::Axis;

/// Update function for panel messages
pub fn update_panel(model: &mut Workspace, msg: PanelMsg) -> Option<Cmd> {
    match msg {
        PanelMsg::Mount(options) => {
            model.mount(options);
            Some(Cmd::Redraw)
        }

        PanelMsg::Unmount(id) => model.unmount(id).then_some(Cmd::Redraw),

        PanelMsg::HandlePressed { id, position } => {
            let visible = compute_layout(model).panel(id).map(|rects| rects.rect);
            let (panel, surface) = model.panel_and_surface_mut(id)?;
            let started = match visible {
                Some(rect) => {
                    let extent = match panel.axis() {
                        Axis::Horizontal => rect.width,
                        Axis::Vertical => rect.height,
                    };
                    panel.begin_drag_from(position, extent, surface)
                }
                None => panel.begin_drag(position, surface),
            };
            started.then_some(Cmd::Redraw)
        }

        PanelMsg::ToggleMinimized(id) => {
            let panel = model.panel_mut(id)?;
            let minimized = panel.toggle_minimized();
            tracing::debug!(?id, minimized, dimension = panel.dimension(), "Panel toggled");
            Some(Cmd::batch(vec![Cmd::Redraw, Cmd::SaveSession]))
        }

        PanelMsg::SetDimension { id, dimension } => {
            let panel = model.panel_mut(id)?;
            let before = panel.dimension();
            let applied = panel.set_dimension(dimension);
            if applied == before {
                return None;
            }
            Some(Cmd::batch(vec![Cmd::Redraw, Cmd::SaveSession]))
        }
    }
}
