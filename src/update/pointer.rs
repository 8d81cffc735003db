//! Pointer routing
//!
//! Presses are hit-tested against the current layout. Moves and releases go
//! only to panels holding surface listeners, i.e. panels mid-drag; with no
//! listener attached they are dropped without effect.

use crate::commands::Cmd;
use crate::layout::{compute_layout, hit_test, HitTarget};
use crate::messages::PanelMsg;
use crate::model::Workspace;
use crate::pointer::{PointerEvent, PointerKind};

use super::panel::update_panel;

pub fn update_pointer(model: &mut Workspace, event: PointerEvent) -> Option<Cmd> {
    match event.kind {
        PointerKind::Down => handle_press(model, event),
        PointerKind::Move => handle_move(model, event),
        PointerKind::Up => handle_release(model, event),
    }
}

fn handle_press(model: &mut Workspace, event: PointerEvent) -> Option<Cmd> {
    if !event.is_primary() {
        return None;
    }

    let layout = compute_layout(model);
    match hit_test(&layout, event.position)? {
        HitTarget::ResizeHandle(id) => update_panel(
            model,
            PanelMsg::HandlePressed {
                id,
                position: event.position,
            },
        ),
        HitTarget::MinimizeToggle(id) => update_panel(model, PanelMsg::ToggleMinimized(id)),
        HitTarget::Header(_) | HitTarget::Content(_) | HitTarget::Fill => None,
    }
}

fn handle_move(model: &mut Workspace, event: PointerEvent) -> Option<Cmd> {
    let owners = model.surface().listeners_for(PointerKind::Move);
    let mut changed = false;
    for id in owners {
        let Some(panel) = model.panel_mut(id) else {
            continue;
        };
        let before = panel.dimension();
        if let Some(applied) = panel.drag_to(event.position) {
            changed |= applied != before;
        }
    }
    changed.then_some(Cmd::Redraw)
}

fn handle_release(model: &mut Workspace, event: PointerEvent) -> Option<Cmd> {
    if !event.is_primary() {
        return None;
    }

    let owners = model.surface().listeners_for(PointerKind::Up);
    let mut ended = false;
    for id in owners {
        if let Some(panel) = model.panel_mut(id) {
            ended |= panel.end_drag();
        }
    }
    ended.then(|| Cmd::batch(vec![Cmd::Redraw, Cmd::SaveSession]))
}
