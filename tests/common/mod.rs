//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use dockyard::layout::{compute_layout, Point};
use dockyard::pointer::PointerEvent;
use dockyard::update::update;
use dockyard::{Axis, Cmd, Msg, PanelId, PanelOptions, Workspace};

/// Horizontal panel: default 256, bounds [200, 600]
pub fn sidebar_options() -> PanelOptions {
    PanelOptions::new("sidebar", Axis::Horizontal, 256.0, 200.0, 600.0).with_title("Explorer")
}

/// Vertical panel: default 200, bounds [120, 480]
pub fn console_options() -> PanelOptions {
    PanelOptions::new("console", Axis::Vertical, 200.0, 120.0, 480.0).with_title("Console")
}

/// 1280x800 workspace with the sidebar mounted
pub fn test_workspace() -> (Workspace, PanelId) {
    let mut ws = Workspace::new(1280, 800);
    let id = ws.mount(sidebar_options());
    (ws, id)
}

/// Center of a panel's resize handle in the current layout
pub fn handle_center(ws: &Workspace, id: PanelId) -> Point {
    compute_layout(ws)
        .panel(id)
        .and_then(|r| r.handle)
        .expect("panel should have a handle")
        .center()
}

/// Center of a panel's minimize/expand button in the current layout
pub fn toggle_center(ws: &Workspace, id: PanelId) -> Point {
    compute_layout(ws)
        .panel(id)
        .and_then(|r| r.toggle)
        .expect("panel should have a toggle")
        .center()
}

pub fn press(ws: &mut Workspace, at: Point) -> Option<Cmd> {
    update(ws, Msg::pointer(PointerEvent::down(at.x, at.y)))
}

pub fn move_to(ws: &mut Workspace, at: Point) -> Option<Cmd> {
    update(ws, Msg::pointer(PointerEvent::moved(at.x, at.y)))
}

pub fn release(ws: &mut Workspace, at: Point) -> Option<Cmd> {
    update(ws, Msg::pointer(PointerEvent::up(at.x, at.y)))
}

/// Point offset from `origin` by `delta` along `axis`
pub fn along(axis: Axis, origin: Point, delta: f32) -> Point {
    match axis {
        Axis::Horizontal => Point::new(origin.x + delta, origin.y),
        Axis::Vertical => Point::new(origin.x, origin.y + delta),
    }
}

/// Full gesture: press the handle, move through `deltas`, release at the last
pub fn drag_handle(ws: &mut Workspace, id: PanelId, deltas: &[f32]) -> f32 {
    let axis = ws.panel(id).expect("panel mounted").axis();
    let start = handle_center(ws, id);
    press(ws, start);

    let mut last = start;
    for &delta in deltas {
        last = along(axis, start, delta);
        move_to(ws, last);
    }
    release(ws, last);

    ws.panel(id).expect("panel mounted").dimension()
}
