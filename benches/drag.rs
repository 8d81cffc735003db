//! Benchmarks for the Msg → Update loop during resize gestures
//!
//! Run with: cargo bench drag

use dockyard::layout::{compute_layout, Point};
use dockyard::pointer::PointerEvent;
use dockyard::update::update;
use dockyard::{Axis, Msg, PanelOptions, Workspace};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn make_workspace() -> Workspace {
    let mut ws = Workspace::new(1920, 1080);
    ws.mount(PanelOptions::new("explorer", Axis::Horizontal, 256.0, 200.0, 600.0));
    ws.mount(PanelOptions::new("console", Axis::Vertical, 200.0, 120.0, 480.0));
    ws
}

fn handle_center(ws: &Workspace) -> Point {
    let id = ws.panels()[0].id();
    compute_layout(ws)
        .panel(id)
        .and_then(|r| r.handle)
        .map(|h| h.center())
        .unwrap_or_default()
}

#[divan::bench(args = [100, 1000])]
fn update_drag_moves(moves: usize) {
    let mut ws = make_workspace();
    let start = handle_center(&ws);
    update(&mut ws, Msg::pointer(PointerEvent::down(start.x, start.y)));

    for i in 0..moves {
        // Sweep back and forth across both bounds
        let delta = ((i % 200) as f32 - 100.0) * 6.0;
        let cmd = update(&mut ws, Msg::pointer(PointerEvent::moved(start.x + delta, start.y)));
        divan::black_box(cmd);
    }

    update(&mut ws, Msg::pointer(PointerEvent::up(start.x, start.y)));
    divan::black_box(&ws);
}

#[divan::bench(args = [100, 1000])]
fn update_stray_moves(moves: usize) {
    let mut ws = make_workspace();

    for i in 0..moves {
        let cmd = update(&mut ws, Msg::pointer(PointerEvent::moved(i as f32, 300.0)));
        divan::black_box(cmd);
    }
}
