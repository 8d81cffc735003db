//! dockyard - replay panel resize gestures headlessly
//!
//! Builds a workspace from the layout config, feeds synthetic pointer
//! gestures through the same `update()` loop a windowed host would use, and
//! prints the resulting layout.

use anyhow::{anyhow, bail, Result};
use clap::Parser;
use serde::Serialize;

use dockyard::layout::{compute_layout, Point, Rect};
use dockyard::panel::{Axis, Panel, PanelId};
use dockyard::pointer::PointerEvent;
use dockyard::session::SessionLayout;
use dockyard::update::update;
use dockyard::{Cmd, LayoutConfig, Msg, Workspace};

mod cli;

use cli::CliArgs;

#[derive(Debug, Serialize)]
struct PanelReport<'a> {
    key: &'a str,
    title: Option<&'a str>,
    axis: Axis,
    dimension: f32,
    minimized: bool,
    rect: Rect,
}

#[derive(Debug, Serialize)]
struct LayoutReport<'a> {
    panels: Vec<PanelReport<'a>>,
    fill: Rect,
}

fn main() -> Result<()> {
    dockyard::tracing::init();

    let args = CliArgs::parse();

    let config = match &args.config {
        Some(path) => LayoutConfig::load_from(path),
        None => LayoutConfig::load(),
    };

    let mut workspace = Workspace::with_panels(args.width, args.height, &config.panels);

    if args.restore {
        let restored = SessionLayout::load().apply(&mut workspace);
        tracing::info!(restored, "Restored session");
    }

    let id = select_panel(&workspace, args.panel.as_deref())?;

    for &delta in &args.drags {
        for msg in drag_gesture(&workspace, id, delta)? {
            let cmd = update(&mut workspace, msg);
            run_cmd(&workspace, cmd, args.save)?;
        }
    }

    if args.toggle {
        let cmd = update(&mut workspace, Msg::toggle_minimized(id));
        run_cmd(&workspace, cmd, args.save)?;
    }

    print_report(&workspace, args.json)
}

fn select_panel(workspace: &Workspace, key: Option<&str>) -> Result<PanelId> {
    match key {
        Some(key) => workspace
            .panel_by_key(key)
            .map(Panel::id)
            .ok_or_else(|| anyhow!("No panel with key '{}'", key)),
        None => workspace
            .panels()
            .first()
            .map(Panel::id)
            .ok_or_else(|| anyhow!("Layout config defines no panels")),
    }
}

/// Press the panel's handle, move by `delta` along its axis, release
fn drag_gesture(workspace: &Workspace, id: PanelId, delta: f32) -> Result<[Msg; 3]> {
    let layout = compute_layout(workspace);
    let Some(handle) = layout.panel(id).and_then(|r| r.handle) else {
        bail!("Panel has no resize handle (is it minimized?)");
    };
    let Some(panel) = workspace.panel(id) else {
        bail!("Panel {:?} is not mounted", id);
    };

    let start = handle.center();
    let end = match panel.axis() {
        Axis::Horizontal => Point::new(start.x + delta, start.y),
        Axis::Vertical => Point::new(start.x, start.y + delta),
    };

    Ok([
        Msg::pointer(PointerEvent::down(start.x, start.y)),
        Msg::pointer(PointerEvent::moved(end.x, end.y)),
        Msg::pointer(PointerEvent::up(end.x, end.y)),
    ])
}

fn run_cmd(workspace: &Workspace, cmd: Option<Cmd>, save: bool) -> Result<()> {
    match cmd {
        None | Some(Cmd::None) | Some(Cmd::Redraw) => Ok(()),
        Some(Cmd::SaveSession) => {
            if save {
                SessionLayout::capture(workspace)
                    .save()
                    .map_err(anyhow::Error::msg)?;
            }
            Ok(())
        }
        Some(Cmd::Batch(cmds)) => {
            for cmd in cmds {
                run_cmd(workspace, Some(cmd), save)?;
            }
            Ok(())
        }
    }
}

fn print_report(workspace: &Workspace, json: bool) -> Result<()> {
    let layout = compute_layout(workspace);
    let panels = workspace
        .panels()
        .iter()
        .filter_map(|p| {
            let rects = layout.panel(p.id())?;
            Some(PanelReport {
                key: p.key(),
                title: p.title(),
                axis: p.axis(),
                dimension: p.dimension(),
                minimized: p.is_minimized(),
                rect: rects.rect,
            })
        })
        .collect();
    let report = LayoutReport {
        panels,
        fill: layout.fill,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for panel in &report.panels {
        println!(
            "{:<12} {:<10} {:>7.1}{}  at ({:.0}, {:.0}) {:.0}x{:.0}",
            panel.key,
            format!("{:?}", panel.axis).to_lowercase(),
            panel.dimension,
            if panel.minimized { " (minimized)" } else { "" },
            panel.rect.x,
            panel.rect.y,
            panel.rect.width,
            panel.rect.height,
        );
    }
    println!(
        "{:<12} {:<10}          at ({:.0}, {:.0}) {:.0}x{:.0}",
        "fill", "", report.fill.x, report.fill.y, report.fill.width, report.fill.height
    );
    Ok(())
}
