//! Integration tests for layout geometry, hit-testing and window messages

mod common;

use common::*;
use dockyard::layout::{compute_layout, hit_test, HitTarget, Point, Rect, HEADER_EXTENT};
use dockyard::messages::{AppMsg, NotificationMsg, PanelMsg};
use dockyard::notifications::Severity;
use std::time::Duration;
use dockyard::update::update;
use dockyard::{Cmd, Msg, Workspace};

#[test]
fn test_fill_region_reacts_to_resize() {
    let (mut ws, id) = test_workspace();
    assert_eq!(compute_layout(&ws).fill, Rect::new(256.0, 0.0, 1024.0, 800.0));

    drag_handle(&mut ws, id, &[144.0]);
    assert_eq!(compute_layout(&ws).fill, Rect::new(400.0, 0.0, 880.0, 800.0));
}

#[test]
fn test_vertical_panels_stack_right_of_horizontal() {
    let (mut ws, sidebar) = test_workspace();
    let console = ws.mount(console_options());
    let layout = compute_layout(&ws);

    assert_eq!(layout.panel(sidebar).unwrap().rect, Rect::new(0.0, 0.0, 256.0, 800.0));
    assert_eq!(layout.panel(console).unwrap().rect, Rect::new(256.0, 0.0, 1024.0, 200.0));
    assert_eq!(layout.fill, Rect::new(256.0, 200.0, 1024.0, 600.0));
}

#[test]
fn test_expanded_panel_regions() {
    let (ws, id) = test_workspace();
    let layout = compute_layout(&ws);
    let rects = layout.panel(id).unwrap();

    assert_eq!(rects.header.height, HEADER_EXTENT);
    let content = rects.content.unwrap();
    assert_eq!(content.y, HEADER_EXTENT);
    assert_eq!(content.height, 800.0 - HEADER_EXTENT);

    assert_eq!(
        hit_test(&layout, handle_center(&ws, id)),
        Some(HitTarget::ResizeHandle(id))
    );
    assert_eq!(
        hit_test(&layout, Point::new(100.0, 300.0)),
        Some(HitTarget::Content(id))
    );
    assert_eq!(hit_test(&layout, Point::new(700.0, 300.0)), Some(HitTarget::Fill));
}

#[test]
fn test_window_resize_shrinks_fill() {
    let (mut ws, _) = test_workspace();
    assert_eq!(update(&mut ws, Msg::resize(1000, 600)), Some(Cmd::Redraw));
    assert_eq!(update(&mut ws, Msg::resize(1000, 600)), None);
    assert_eq!(compute_layout(&ws).fill, Rect::new(256.0, 0.0, 744.0, 600.0));
}

#[test]
fn test_scale_factor_message() {
    let (mut ws, _) = test_workspace();
    update(&mut ws, Msg::resize(2560, 1600));
    update(&mut ws, Msg::App(AppMsg::ScaleFactorChanged(2.0)));
    assert_eq!(ws.logical_size(), (1280.0, 800.0));

    assert_eq!(update(&mut ws, Msg::App(AppMsg::ScaleFactorChanged(0.0))), None);
    assert_eq!(ws.scale_factor, 2.0);
}

#[test]
fn test_mount_and_unmount_messages() {
    let mut ws = Workspace::new(1280, 800);
    update(&mut ws, Msg::Panel(PanelMsg::Mount(sidebar_options())));
    let id = ws.panel_by_key("sidebar").unwrap().id();

    assert_eq!(update(&mut ws, Msg::Panel(PanelMsg::Unmount(id))), Some(Cmd::Redraw));
    assert_eq!(update(&mut ws, Msg::Panel(PanelMsg::Unmount(id))), None);
    assert_eq!(compute_layout(&ws).fill, Rect::new(0.0, 0.0, 1280.0, 800.0));
}

#[test]
fn test_out_of_range_default_is_clamped_at_mount() {
    let mut ws = Workspace::new(1280, 800);
    let id = ws.mount(dockyard::PanelOptions::new(
        "wide",
        dockyard::Axis::Horizontal,
        900.0,
        200.0,
        600.0,
    ));
    assert_eq!(ws.panel(id).unwrap().dimension(), 600.0);
}

#[test]
fn test_notification_messages() {
    let (mut ws, _) = test_workspace();
    update(
        &mut ws,
        Msg::Notification(NotificationMsg::Post {
            severity: Severity::Info,
            title: "Layout restored".to_string(),
            ttl: None,
        }),
    );
    assert_eq!(ws.notifications.active().len(), 1);

    let id = ws.notifications.active()[0].id;
    assert_eq!(
        update(&mut ws, Msg::Notification(NotificationMsg::Dismiss(id))),
        Some(Cmd::Redraw)
    );
    assert!(ws.notifications.active().is_empty());
    assert_eq!(
        update(&mut ws, Msg::Notification(NotificationMsg::PruneExpired)),
        None
    );
}

#[test]
fn test_notification_with_ttl_is_pruned() {
    let (mut ws, _) = test_workspace();
    update(
        &mut ws,
        Msg::Notification(NotificationMsg::Post {
            severity: Severity::Warning,
            title: "Panel clamped".to_string(),
            ttl: Some(Duration::ZERO),
        }),
    );
    update(
        &mut ws,
        Msg::Notification(NotificationMsg::Post {
            severity: Severity::Info,
            title: "Sticky".to_string(),
            ttl: None,
        }),
    );
    assert_eq!(ws.notifications.active().len(), 2);

    assert_eq!(
        update(&mut ws, Msg::Notification(NotificationMsg::PruneExpired)),
        Some(Cmd::Redraw)
    );
    assert_eq!(ws.notifications.active().len(), 1);
    assert_eq!(ws.notifications.active()[0].title, "Sticky");
}
