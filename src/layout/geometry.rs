//! Panel rectangle computation
//!
//! Horizontal panels are placed left to right across the full height, in
//! mount order. Vertical panels stack top to bottom in the area to their
//! right. Whatever remains is the fill region for the application's main
//! content, so it grows or shrinks with every panel resize.

use serde::Serialize;

use super::Rect;
use crate::model::Workspace;
use crate::panel::{Axis, Panel, PanelId};

/// Height of a panel header
pub const HEADER_EXTENT: f32 = 28.0;

/// Thickness of the resize handle on a panel's trailing edge
pub const HANDLE_THICKNESS: f32 = 6.0;

/// Side length of the minimize/expand button
pub const TOGGLE_SIZE: f32 = 20.0;

/// Gap between the toggle button and the header's edges
pub const TOGGLE_INSET: f32 = 4.0;

/// Computed rectangles for one panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelRects {
    pub id: PanelId,
    pub rect: Rect,
    pub header: Rect,
    /// None while minimized
    pub content: Option<Rect>,
    /// None while minimized
    pub handle: Option<Rect>,
    /// Minimize control when expanded, expand control when collapsed
    pub toggle: Option<Rect>,
}

/// Complete layout for a workspace
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Layout {
    pub panels: Vec<PanelRects>,
    pub fill: Rect,
}

impl Layout {
    pub fn panel(&self, id: PanelId) -> Option<&PanelRects> {
        self.panels.iter().find(|p| p.id == id)
    }
}

/// Compute rectangles for every mounted panel plus the fill region
pub fn compute_layout(workspace: &Workspace) -> Layout {
    let (width, height) = workspace.logical_size();
    let mut panels = Vec::with_capacity(workspace.panels().len());

    let mut x = 0.0_f32;
    for panel in workspace.panels().iter().filter(|p| p.axis() == Axis::Horizontal) {
        let w = panel.extent().max(0.0).min((width - x).max(0.0));
        let rect = Rect::new(x, 0.0, w, height);
        panels.push(panel_rects(panel, rect));
        x += w;
    }

    let mut y = 0.0_f32;
    for panel in workspace.panels().iter().filter(|p| p.axis() == Axis::Vertical) {
        let h = panel.extent().max(0.0).min((height - y).max(0.0));
        let rect = Rect::new(x, y, width - x, h);
        panels.push(panel_rects(panel, rect));
        y += h;
    }

    Layout {
        panels,
        fill: Rect::new(x, y, width - x, height - y),
    }
}

fn panel_rects(panel: &Panel, rect: Rect) -> PanelRects {
    if panel.is_minimized() {
        // The whole strip is the header; it always carries an expand control
        return PanelRects {
            id: panel.id(),
            rect,
            header: rect,
            content: None,
            handle: None,
            toggle: Some(toggle_rect(rect)),
        };
    }

    let header = Rect::new(rect.x, rect.y, rect.width, HEADER_EXTENT.min(rect.height));
    let (handle, content) = match panel.axis() {
        Axis::Horizontal => (
            Rect::new(
                rect.x + rect.width - HANDLE_THICKNESS,
                rect.y,
                HANDLE_THICKNESS,
                rect.height,
            ),
            Rect::new(
                rect.x,
                rect.y + HEADER_EXTENT,
                rect.width - HANDLE_THICKNESS,
                rect.height - HEADER_EXTENT,
            ),
        ),
        Axis::Vertical => (
            Rect::new(
                rect.x,
                rect.y + rect.height - HANDLE_THICKNESS,
                rect.width,
                HANDLE_THICKNESS,
            ),
            Rect::new(
                rect.x,
                rect.y + HEADER_EXTENT,
                rect.width,
                rect.height - HEADER_EXTENT - HANDLE_THICKNESS,
            ),
        ),
    };

    PanelRects {
        id: panel.id(),
        rect,
        header,
        content: Some(content),
        handle: Some(handle),
        toggle: panel.show_minimize().then(|| toggle_rect(header)),
    }
}

/// Toggle button anchored to the top-right of `header`
fn toggle_rect(header: Rect) -> Rect {
    Rect::new(
        header.x + header.width - TOGGLE_SIZE - TOGGLE_INSET,
        header.y + TOGGLE_INSET,
        TOGGLE_SIZE,
        TOGGLE_SIZE,
    )
}
