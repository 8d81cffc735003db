//! Workspace model: mounted panels and the shared interaction surface

use crate::drag::InteractionSurface;
use crate::notifications::NotificationManager;
use crate::panel::{Panel, PanelId, PanelOptions};

/// Top-level model for the Elm-style update loop
///
/// Panels are kept in mount order, which is also their layout order.
#[derive(Debug)]
pub struct Workspace {
    panels: Vec<Panel>,
    surface: InteractionSurface,
    pub notifications: NotificationManager,
    /// Window size in physical pixels
    pub window_size: (u32, u32),
    pub scale_factor: f64,
    next_panel_id: u32,
}

impl Workspace {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            panels: Vec::new(),
            surface: InteractionSurface::new(),
            notifications: NotificationManager::new(),
            window_size: (width, height),
            scale_factor: 1.0,
            next_panel_id: 0,
        }
    }

    /// Build a workspace with every panel from `options` mounted in order
    pub fn with_panels(width: u32, height: u32, options: &[PanelOptions]) -> Self {
        let mut workspace = Self::new(width, height);
        for opts in options {
            workspace.mount(opts.clone());
        }
        workspace
    }

    /// Create and mount a panel
    pub fn mount(&mut self, options: PanelOptions) -> PanelId {
        if self.panel_by_key(&options.key).is_some() {
            tracing::warn!(key = %options.key, "Mounting a second panel with the same key");
        }
        let id = PanelId(self.next_panel_id);
        self.next_panel_id += 1;
        tracing::debug!(?id, key = %options.key, "Panel mounted");
        self.panels.push(Panel::new(id, options));
        id
    }

    /// Remove a panel, discarding its state
    ///
    /// An in-progress drag is torn down with it, so its surface listeners
    /// are released.
    pub fn unmount(&mut self, id: PanelId) -> bool {
        let Some(index) = self.panels.iter().position(|p| p.id() == id) else {
            return false;
        };
        let panel = self.panels.remove(index);
        tracing::debug!(?id, key = panel.key(), dragging = panel.is_dragging(), "Panel unmounted");
        true
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn panel(&self, id: PanelId) -> Option<&Panel> {
        self.panels.iter().find(|p| p.id() == id)
    }

    pub fn panel_mut(&mut self, id: PanelId) -> Option<&mut Panel> {
        self.panels.iter_mut().find(|p| p.id() == id)
    }

    pub fn panel_by_key(&self, key: &str) -> Option<&Panel> {
        self.panels.iter().find(|p| p.key() == key)
    }

    pub fn panel_by_key_mut(&mut self, key: &str) -> Option<&mut Panel> {
        self.panels.iter_mut().find(|p| p.key() == key)
    }

    pub fn surface(&self) -> &InteractionSurface {
        &self.surface
    }

    /// Split borrow: one panel mutably plus the surface it registers on
    pub fn panel_and_surface_mut(&mut self, id: PanelId) -> Option<(&mut Panel, &InteractionSurface)> {
        let surface = &self.surface;
        self.panels
            .iter_mut()
            .find(|p| p.id() == id)
            .map(|panel| (panel, surface))
    }

    /// Window size in logical units
    pub fn logical_size(&self) -> (f32, f32) {
        let scale = if self.scale_factor > 0.0 {
            self.scale_factor
        } else {
            1.0
        };
        (
            (self.window_size.0 as f64 / scale) as f32,
            (self.window_size.1 as f64 / scale) as f32,
        )
    }

    pub fn any_dragging(&self) -> bool {
        self.panels.iter().any(Panel::is_dragging)
    }
}
