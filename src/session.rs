//! Persisted panel sizes
//!
//! Stores each panel's dimension and minimized flag, keyed by panel key, in
//! `~/.config/dockyard/session.json`. Restoring goes through the normal
//! clamping path, so a stale session can never break panel bounds.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::Workspace;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavedPanel {
    pub dimension: f32,
    #[serde(default)]
    pub minimized: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionLayout {
    /// Schema version for forward compatibility
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub panels: BTreeMap<String, SavedPanel>,
}

impl SessionLayout {
    pub const CURRENT_VERSION: u32 = 1;

    /// Snapshot every mounted panel
    pub fn capture(workspace: &Workspace) -> Self {
        let panels = workspace
            .panels()
            .iter()
            .map(|p| {
                (
                    p.key().to_string(),
                    SavedPanel {
                        dimension: p.dimension(),
                        minimized: p.is_minimized(),
                    },
                )
            })
            .collect();
        Self {
            version: Self::CURRENT_VERSION,
            panels,
        }
    }

    /// Restore saved state onto matching panels; returns how many matched
    pub fn apply(&self, workspace: &mut Workspace) -> usize {
        let mut applied = 0;
        for (key, saved) in &self.panels {
            let Some(panel) = workspace.panel_by_key_mut(key) else {
                tracing::debug!(%key, "Saved panel no longer mounted, skipping");
                continue;
            };
            panel.set_dimension(saved.dimension);
            if panel.is_minimized() != saved.minimized {
                panel.toggle_minimized();
            }
            applied += 1;
        }
        applied
    }

    /// Load the session from the config directory
    pub fn load() -> Self {
        match crate::config_paths::session_file() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load from `path`; a missing or corrupt file yields an empty session
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!("Ignoring corrupt session at {}: {}", path.display(), e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::session_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        crate::config_paths::ensure_parent(path)?;
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize session: {}", e))?;
        std::fs::write(path, contents)
            .map_err(|e| format!("Failed to write session to {}: {}", path.display(), e))?;
        tracing::debug!("Saved session to {}", path.display());
        Ok(())
    }
}
