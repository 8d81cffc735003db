//! Layout configuration persistence
//!
//! Panel definitions live in `~/.config/dockyard/layout.yaml`:
//!
//! ```yaml
//! panels:
//!   - key: explorer
//!     title: Explorer
//!     axis: horizontal
//!     default_dimension: 256
//!     min_dimension: 200
//!     max_dimension: 600
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::panel::{Axis, PanelOptions};

/// Panel layout configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_panels")]
    pub panels: Vec<PanelOptions>,
}

fn default_panels() -> Vec<PanelOptions> {
    vec![
        PanelOptions::new("explorer", Axis::Horizontal, 256.0, 200.0, 600.0).with_title("Explorer"),
        PanelOptions::new("console", Axis::Vertical, 200.0, 120.0, 480.0).with_title("Console"),
    ]
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            panels: default_panels(),
        }
    }
}

impl LayoutConfig {
    /// Load config from the config directory, or return defaults
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::layout_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`; missing or invalid files fall back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Layout config not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<LayoutConfig>(&content) {
                Ok(config) => {
                    tracing::info!("Loaded layout config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse layout config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read layout config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to the config directory
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::layout_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        crate::config_paths::ensure_parent(path)?;

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize layout config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write layout config to {}: {}", path.display(), e))?;

        tracing::info!("Saved layout config to {}", path.display());
        Ok(())
    }

    pub fn panel(&self, key: &str) -> Option<&PanelOptions> {
        self.panels.iter().find(|p| p.key == key)
    }
}
