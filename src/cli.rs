//! Command-line argument parsing for the replay tool
//!
//! Supports:
//! - Loading a layout config
//! - Replaying drag gestures against one panel
//! - Toggling minimize
//! - Restoring and saving the session

use clap::Parser;
use std::path::PathBuf;

/// Replay panel resize gestures headlessly and print the resulting layout
#[derive(Parser, Debug)]
#[command(name = "dockyard", version, about = "Headless panel layout engine")]
pub struct CliArgs {
    /// Layout config (defaults to ~/.config/dockyard/layout.yaml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Key of the panel to operate on (defaults to the first panel)
    #[arg(short, long, value_name = "KEY")]
    pub panel: Option<String>,

    /// Drag the panel's handle by DELTA logical units (repeatable)
    #[arg(short, long = "drag", value_name = "DELTA", allow_negative_numbers = true)]
    pub drags: Vec<f32>,

    /// Toggle the panel's minimized state after dragging
    #[arg(short, long)]
    pub toggle: bool,

    /// Restore panel sizes from the saved session first
    #[arg(long)]
    pub restore: bool,

    /// Save the session when gestures ask for it
    #[arg(long)]
    pub save: bool,

    /// Print the layout as JSON
    #[arg(long)]
    pub json: bool,

    /// Window width in logical units
    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    /// Window height in logical units
    #[arg(long, default_value_t = 800)]
    pub height: u32,
}
