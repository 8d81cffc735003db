//! Panel system - resizable, collapsible workspace regions
//!
//! ## Architecture
//!
//! - `Bounds` / `ResizableDimension`: a single size clamped to `[min, max]`,
//!   with an optional change callback
//! - `Panel`: one region; owns its dimension, minimize flag and drag state
//! - `PanelOptions`: construction parameters (also the YAML config shape)
//! - `Presentation`: what the view layer should draw for a panel
//!
//! ## Integration
//!
//! - Drag gestures via `drag::DragSession` and the workspace's
//!   `InteractionSurface`
//! - Geometry and hit-testing via `layout::compute_layout()` / `hit_test()`

mod dimension;
mod state;

pub use dimension::{Bounds, ResizableDimension, ResizeCallback};
pub use state::{Axis, Panel, PanelId, PanelOptions, Presentation, COLLAPSED_EXTENT};
