//! Panel state: dimension, minimize flag, and drag gesture

use serde::{Deserialize, Serialize};

use super::dimension::{Bounds, ResizableDimension, ResizeCallback};
use crate::drag::{DragSession, DragState, InteractionSurface};
use crate::layout::Point;
use crate::pointer::PointerKind;

/// Extent of a minimized panel along its axis (the header strip)
pub const COLLAPSED_EXTENT: f32 = 28.0;

/// Identifier assigned to a panel when it is mounted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PanelId(pub u32);

/// Screen axis a panel's dimension maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Dimension is a width, driven by the pointer's x coordinate
    Horizontal,
    /// Dimension is a height, driven by the pointer's y coordinate
    Vertical,
}

impl Axis {
    /// Coordinate of `point` along this axis
    #[inline]
    pub fn coord(&self, point: Point) -> f32 {
        match self {
            Axis::Horizontal => point.x,
            Axis::Vertical => point.y,
        }
    }
}

/// Construction parameters for a panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelOptions {
    /// Stable key used for session persistence
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub axis: Axis,
    pub default_dimension: f32,
    pub min_dimension: f32,
    pub max_dimension: f32,
    #[serde(default = "default_show_minimize")]
    pub show_minimize: bool,
}

fn default_show_minimize() -> bool {
    true
}

impl PanelOptions {
    pub fn new(key: impl Into<String>, axis: Axis, default: f32, min: f32, max: f32) -> Self {
        Self {
            key: key.into(),
            title: None,
            axis,
            default_dimension: default,
            min_dimension: min,
            max_dimension: max,
            show_minimize: true,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_show_minimize(mut self, show: bool) -> Self {
        self.show_minimize = show;
        self
    }
}

/// What the view layer should draw for a panel
#[derive(Debug, Clone, PartialEq)]
pub enum Presentation {
    /// Header strip with an expand control only
    Collapsed { title: Option<String> },
    /// Header, content sized to `content_extent`, and a resize handle
    Expanded {
        title: Option<String>,
        content_extent: f32,
        show_minimize: bool,
    },
}

/// One resizable, collapsible region
#[derive(Debug)]
pub struct Panel {
    id: PanelId,
    key: String,
    title: Option<String>,
    axis: Axis,
    show_minimize: bool,
    dimension: ResizableDimension,
    is_minimized: bool,
    drag: DragState,
}

impl Panel {
    pub fn new(id: PanelId, options: PanelOptions) -> Self {
        let bounds = Bounds::new(options.min_dimension, options.max_dimension);
        Self {
            id,
            key: options.key,
            title: options.title,
            axis: options.axis,
            show_minimize: options.show_minimize,
            dimension: ResizableDimension::initialize(options.default_dimension, bounds),
            is_minimized: false,
            drag: DragState::Idle,
        }
    }

    /// Attach a callback invoked on every applied resize
    pub fn with_on_resize(mut self, callback: impl FnMut(f32) + 'static) -> Self {
        self.set_on_resize(Box::new(callback));
        self
    }

    pub fn set_on_resize(&mut self, callback: ResizeCallback) {
        self.dimension.set_on_resize(callback);
    }

    pub fn id(&self) -> PanelId {
        self.id
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn show_minimize(&self) -> bool {
        self.show_minimize
    }

    /// Stored dimension, retained while minimized
    pub fn dimension(&self) -> f32 {
        self.dimension.get()
    }

    pub fn bounds(&self) -> Bounds {
        self.dimension.bounds()
    }

    pub fn is_minimized(&self) -> bool {
        self.is_minimized
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.session()
    }

    /// Request a dimension; returns the clamped value applied
    pub fn set_dimension(&mut self, requested: f32) -> f32 {
        self.dimension.set(requested)
    }

    /// Flip between expanded and minimized; the stored dimension is untouched
    ///
    /// Minimizing hides the handle, so an active gesture ends here.
    pub fn toggle_minimized(&mut self) -> bool {
        self.is_minimized = !self.is_minimized;
        if self.is_minimized && self.end_drag() {
            tracing::debug!(panel = ?self.id, "Drag ended by minimize");
        }
        self.is_minimized
    }

    /// Extent the panel occupies along its axis
    pub fn extent(&self) -> f32 {
        if self.is_minimized {
            COLLAPSED_EXTENT
        } else {
            self.dimension.get()
        }
    }

    pub fn presentation(&self) -> Presentation {
        if self.is_minimized {
            Presentation::Collapsed {
                title: self.title.clone(),
            }
        } else {
            Presentation::Expanded {
                title: self.title.clone(),
                content_extent: self.dimension.get(),
                show_minimize: self.show_minimize,
            }
        }
    }

    /// Idle -> Dragging on a handle press
    ///
    /// Returns false when the panel is minimized (there is no handle). A press
    /// during an active gesture replaces it.
    pub fn begin_drag(&mut self, pointer: Point, surface: &InteractionSurface) -> bool {
        self.begin_drag_from(pointer, self.dimension.get(), surface)
    }

    /// Like `begin_drag`, for a panel the window shows at `visible_extent`
    ///
    /// A truncated panel's handle sits at its visible edge, so the gesture
    /// measures from there instead of from the stored dimension.
    pub fn begin_drag_from(
        &mut self,
        pointer: Point,
        visible_extent: f32,
        surface: &InteractionSurface,
    ) -> bool {
        if self.is_minimized {
            return false;
        }

        // Release the previous session before registering the new one
        self.drag = DragState::Idle;

        let listeners = surface.register(self.id, &[PointerKind::Move, PointerKind::Up]);
        let origin_pointer = self.axis.coord(pointer);
        let origin_dimension = if visible_extent.is_finite() {
            self.dimension.get().min(visible_extent.max(0.0))
        } else {
            self.dimension.get()
        };
        tracing::debug!(
            panel = ?self.id,
            origin_pointer,
            origin_dimension,
            "Drag started"
        );
        self.drag = DragState::Dragging(DragSession::new(
            origin_pointer,
            origin_dimension,
            listeners,
        ));
        true
    }

    /// Dragging -> Dragging on pointer-move; None when idle
    pub fn drag_to(&mut self, pointer: Point) -> Option<f32> {
        let requested = self
            .drag
            .session()?
            .requested_dimension(self.axis.coord(pointer));
        let applied = self.dimension.set(requested);
        tracing::trace!(panel = ?self.id, requested, applied, "Drag move");
        Some(applied)
    }

    /// Dragging -> Idle; returns whether a session was active
    pub fn end_drag(&mut self) -> bool {
        match std::mem::take(&mut self.drag) {
            DragState::Dragging(_) => {
                tracing::debug!(panel = ?self.id, dimension = self.dimension.get(), "Drag ended");
                true
            }
            DragState::Idle => false,
        }
    }
}
