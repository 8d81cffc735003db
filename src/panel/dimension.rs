//! Bounded panel dimension
//!
//! A `ResizableDimension` owns a single size value (width or height) and
//! guarantees it stays inside its `Bounds` after every mutation. Out-of-range
//! requests are a normal case and are clamped, never rejected.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Callback invoked with the applied dimension whenever it changes
pub type ResizeCallback = Box<dyn FnMut(f32)>;

/// Inclusive `[min, max]` interval for a panel dimension
///
/// Always finite, non-negative and ordered, however it was constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawBounds")]
pub struct Bounds {
    pub min: f32,
    pub max: f32,
}

#[derive(Deserialize)]
struct RawBounds {
    min: f32,
    max: f32,
}

impl From<RawBounds> for Bounds {
    fn from(raw: RawBounds) -> Self {
        Bounds::new(raw.min, raw.max)
    }
}

impl Bounds {
    /// Create bounds from untrusted ends
    ///
    /// A non-finite min becomes 0 and a non-finite max becomes `f32::MAX`.
    /// Inverted ends are swapped and a negative min is floored at 0.
    pub fn new(min: f32, max: f32) -> Self {
        let min = if min.is_finite() {
            min
        } else {
            tracing::warn!(min, "Non-finite minimum panel bound, using 0");
            0.0
        };
        let max = if max.is_finite() {
            max
        } else {
            tracing::warn!(max, "Non-finite maximum panel bound, using f32::MAX");
            f32::MAX
        };

        let (min, max) = if min > max {
            tracing::warn!(min, max, "Inverted panel bounds, swapping");
            (max, min)
        } else {
            (min, max)
        };

        if min < 0.0 {
            tracing::warn!(min, "Negative minimum panel bound, using 0");
        }
        let min = min.max(0.0);
        Self {
            min,
            max: max.max(min),
        }
    }

    /// Constrain a value to the closed interval
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        value.max(self.min).min(self.max)
    }

    #[inline]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// A single dimension clamped to bounds, with an optional change callback
pub struct ResizableDimension {
    value: f32,
    bounds: Bounds,
    on_resize: Option<ResizeCallback>,
}

impl ResizableDimension {
    /// Create a dimension from a caller-supplied default
    ///
    /// A default outside `bounds` is clamped with a warning rather than
    /// treated as a fault.
    pub fn initialize(default: f32, bounds: Bounds) -> Self {
        let value = if !default.is_finite() {
            tracing::warn!(default, "Non-finite default dimension, using minimum");
            bounds.min
        } else if !bounds.contains(default) {
            let clamped = bounds.clamp(default);
            tracing::warn!(
                default,
                min = bounds.min,
                max = bounds.max,
                clamped,
                "Default dimension outside bounds, clamping"
            );
            clamped
        } else {
            default
        };

        Self {
            value,
            bounds,
            on_resize: None,
        }
    }

    /// Current applied dimension
    #[inline]
    pub fn get(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Install the resize callback, replacing any previous one
    pub fn set_on_resize(&mut self, callback: ResizeCallback) {
        self.on_resize = Some(callback);
    }

    /// Request a new dimension, returning the clamped value actually applied
    ///
    /// Non-finite requests leave the dimension untouched. The callback fires
    /// only when the applied value differs from the previous one.
    pub fn set(&mut self, requested: f32) -> f32 {
        if !requested.is_finite() {
            tracing::debug!(requested, "Ignoring non-finite dimension request");
            return self.value;
        }

        let applied = self.bounds.clamp(requested);
        if applied != self.value {
            self.value = applied;
            if let Some(callback) = self.on_resize.as_mut() {
                callback(applied);
            }
        }
        applied
    }
}

impl fmt::Debug for ResizableDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizableDimension")
            .field("value", &self.value)
            .field("bounds", &self.bounds)
            .field("on_resize", &self.on_resize.is_some())
            .finish()
    }
}
