//! Easing curves and interpolation for the focus highlight.

use crate::geometry::{CornerRadius, Rect};
use serde::{Deserialize, Serialize};

// =============================================================================
// Easing Functions
// =============================================================================

/// Monotone easing functions.
///
/// Only curves that never overshoot are offered: the highlight interpolates
/// corner radii, and an overshooting curve would drive them negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    /// Linear interpolation (no easing)
    Linear,
    /// Quadratic ease out
    EaseOut,
    /// Cubic ease out, `1 - (1 - t)^3`
    #[default]
    CubicOut,
    /// Cubic ease in and out
    CubicInOut,
    /// Exponential ease out
    ExpoOut,
}

impl Easing {
    /// Apply easing function to a normalized time value (0.0 to 1.0).
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOut => Self::ease_out_quad(t),
            Self::CubicOut => Self::ease_out_cubic(t),
            Self::CubicInOut => Self::ease_in_out_cubic(t),
            Self::ExpoOut => Self::ease_out_expo(t),
        }
    }

    fn ease_out_quad(t: f64) -> f64 {
        (1.0 - t).mul_add(-(1.0 - t), 1.0)
    }

    fn ease_out_cubic(t: f64) -> f64 {
        1.0 - (1.0 - t).powi(3)
    }

    fn ease_in_out_cubic(t: f64) -> f64 {
        if t < 0.5 {
            4.0 * t * t * t
        } else {
            1.0 - (-2.0f64).mul_add(t, 2.0).powi(3) / 2.0
        }
    }

    fn ease_out_expo(t: f64) -> f64 {
        if (t - 1.0).abs() < f64::EPSILON {
            1.0
        } else {
            1.0 - (-10.0 * t).exp2()
        }
    }
}

/// Normalized progress of a transition that started at `start` and lasts
/// `duration` milliseconds, clamped to `[0, 1]`.
#[must_use]
pub fn progress(start: f64, now: f64, duration: f64) -> f64 {
    if duration > 0.0 {
        ((now - start) / duration).clamp(0.0, 1.0)
    } else {
        1.0
    }
}

// =============================================================================
// Interpolate Trait
// =============================================================================

/// Trait for types that can be interpolated.
pub trait Interpolate {
    /// Interpolate between two values.
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self;
}

impl Interpolate for f64 {
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self {
        (to - from).mul_add(t, *from)
    }
}

impl Interpolate for Rect {
    /// Interpolates position and size, then rebuilds the edges.
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self {
        let left = f64::interpolate(&from.left, &to.left, t);
        let top = f64::interpolate(&from.top, &to.top, t);
        let width = f64::interpolate(&from.width, &to.width, t);
        let height = f64::interpolate(&from.height, &to.height, t);
        Self::new(left, top, left + width, top + height)
    }
}

impl Interpolate for CornerRadius {
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self {
        Self::new(
            f64::interpolate(&from.top_left, &to.top_left, t),
            f64::interpolate(&from.top_right, &to.top_right, t),
            f64::interpolate(&from.bottom_right, &to.bottom_right, t),
            f64::interpolate(&from.bottom_left, &to.bottom_left, t),
        )
    }
}
