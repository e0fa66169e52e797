//! Interpolation and easing helpers:
//! - tween (linear blend between two endpoints)
//! - quartic ease-in / ease-out / symmetric ease-in-out
//! - Ease selector for config-driven easing choice

use serde::{Deserialize, Serialize};

/// Easing functions are pure reparameterizations of normalized progress.
pub type EasingFn = fn(f64) -> f64;

/// Linear interpolation between `from` and `to` at progress `t`.
/// `t` is not clamped; out-of-range progress extrapolates.
#[inline]
pub fn tween(t: f64, from: f64, to: f64) -> f64 {
    from + t * (to - from)
}

/// Identity easing: progress passes through unshaped.
#[inline]
pub fn linear(t: f64) -> f64 {
    t
}

/// Quartic ease-in: `t^4`. Slow start, fast finish.
#[inline]
pub fn ease_in(t: f64) -> f64 {
    t * t * t * t
}

/// Quartic ease-out: `1 - (1-t)^4`. Fast start, slow finish.
#[inline]
pub fn ease_out(t: f64) -> f64 {
    let r = 1.0 - t;
    1.0 - r * r * r * r
}

/// Symmetric quartic S-curve: ease-in below the midpoint, mirrored
/// ease-out above it. `f(0)=0`, `f(0.5)=0.5`, `f(1)=1`.
#[inline]
pub fn ease_in_out(t: f64) -> f64 {
    let r = if t < 0.5 { t * 2.0 } else { (1.0 - t) * 2.0 };
    let r = r * r * r * r;
    if t < 0.5 {
        r / 2.0
    } else {
        1.0 - r / 2.0
    }
}

/// Named easing selector for callers that configure easing from data
/// rather than passing a function directly.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Ease {
    Linear,
    In,
    #[default]
    Out,
    InOut,
}

impl Ease {
    /// Resolve the selector to its easing function.
    #[inline]
    pub fn resolve(self) -> EasingFn {
        match self {
            Ease::Linear => linear,
            Ease::In => ease_in,
            Ease::Out => ease_out,
            Ease::InOut => ease_in_out,
        }
    }
}
