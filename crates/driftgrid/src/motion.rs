//! Motion descriptions for placement and emphasis requests.
//!
//! The grid core never animates anything itself; it attaches a [`Motion`]
//! (duration plus easing curve) to the placement and emphasis requests it
//! makes of its host, and the host owns the actual transform/animation.

use std::time::Duration;

/// Available easing functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (starts slow, accelerates).
    EaseIn,
    /// Quadratic ease-out (starts fast, decelerates).
    EaseOut,
    /// Quadratic ease-in-out (smooth start and end).
    #[default]
    EaseInOut,
    /// Cubic ease-out (a more pronounced settle, good for snap-back).
    EaseOutCubic,
}

/// Apply an easing function to a progress value.
///
/// `t` is clamped to `0.0..=1.0` before the curve is applied.
///
/// # Example
///
/// ```
/// use driftgrid::motion::{Easing, ease};
///
/// // Linear: output equals input
/// assert_eq!(ease(Easing::Linear, 0.5), 0.5);
///
/// // Ease-in: slower at start
/// assert!(ease(Easing::EaseIn, 0.5) < 0.5);
/// ```
#[inline]
pub fn ease(easing: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);

    match easing {
        Easing::Linear => t,
        Easing::EaseIn => t * t,
        Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
        Easing::EaseInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
            }
        }
        Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
    }
}

/// Interpolate between two values using an easing function.
#[inline]
pub fn lerp_eased(easing: Easing, start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * ease(easing, t)
}

/// How a host should animate a requested visual change.
///
/// Attached to placement and emphasis requests. A `None` motion on those
/// requests means "apply immediately" (used while an item tracks the
/// pointer).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    /// How long the transition should take.
    pub duration: Duration,
    /// The easing curve to apply.
    pub easing: Easing,
}

impl Motion {
    /// Default snap motion used when items settle into their grid slots.
    pub const SNAP_DURATION_MS: u64 = 200;

    /// Create a motion description.
    pub const fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// The standard settle motion: 200 ms ease-in-out.
    pub fn snap() -> Self {
        Self::new(
            Duration::from_millis(Self::SNAP_DURATION_MS),
            Easing::EaseInOut,
        )
    }
}

impl Default for Motion {
    fn default() -> Self {
        Self::snap()
    }
}
