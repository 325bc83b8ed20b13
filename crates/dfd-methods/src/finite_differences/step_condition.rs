//! Step conditions applied to a value array at a time slice.
//!
//! A step condition encodes a path-dependent or early-exercise feature as a
//! constraint on the discretized option value. Instruments inject their own
//! condition into the backward sweep; the control-variate leg of a valuation
//! receives none.

use dfd_core::{Rate, Time};
use dfd_math::Array;

/// A constraint applied to a value array at a given time slice.
pub trait StepCondition: std::fmt::Debug + Send + Sync {
    /// Apply the constraint to `a` in place at time `t`.
    fn apply_to(&self, a: &mut Array, t: Time);
}

// ── American exercise ─────────────────────────────────────────────────────────

/// Early-exercise floor: the option value can never fall below the intrinsic
/// value on the current grid.
#[derive(Debug, Clone)]
pub struct AmericanCondition {
    intrinsic: Array,
}

impl AmericanCondition {
    /// Create the condition from the intrinsic values on the current grid.
    pub fn new(intrinsic: Array) -> Self {
        Self { intrinsic }
    }
}

impl StepCondition for AmericanCondition {
    fn apply_to(&self, a: &mut Array, _t: Time) {
        assert_eq!(a.size(), self.intrinsic.size());
        for i in 0..a.size() {
            a[i] = a[i].max(self.intrinsic[i]);
        }
    }
}

// ── Shout ─────────────────────────────────────────────────────────────────────

/// Shout floor: at any time slice the holder may lock in the current
/// intrinsic value, to be paid at expiry; the value can never fall below that
/// locked-in amount discounted back to the slice.
#[derive(Debug, Clone)]
pub struct ShoutCondition {
    intrinsic: Array,
    rate: Rate,
    residual_time: Time,
}

impl ShoutCondition {
    /// Create the condition from the intrinsic values on the current grid,
    /// the risk-free rate, and the option's residual time (expiry).
    pub fn new(intrinsic: Array, rate: Rate, residual_time: Time) -> Self {
        Self {
            intrinsic,
            rate,
            residual_time,
        }
    }
}

impl StepCondition for ShoutCondition {
    fn apply_to(&self, a: &mut Array, t: Time) {
        assert_eq!(a.size(), self.intrinsic.size());
        let df = (-self.rate * (self.residual_time - t)).exp();
        for i in 0..a.size() {
            a[i] = a[i].max(df * self.intrinsic[i]);
        }
    }
}

// ── Null ──────────────────────────────────────────────────────────────────────

/// A step condition that does nothing. Used for European-style sweeps.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCondition;

impl StepCondition for NullCondition {
    fn apply_to(&self, _a: &mut Array, _t: Time) {}
}
