//! Crank-Nicolson time marching.

use dfd_core::{Real, Size, Time};
use dfd_math::Array;

use super::{StepCondition, TridiagonalOperator};

/// Backward time-marching model using the Crank-Nicolson scheme.
///
/// Each step solves `(I + ½Δt·L) · Vⁿ = (I − ½Δt·L) · Vⁿ⁺¹` where `L` is the
/// spatial operator. Rebuilding a model from the same operator reproduces the
/// same evolution, so callers may freely reconstruct it after a grid rebuild.
#[derive(Debug, Clone)]
pub struct CrankNicolsonModel {
    op: TridiagonalOperator,
}

impl CrankNicolsonModel {
    /// Create a model for the given spatial operator.
    pub fn new(op: TridiagonalOperator) -> Self {
        Self { op }
    }

    /// Roll `values` back from `from` to `to` (`from >= to`) in `steps`
    /// uniform steps.
    ///
    /// After each step the optional `condition` is applied at the new time
    /// slice; the control leg of a control-variate pair passes `None`.
    pub fn rollback(
        &self,
        values: &mut Array,
        from: Time,
        to: Time,
        steps: Size,
        condition: Option<&dyn StepCondition>,
    ) {
        assert!(from >= to, "cannot roll back from {from} to {to}");
        assert!(steps > 0, "need at least one time step");
        assert_eq!(values.size(), self.op.size());

        let dt = (from - to) / steps as Real;

        // explicit side: I − ½Δt·L, implicit side: I + ½Δt·L
        let mut explicit_side = self.op.clone();
        explicit_side.scale(-0.5 * dt);
        explicit_side.add_identity(1.0);

        let mut implicit_side = self.op.clone();
        implicit_side.scale(0.5 * dt);
        implicit_side.add_identity(1.0);

        for i in 0..steps {
            let rhs = explicit_side.apply(values);
            *values = implicit_side.solve(&rhs);
            if let Some(cond) = condition {
                let t = from - dt * (i + 1) as Real;
                cond.apply_to(values, t);
            }
        }
    }
}
