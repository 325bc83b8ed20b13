//! Control-variate bookkeeping for the dividend sweep.
//!
//! The control leg is a second numerical solution for the European
//! dividend-adjusted instrument, whose true value is known in closed form.
//! Both legs share the grid, the time steps, and every grid transfer, so
//! their leading-order discretization error is common and
//! `primary − control + analytic` cancels it.  The control leg never
//! receives an early-exercise or path condition.

use crate::dividend_european::DividendEuropeanOption;
use dfd_core::Real;
use dfd_math::Array;

/// The analytically anchored control leg of a valuation.
#[derive(Debug, Clone)]
pub struct ControlVariate {
    analytic_value: Real,
    analytic_delta: Real,
    analytic_gamma: Real,
    prices: Array,
}

impl ControlVariate {
    /// Seed the control from the closed-form reference and the shared
    /// initial condition.
    pub fn new(reference: &DividendEuropeanOption, initial_prices: Array) -> Self {
        Self {
            analytic_value: reference.value(),
            analytic_delta: reference.delta(),
            analytic_gamma: reference.gamma(),
            prices: initial_prices,
        }
    }

    /// The control price array.
    pub fn prices(&self) -> &Array {
        &self.prices
    }

    /// Mutable access to the control price array.
    pub fn prices_mut(&mut self) -> &mut Array {
        &mut self.prices
    }

    /// Bias-corrected value: `primary − control + analytic`.
    pub fn corrected_value(&self, primary: Real, control: Real) -> Real {
        primary - control + self.analytic_value
    }

    /// Bias-corrected delta.
    pub fn corrected_delta(&self, primary: Real, control: Real) -> Real {
        primary - control + self.analytic_delta
    }

    /// Bias-corrected gamma.
    pub fn corrected_gamma(&self, primary: Real, control: Real) -> Real {
        primary - control + self.analytic_gamma
    }
}
