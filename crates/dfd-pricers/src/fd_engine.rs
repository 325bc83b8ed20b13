//! Declarative single-period finite-difference state.
//!
//! `FdEngineCore` holds everything the backward sweep needs between two
//! dividend events: the grid support limits, the log-uniform grid itself,
//! and the intrinsic (initial-condition) values. Rebuilding from the same
//! limits reproduces the same grid and operator, so the sweep can freely
//! re-initialize after each event.

use crate::grid_limits::GridLimits;
use crate::payoff::PlainVanillaPayoff;
use dfd_core::{Rate, Real, Size, Time, Volatility};
use dfd_math::Array;
use dfd_methods::{bsm_operator, TridiagonalOperator};

/// Grid, initial condition, and operator assembly for one valuation.
#[derive(Debug, Clone)]
pub struct FdEngineCore {
    payoff: PlainVanillaPayoff,
    dividend_yield: Rate,
    risk_free_rate: Rate,
    volatility: Volatility,
    grid_points: Size,
    limits: GridLimits,
    grid: Array,
    intrinsic: Array,
    log_spacing: Real,
}

impl FdEngineCore {
    /// Create the engine state at maturity, centered on `center`.
    pub fn new(
        payoff: PlainVanillaPayoff,
        dividend_yield: Rate,
        risk_free_rate: Rate,
        volatility: Volatility,
        grid_points: Size,
        center: Real,
        residual_time: Time,
    ) -> Self {
        let limits = GridLimits::new(payoff.strike, volatility, center, residual_time);
        let mut engine = Self {
            payoff,
            dividend_yield,
            risk_free_rate,
            volatility,
            grid_points,
            limits,
            grid: Array::zeros(grid_points),
            intrinsic: Array::zeros(grid_points),
            log_spacing: 0.0,
        };
        engine.initialize_grid();
        engine.initialize_initial_condition();
        engine
    }

    /// Rebuild the log-uniform grid between the current limits.
    ///
    /// The grid length never changes for the lifetime of the engine; only
    /// the node values move.
    pub fn initialize_grid(&mut self) {
        let n = self.grid_points;
        self.log_spacing =
            (self.limits.s_max().ln() - self.limits.s_min().ln()) / (n - 1) as Real;
        let edx = self.log_spacing.exp();
        self.grid[0] = self.limits.s_min();
        for j in 1..n {
            self.grid[j] = self.grid[j - 1] * edx;
        }
    }

    /// Rebuild the intrinsic values on the current grid.
    pub fn initialize_initial_condition(&mut self) {
        for j in 0..self.grid_points {
            self.intrinsic[j] = self.payoff.value(self.grid[j]);
        }
    }

    /// Assemble the Black-Scholes operator for the current grid.
    pub fn initialize_operator(&self) -> TridiagonalOperator {
        bsm_operator(
            self.grid_points,
            self.log_spacing,
            self.risk_free_rate,
            self.dividend_yield,
            self.volatility,
        )
    }

    /// The grid support limits.
    pub fn limits(&self) -> &GridLimits {
        &self.limits
    }

    /// Mutable access to the grid support limits.
    pub fn limits_mut(&mut self) -> &mut GridLimits {
        &mut self.limits
    }

    /// The current grid.
    pub fn grid(&self) -> &Array {
        &self.grid
    }

    /// The intrinsic values on the current grid.
    pub fn intrinsic(&self) -> &Array {
        &self.intrinsic
    }
}
