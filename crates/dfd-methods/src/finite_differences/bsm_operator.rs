//! The Black-Scholes differential operator on a log-uniform grid.

use dfd_core::{Rate, Real, Size, Volatility};

use super::TridiagonalOperator;

/// Build the Black-Scholes operator `L` for a log-uniform price grid with
/// spacing `log_spacing`, such that the backward equation reads
/// `∂V/∂t = L·V`.
///
/// With `x = ln S` and central differences:
///
/// * `ν = r − q − σ²/2`
/// * lower: `−(σ²/Δx − ν) / (2Δx)`
/// * diagonal: `σ²/Δx² + r`
/// * upper: `−(σ²/Δx + ν) / (2Δx)`
///
/// Boundary rows are left zero; the time-marching matrices built from `L`
/// then hold the first and last grid values fixed at their terminal levels.
pub fn bsm_operator(
    size: Size,
    log_spacing: Real,
    risk_free_rate: Rate,
    dividend_yield: Rate,
    volatility: Volatility,
) -> TridiagonalOperator {
    assert!(size >= 3, "operator needs at least 3 grid points");
    assert!(log_spacing > 0.0, "log spacing must be positive");

    let dx = log_spacing;
    let sigma2 = volatility * volatility;
    let nu = risk_free_rate - dividend_yield - sigma2 / 2.0;

    let pd = -(sigma2 / dx - nu) / (2.0 * dx);
    let pu = -(sigma2 / dx + nu) / (2.0 * dx);
    let pm = sigma2 / (dx * dx) + risk_free_rate;

    let mut op = TridiagonalOperator::new(size);
    op.set_mid_rows(pd, pm, pu);
    op
}
