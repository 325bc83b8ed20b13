//! Remapping a computed value array from an old grid onto a new one.
//!
//! At each ex-dividend date the backward sweep rebuilds its grid around the
//! shifted reference level; the values computed on the previous grid are
//! carried over by interpolating price as a function of log-price.

use dfd_core::{errors::Error, errors::Result};
use dfd_math::{Array, Interpolation1D, NaturalCubicSpline};

/// Remap `prices` (aligned with `old_grid`) onto `new_grid`.
///
/// Only pairs whose old grid value is strictly positive enter the log-domain
/// spline; fewer than two survivors is a [`Error::DegenerateGrid`] failure.
/// The returned array has `new_grid`'s length.
///
/// Tail points are clamped: a target point at or beyond the second-to-last
/// source point is evaluated at the new grid's node of the clamped index
/// rather than its own. The clamp index is derived from the *old* grid's
/// length but indexes the *new* grid; numeric results depend on this exact
/// behavior.
pub fn transfer(prices: &Array, old_grid: &Array, new_grid: &Array) -> Result<Array> {
    assert_eq!(prices.size(), old_grid.size());

    let mut log_old = Vec::with_capacity(old_grid.size());
    let mut kept = Vec::with_capacity(old_grid.size());
    for j in 0..old_grid.size() {
        let g = old_grid[j];
        if g > 0.0 {
            log_old.push(g.ln());
            kept.push(prices[j]);
        }
    }
    if log_old.len() < 2 {
        return Err(Error::DegenerateGrid {
            usable: log_old.len(),
        });
    }

    let spline = NaturalCubicSpline::new(&log_old, &kept)?;

    let m = old_grid.size();
    let mut out = Array::zeros(new_grid.size());
    for j in 0..new_grid.size() {
        let j_grid = if new_grid[j] < old_grid[m - 2] { j } else { m - 2 };
        out[j] = spline.operator(new_grid[j_grid].ln());
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dfd_math::close;

    #[test]
    fn identical_grids_reproduce_prices() {
        let grid = Array::from_slice(&[50.0, 75.0, 100.0, 150.0, 225.0]);
        let prices = Array::from_slice(&[0.0, 1.0, 8.0, 52.0, 126.0]);
        let out = transfer(&prices, &grid, &grid).unwrap();
        assert_eq!(out.size(), prices.size());
        // every point but the last lands exactly on a spline knot
        for j in 0..4 {
            assert!(
                close(out[j], prices[j], 1e-12),
                "j={j}: {} vs {}",
                out[j],
                prices[j]
            );
        }
        // the topmost point is clamped to the second-to-last node
        assert!(close(out[4], prices[3], 1e-12), "out[4] = {}", out[4]);
    }

    #[test]
    fn interior_knots_are_reproduced_after_a_shift() {
        // Shift the grid so some new nodes coincide with old interior nodes;
        // the interpolating spline must return the original prices there.
        let old_grid = Array::from_slice(&[50.0, 75.0, 100.0, 150.0, 225.0]);
        let prices = Array::from_slice(&[0.0, 1.0, 8.0, 52.0, 126.0]);
        let new_grid = Array::from_slice(&[60.0, 75.0, 100.0, 120.0, 140.0]);
        let out = transfer(&prices, &old_grid, &new_grid).unwrap();
        assert!((out[1] - 1.0).abs() < 1e-12, "out[1] = {}", out[1]);
        assert!((out[2] - 8.0).abs() < 1e-12, "out[2] = {}", out[2]);
    }

    #[test]
    fn non_positive_nodes_are_filtered() {
        let old_grid = Array::from_slice(&[-1.0, 0.0, 1.0, 10.0, 100.0]);
        let prices = Array::from_slice(&[99.0, 99.0, 0.0, 5.0, 12.0]);
        let new_grid = Array::from_slice(&[1.0, 2.0, 5.0, 9.0, 10.0]);
        let out = transfer(&prices, &old_grid, &new_grid).unwrap();
        // ln(1) = 0 is a knot of the filtered spline with value 0
        assert!((out[0] - 0.0).abs() < 1e-12, "out[0] = {}", out[0]);
    }

    #[test]
    fn too_few_usable_points_is_degenerate() {
        let old_grid = Array::from_slice(&[-2.0, -1.0, 5.0]);
        let prices = Array::from_slice(&[0.0, 0.0, 1.0]);
        let new_grid = Array::from_slice(&[1.0, 2.0, 3.0]);
        let err = transfer(&prices, &old_grid, &new_grid).unwrap_err();
        assert_eq!(err, Error::DegenerateGrid { usable: 1 });
    }

    #[test]
    fn tail_clamp_is_deterministic() {
        // oldGrid = [1, 10, 100], prices = [0, 5, 12], newGrid = [2, 50]:
        // index 0 is below oldGrid[1] = 10 and evaluates at ln(2); index 1 is
        // clamped to index len(oldGrid) - 2 = 1 of the *new* grid and
        // evaluates at ln(50).
        let old_grid = Array::from_slice(&[1.0, 10.0, 100.0]);
        let prices = Array::from_slice(&[0.0, 5.0, 12.0]);
        let new_grid = Array::from_slice(&[2.0, 50.0]);

        let out = transfer(&prices, &old_grid, &new_grid).unwrap();
        assert_eq!(out.size(), 2);

        let log_old: Vec<f64> = old_grid.iter().map(|g| g.ln()).collect();
        let spline =
            NaturalCubicSpline::new(&log_old, prices.as_slice()).unwrap();
        assert!((out[0] - spline.operator(2.0f64.ln())).abs() < 1e-12);
        assert!((out[1] - spline.operator(50.0f64.ln())).abs() < 1e-12);

        // repeatable bit for bit
        let again = transfer(&prices, &old_grid, &new_grid).unwrap();
        assert_eq!(out.as_slice(), again.as_slice());
    }
}
