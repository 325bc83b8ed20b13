//! Natural cubic spline interpolation.
//!
//! An *interpolating* spline: it passes exactly through every knot.  The
//! second derivatives at the knots are obtained from the usual tridiagonal
//! system (Thomas algorithm) with natural boundary conditions
//! (`f'' = 0` at both ends).  With exactly two knots the spline degenerates
//! to the straight line through them.

use dfd_core::{ensure, errors::Result, Real};

use super::Interpolation1D;

/// Natural cubic spline through a set of strictly increasing abscissae.
#[derive(Debug, Clone)]
pub struct NaturalCubicSpline {
    xs: Vec<Real>,
    ys: Vec<Real>,
    /// Second derivative of the spline at each knot.
    y2: Vec<Real>,
}

impl NaturalCubicSpline {
    /// Build a natural cubic spline.
    ///
    /// # Errors
    /// Returns a configuration error if the slices differ in length, hold
    /// fewer than 2 points, or the abscissae are not strictly increasing.
    pub fn new(xs: &[Real], ys: &[Real]) -> Result<Self> {
        let n = xs.len();
        ensure!(n >= 2, "need at least 2 points for interpolation, got {n}");
        ensure!(
            xs.len() == ys.len(),
            "xs ({}) and ys ({}) must have the same length",
            xs.len(),
            ys.len()
        );
        ensure!(
            xs.windows(2).all(|w| w[0] < w[1]),
            "interpolation abscissae must be strictly increasing"
        );

        let xs = xs.to_vec();
        let ys = ys.to_vec();

        // Forward sweep of the tridiagonal system for the knot second
        // derivatives; natural boundary rows are y'' = 0.
        let mut y2 = vec![0.0; n];
        let mut u = vec![0.0; n];
        for i in 1..n - 1 {
            let sig = (xs[i] - xs[i - 1]) / (xs[i + 1] - xs[i - 1]);
            let p = sig * y2[i - 1] + 2.0;
            y2[i] = (sig - 1.0) / p;
            let d = (ys[i + 1] - ys[i]) / (xs[i + 1] - xs[i])
                - (ys[i] - ys[i - 1]) / (xs[i] - xs[i - 1]);
            u[i] = (6.0 * d / (xs[i + 1] - xs[i - 1]) - sig * u[i - 1]) / p;
        }

        // Back substitution
        y2[n - 1] = 0.0;
        for i in (0..n - 1).rev() {
            y2[i] = y2[i] * y2[i + 1] + u[i];
        }

        Ok(Self { xs, ys, y2 })
    }

    /// Binary search: find `i` such that `xs[i] <= x < xs[i+1]`, clamped to
    /// the boundary intervals.
    fn locate(&self, x: Real) -> usize {
        let n = self.xs.len();
        if x <= self.xs[0] {
            return 0;
        }
        if x >= self.xs[n - 1] {
            return n - 2;
        }
        let mut lo = 0;
        let mut hi = n - 1;
        while hi - lo > 1 {
            let mid = (lo + hi) / 2;
            if self.xs[mid] <= x {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        lo
    }
}

impl Interpolation1D for NaturalCubicSpline {
    fn x_min(&self) -> Real {
        self.xs[0]
    }

    fn x_max(&self) -> Real {
        *self.xs.last().unwrap()
    }

    fn operator(&self, x: Real) -> Real {
        let i = self.locate(x);
        let h = self.xs[i + 1] - self.xs[i];
        let a = (self.xs[i + 1] - x) / h;
        let b = (x - self.xs[i]) / h;
        a * self.ys[i]
            + b * self.ys[i + 1]
            + ((a * a * a - a) * self.y2[i] + (b * b * b - b) * self.y2[i + 1]) * h * h / 6.0
    }
}
