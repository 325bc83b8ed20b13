//! Tridiagonal matrix operator with a Thomas-algorithm solver.

use dfd_core::Real;
use dfd_math::Array;

/// A tridiagonal matrix operator.
///
/// Stores the lower, diagonal, and upper bands. Used for 1-D finite
/// difference discretisations of second-order PDEs.
#[derive(Debug, Clone)]
pub struct TridiagonalOperator {
    /// Lower diagonal (index 0 unused — starts from row 1).
    lower: Vec<Real>,
    /// Main diagonal.
    diag: Vec<Real>,
    /// Upper diagonal (last index unused — ends at row n−2).
    upper: Vec<Real>,
}

impl TridiagonalOperator {
    /// Create a zero tridiagonal operator of size `n`.
    pub fn new(n: usize) -> Self {
        Self {
            lower: vec![0.0; n],
            diag: vec![0.0; n],
            upper: vec![0.0; n],
        }
    }

    /// Size (number of rows/columns).
    pub fn size(&self) -> usize {
        self.diag.len()
    }

    /// Set row 0 to `(diag, upper)`.
    pub fn set_first_row(&mut self, diag: Real, upper: Real) {
        self.diag[0] = diag;
        self.upper[0] = upper;
    }

    /// Set interior row `i` to `(lower, diag, upper)`.
    pub fn set_mid_row(&mut self, i: usize, lower: Real, diag: Real, upper: Real) {
        assert!(
            i >= 1 && i < self.size() - 1,
            "row {i} is not an interior row"
        );
        self.lower[i] = lower;
        self.diag[i] = diag;
        self.upper[i] = upper;
    }

    /// Set every interior row to `(lower, diag, upper)`.
    pub fn set_mid_rows(&mut self, lower: Real, diag: Real, upper: Real) {
        for i in 1..self.size() - 1 {
            self.lower[i] = lower;
            self.diag[i] = diag;
            self.upper[i] = upper;
        }
    }

    /// Set the last row to `(lower, diag)`.
    pub fn set_last_row(&mut self, lower: Real, diag: Real) {
        let n = self.size();
        self.lower[n - 1] = lower;
        self.diag[n - 1] = diag;
    }

    /// Apply the operator: `y = A · x`.
    pub fn apply(&self, x: &Array) -> Array {
        let n = self.size();
        assert_eq!(x.size(), n);
        let mut y = Array::zeros(n);
        y[0] = self.diag[0] * x[0] + self.upper[0] * x[1];
        for i in 1..n - 1 {
            y[i] = self.lower[i] * x[i - 1] + self.diag[i] * x[i] + self.upper[i] * x[i + 1];
        }
        y[n - 1] = self.lower[n - 1] * x[n - 2] + self.diag[n - 1] * x[n - 1];
        y
    }

    /// Solve `A · x = rhs` using the Thomas algorithm (LU decomposition
    /// for tridiagonal systems).
    pub fn solve(&self, rhs: &Array) -> Array {
        let n = self.size();
        assert_eq!(rhs.size(), n);

        // Forward sweep
        let mut c_prime = vec![0.0; n];
        let mut d_prime = vec![0.0; n];

        c_prime[0] = self.upper[0] / self.diag[0];
        d_prime[0] = rhs[0] / self.diag[0];

        for i in 1..n {
            let m = self.diag[i] - self.lower[i] * c_prime[i - 1];
            if i < n - 1 {
                c_prime[i] = self.upper[i] / m;
            }
            d_prime[i] = (rhs[i] - self.lower[i] * d_prime[i - 1]) / m;
        }

        // Back substitution
        let mut x = Array::zeros(n);
        x[n - 1] = d_prime[n - 1];
        for i in (0..n - 1).rev() {
            x[i] = d_prime[i] - c_prime[i] * x[i + 1];
        }

        x
    }

    /// Scale all entries by a scalar.
    pub fn scale(&mut self, factor: Real) {
        for v in &mut self.lower {
            *v *= factor;
        }
        for v in &mut self.diag {
            *v *= factor;
        }
        for v in &mut self.upper {
            *v *= factor;
        }
    }

    /// Add the identity matrix scaled by `factor`: `A ← A + factor · I`.
    pub fn add_identity(&mut self, factor: Real) {
        for d in &mut self.diag {
            *d += factor;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solves_identity() {
        let mut op = TridiagonalOperator::new(4);
        op.add_identity(1.0);
        let rhs = Array::from_slice(&[1.0, 2.0, 3.0, 4.0]);
        let x = op.solve(&rhs);
        for i in 0..4 {
            assert!((x[i] - rhs[i]).abs() < 1e-12);
        }
    }

    #[test]
    fn solves_tridiagonal_system() {
        // A = [[2, -1, 0], [-1, 2, -1], [0, -1, 2]], x = [1, 2, 3], Ax = [0, 0, 4]
        let mut op = TridiagonalOperator::new(3);
        op.set_first_row(2.0, -1.0);
        op.set_mid_row(1, -1.0, 2.0, -1.0);
        op.set_last_row(-1.0, 2.0);
        let rhs = Array::from_slice(&[0.0, 0.0, 4.0]);
        let x = op.solve(&rhs);
        assert!((x[0] - 1.0).abs() < 1e-12);
        assert!((x[1] - 2.0).abs() < 1e-12);
        assert!((x[2] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn apply_and_solve_are_inverse() {
        let mut op = TridiagonalOperator::new(5);
        op.set_first_row(1.0, 0.0);
        op.set_mid_rows(-0.3, 1.7, -0.2);
        op.set_last_row(0.0, 1.0);
        let x = Array::from_slice(&[1.0, -2.0, 0.5, 3.0, -1.0]);
        let roundtrip = op.solve(&op.apply(&x));
        for i in 0..5 {
            assert!(
                (roundtrip[i] - x[i]).abs() < 1e-12,
                "i={i}: {} vs {}",
                roundtrip[i],
                x[i]
            );
        }
    }
}
