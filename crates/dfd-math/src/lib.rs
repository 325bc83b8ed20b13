//! # dfd-math
//!
//! Mathematical utilities for divfd: the `Array` newtype over nalgebra,
//! floating-point comparison helpers, normal-distribution functions
//! (via statrs), and 1-D interpolation.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// One-dimensional array of reals.
pub mod array;

/// Floating-point comparison utilities.
pub mod comparison;

/// Probability distribution functions.
pub mod distributions;

/// 1D interpolation schemes.
pub mod interpolations;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use array::Array;
pub use comparison::{close, close_enough};
pub use distributions::{normal_cdf, normal_pdf};
pub use interpolations::{Interpolation1D, NaturalCubicSpline};
