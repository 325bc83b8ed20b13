//! # dfd-methods
//!
//! Finite-difference machinery for the 1-D Black-Scholes PDE: tridiagonal
//! operators, the Crank-Nicolson time-marching model, step conditions, and
//! grid-center sampling.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Finite difference methods.
pub mod finite_differences;

pub use finite_differences::{
    bsm_operator, first_derivative_at_center, second_derivative_at_center, value_at_center,
    AmericanCondition, CrankNicolsonModel, NullCondition, ShoutCondition, StepCondition,
    TridiagonalOperator,
};
