//! Finite difference methods for PDE-based option pricing.
//!
//! # Overview
//!
//! * [`TridiagonalOperator`] — tridiagonal matrix with Thomas-algorithm solver
//! * [`bsm_operator`] — the Black-Scholes differential operator in log-space
//! * [`CrankNicolsonModel`] — backward time marching with optional step
//!   conditions applied at every time slice
//! * [`StepCondition`] — early-exercise / path constraints
//! * [`value_at_center`] and friends — reading a value array at the grid center

mod bsm_operator;
mod model;
mod sampling;
mod step_condition;
mod tridiagonal;

pub use bsm_operator::bsm_operator;
pub use model::CrankNicolsonModel;
pub use sampling::{first_derivative_at_center, second_derivative_at_center, value_at_center};
pub use step_condition::{AmericanCondition, NullCondition, ShoutCondition, StepCondition};
pub use tridiagonal::TridiagonalOperator;
