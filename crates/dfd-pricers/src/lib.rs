//! # dfd-pricers
//!
//! Pricing of options on assets paying discrete cash dividends, using a
//! finite-difference backward sweep that re-centers its price grid at every
//! ex-dividend date and cancels discretization bias with an analytically
//! anchored control variate.
//!
//! The user-facing entry points are [`DividendAmericanOption`] and
//! [`DividendShoutOption`]; the sweep itself lives in
//! [`FdMultiPeriodPricer`] and can be driven with any
//! [`StepConditionFactory`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Closed-form Black-Scholes pricing.
pub mod analytic_european;

/// Control-variate bookkeeping.
pub mod control_variate;

/// Closed-form European pricing with escrowed discrete dividends.
pub mod dividend_european;

/// User-facing dividend option instruments.
pub mod dividend_option;

/// Declarative single-period finite-difference state (grid, initial
/// condition, operator).
pub mod fd_engine;

/// Grid support bounds and their dividend-event updates.
pub mod grid_limits;

/// The multi-period backward sweep.
pub mod multi_period;

/// Option types and payoffs.
pub mod payoff;

/// Validated dividend schedules.
pub mod schedule;

/// Remapping price arrays between grids.
pub mod transfer;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use analytic_european::black_scholes;
pub use control_variate::ControlVariate;
pub use dividend_european::DividendEuropeanOption;
pub use dividend_option::{DividendAmericanOption, DividendShoutOption};
pub use fd_engine::FdEngineCore;
pub use grid_limits::{CenterAndBounds, GridLimits};
pub use multi_period::{
    AmericanExercise, EuropeanExercise, FdMultiPeriodPricer, ShoutExercise, StepConditionFactory,
};
pub use payoff::{OptionType, PlainVanillaPayoff};
pub use schedule::{DividendEvent, DividendSchedule};
pub use transfer::transfer;
