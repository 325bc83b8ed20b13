//! # divfd
//!
//! Dividend-aware finite-difference option pricing.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `dfd-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use divfd::pricers::{DividendAmericanOption, OptionType};
//!
//! let mut option = DividendAmericanOption::new(
//!     OptionType::Call,
//!     100.0,  // underlying
//!     100.0,  // strike
//!     0.0,    // dividend yield
//!     0.05,   // risk-free rate
//!     1.0,    // residual time
//!     0.20,   // volatility
//!     &[5.0], // discrete dividends
//!     &[0.5], // ex-dividend times
//!     100,    // time steps
//!     101,    // grid points
//! )
//! .unwrap();
//! let value = option.value().unwrap();
//! assert!(value > 0.0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use dfd_core as core;

/// Mathematical utilities: arrays, distributions, interpolation.
pub use dfd_math as math;

/// Finite-difference machinery.
pub use dfd_methods as methods;

/// Dividend option pricers.
pub use dfd_pricers as pricers;
