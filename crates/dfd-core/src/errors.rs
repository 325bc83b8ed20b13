//! Error types for divfd.
//!
//! All failures in this library are deterministic consequences of invalid
//! inputs or invariant violations; there is no retry policy and no
//! partial-success state.  A failing valuation produces no usable price.

use thiserror::Error;

/// The top-level error type used throughout divfd.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Invalid constructor input.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// The dividend schedule and the ex-dividend dates disagree in length.
    #[error("the number of dividends ({dividends}) differs from the number of ex-dividend dates ({dates})")]
    DividendCountMismatch {
        /// Number of dividend amounts supplied.
        dividends: usize,
        /// Number of ex-dividend dates supplied.
        dates: usize,
    },

    /// The cumulative dividend amount is not strictly below the underlying.
    #[error("dividends ({dividend_sum}) cannot exceed the underlying ({underlying})")]
    DividendsExceedUnderlying {
        /// Sum of all dividend amounts.
        dividend_sum: f64,
        /// The gross underlying value.
        underlying: f64,
    },

    /// Too few strictly-positive grid points survive filtering for the
    /// log-spline price transfer.
    #[error("degenerate grid: {usable} usable point(s) after filtering, at least 2 required")]
    DegenerateGrid {
        /// Number of surviving grid points.
        usable: usize,
    },
}

/// Shorthand `Result` type used throughout divfd.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Check a configuration precondition.
///
/// Returns `Err(Error::Configuration(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use dfd_core::ensure;
/// fn positive(x: f64) -> dfd_core::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Configuration(
                format!($($msg)*)
            ));
        }
    };
}

/// Fail immediately with a runtime error.
///
/// # Example
/// ```
/// use dfd_core::fail;
/// fn always_err() -> dfd_core::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_message_carries_diagnostics() {
        let e = Error::DividendCountMismatch {
            dividends: 3,
            dates: 2,
        };
        let msg = e.to_string();
        assert!(msg.contains('3') && msg.contains('2'), "msg = {msg}");

        let e = Error::DividendsExceedUnderlying {
            dividend_sum: 150.0,
            underlying: 100.0,
        };
        let msg = e.to_string();
        assert!(msg.contains("150") && msg.contains("100"), "msg = {msg}");
    }

    #[test]
    fn ensure_macro_returns_configuration() {
        fn check(x: f64) -> Result<()> {
            ensure!(x > 0.0, "x must be positive, got {x}");
            Ok(())
        }
        assert!(check(1.0).is_ok());
        assert!(matches!(check(-1.0), Err(Error::Configuration(_))));
    }
}
