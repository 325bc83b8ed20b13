//! Closed-form European pricing with escrowed discrete dividends.

use crate::analytic_european::black_scholes;
use crate::payoff::OptionType;
use dfd_core::{ensure, errors::Error, errors::Result, Rate, Real, Time, Volatility};

/// A European option on an asset paying discrete cash dividends, priced in
/// closed form by escrowing the dividends: the spot is reduced by the present
/// value of all dividends paid before expiry and the reduced spot is fed to
/// the plain Black-Scholes formula.
///
/// This is the analytic anchor the control variate is seeded from.
#[derive(Debug, Clone)]
pub struct DividendEuropeanOption {
    value: Real,
    delta: Real,
    gamma: Real,
}

impl DividendEuropeanOption {
    /// Price the option. `dividends` and `ex_dates` must have equal lengths
    /// and the escrowed spot must stay positive.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        option_type: OptionType,
        underlying: Real,
        strike: Real,
        dividend_yield: Rate,
        risk_free_rate: Rate,
        residual_time: Time,
        volatility: Volatility,
        dividends: &[Real],
        ex_dates: &[Time],
    ) -> Result<Self> {
        if dividends.len() != ex_dates.len() {
            return Err(Error::DividendCountMismatch {
                dividends: dividends.len(),
                dates: ex_dates.len(),
            });
        }
        ensure!(underlying > 0.0, "underlying must be positive, got {underlying}");
        ensure!(
            ex_dates.iter().all(|&t| t >= 0.0 && t <= residual_time),
            "ex-dividend dates must lie within the option's life"
        );

        let escrow: Real = dividends
            .iter()
            .zip(ex_dates)
            .map(|(&d, &t)| d * (-risk_free_rate * t).exp())
            .sum();
        if escrow >= underlying {
            return Err(Error::DividendsExceedUnderlying {
                dividend_sum: escrow,
                underlying,
            });
        }

        let (value, delta, gamma) = black_scholes(
            option_type,
            underlying - escrow,
            strike,
            risk_free_rate,
            dividend_yield,
            volatility,
            residual_time,
        );
        Ok(Self {
            value,
            delta,
            gamma,
        })
    }

    /// Present value.
    pub fn value(&self) -> Real {
        self.value
    }

    /// Spot delta.
    pub fn delta(&self) -> Real {
        self.delta
    }

    /// Spot gamma.
    pub fn gamma(&self) -> Real {
        self.gamma
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_dividends_collapses_to_black_scholes() {
        let opt =
            DividendEuropeanOption::new(OptionType::Call, 100.0, 100.0, 0.0, 0.05, 1.0, 0.20, &[], &[])
                .unwrap();
        let (bs, ..) = black_scholes(OptionType::Call, 100.0, 100.0, 0.05, 0.0, 0.20, 1.0);
        assert!((opt.value() - bs).abs() < 1e-12);
    }

    #[test]
    fn dividend_reduces_a_call() {
        let with = DividendEuropeanOption::new(
            OptionType::Call,
            100.0,
            100.0,
            0.0,
            0.05,
            1.0,
            0.20,
            &[5.0],
            &[0.5],
        )
        .unwrap();
        let without =
            DividendEuropeanOption::new(OptionType::Call, 100.0, 100.0, 0.0, 0.05, 1.0, 0.20, &[], &[])
                .unwrap();
        assert!(with.value() < without.value());
        // equal to BS on the escrowed spot
        let escrowed = 100.0 - 5.0 * (-0.05f64 * 0.5).exp();
        let (bs, ..) = black_scholes(OptionType::Call, escrowed, 100.0, 0.05, 0.0, 0.20, 1.0);
        assert!((with.value() - bs).abs() < 1e-12);
    }

    #[test]
    fn rejects_invalid_input() {
        assert!(DividendEuropeanOption::new(
            OptionType::Call,
            100.0,
            100.0,
            0.0,
            0.05,
            1.0,
            0.20,
            &[1.0],
            &[]
        )
        .is_err());
        assert!(DividendEuropeanOption::new(
            OptionType::Call,
            100.0,
            100.0,
            0.0,
            0.05,
            1.0,
            0.20,
            &[1.0],
            &[2.0]
        )
        .is_err());
        assert!(DividendEuropeanOption::new(
            OptionType::Call,
            100.0,
            100.0,
            0.0,
            0.05,
            1.0,
            0.20,
            &[150.0],
            &[0.5]
        )
        .is_err());
    }
}
