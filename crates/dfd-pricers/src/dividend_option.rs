//! User-facing dividend option instruments.

use crate::multi_period::{
    AmericanExercise, FdMultiPeriodPricer, ShoutExercise, StepConditionFactory,
};
use crate::payoff::OptionType;
use dfd_core::{errors::Result, Rate, Real, Size, Time, Volatility};

macro_rules! delegate_results {
    () => {
        /// Control-variate-corrected present value.
        pub fn value(&mut self) -> Result<Real> {
            self.pricer.value()
        }

        /// Control-variate-corrected delta.
        pub fn delta(&mut self) -> Result<Real> {
            self.pricer.delta()
        }

        /// Control-variate-corrected gamma.
        pub fn gamma(&mut self) -> Result<Real> {
            self.pricer.gamma()
        }
    };
}

#[allow(clippy::too_many_arguments)]
fn build_pricer(
    option_type: OptionType,
    underlying: Real,
    strike: Real,
    dividend_yield: Rate,
    risk_free_rate: Rate,
    residual_time: Time,
    volatility: Volatility,
    dividends: &[Real],
    ex_dates: &[Time],
    time_steps: Size,
    grid_points: Size,
    condition: Box<dyn StepConditionFactory>,
) -> Result<FdMultiPeriodPricer> {
    FdMultiPeriodPricer::new(
        option_type,
        underlying,
        strike,
        dividend_yield,
        risk_free_rate,
        residual_time,
        volatility,
        dividends,
        ex_dates,
        time_steps,
        grid_points,
        condition,
    )
}

/// An American option on an asset paying discrete cash dividends.
///
/// Priced by the dividend-adjusted finite-difference sweep with an
/// early-exercise floor on the primary leg; results are computed lazily on
/// first access and cached.
#[derive(Debug)]
pub struct DividendAmericanOption {
    pricer: FdMultiPeriodPricer,
}

impl DividendAmericanOption {
    /// Validate the inputs and set up the option.
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
        time_steps: Size,
        grid_points: Size,
    ) -> Result<Self> {
        let pricer = build_pricer(
            option_type,
            underlying,
            strike,
            dividend_yield,
            risk_free_rate,
            residual_time,
            volatility,
            dividends,
            ex_dates,
            time_steps,
            grid_points,
            Box::new(AmericanExercise),
        )?;
        Ok(Self { pricer })
    }

    delegate_results!();
}

/// A shout option on an asset paying discrete cash dividends.
#[derive(Debug)]
pub struct DividendShoutOption {
    pricer: FdMultiPeriodPricer,
}

impl DividendShoutOption {
    /// Validate the inputs and set up the option.
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
        time_steps: Size,
        grid_points: Size,
    ) -> Result<Self> {
        let pricer = build_pricer(
            option_type,
            underlying,
            strike,
            dividend_yield,
            risk_free_rate,
            residual_time,
            volatility,
            dividends,
            ex_dates,
            time_steps,
            grid_points,
            Box::new(ShoutExercise::new(risk_free_rate, residual_time)),
        )?;
        Ok(Self { pricer })
    }

    delegate_results!();
}
