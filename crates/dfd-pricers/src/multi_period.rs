//! The multi-period backward sweep.
//!
//! Marches the option value from maturity down to the valuation date,
//! visiting ex-dividend events in decreasing calendar time. At each event
//! the grid is re-centered on the dividend-reinstated reference level, both
//! price arrays are remapped onto the rebuilt grid, the operator and model
//! are reassembled, and the instrument's step condition is re-applied to the
//! primary array.

use crate::control_variate::ControlVariate;
use crate::dividend_european::DividendEuropeanOption;
use crate::fd_engine::FdEngineCore;
use crate::payoff::{OptionType, PlainVanillaPayoff};
use crate::schedule::DividendSchedule;
use crate::transfer::transfer;
use dfd_core::{ensure, errors::Result, Rate, Real, Size, Time, Volatility};
use dfd_math::Array;
use dfd_methods::{
    first_derivative_at_center, second_derivative_at_center, value_at_center, AmericanCondition,
    CrankNicolsonModel, NullCondition, ShoutCondition, StepCondition,
};

// ── Step-condition injection ──────────────────────────────────────────────────

/// Builds an instrument's step condition for the current grid.
///
/// The grid is rebuilt at every dividend event, so the condition (which
/// closes over the intrinsic values) must be rebuilt with it. Instruments
/// inject a factory rather than a condition.
pub trait StepConditionFactory: std::fmt::Debug + Send + Sync {
    /// Build the condition from the intrinsic values on the current grid.
    fn build(&self, intrinsic: &Array) -> Box<dyn StepCondition>;
}

/// American early exercise.
#[derive(Debug, Clone, Copy)]
pub struct AmericanExercise;

impl StepConditionFactory for AmericanExercise {
    fn build(&self, intrinsic: &Array) -> Box<dyn StepCondition> {
        Box::new(AmericanCondition::new(intrinsic.clone()))
    }
}

/// Shout feature: lock in intrinsic at any slice, paid at expiry.
#[derive(Debug, Clone, Copy)]
pub struct ShoutExercise {
    rate: Rate,
    residual_time: Time,
}

impl ShoutExercise {
    /// Create the factory for an option expiring at `residual_time`.
    pub fn new(rate: Rate, residual_time: Time) -> Self {
        Self {
            rate,
            residual_time,
        }
    }
}

impl StepConditionFactory for ShoutExercise {
    fn build(&self, intrinsic: &Array) -> Box<dyn StepCondition> {
        Box::new(ShoutCondition::new(
            intrinsic.clone(),
            self.rate,
            self.residual_time,
        ))
    }
}

/// No early-exercise feature.
#[derive(Debug, Clone, Copy)]
pub struct EuropeanExercise;

impl StepConditionFactory for EuropeanExercise {
    fn build(&self, _intrinsic: &Array) -> Box<dyn StepCondition> {
        Box::new(NullCondition)
    }
}

// ── The sweep ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
struct SweepResults {
    value: Real,
    delta: Real,
    gamma: Real,
    /// Primary-leg value without the control-variate correction.
    uncorrected: Real,
}

/// Finite-difference pricer for options with a discrete dividend schedule.
///
/// Owns its grid and both price arrays exclusively; independent pricers
/// share nothing and may run on different threads.
#[derive(Debug)]
pub struct FdMultiPeriodPricer {
    option_type: OptionType,
    net_spot: Real,
    strike: Real,
    dividend_yield: Rate,
    risk_free_rate: Rate,
    residual_time: Time,
    volatility: Volatility,
    schedule: DividendSchedule,
    time_steps: Size,
    grid_points: Size,
    condition: Box<dyn StepConditionFactory>,
    results: Option<SweepResults>,
}

impl FdMultiPeriodPricer {
    /// Validate the inputs and set up a pricer.
    ///
    /// `dividends` and `ex_dates` must have equal lengths, the dividend sum
    /// must stay strictly below `underlying`, and ex-dividend times must lie
    /// in `(0, residual_time]`. All violations fail here, before any grid
    /// work begins.
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
        condition: Box<dyn StepConditionFactory>,
    ) -> Result<Self> {
        ensure!(underlying > 0.0, "underlying must be positive, got {underlying}");
        ensure!(strike > 0.0, "strike must be positive, got {strike}");
        ensure!(
            residual_time > 0.0,
            "residual time must be positive, got {residual_time}"
        );
        ensure!(volatility > 0.0, "volatility must be positive, got {volatility}");
        ensure!(time_steps > 0, "need at least one time step");
        ensure!(
            grid_points >= 4,
            "need at least 4 grid points, got {grid_points}"
        );

        let schedule = DividendSchedule::new(dividends, ex_dates, underlying)?;
        ensure!(
            schedule.iter().all(|e| e.time > 0.0 && e.time <= residual_time),
            "ex-dividend times must lie in (0, {residual_time}]"
        );

        Ok(Self {
            option_type,
            // the live quote carries the future dividends; the modeled
            // reference level at maturity does not
            net_spot: underlying - schedule.total_amount(),
            strike,
            dividend_yield,
            risk_free_rate,
            residual_time,
            volatility,
            schedule,
            time_steps,
            grid_points,
            condition,
            results: None,
        })
    }

    /// Control-variate-corrected present value.
    pub fn value(&mut self) -> Result<Real> {
        Ok(self.ensure_calculated()?.value)
    }

    /// Control-variate-corrected delta.
    pub fn delta(&mut self) -> Result<Real> {
        Ok(self.ensure_calculated()?.delta)
    }

    /// Control-variate-corrected gamma.
    pub fn gamma(&mut self) -> Result<Real> {
        Ok(self.ensure_calculated()?.gamma)
    }

    /// Primary-leg value without the control-variate correction.
    pub fn uncorrected_value(&mut self) -> Result<Real> {
        Ok(self.ensure_calculated()?.uncorrected)
    }

    fn ensure_calculated(&mut self) -> Result<SweepResults> {
        if let Some(results) = self.results {
            return Ok(results);
        }
        let results = self.run_sweep()?;
        self.results = Some(results);
        Ok(results)
    }

    fn run_sweep(&self) -> Result<SweepResults> {
        let n_events = self.schedule.len();

        // State at maturity, centered on the net reference level.
        let mut engine = FdEngineCore::new(
            PlainVanillaPayoff::new(self.option_type, self.strike),
            self.dividend_yield,
            self.risk_free_rate,
            self.volatility,
            self.grid_points,
            self.net_spot,
            self.residual_time,
        );
        let mut prices = engine.intrinsic().clone();

        // The analytic anchor prices the equivalent European instrument with
        // the dividends reinstated into the spot.
        let amounts: Vec<Real> = self.schedule.iter().map(|e| e.amount).collect();
        let times: Vec<Time> = self.schedule.iter().map(|e| e.time).collect();
        let reference = DividendEuropeanOption::new(
            self.option_type,
            self.net_spot + self.schedule.total_amount(),
            self.strike,
            self.dividend_yield,
            self.risk_free_rate,
            self.residual_time,
            self.volatility,
            &amounts,
            &times,
        )?;
        let mut control = ControlVariate::new(&reference, prices.clone());

        let mut condition = self.condition.build(engine.intrinsic());
        let mut model = CrankNicolsonModel::new(engine.initialize_operator());

        let steps_per_period = (self.time_steps / (n_events + 1)).max(1);
        let mut t_from = self.residual_time;

        // Events are visited in decreasing calendar time.
        for k in (0..n_events).rev() {
            let event = *self.schedule.event(k);

            if t_from > event.time {
                model.rollback(
                    &mut prices,
                    t_from,
                    event.time,
                    steps_per_period,
                    Some(condition.as_ref()),
                );
                model.rollback(control.prices_mut(), t_from, event.time, steps_per_period, None);
            }

            // The pre-event grid, re-expressed with the dividend reinstated;
            // an affine shift of the current nodes, kept only as the source
            // reference for the transfer below.
            let old_grid = engine.grid() + event.amount;

            let before = engine.limits().bounds();
            let after = engine.limits_mut().on_dividend_event(event.amount, event.time);
            if after != before {
                engine.initialize_grid();
                engine.initialize_initial_condition();
            }

            prices = transfer(&prices, &old_grid, engine.grid())?;
            let new_control = transfer(control.prices(), &old_grid, engine.grid())?;
            *control.prices_mut() = new_control;

            model = CrankNicolsonModel::new(engine.initialize_operator());
            condition = self.condition.build(engine.intrinsic());
            condition.apply_to(&mut prices, event.time);

            t_from = event.time;
        }

        model.rollback(&mut prices, t_from, 0.0, steps_per_period, Some(condition.as_ref()));
        model.rollback(control.prices_mut(), t_from, 0.0, steps_per_period, None);

        let uncorrected = value_at_center(&prices);
        let value = control.corrected_value(uncorrected, value_at_center(control.prices()));
        let delta = control.corrected_delta(
            first_derivative_at_center(&prices, engine.grid()),
            first_derivative_at_center(control.prices(), engine.grid()),
        );
        let gamma = control.corrected_gamma(
            second_derivative_at_center(&prices, engine.grid()),
            second_derivative_at_center(control.prices(), engine.grid()),
        );

        Ok(SweepResults {
            value,
            delta,
            gamma,
            uncorrected,
        })
    }
}
