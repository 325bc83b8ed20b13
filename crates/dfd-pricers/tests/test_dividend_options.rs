//! Scenario tests for the dividend option pricers.

use dfd_core::errors::Error;
use dfd_pricers::{
    black_scholes, DividendAmericanOption, DividendEuropeanOption, DividendShoutOption, OptionType,
};

const UNDERLYING: f64 = 100.0;
const STRIKE: f64 = 100.0;
const RATE: f64 = 0.05;
const VOL: f64 = 0.20;
const MATURITY: f64 = 1.0;

fn american(dividends: &[f64], ex_dates: &[f64]) -> Result<DividendAmericanOption, Error> {
    DividendAmericanOption::new(
        OptionType::Call,
        UNDERLYING,
        STRIKE,
        0.0,
        RATE,
        MATURITY,
        VOL,
        dividends,
        ex_dates,
        100,
        101,
    )
}

#[test]
fn single_dividend_call_prices() {
    // underlying 100 with a 5 dividend at t = 0.5: construction must succeed
    // and the price must be a sensible number.
    let mut option = american(&[5.0], &[0.5]).unwrap();
    let value = option.value().unwrap();
    assert!(value.is_finite() && value > 0.0 && value < UNDERLYING, "value = {value}");

    // bracketed by the escrowed European below and the dividend-free call above
    let escrowed = DividendEuropeanOption::new(
        OptionType::Call,
        UNDERLYING,
        STRIKE,
        0.0,
        RATE,
        MATURITY,
        VOL,
        &[5.0],
        &[0.5],
    )
    .unwrap()
    .value();
    let (no_div, ..) = black_scholes(OptionType::Call, UNDERLYING, STRIKE, RATE, 0.0, VOL, MATURITY);
    assert!(
        value > escrowed - 0.10 && value < no_div + 0.10,
        "value = {value}, escrowed = {escrowed}, no-dividend = {no_div}"
    );
}

#[test]
fn oversized_dividend_is_rejected() {
    // a 150 dividend cannot come out of a 100 underlying
    let err = american(&[150.0], &[0.5]).unwrap_err();
    assert_eq!(
        err,
        Error::DividendsExceedUnderlying {
            dividend_sum: 150.0,
            underlying: 100.0
        }
    );
}

#[test]
fn mismatched_schedule_is_rejected() {
    let err = american(&[5.0, 5.0], &[0.5]).unwrap_err();
    assert_eq!(
        err,
        Error::DividendCountMismatch {
            dividends: 2,
            dates: 1
        }
    );
}

#[test]
fn american_call_without_dividends_matches_european() {
    // with no dividends and no carry there is no early-exercise premium on
    // a call, and the control variate pins the numerics to the analytic value
    let mut option = american(&[], &[]).unwrap();
    let value = option.value().unwrap();
    let (bs, ..) = black_scholes(OptionType::Call, UNDERLYING, STRIKE, RATE, 0.0, VOL, MATURITY);
    assert!((value - bs).abs() < 0.10, "value = {value}, european = {bs}");
}

#[test]
fn american_put_carries_an_exercise_premium() {
    let mut option = DividendAmericanOption::new(
        OptionType::Put,
        UNDERLYING,
        STRIKE,
        0.0,
        RATE,
        MATURITY,
        VOL,
        &[],
        &[],
        100,
        101,
    )
    .unwrap();
    let value = option.value().unwrap();
    let (bs, ..) = black_scholes(OptionType::Put, UNDERLYING, STRIKE, RATE, 0.0, VOL, MATURITY);
    assert!(
        value > bs - 1e-6,
        "american put {value} below european {bs}"
    );
    // reference premium for these inputs is a few tens of cents
    assert!(value - bs < 2.0, "implausible premium: {} over {bs}", value);
}

#[test]
fn dividends_raise_the_put_value() {
    let mut with = DividendAmericanOption::new(
        OptionType::Put,
        UNDERLYING,
        STRIKE,
        0.0,
        RATE,
        MATURITY,
        VOL,
        &[3.0, 3.0],
        &[0.3, 0.7],
        120,
        121,
    )
    .unwrap();
    let mut without = DividendAmericanOption::new(
        OptionType::Put,
        UNDERLYING,
        STRIKE,
        0.0,
        RATE,
        MATURITY,
        VOL,
        &[],
        &[],
        120,
        121,
    )
    .unwrap();
    let v_with = with.value().unwrap();
    let v_without = without.value().unwrap();
    assert!(
        v_with > v_without,
        "put with dividends ({v_with}) should exceed the one without ({v_without})"
    );
}

#[test]
fn greeks_have_the_right_signs() {
    let mut option = american(&[5.0], &[0.5]).unwrap();
    let delta = option.delta().unwrap();
    let gamma = option.gamma().unwrap();
    assert!(delta > 0.0 && delta < 1.0, "call delta = {delta}");
    assert!(gamma > 0.0, "gamma = {gamma}");
}

#[test]
fn valuation_is_deterministic() {
    let mut a = american(&[2.0, 3.0], &[0.25, 0.75]).unwrap();
    let mut b = american(&[2.0, 3.0], &[0.25, 0.75]).unwrap();
    assert_eq!(a.value().unwrap(), b.value().unwrap());
    assert_eq!(a.delta().unwrap(), b.delta().unwrap());
    assert_eq!(a.gamma().unwrap(), b.gamma().unwrap());
}

#[test]
fn shout_option_dominates_the_european_equivalent() {
    let mut shout = DividendShoutOption::new(
        OptionType::Call,
        UNDERLYING,
        STRIKE,
        0.0,
        RATE,
        MATURITY,
        VOL,
        &[2.0, 2.0],
        &[0.25, 0.75],
        100,
        101,
    )
    .unwrap();
    let value = shout.value().unwrap();
    let escrowed = DividendEuropeanOption::new(
        OptionType::Call,
        UNDERLYING,
        STRIKE,
        0.0,
        RATE,
        MATURITY,
        VOL,
        &[2.0, 2.0],
        &[0.25, 0.75],
    )
    .unwrap()
    .value();
    assert!(
        value > escrowed - 0.10,
        "shout {value} should not fall below its European equivalent {escrowed}"
    );
    assert!(value < UNDERLYING, "value = {value}");
}
