//! Closed-form Black-Scholes-Merton pricing.

use crate::payoff::OptionType;
use dfd_core::{Rate, Real, Time, Volatility};
use dfd_math::distributions::{normal_cdf, normal_pdf};

/// Compute the Black-Scholes-Merton price and first two spot greeks of a
/// European option.
///
/// $$C = S e^{-qT} N(d_1) - K e^{-rT} N(d_2)$$
/// $$P = K e^{-rT} N(-d_2) - S e^{-qT} N(-d_1)$$
///
/// where $d_{1,2} = \frac{\ln(S/K) + (r - q \pm \sigma^2/2)T}{\sigma\sqrt{T}}$
///
/// Returns `(value, delta, gamma)`.
pub fn black_scholes(
    option_type: OptionType,
    spot: Real,
    strike: Real,
    risk_free_rate: Rate,
    dividend_yield: Rate,
    volatility: Volatility,
    time_to_expiry: Time,
) -> (Real, Real, Real) {
    let phi = option_type.sign();
    let t = time_to_expiry;

    if t <= 0.0 {
        let intrinsic = (phi * (spot - strike)).max(0.0);
        return (intrinsic, 0.0, 0.0);
    }

    let r = risk_free_rate;
    let q = dividend_yield;
    let sigma = volatility;
    let sqrt_t = t.sqrt();
    let std_dev = sigma * sqrt_t;
    let df_r = (-r * t).exp();
    let df_q = (-q * t).exp();

    if std_dev <= 1e-12 {
        // Deterministic forward: discounted intrinsic on the forward level.
        let fwd = spot * ((r - q) * t).exp();
        let value = (phi * (fwd - strike)).max(0.0) * df_r;
        let delta = if phi * (fwd - strike) > 0.0 {
            phi * df_q
        } else {
            0.0
        };
        return (value, delta, 0.0);
    }

    let d1 = ((spot / strike).ln() + (r - q + 0.5 * sigma * sigma) * t) / std_dev;
    let d2 = d1 - std_dev;

    let nd1 = normal_cdf(phi * d1);
    let nd2 = normal_cdf(phi * d2);
    let npd1 = normal_pdf(d1);

    let value = phi * (spot * df_q * nd1 - strike * df_r * nd2);
    let delta = phi * df_q * nd1;
    let gamma = df_q * npd1 / (spot * std_dev);

    (value, delta, gamma)
}
