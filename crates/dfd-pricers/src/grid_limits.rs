//! Grid support bounds and their updates across dividend events.

use dfd_core::{Real, Time, Volatility};

/// The current grid support: `s_min < center < s_max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterAndBounds {
    /// Reference level the grid is centered on.
    pub center: Real,
    /// Lower bound of the grid support.
    pub s_min: Real,
    /// Upper bound of the grid support.
    pub s_max: Real,
}

/// Owns the grid center and support bounds for one valuation and decides how
/// they move when a dividend is reinstated on the backward sweep.
#[derive(Debug, Clone)]
pub struct GridLimits {
    strike: Real,
    volatility: Volatility,
    center: Real,
    s_min: Real,
    s_max: Real,
}

impl GridLimits {
    /// Create limits centered on `center` with `residual_time` to expiry.
    pub fn new(strike: Real, volatility: Volatility, center: Real, residual_time: Time) -> Self {
        let mut limits = Self {
            strike,
            volatility,
            center,
            s_min: 0.0,
            s_max: 0.0,
        };
        limits.set_grid_limits(center, residual_time);
        limits
    }

    /// Recompute the support for a new `center` and `residual_time`.
    ///
    /// The band spans four volatility standard deviations either side of the
    /// center in log-space, with a small-time prefactor, then is stretched so
    /// the strike stays inside it with a 10 % margin. Log-symmetry around the
    /// center is re-imposed whenever a bound is pulled to the strike.
    pub fn set_grid_limits(&mut self, center: Real, residual_time: Time) {
        self.center = center;
        let vol_sqrt_t = self.volatility * residual_time.sqrt();
        let prefactor = 1.0 + 0.02 / vol_sqrt_t;
        let exponent = 4.0 * vol_sqrt_t * prefactor;
        self.s_min = center * (-exponent).exp();
        self.s_max = center * exponent.exp();
        self.ensure_strike_in_band();
    }

    fn ensure_strike_in_band(&mut self) {
        let safety_zone_factor = 1.1;
        if self.s_max < self.strike * safety_zone_factor {
            self.s_max = self.strike * safety_zone_factor;
            self.s_min = self.center * self.center / self.s_max;
        }
        if self.s_min > self.strike / safety_zone_factor {
            self.s_min = self.strike / safety_zone_factor;
            self.s_max = self.center * self.center / self.s_min;
        }
    }

    /// Update the support for a dividend reinstated at `event_time` on the
    /// backward sweep.
    ///
    /// The center moves up by the dividend. The support is recomputed for the
    /// shifted center; if the old lower bound shifted by the dividend exceeds
    /// the recomputed one, the support is widened to it and the upper bound
    /// rescaled to `center²/s_min` to preserve log-symmetry. Any change in
    /// the returned bounds tells the caller to rebuild its grid rather than
    /// shift it.
    pub fn on_dividend_event(&mut self, dividend: Real, event_time: Time) -> CenterAndBounds {
        let candidate_s_min = self.s_min + dividend;
        self.set_grid_limits(self.center + dividend, event_time);
        if candidate_s_min > self.s_min {
            self.s_min = candidate_s_min;
            self.s_max = self.center * self.center / self.s_min;
        }
        self.bounds()
    }

    /// The current center and bounds.
    pub fn bounds(&self) -> CenterAndBounds {
        CenterAndBounds {
            center: self.center,
            s_min: self.s_min,
            s_max: self.s_max,
        }
    }

    /// Current grid center.
    pub fn center(&self) -> Real {
        self.center
    }

    /// Current lower bound.
    pub fn s_min(&self) -> Real {
        self.s_min
    }

    /// Current upper bound.
    pub fn s_max(&self) -> Real {
        self.s_max
    }
}
