//! Validated dividend schedules.

use dfd_core::{ensure, errors::Error, errors::Result, Real, Time};

/// A single scheduled cash dividend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DividendEvent {
    /// Ex-dividend time as a year fraction from today.
    pub time: Time,
    /// Cash amount paid per share.
    pub amount: Real,
}

/// An ordered, validated list of dividend events.
///
/// Construction enforces the schedule invariants once, so the backward sweep
/// can iterate without re-checking: matching amount/date counts, positive
/// amounts, non-negative and non-decreasing times, and a cumulative amount
/// strictly below the underlying.
#[derive(Debug, Clone)]
pub struct DividendSchedule {
    events: Vec<DividendEvent>,
    total: Real,
}

impl DividendSchedule {
    /// Build a schedule from parallel `amounts` / `times` slices, validated
    /// against the gross `underlying`.
    pub fn new(amounts: &[Real], times: &[Time], underlying: Real) -> Result<Self> {
        if amounts.len() != times.len() {
            return Err(Error::DividendCountMismatch {
                dividends: amounts.len(),
                dates: times.len(),
            });
        }
        ensure!(underlying > 0.0, "underlying must be positive, got {underlying}");
        ensure!(
            amounts.iter().all(|&a| a > 0.0),
            "dividend amounts must be positive"
        );
        ensure!(
            times.iter().all(|&t| t >= 0.0),
            "ex-dividend times cannot be negative"
        );
        ensure!(
            times.windows(2).all(|w| w[0] <= w[1]),
            "ex-dividend times must be in ascending order"
        );

        let total: Real = amounts.iter().sum();
        if total >= underlying {
            return Err(Error::DividendsExceedUnderlying {
                dividend_sum: total,
                underlying,
            });
        }

        let events = amounts
            .iter()
            .zip(times)
            .map(|(&amount, &time)| DividendEvent { time, amount })
            .collect();
        Ok(Self { events, total })
    }

    /// Number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Return `true` if the schedule holds no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The `k`-th event (ascending in time).
    pub fn event(&self, k: usize) -> &DividendEvent {
        &self.events[k]
    }

    /// Iterate over events in ascending time order.
    pub fn iter(&self) -> impl Iterator<Item = &DividendEvent> {
        self.events.iter()
    }

    /// Sum of all dividend amounts.
    pub fn total_amount(&self) -> Real {
        self.total
    }

    /// Sum of the first `k` dividend amounts.
    pub fn amount_accrued(&self, k: usize) -> Real {
        self.events[..k].iter().map(|e| e.amount).sum()
    }
}
