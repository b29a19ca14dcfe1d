//! Frame-driven recurring timer.
//!
//! The host loop feeds elapsed frame time into an [`Interval`], which reports
//! how many period boundaries were crossed since the last call. The interval is
//! the cancellable handle a [`Carousel`](crate::carousel::Carousel) keeps for
//! its schedule.

use std::time::Duration;

const NANOS_PER_SEC: u128 = 1_000_000_000;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum IntervalState {
    Armed,     // Counting towards the next boundary
    Cancelled, // Never fires again
}

#[derive(Debug, Clone)]
pub struct Interval {
    period: Duration,
    elapsed: Duration, // Time since the last boundary
    state: IntervalState,
}

impl Interval {
    /// Arms an interval whose first boundary is one full `period` away.
    ///
    /// `period` must be non-zero; callers validate it before arming.
    pub fn every(period: Duration) -> Self {
        debug_assert!(!period.is_zero(), "interval period must be positive");
        Self {
            period,
            elapsed: Duration::ZERO,
            state: IntervalState::Armed,
        }
    }

    /// Accumulates `dt` and returns the number of boundaries crossed.
    ///
    /// A frame spanning several periods yields one tick per period. A cancelled
    /// interval always returns 0 and stops accumulating.
    pub fn update(&mut self, dt: Duration) -> u64 {
        if self.state == IntervalState::Cancelled {
            return 0;
        }

        self.elapsed = self.elapsed.saturating_add(dt);
        if self.elapsed < self.period {
            return 0;
        }

        let period = self.period.as_nanos();
        let elapsed = self.elapsed.as_nanos();
        let remainder = elapsed % period;
        self.elapsed = Duration::new(
            (remainder / NANOS_PER_SEC) as u64,
            (remainder % NANOS_PER_SEC) as u32,
        );
        u64::try_from(elapsed / period).unwrap_or(u64::MAX)
    }

    pub fn cancel(&mut self) {
        self.state = IntervalState::Cancelled;
    }

    pub fn is_cancelled(&self) -> bool {
        self.state == IntervalState::Cancelled
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Time left until the next boundary, or `None` once cancelled.
    pub fn remaining(&self) -> Option<Duration> {
        match self.state {
            IntervalState::Armed => Some(self.period - self.elapsed),
            IntervalState::Cancelled => None,
        }
    }
}
