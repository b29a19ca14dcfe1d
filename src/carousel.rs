//! Cyclic banner advancement.
//!
//! A [`Carousel`] owns an ordered list of image locations and a cursor into it.
//! Every period it moves the cursor one step around the ring and writes the
//! location under the cursor into the display target, which is looked up by id
//! on each tick. A missing target skips the write but not the step.

use std::time::Duration;

use tracing::debug;

use crate::error::CarouselError;
use crate::interval::Interval;
use crate::target::TargetLookup;

/// Result of a single advance.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TickOutcome {
    Applied,       // Target found and updated
    TargetMissing, // Lookup failed, write skipped
}

#[derive(Debug, Clone)]
pub struct Carousel {
    sequence: Vec<String>,
    cursor: usize,
    target_id: String,
    interval: Interval,
}

impl Carousel {
    /// Builds a carousel over `sequence` and arms its schedule.
    ///
    /// The first tick fires one full `period` after this call; until then the
    /// target keeps whatever it was already showing. Fails with
    /// [`CarouselError::Configuration`] if `sequence` is empty or `period` is
    /// zero, in which case nothing is scheduled.
    pub fn initialize<I, S>(
        sequence: I,
        target_id: impl Into<String>,
        period: Duration,
    ) -> Result<Self, CarouselError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sequence: Vec<String> = sequence.into_iter().map(Into::into).collect();
        if sequence.is_empty() {
            return Err(CarouselError::Configuration(
                "image sequence must contain at least one location".to_string(),
            ));
        }
        if period.is_zero() {
            return Err(CarouselError::Configuration(
                "period must be positive".to_string(),
            ));
        }

        let target_id = target_id.into();
        debug!(
            target_id = %target_id,
            images = sequence.len(),
            period_ms = period.as_millis() as u64,
            "carousel initialized"
        );

        Ok(Self {
            sequence,
            cursor: 0,
            target_id,
            interval: Interval::every(period),
        })
    }

    /// Steps the cursor and writes the new location into the target, if present.
    pub fn advance<L>(&mut self, lookup: &mut L) -> TickOutcome
    where
        L: TargetLookup + ?Sized,
    {
        self.cursor = (self.cursor + 1) % self.sequence.len();
        let location = &self.sequence[self.cursor];

        match lookup.find_target(&self.target_id) {
            Some(target) => {
                target.set_image(location);
                debug!(cursor = self.cursor, %location, "banner updated");
                TickOutcome::Applied
            }
            None => {
                debug!(
                    cursor = self.cursor,
                    target_id = %self.target_id,
                    "display target not found, skipping write"
                );
                TickOutcome::TargetMissing
            }
        }
    }

    /// Feeds elapsed host time into the schedule, running one advance per
    /// period boundary crossed. Returns the number of advances run.
    pub fn update<L>(&mut self, dt: Duration, lookup: &mut L) -> u64
    where
        L: TargetLookup + ?Sized,
    {
        let ticks = self.interval.update(dt);
        for _ in 0..ticks {
            self.advance(lookup);
        }
        ticks
    }

    /// Cancels the schedule. Later calls to [`update`](Self::update) do nothing.
    pub fn stop(&mut self) {
        if !self.interval.is_cancelled() {
            self.interval.cancel();
            debug!(target_id = %self.target_id, cursor = self.cursor, "carousel stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        !self.interval.is_cancelled()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current_location(&self) -> &str {
        &self.sequence[self.cursor]
    }

    pub fn sequence(&self) -> &[String] {
        &self.sequence
    }

    pub fn target_id(&self) -> &str {
        &self.target_id
    }

    pub fn period(&self) -> Duration {
        self.interval.period()
    }

    /// Time until the next tick, or `None` once stopped.
    pub fn next_tick_in(&self) -> Option<Duration> {
        self.interval.remaining()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::DisplayTarget;

    /// Lookup that records every write and can be toggled absent.
    #[derive(Default)]
    struct Recorder {
        present: bool,
        writes: Vec<String>,
    }

    impl DisplayTarget for Recorder {
        fn set_image(&mut self, location: &str) {
            self.writes.push(location.to_string());
        }
    }

    impl TargetLookup for Recorder {
        fn find_target(&mut self, id: &str) -> Option<&mut dyn DisplayTarget> {
            if self.present && id == "banner" {
                Some(self)
            } else {
                None
            }
        }
    }

    fn present() -> Recorder {
        Recorder {
            present: true,
            writes: Vec::new(),
        }
    }

    #[test]
    fn empty_sequence_is_rejected() {
        let err = Carousel::initialize(Vec::<String>::new(), "banner", Duration::from_secs(3))
            .unwrap_err();
        assert!(matches!(err, CarouselError::Configuration(_)));
    }

    #[test]
    fn zero_period_is_rejected() {
        let err = Carousel::initialize(["a"], "banner", Duration::ZERO).unwrap_err();
        assert!(matches!(err, CarouselError::Configuration(_)));
    }

    #[test]
    fn advance_wraps_around() {
        let mut carousel =
            Carousel::initialize(["a", "b", "c"], "banner", Duration::from_secs(1)).unwrap();
        let mut target = present();

        for _ in 0..4 {
            carousel.advance(&mut target);
        }

        assert_eq!(target.writes, ["b", "c", "a", "b"]);
        assert_eq!(carousel.cursor(), 1);
        assert_eq!(carousel.current_location(), "b");
    }

    #[test]
    fn missing_target_still_moves_cursor() {
        let mut carousel =
            Carousel::initialize(["a", "b"], "banner", Duration::from_secs(1)).unwrap();
        let mut target = Recorder::default();

        assert_eq!(carousel.advance(&mut target), TickOutcome::TargetMissing);
        assert_eq!(carousel.cursor(), 1);
        assert!(target.writes.is_empty());
    }

    #[test]
    fn wrong_id_is_a_miss() {
        let mut carousel =
            Carousel::initialize(["a", "b"], "elsewhere", Duration::from_secs(1)).unwrap();
        let mut target = present();
        assert_eq!(carousel.advance(&mut target), TickOutcome::TargetMissing);
    }

    #[test]
    fn update_runs_one_advance_per_period() {
        let mut carousel =
            Carousel::initialize(["a", "b"], "banner", Duration::from_millis(100)).unwrap();
        let mut target = present();

        assert_eq!(carousel.update(Duration::from_millis(99), &mut target), 0);
        assert_eq!(carousel.update(Duration::from_millis(251), &mut target), 3);
        assert_eq!(target.writes, ["b", "a", "b"]);
        assert_eq!(carousel.next_tick_in(), Some(Duration::from_millis(50)));
    }

    #[test]
    fn stop_is_idempotent_and_final() {
        let mut carousel =
            Carousel::initialize(["a", "b"], "banner", Duration::from_millis(100)).unwrap();
        let mut target = present();

        carousel.stop();
        carousel.stop();

        assert!(!carousel.is_running());
        assert_eq!(carousel.update(Duration::from_secs(10), &mut target), 0);
        assert!(target.writes.is_empty());
        assert_eq!(carousel.next_tick_in(), None);
    }
}
