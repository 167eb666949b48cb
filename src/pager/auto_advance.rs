//! Periodic advance driver for carousels that cycle without user input.

use std::time::{Duration, Instant};
use tracing::debug;

/// Deadline-based auto-advance schedule.
///
/// The owning engine sleeps until [`AutoAdvance::deadline`] and then calls
/// [`AutoAdvance::fire`]. A tick arriving while the pager is paused or
/// mid-transition is skipped outright; it is never queued, the schedule
/// simply rearms for the next interval. The schedule lives inside the
/// engine task and is cancelled with it on teardown.
#[derive(Debug, Clone)]
pub struct AutoAdvance {
    interval: Duration,
    next_fire: Instant,
}

impl AutoAdvance {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_fire: now + interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Instant at which the next tick is due.
    pub fn deadline(&self) -> Instant {
        self.next_fire
    }

    /// Consumes the due tick, rearms the schedule, and reports whether the
    /// pager should advance on this tick.
    pub fn fire(&mut self, now: Instant, paused: bool, transitioning: bool) -> bool {
        self.next_fire = now + self.interval;
        if paused || transitioning {
            debug!(
                "Auto-advance tick skipped (paused: {}, transitioning: {})",
                paused, transitioning
            );
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(1000);

    #[test]
    fn paused_ticks_never_fire_and_always_rearm() {
        let t0 = Instant::now();
        let mut timer = AutoAdvance::new(INTERVAL, t0);

        let mut now = t0;
        for _ in 0..5 {
            now = timer.deadline();
            assert!(!timer.fire(now, true, false));
        }
        // Rearmed through every skipped tick rather than queueing them up.
        assert_eq!(timer.deadline(), now + INTERVAL);

        let now = timer.deadline();
        assert!(timer.fire(now, false, false));
    }

    #[test]
    fn ticks_inside_a_transition_window_are_skipped() {
        let t0 = Instant::now();
        let mut timer = AutoAdvance::new(INTERVAL, t0);
        let due = timer.deadline();
        assert!(!timer.fire(due, false, true));
        assert_eq!(timer.deadline(), due + INTERVAL);
    }

    #[test]
    fn deadline_advances_by_one_interval_per_fire() {
        let t0 = Instant::now();
        let mut timer = AutoAdvance::new(INTERVAL, t0);
        assert_eq!(timer.deadline(), t0 + INTERVAL);
        let due = timer.deadline();
        assert!(timer.fire(due, false, false));
        assert_eq!(timer.deadline(), due + INTERVAL);
    }
}
