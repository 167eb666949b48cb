//! Pure index-cycling state machine underlying all carousel views.
//!
//! The core is synchronous and owns no timers: callers inject the current
//! [`Instant`] into every operation, which keeps the state machine
//! deterministic under test. The owning engine is responsible for calling
//! [`PagerCore::settle`] once the transition window elapses and for
//! publishing state to the rendering layer.
//!
//! # State Machine
//!
//! ```text
//! Idle ──goto/advance/retreat──► Transitioning
//!  ▲                                  │
//!  └────────── settle (window elapsed)┘
//! ```
//!
//! While `Transitioning`, every further transition request is rejected as a
//! silent no-op; this gate is the only debouncing in the subsystem.

use std::time::{Duration, Instant};
use tracing::debug;

use crate::pager::error::PagerError;

/// Transition window shared as the default by every pager instance.
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(500);

/// Outcome of a transition request.
///
/// Rejection is ordinary control flow, not an error: a request arriving
/// inside the transition window, or targeting the current item, leaves the
/// state untouched with no observable side effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The index changed and a transition window opened
    Moved { from: usize, to: usize },
    /// The request was ignored
    Rejected,
}

/// Index-cycling state for a single carousel mount.
///
/// Invariant: `current_index < item_count`, with `item_count >= 1` fixed
/// for the instance's lifetime.
#[derive(Debug, Clone)]
pub struct PagerCore {
    item_count: usize,
    current_index: usize,
    transition_until: Option<Instant>,
    transition: Duration,
}

impl PagerCore {
    /// Creates a core positioned on the first item.
    ///
    /// Fails with [`PagerError::EmptyDeck`] for a zero-length deck; the
    /// item count cannot change afterwards.
    pub fn new(item_count: usize, transition: Duration) -> Result<Self, PagerError> {
        if item_count == 0 {
            return Err(PagerError::EmptyDeck);
        }
        Ok(Self {
            item_count,
            current_index: 0,
            transition_until: None,
            transition,
        })
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// True while the transition window is open at `now`.
    pub fn is_transitioning(&self, now: Instant) -> bool {
        self.transition_until.is_some_and(|until| now < until)
    }

    /// Deadline at which the open transition window closes, if any.
    pub fn transition_deadline(&self) -> Option<Instant> {
        self.transition_until
    }

    /// Clears the transition flag once the window has elapsed. Idempotent
    /// and safe to call at any time.
    pub fn settle(&mut self, now: Instant) {
        if let Some(until) = self.transition_until {
            if now >= until {
                self.transition_until = None;
            }
        }
    }

    /// Requests a transition to `target`.
    ///
    /// Rejected (no-op, no error) while a transition is in flight or when
    /// `target` is already current. An out-of-range target is a contract
    /// violation: callers derive indices via modulo arithmetic and never
    /// produce one. Test builds assert on it; release builds return
    /// [`PagerError::OutOfRange`] with the state untouched.
    pub fn go_to(&mut self, target: usize, now: Instant) -> Result<Step, PagerError> {
        self.settle(now);

        if self.transition_until.is_some() || target == self.current_index {
            debug!(
                "Pager request for index {} rejected (transitioning: {}, current: {})",
                target,
                self.transition_until.is_some(),
                self.current_index
            );
            return Ok(Step::Rejected);
        }

        if target >= self.item_count {
            debug_assert!(
                target < self.item_count,
                "pager target {} outside deck of {} items",
                target,
                self.item_count
            );
            return Err(PagerError::OutOfRange {
                index: target,
                len: self.item_count,
            });
        }

        let from = self.current_index;
        self.current_index = target;
        self.transition_until = Some(now + self.transition);
        Ok(Step::Moved { from, to: target })
    }

    /// Steps forward one item, wrapping past the end of the deck.
    pub fn advance(&mut self, now: Instant) -> Result<Step, PagerError> {
        let target = (self.current_index + 1) % self.item_count;
        self.go_to(target, now)
    }

    /// Steps back one item, wrapping past the start of the deck.
    pub fn retreat(&mut self, now: Instant) -> Result<Step, PagerError> {
        let target = (self.current_index + self.item_count - 1) % self.item_count;
        self.go_to(target, now)
    }

    /// Signed circular distance from the current item to `index`,
    /// normalized into `(-item_count/2, item_count/2]`. Pure; the rendering
    /// layer derives translation, scale and opacity from this value alone.
    pub fn compute_offset(&self, index: usize) -> isize {
        circular_offset(self.current_index, index, self.item_count)
    }
}

/// Shared offset computation used by the core and by published snapshots.
pub(crate) fn circular_offset(current: usize, index: usize, count: usize) -> isize {
    let n = count as isize;
    let mut offset = (index as isize - current as isize).rem_euclid(n);
    if offset > n / 2 {
        offset -= n;
    }
    offset
}

#[cfg(test)]
mod tests {
    use super::*;

    fn core(items: usize) -> PagerCore {
        PagerCore::new(items, DEFAULT_TRANSITION).unwrap()
    }

    fn after_window(start: Instant) -> Instant {
        start + DEFAULT_TRANSITION + Duration::from_millis(1)
    }

    #[test]
    fn empty_deck_is_rejected_at_construction() {
        assert!(matches!(
            PagerCore::new(0, DEFAULT_TRANSITION),
            Err(PagerError::EmptyDeck)
        ));
    }

    #[test]
    fn index_stays_in_range_under_arbitrary_stepping() {
        let mut pager = core(5);
        let mut now = Instant::now();
        for round in 0..40 {
            if round % 3 == 0 {
                pager.retreat(now).unwrap();
            } else {
                pager.advance(now).unwrap();
            }
            assert!(pager.current_index() < pager.item_count());
            now = after_window(now);
        }
    }

    #[test]
    fn advance_then_retreat_round_trips() {
        let mut pager = core(4);
        let t0 = Instant::now();
        let start = pager.current_index();

        assert_eq!(pager.advance(t0).unwrap(), Step::Moved { from: 0, to: 1 });
        let t1 = after_window(t0);
        assert_eq!(pager.retreat(t1).unwrap(), Step::Moved { from: 1, to: 0 });
        assert_eq!(pager.current_index(), start);
    }

    #[test]
    fn go_to_current_is_a_noop() {
        let mut pager = core(3);
        let t0 = Instant::now();
        assert_eq!(pager.go_to(0, t0).unwrap(), Step::Rejected);
        assert_eq!(pager.current_index(), 0);
        assert!(!pager.is_transitioning(t0));
    }

    #[test]
    fn requests_inside_the_window_are_rejected() {
        let mut pager = core(5);
        let t0 = Instant::now();
        pager.go_to(2, t0).unwrap();
        let mid = t0 + Duration::from_millis(100);

        assert_eq!(pager.advance(mid).unwrap(), Step::Rejected);
        assert_eq!(pager.retreat(mid).unwrap(), Step::Rejected);
        assert_eq!(pager.go_to(4, mid).unwrap(), Step::Rejected);
        assert_eq!(pager.current_index(), 2);
        assert!(pager.is_transitioning(mid));
    }

    #[test]
    fn six_item_walk_wraps_to_zero() {
        // Insights deck shape: six cards, advance all the way around.
        let mut pager = core(6);
        let mut now = Instant::now();
        for expected in 1..=5 {
            pager.advance(now).unwrap();
            assert_eq!(pager.current_index(), expected);
            now = after_window(now);
        }
        pager.advance(now).unwrap();
        assert_eq!(pager.current_index(), 0);
    }

    #[test]
    fn second_jump_inside_window_is_dropped() {
        // Movers deck shape: two cards, competing taps.
        let mut pager = core(2);
        let t0 = Instant::now();
        assert_eq!(pager.go_to(1, t0).unwrap(), Step::Moved { from: 0, to: 1 });
        assert_eq!(pager.go_to(0, t0).unwrap(), Step::Rejected);

        let settled = after_window(t0);
        pager.settle(settled);
        assert_eq!(pager.current_index(), 1);
        assert!(!pager.is_transitioning(settled));
    }

    #[test]
    fn offset_of_current_is_zero() {
        for items in 1..=7 {
            let mut pager = core(items);
            let mut now = Instant::now();
            for _ in 0..items {
                assert_eq!(pager.compute_offset(pager.current_index()), 0);
                pager.advance(now).unwrap();
                now = after_window(now);
            }
        }
    }

    #[test]
    fn adjacent_offsets_are_antisymmetric() {
        let mut pager = core(6);
        let mut now = Instant::now();
        for _ in 0..6 {
            let current = pager.current_index();
            let next = (current + 1) % 6;
            let prev = (current + 5) % 6;
            assert_eq!(pager.compute_offset(next), 1);
            assert_eq!(pager.compute_offset(prev), -1);
            pager.advance(now).unwrap();
            now = after_window(now);
        }
    }

    #[test]
    fn offsets_normalize_into_half_open_band() {
        let pager = core(6);
        let offsets: Vec<isize> = (0..6).map(|i| pager.compute_offset(i)).collect();
        assert_eq!(offsets, vec![0, 1, 2, 3, -2, -1]);
    }

    #[test]
    fn two_item_deck_treats_the_other_card_as_next() {
        let pager = core(2);
        assert_eq!(pager.compute_offset(0), 0);
        assert_eq!(pager.compute_offset(1), 1);
    }

    #[test]
    fn single_item_deck_never_moves() {
        let mut pager = core(1);
        let t0 = Instant::now();
        assert_eq!(pager.advance(t0).unwrap(), Step::Rejected);
        assert_eq!(pager.retreat(t0).unwrap(), Step::Rejected);
        assert_eq!(pager.current_index(), 0);
        assert!(!pager.is_transitioning(t0));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "outside deck")]
    fn out_of_range_target_asserts_in_test_builds() {
        let mut pager = core(3);
        let _ = pager.go_to(7, Instant::now());
    }
}
