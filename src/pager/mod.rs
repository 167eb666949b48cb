//! Carousel/pager subsystem: index cycling with transition gating.
//!
//! Every carousel-like view in the application (movers carousel, insights
//! card stack, bond view switcher) drives its index through one
//! [`PagerEngine`] running in its own tokio task. The engine owns a pure
//! [`PagerCore`] state machine, accepts [`PagerCommand`]s over an mpsc
//! channel and broadcasts [`PagerSnapshot`]s over a watch channel that the
//! rendering layer reads once per frame.

pub mod auto_advance;
pub mod core;
pub mod engine;
pub mod error;
pub mod input;

pub use auto_advance::AutoAdvance;
pub use engine::{PagerEngine, PagerEngineState, PagerHandle};
pub use error::PagerError;
pub use input::{GestureAdapter, GestureEvent};
pub use self::core::{PagerCore, Step, DEFAULT_TRANSITION};

use std::time::Duration;

/// Commands accepted by a pager engine.
///
/// Both user input (via the gesture adapter) and the auto-advance timer
/// mutate pager state exclusively through these commands; no call site
/// touches the index directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerCommand {
    /// Step to the next item, wrapping at the end of the deck
    Advance,
    /// Step to the previous item, wrapping at the start of the deck
    Retreat,
    /// Jump to a specific item index
    GoTo(usize),
    /// Suspend or resume the auto-advance timer (pointer hover)
    SetPaused(bool),
}

/// Read-only projection of pager state published to the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerSnapshot {
    pub current_index: usize,
    pub item_count: usize,
    /// True while the visual transition window is open; requests arriving
    /// in this window were rejected
    pub transitioning: bool,
    /// True while auto-advance is suspended
    pub paused: bool,
}

impl PagerSnapshot {
    /// Signed circular distance from the current item to `index`, using the
    /// same normalization as [`PagerCore::compute_offset`]. The rendering
    /// layer classifies items by this value: 0 is active, -1 previous,
    /// +1 next, anything else hidden.
    pub fn offset_of(&self, index: usize) -> isize {
        self::core::circular_offset(self.current_index, index, self.item_count)
    }
}

/// Construction-time settings for one pager engine.
///
/// `item_count` derives from the backing data sequence and is fixed for the
/// engine's lifetime; a carousel whose data changes length needs a fresh
/// engine, not a resize.
#[derive(Debug, Clone)]
pub struct PagerSettings {
    /// Engine name used in logs
    pub name: String,

    /// Number of items in the deck, at least one
    pub item_count: usize,

    /// Length of the visual transition window during which further
    /// requests are rejected
    pub transition: Duration,

    /// Auto-advance interval; `None` disables the timer entirely
    pub auto_advance: Option<Duration>,
}

impl PagerSettings {
    pub fn new(name: impl Into<String>, item_count: usize) -> Self {
        Self {
            name: name.into(),
            item_count,
            transition: DEFAULT_TRANSITION,
            auto_advance: None,
        }
    }

    pub fn with_transition(mut self, transition: Duration) -> Self {
        self.transition = transition;
        self
    }

    pub fn with_auto_advance(mut self, interval: Duration) -> Self {
        self.auto_advance = Some(interval);
        self
    }
}
