//! Translation of discrete UI stimuli into pager commands.

use tracing::debug;

use crate::pager::PagerCommand;

/// A discrete stimulus delivered by the host UI.
///
/// Card taps carry the tapped card's circular offset as computed by the
/// rendering layer; hidden cards (|offset| > 1) are excluded from pointer
/// interaction and never produce an event in practice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Tap on the left navigation control
    TapLeft,
    /// Tap on the right navigation control
    TapRight,
    /// Tap on the dot indicator for item `i`
    TapDot(usize),
    /// Wheel/scroll event over the carousel surface
    Wheel { delta_y: f32 },
    /// Tap on a visible card, identified by its offset from the active card
    TapCard { offset: isize },
}

/// Maps gestures to pager commands.
///
/// Every mapping is a plain pass-through: the core's Idle/Transitioning
/// gate is the sole source of debouncing, so the adapter performs no rate
/// limiting of its own. Wheel handling is per-carousel; a carousel that
/// maps a wheel event owns the scroll for that frame and the caller must
/// consume the platform's scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct GestureAdapter {
    wheel_enabled: bool,
}

impl GestureAdapter {
    pub fn new(wheel_enabled: bool) -> Self {
        Self { wheel_enabled }
    }

    pub fn wheel_enabled(&self) -> bool {
        self.wheel_enabled
    }

    /// Translates one gesture; `None` means the carousel ignores it.
    pub fn map(&self, event: GestureEvent) -> Option<PagerCommand> {
        match event {
            GestureEvent::TapLeft => Some(PagerCommand::Retreat),
            GestureEvent::TapRight => Some(PagerCommand::Advance),
            GestureEvent::TapDot(index) => Some(PagerCommand::GoTo(index)),
            GestureEvent::Wheel { delta_y } => {
                if !self.wheel_enabled {
                    return None;
                }
                if delta_y > 0.0 {
                    Some(PagerCommand::Advance)
                } else if delta_y < 0.0 {
                    Some(PagerCommand::Retreat)
                } else {
                    None
                }
            }
            GestureEvent::TapCard { offset: 1 } => Some(PagerCommand::Advance),
            GestureEvent::TapCard { offset: -1 } => Some(PagerCommand::Retreat),
            GestureEvent::TapCard { offset } => {
                // Active card is reserved for a future drill-down view.
                debug!("Ignoring tap on card at offset {}", offset);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controls_and_dots_pass_through() {
        let adapter = GestureAdapter::new(false);
        assert_eq!(
            adapter.map(GestureEvent::TapLeft),
            Some(PagerCommand::Retreat)
        );
        assert_eq!(
            adapter.map(GestureEvent::TapRight),
            Some(PagerCommand::Advance)
        );
        assert_eq!(
            adapter.map(GestureEvent::TapDot(3)),
            Some(PagerCommand::GoTo(3))
        );
    }

    #[test]
    fn wheel_maps_by_sign_when_enabled() {
        let adapter = GestureAdapter::new(true);
        assert_eq!(
            adapter.map(GestureEvent::Wheel { delta_y: 12.5 }),
            Some(PagerCommand::Advance)
        );
        assert_eq!(
            adapter.map(GestureEvent::Wheel { delta_y: -3.0 }),
            Some(PagerCommand::Retreat)
        );
        assert_eq!(adapter.map(GestureEvent::Wheel { delta_y: 0.0 }), None);
    }

    #[test]
    fn wheel_is_inert_when_disabled() {
        let adapter = GestureAdapter::new(false);
        assert_eq!(adapter.map(GestureEvent::Wheel { delta_y: 40.0 }), None);
        assert_eq!(adapter.map(GestureEvent::Wheel { delta_y: -40.0 }), None);
    }

    #[test]
    fn card_taps_follow_the_visible_neighbors() {
        let adapter = GestureAdapter::new(true);
        assert_eq!(
            adapter.map(GestureEvent::TapCard { offset: 1 }),
            Some(PagerCommand::Advance)
        );
        assert_eq!(
            adapter.map(GestureEvent::TapCard { offset: -1 }),
            Some(PagerCommand::Retreat)
        );
        // Active card tap is a no-op, hidden cards are unreachable but inert.
        assert_eq!(adapter.map(GestureEvent::TapCard { offset: 0 }), None);
        assert_eq!(adapter.map(GestureEvent::TapCard { offset: 2 }), None);
        assert_eq!(adapter.map(GestureEvent::TapCard { offset: -2 }), None);
    }
}
