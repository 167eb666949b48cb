//! Shared UI components, state and styling for the wealthdeck interface.
//!
//! The application uses an immediate-mode pattern where the entire UI is
//! reconstructed each frame from backend state (pager snapshots and static
//! display data). This module centralizes what every screen shares: the
//! navigation state enum, the dark color palette, frame styling and the
//! number formatting used across tables and cards.

use eframe::egui::{Color32, Frame, Stroke};
use std::fmt;

/// Currently active screen in the UI navigation state machine.
///
/// Navigation is unrestricted: any screen can transition to any other, so
/// a plain enum is all the state machine needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    /// Portfolio overview with allocation chart and movers carousel
    Dashboard,
    /// Manager and style holdings tables
    Holdings,
    /// Bond section with switchable views
    Bonds,
    /// Generated insight card stack
    Insights,
    /// Relationship-manager contact panel
    Contact,
}

impl fmt::Display for ScreenState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            ScreenState::Dashboard => "Dashboard",
            ScreenState::Holdings => "Holdings",
            ScreenState::Bonds => "Bonds",
            ScreenState::Insights => "Insights",
            ScreenState::Contact => "Contact",
        };
        write!(f, "{}", label)
    }
}

/// Centralized color palette for the dark theme.
///
/// Compile-time constants to avoid per-frame allocation; the values favor
/// the muted contrast typical of private-banking interfaces.
pub struct UiColors;

impl UiColors {
    /// Primary background color for main content areas
    pub const MAIN_BG: Color32 = Color32::from_rgb(24, 26, 30);

    /// Secondary background color for nested components
    pub const INNER_BG: Color32 = Color32::from_rgb(32, 35, 41);

    /// Deepest background color for emphasized content areas
    pub const EXTREME_BG: Color32 = Color32::from_rgb(18, 20, 24);

    /// Border color for component separation
    pub const BORDER: Color32 = Color32::from_rgb(58, 62, 70);

    /// Accent color for active indicators and highlights
    pub const ACCENT: Color32 = Color32::from_rgb(120, 156, 255);

    /// Positive performance color - green
    pub const GAIN: Color32 = Color32::from_rgb(86, 190, 120);

    /// Negative performance color - red
    pub const LOSS: Color32 = Color32::from_rgb(224, 96, 92);

    /// Muted text for captions and secondary labels
    pub const MUTED: Color32 = Color32::from_rgb(140, 146, 156);

    /// Slice colors for the allocation chart, cycled by index
    pub const SLICES: [Color32; 5] = [
        Color32::from_rgb(120, 156, 255),
        Color32::from_rgb(86, 190, 120),
        Color32::from_rgb(222, 170, 90),
        Color32::from_rgb(186, 120, 220),
        Color32::from_rgb(110, 184, 196),
    ];
}

/// Creates a styled frame with consistent margins and border.
pub fn card_frame(bg_color: Color32, border_color: Color32) -> Frame {
    Frame::new()
        .stroke(Stroke::new(1.0, border_color))
        .fill(bg_color)
        .inner_margin(8)
        .outer_margin(2)
}

/// Color for a signed performance number.
pub fn change_color(value: f64) -> Color32 {
    if value >= 0.0 {
        UiColors::GAIN
    } else {
        UiColors::LOSS
    }
}

/// Formats a percentage with an explicit sign, e.g. "+1.62%".
pub fn format_signed_pct(value: f64) -> String {
    if value >= 0.0 {
        format!("+{:.2}%", value)
    } else {
        format!("{:.2}%", value)
    }
}

/// Formats a monetary amount with Swiss apostrophe grouping, e.g. "1'234'567".
pub fn format_amount(value: f64) -> String {
    let negative = value < 0.0;
    let digits = (value.abs().round() as i64).to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('\'');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_group_in_threes() {
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(999.0), "999");
        assert_eq!(format_amount(1_000.0), "1'000");
        assert_eq!(format_amount(1_234_567.0), "1'234'567");
        assert_eq!(format_amount(-98_765.4), "-98'765");
    }

    #[test]
    fn percentages_carry_an_explicit_sign() {
        assert_eq!(format_signed_pct(1.625), "+1.63%");
        assert_eq!(format_signed_pct(0.0), "+0.00%");
        assert_eq!(format_signed_pct(-2.35), "-2.35%");
    }
}
