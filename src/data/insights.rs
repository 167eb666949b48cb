//! Generated portfolio insight cards for the card-stack carousel.

use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsightCategory {
    Allocation,
    Risk,
    Income,
    Market,
    Tax,
}

impl InsightCategory {
    pub fn label(&self) -> &'static str {
        match self {
            InsightCategory::Allocation => "Allocation",
            InsightCategory::Risk => "Risk",
            InsightCategory::Income => "Income",
            InsightCategory::Market => "Market",
            InsightCategory::Tax => "Tax",
        }
    }
}

/// One AI-generated insight card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightCard {
    pub headline: String,
    pub body: String,
    pub category: InsightCategory,
    pub generated_at: DateTime<Local>,
}

/// The fixed six-card insights deck.
pub fn mock_insights() -> Vec<InsightCard> {
    let now = Local::now();
    let card = |hours_ago: i64, category, headline: &str, body: &str| InsightCard {
        headline: headline.to_string(),
        body: body.to_string(),
        category,
        generated_at: now - Duration::hours(hours_ago),
    };

    vec![
        card(
            1,
            InsightCategory::Allocation,
            "Equity weight drifted above target",
            "Your equity allocation has risen to 64% against a 60% target, \
             driven by the technology sleeve. Rebalancing 4% into \
             short-duration bonds would restore the agreed risk profile.",
        ),
        card(
            3,
            InsightCategory::Income,
            "Coupon income concentrated in Q4",
            "Five of your eight bond positions pay coupons between October \
             and December. Spreading new purchases across other quarters \
             would smooth portfolio cash flow.",
        ),
        card(
            5,
            InsightCategory::Risk,
            "Currency exposure is two-thirds EUR",
            "EUR-denominated positions now make up 66% of liquid assets. \
             Your reference currency is CHF; consider hedging a portion of \
             the gap.",
        ),
        card(
            8,
            InsightCategory::Market,
            "Semiconductor volatility elevated",
            "Realized volatility in your semiconductor holdings is running \
             at twice its one-year average. Position sizes remain within \
             mandate limits.",
        ),
        card(
            12,
            InsightCategory::Tax,
            "Harvestable loss in ASML position",
            "The ASML position shows an unrealized loss of 4.1%. Realizing \
             it before year end could offset gains booked in March, subject \
             to your tax advisor's review.",
        ),
        card(
            26,
            InsightCategory::Allocation,
            "Cash buffer above policy band",
            "Cash stands at 9% of portfolio value, above the 3-7% policy \
             band. The excess has been uninvested for six weeks.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insights_deck_has_six_cards_newest_first() {
        let insights = mock_insights();
        assert_eq!(insights.len(), 6);
        for pair in insights.windows(2) {
            assert!(pair[0].generated_at >= pair[1].generated_at);
        }
    }
}
