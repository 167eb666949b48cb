//! Bond holdings and the views cycled by the bond section switcher.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The bond section's switchable views, in display order.
///
/// The switcher's pager derives its item count from [`BondView::ALL`];
/// adding a view here is all that is needed to grow the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BondView {
    Overview,
    MaturityLadder,
    Ratings,
}

impl BondView {
    pub const ALL: [BondView; 3] = [
        BondView::Overview,
        BondView::MaturityLadder,
        BondView::Ratings,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            BondView::Overview => "Overview",
            BondView::MaturityLadder => "Maturities",
            BondView::Ratings => "Ratings",
        }
    }
}

/// A single fixed-income position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondHolding {
    pub issuer: String,
    pub coupon_pct: f64,
    pub maturity: NaiveDate,
    pub rating: String,
    pub face_value: f64,
    pub market_value: f64,
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// The fixed bond book.
pub fn mock_bonds() -> Vec<BondHolding> {
    let bond = |issuer: &str, coupon_pct, maturity, rating: &str, face_value, market_value| {
        BondHolding {
            issuer: issuer.to_string(),
            coupon_pct,
            maturity,
            rating: rating.to_string(),
            face_value,
            market_value,
        }
    };

    vec![
        bond("Swiss Confederation", 0.50, ymd(2029, 6, 27), "AAA", 200_000.0, 186_400.0),
        bond("Canton of Zurich", 1.25, ymd(2031, 2, 11), "AAA", 150_000.0, 141_900.0),
        bond("Nestlé Finance", 2.00, ymd(2030, 11, 2), "AA-", 100_000.0, 98_650.0),
        bond("Roche Kapitalmarkt", 1.60, ymd(2028, 9, 30), "AA", 100_000.0, 97_200.0),
        bond("EIB", 2.75, ymd(2033, 4, 15), "AAA", 120_000.0, 121_800.0),
        bond("Swisscom", 2.30, ymd(2032, 7, 8), "A", 80_000.0, 79_100.0),
        bond("Zurich Insurance", 3.10, ymd(2034, 1, 20), "A+", 90_000.0, 92_400.0),
        bond("Holcim Finance", 3.45, ymd(2029, 12, 4), "BBB+", 60_000.0, 60_900.0),
    ]
}

/// Total market value of the book.
pub fn total_market_value(bonds: &[BondHolding]) -> f64 {
    bonds.iter().map(|b| b.market_value).sum()
}

/// Face-value-weighted average coupon.
pub fn average_coupon(bonds: &[BondHolding]) -> f64 {
    let total_face: f64 = bonds.iter().map(|b| b.face_value).sum();
    if total_face == 0.0 {
        return 0.0;
    }
    bonds
        .iter()
        .map(|b| b.coupon_pct * b.face_value)
        .sum::<f64>()
        / total_face
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bond_book_is_populated_and_dated() {
        let bonds = mock_bonds();
        assert_eq!(bonds.len(), 8);
        for bond in &bonds {
            assert!(bond.maturity > ymd(2027, 1, 1));
            assert!(bond.face_value > 0.0);
        }
    }

    #[test]
    fn average_coupon_is_face_weighted() {
        let bonds = vec![
            BondHolding {
                issuer: "A".to_string(),
                coupon_pct: 1.0,
                maturity: ymd(2030, 1, 1),
                rating: "AAA".to_string(),
                face_value: 300_000.0,
                market_value: 300_000.0,
            },
            BondHolding {
                issuer: "B".to_string(),
                coupon_pct: 4.0,
                maturity: ymd(2030, 1, 1),
                rating: "A".to_string(),
                face_value: 100_000.0,
                market_value: 100_000.0,
            },
        ];
        assert!((average_coupon(&bonds) - 1.75).abs() < 1e-9);
    }

    #[test]
    fn switcher_deck_matches_the_view_list() {
        assert_eq!(BondView::ALL.len(), 3);
        assert_eq!(BondView::ALL[0].title(), "Overview");
    }
}
