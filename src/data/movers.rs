//! Daily stock movers shown in the dashboard carousel.

use serde::{Deserialize, Serialize};

/// A single mover card: one equity position with its day move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockMover {
    pub symbol: String,
    pub name: String,
    pub last_price: f64,
    pub currency: String,
    pub day_change_pct: f64,
    /// Intraday closes for the sparkline, oldest first
    pub sparkline: Vec<f32>,
}

/// The fixed two-card movers deck.
pub fn mock_movers() -> Vec<StockMover> {
    vec![
        StockMover {
            symbol: "NESN".to_string(),
            name: "Nestlé SA".to_string(),
            last_price: 92.14,
            currency: "CHF".to_string(),
            day_change_pct: 1.62,
            sparkline: vec![90.8, 91.1, 90.9, 91.4, 91.9, 92.3, 92.1],
        },
        StockMover {
            symbol: "ASML".to_string(),
            name: "ASML Holding NV".to_string(),
            last_price: 811.40,
            currency: "EUR".to_string(),
            day_change_pct: -2.35,
            sparkline: vec![830.0, 828.5, 824.1, 819.8, 815.2, 812.6, 811.4],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movers_deck_has_the_expected_shape() {
        let movers = mock_movers();
        assert_eq!(movers.len(), 2);
        for mover in &movers {
            assert!(!mover.symbol.is_empty());
            assert!(mover.last_price > 0.0);
            assert!(mover.sparkline.len() >= 2);
        }
    }
}
