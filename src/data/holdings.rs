//! Manager and style holdings with display-order helpers.

use serde::{Deserialize, Serialize};

/// An externally managed mandate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagerHolding {
    pub manager: String,
    pub strategy: String,
    /// Assets under management in millions, reference currency
    pub aum_musd: f64,
    pub ytd_return_pct: f64,
}

/// An investment-style sleeve of the portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleHolding {
    pub style: String,
    pub weight_pct: f64,
    pub benchmark_delta_pct: f64,
}

/// Numeric column the manager table can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ManagerSortKey {
    Aum,
    YtdReturn,
}

/// Orders managers descending by the chosen numeric column.
pub fn sort_managers(rows: &mut [ManagerHolding], key: ManagerSortKey) {
    match key {
        ManagerSortKey::Aum => rows.sort_by(|a, b| b.aum_musd.total_cmp(&a.aum_musd)),
        ManagerSortKey::YtdReturn => {
            rows.sort_by(|a, b| b.ytd_return_pct.total_cmp(&a.ytd_return_pct))
        }
    }
}

/// Orders style sleeves descending by portfolio weight.
pub fn sort_styles_by_weight(rows: &mut [StyleHolding]) {
    rows.sort_by(|a, b| b.weight_pct.total_cmp(&a.weight_pct));
}

/// Sleeves at or above `min_weight_pct`, in the input order.
pub fn significant_styles(rows: &[StyleHolding], min_weight_pct: f64) -> Vec<StyleHolding> {
    rows.iter()
        .filter(|row| row.weight_pct >= min_weight_pct)
        .cloned()
        .collect()
}

pub fn mock_manager_holdings() -> Vec<ManagerHolding> {
    let row = |manager: &str, strategy: &str, aum_musd, ytd_return_pct| ManagerHolding {
        manager: manager.to_string(),
        strategy: strategy.to_string(),
        aum_musd,
        ytd_return_pct,
    };

    vec![
        row("Alpenrose Partners", "Swiss Equity Core", 4.2, 6.8),
        row("Meridian Fixed Income", "Global Aggregate", 6.1, 2.1),
        row("Cobalt Quant", "Defensive Multi-Factor", 1.8, 4.4),
        row("Lakefront Capital", "European Dividend", 3.5, 8.9),
        row("Arcadia Private Markets", "Late-Stage Growth", 2.2, -1.7),
    ]
}

pub fn mock_style_holdings() -> Vec<StyleHolding> {
    let row = |style: &str, weight_pct, benchmark_delta_pct| StyleHolding {
        style: style.to_string(),
        weight_pct,
        benchmark_delta_pct,
    };

    vec![
        row("Quality Growth", 28.0, 1.4),
        row("Dividend Value", 22.5, -0.6),
        row("Government Bonds", 18.0, 0.2),
        row("Corporate Credit", 14.5, 0.8),
        row("Real Assets", 8.0, -1.1),
        row("Cash & Equivalents", 9.0, 0.0),
        row("Opportunistic", 0.4, 2.3),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn managers_sort_descending_by_aum() {
        let mut rows = mock_manager_holdings();
        sort_managers(&mut rows, ManagerSortKey::Aum);
        for pair in rows.windows(2) {
            assert!(pair[0].aum_musd >= pair[1].aum_musd);
        }
        assert_eq!(rows[0].manager, "Meridian Fixed Income");
    }

    #[test]
    fn managers_sort_descending_by_ytd() {
        let mut rows = mock_manager_holdings();
        sort_managers(&mut rows, ManagerSortKey::YtdReturn);
        assert_eq!(rows[0].manager, "Lakefront Capital");
        assert_eq!(rows.last().map(|r| r.manager.as_str()), Some("Arcadia Private Markets"));
    }

    #[test]
    fn styles_sort_and_filter_by_weight() {
        let mut rows = mock_style_holdings();
        sort_styles_by_weight(&mut rows);
        assert_eq!(rows[0].style, "Quality Growth");

        let visible = significant_styles(&rows, 1.0);
        assert_eq!(visible.len(), rows.len() - 1);
        assert!(visible.iter().all(|row| row.style != "Opportunistic"));
    }
}
