//! Asset-allocation slices for the dashboard bar chart.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationSlice {
    pub label: String,
    pub weight_pct: f32,
}

/// Sum of slice weights; the mock book always totals 100.
pub fn total_weight(slices: &[AllocationSlice]) -> f32 {
    slices.iter().map(|slice| slice.weight_pct).sum()
}

pub fn mock_allocation() -> Vec<AllocationSlice> {
    let slice = |label: &str, weight_pct| AllocationSlice {
        label: label.to_string(),
        weight_pct,
    };

    vec![
        slice("Equities", 46.0),
        slice("Fixed Income", 32.0),
        slice("Real Assets", 8.0),
        slice("Alternatives", 5.0),
        slice("Cash", 9.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocation_weights_total_one_hundred() {
        let slices = mock_allocation();
        assert!((total_weight(&slices) - 100.0).abs() < f32::EPSILON);
    }
}
