//! Static display data for the simulated wealth dashboard.
//!
//! Everything in this module is hardcoded mock data constructed once at
//! startup and treated as immutable by the rest of the application. The
//! pager subsystem derives each carousel's item count from these sequence
//! lengths; a sequence of a different length requires a fresh engine.

pub mod advisor;
pub mod allocation;
pub mod bonds;
pub mod holdings;
pub mod insights;
pub mod movers;

pub use advisor::{mock_advisor, Advisor};
pub use allocation::{mock_allocation, total_weight, AllocationSlice};
pub use bonds::{mock_bonds, BondHolding, BondView};
pub use holdings::{
    mock_manager_holdings, mock_style_holdings, significant_styles, sort_managers,
    sort_styles_by_weight, ManagerHolding, ManagerSortKey, StyleHolding,
};
pub use insights::{mock_insights, InsightCard, InsightCategory};
pub use movers::{mock_movers, StockMover};
