//! Screen-level aggregations: the dashboard highlights and the monthly
//! per-category resume. Both are pure functions of the stored list.

pub mod dashboard;
pub mod resume;

pub use dashboard::{
    build_dashboard, last_transaction_date, DashboardSummary, Highlight, HighlightData,
    ListedTransaction, NO_TRANSACTIONS,
};
pub use resume::{monthly_breakdown, CategoryTotal};
