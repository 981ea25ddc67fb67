//! Monthly/range aggregation over confirmed service orders.

pub mod monthly;
pub mod window;

pub use monthly::{
    breakdown_by, kpi_summary, monthly_buckets, DimensionRow, KpiSummary, MonthlyBucket,
    UNASSIGNED_LABEL,
};
pub use window::{filter_orders, DateWindow, OrderFilter};
