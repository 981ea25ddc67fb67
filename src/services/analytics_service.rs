use crate::analytics::{
    breakdown_by, filter_orders, kpi_summary, monthly_buckets, DateWindow, DimensionRow,
    KpiSummary, MonthlyBucket, OrderFilter,
};
use crate::orders::{Briefing, ServiceOrder};

pub struct AnalyticsService;

impl AnalyticsService {
    pub fn monthly(
        orders: &[ServiceOrder],
        briefings: &[Briefing],
        window: &DateWindow,
        filter: &OrderFilter,
    ) -> Vec<MonthlyBucket> {
        let filtered = filter_orders(orders, window, filter);
        monthly_buckets(&filtered, briefings)
    }

    pub fn kpis(
        orders: &[ServiceOrder],
        briefings: &[Briefing],
        window: &DateWindow,
        filter: &OrderFilter,
    ) -> KpiSummary {
        let filtered = filter_orders(orders, window, filter);
        kpi_summary(&filtered, briefings)
    }

    pub fn by_sales_rep(
        orders: &[ServiceOrder],
        window: &DateWindow,
        filter: &OrderFilter,
    ) -> Vec<DimensionRow> {
        let filtered = filter_orders(orders, window, filter);
        breakdown_by(&filtered, |order| order.sales_rep.as_deref())
    }

    pub fn by_head_waiter(
        orders: &[ServiceOrder],
        window: &DateWindow,
        filter: &OrderFilter,
    ) -> Vec<DimensionRow> {
        let filtered = filter_orders(orders, window, filter);
        breakdown_by(&filtered, |order| order.head_waiter.as_deref())
    }
}
