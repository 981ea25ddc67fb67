use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::OpsError;
use crate::orders::{ClientKind, OrderStatus, ServiceOrder, DELIVERY_VERTICAL};

/// Inclusive date range, day granularity. The upstream pickers hand over
/// whole days, so the end date counts in full.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, OpsError> {
        if end < start {
            return Err(OpsError::InvalidInput(
                "window end must not precede start".into(),
            ));
        }
        Ok(Self { start, end })
    }

    pub fn single_day(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Optional dimension filters applied on top of a date window. `None` means
/// "all", matching the dashboard dropdown defaults.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub space: Option<String>,
    pub sales_rep: Option<String>,
    pub client: Option<String>,
    pub head_waiter: Option<String>,
    pub client_kind: Option<ClientKind>,
}

impl OrderFilter {
    fn matches(&self, order: &ServiceOrder) -> bool {
        fn accept(filter: &Option<String>, value: &Option<String>) -> bool {
            match filter {
                Some(wanted) => value.as_deref() == Some(wanted.as_str()),
                None => true,
            }
        }
        accept(&self.space, &order.space)
            && accept(&self.sales_rep, &order.sales_rep)
            && accept(&self.client, &order.client)
            && accept(&self.head_waiter, &order.head_waiter)
            && match self.client_kind {
                Some(kind) => order.client_kind == Some(kind),
                None => true,
            }
    }
}

/// Candidate set for catering analytics: confirmed orders outside the
/// delivery vertical, inside the window, passing every dimension filter.
pub fn filter_orders<'a>(
    orders: &'a [ServiceOrder],
    window: &DateWindow,
    filter: &OrderFilter,
) -> Vec<&'a ServiceOrder> {
    orders
        .iter()
        .filter(|order| order.status == OrderStatus::Confirmado)
        .filter(|order| order.vertical != DELIVERY_VERTICAL)
        .filter(|order| window.contains(order.start_date))
        .filter(|order| filter.matches(order))
        .collect()
}
