use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::orders::{Briefing, ServiceOrder};
use crate::report::month_label;

pub const UNASSIGNED_LABEL: &str = "Sin Asignar";

/// One calendar month of confirmed activity. Recomputed in full on every
/// filter change, never persisted.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonthlyBucket {
    /// `yyyy-MM` bucketing key.
    pub key: String,
    /// Short Spanish month label for chart axes.
    pub label: String,
    pub contracts: u32,
    /// Attendees from the order headers.
    pub pax: u32,
    /// Attendees summed over briefing milestones; diverges from `pax` when
    /// hitos are adjusted after booking.
    pub milestone_attendees: u32,
    pub billing: f64,
    pub costs: BTreeMap<String, f64>,
    pub profitability: f64,
    pub revenue_per_pax: f64,
}

/// Buckets the filtered orders into calendar months, chronologically
/// ascending. Derived fields are computed in a post-pass, not incrementally.
pub fn monthly_buckets(orders: &[&ServiceOrder], briefings: &[Briefing]) -> Vec<MonthlyBucket> {
    let briefing_by_os: HashMap<&str, &Briefing> = briefings
        .iter()
        .map(|briefing| (briefing.os_id.as_str(), briefing))
        .collect();

    let mut by_month: BTreeMap<String, MonthlyBucket> = BTreeMap::new();
    for order in orders {
        let key = order.start_date.format("%Y-%m").to_string();
        let bucket = by_month.entry(key.clone()).or_insert_with(|| MonthlyBucket {
            label: month_label(&key).to_string(),
            key,
            contracts: 0,
            pax: 0,
            milestone_attendees: 0,
            billing: 0.0,
            costs: BTreeMap::new(),
            profitability: 0.0,
            revenue_per_pax: 0.0,
        });

        bucket.contracts += 1;
        bucket.pax += order.attendees;
        if let Some(briefing) = briefing_by_os.get(order.id.as_str()) {
            bucket.milestone_attendees += briefing.milestone_attendees();
        }
        bucket.billing += order.net_billing();
        for (category, amount) in &order.costs {
            *bucket.costs.entry(category.clone()).or_insert(0.0) += amount;
        }
    }

    let mut buckets: Vec<MonthlyBucket> = by_month.into_values().collect();
    for bucket in &mut buckets {
        let total_costs: f64 = bucket.costs.values().sum();
        bucket.profitability = bucket.billing - total_costs;
        bucket.revenue_per_pax = if bucket.pax > 0 {
            bucket.billing / bucket.pax as f64
        } else {
            0.0
        };
    }
    buckets
}

/// Headline figures for the filtered range.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct KpiSummary {
    pub events: u32,
    pub milestones: u32,
    pub net_billing: f64,
    pub total_cost: f64,
    pub margin: f64,
    /// Margin as a ratio of net billing, 0 when nothing was billed.
    pub margin_ratio: f64,
    pub avg_ticket_per_event: f64,
    pub avg_ticket_per_milestone: f64,
}

pub fn kpi_summary(orders: &[&ServiceOrder], briefings: &[Briefing]) -> KpiSummary {
    let briefing_by_os: HashMap<&str, &Briefing> = briefings
        .iter()
        .map(|briefing| (briefing.os_id.as_str(), briefing))
        .collect();

    let events = orders.len() as u32;
    let net_billing: f64 = orders.iter().map(|order| order.net_billing()).sum();
    let total_cost: f64 = orders.iter().map(|order| order.total_cost()).sum();
    let milestones: u32 = orders
        .iter()
        .map(|order| {
            briefing_by_os
                .get(order.id.as_str())
                .map(|briefing| briefing.items.len() as u32)
                .unwrap_or(0)
        })
        .sum();

    let margin = net_billing - total_cost;
    KpiSummary {
        events,
        milestones,
        net_billing,
        total_cost,
        margin,
        margin_ratio: if net_billing > 0.0 {
            margin / net_billing
        } else {
            0.0
        },
        avg_ticket_per_event: if events > 0 {
            net_billing / events as f64
        } else {
            0.0
        },
        avg_ticket_per_milestone: if milestones > 0 {
            net_billing / milestones as f64
        } else {
            0.0
        },
    }
}

/// One row of a per-dimension breakdown (sales rep, head waiter, ...).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DimensionRow {
    pub name: String,
    pub events: u32,
    pub billing: f64,
    pub cost: f64,
    pub margin: f64,
    pub margin_ratio: f64,
}

/// Aggregates the filtered orders by an arbitrary dimension. Orders with no
/// value land under `Sin Asignar`. Rows sort by margin, best first.
pub fn breakdown_by<F>(orders: &[&ServiceOrder], dimension: F) -> Vec<DimensionRow>
where
    F: Fn(&ServiceOrder) -> Option<&str>,
{
    let mut by_name: BTreeMap<String, (u32, f64, f64)> = BTreeMap::new();
    for order in orders {
        let name = dimension(order).unwrap_or(UNASSIGNED_LABEL).to_string();
        let slot = by_name.entry(name).or_insert((0, 0.0, 0.0));
        slot.0 += 1;
        slot.1 += order.net_billing();
        slot.2 += order.total_cost();
    }

    let mut rows: Vec<DimensionRow> = by_name
        .into_iter()
        .map(|(name, (events, billing, cost))| DimensionRow {
            name,
            events,
            billing,
            cost,
            margin: billing - cost,
            margin_ratio: if billing > 0.0 {
                (billing - cost) / billing
            } else {
                0.0
            },
        })
        .collect();
    rows.sort_by(|a, b| b.margin.partial_cmp(&a.margin).unwrap_or(std::cmp::Ordering::Equal));
    rows
}
