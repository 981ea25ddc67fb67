use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::sub_order::{OrderItem, SubOrder};

/// Sentinel key for sub-orders without a provider. The literal value is part
/// of the upstream contract and is persisted by the consolidation service.
pub const NO_PROVIDER_KEY: &str = "sin-proveedor";

/// One consolidated delivery: every selected sub-order sharing a provider,
/// delivery date, and location, regardless of which department requested it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsolidationGroup {
    #[serde(rename = "proveedor_id", default)]
    pub provider_id: Option<String>,
    #[serde(rename = "fecha_entrega")]
    pub delivery_date: NaiveDate,
    #[serde(rename = "localizacion")]
    pub location: String,
    pub items: Vec<OrderItem>,
    #[serde(rename = "subPedidoIds")]
    pub sub_order_ids: Vec<String>,
}

impl ConsolidationGroup {
    fn seed(order: &SubOrder) -> Self {
        Self {
            provider_id: order.provider_id.clone(),
            delivery_date: order.delivery_date,
            location: order.location.clone(),
            items: Vec::new(),
            sub_order_ids: Vec::new(),
        }
    }

    /// Grouping key: provider (or the sentinel), delivery date, location.
    /// `solicita` is deliberately ignored so logistics can merge deliveries
    /// across departments.
    pub fn key_for(order: &SubOrder) -> String {
        format!(
            "{}|{}|{}",
            order.provider_id.as_deref().unwrap_or(NO_PROVIDER_KEY),
            order.delivery_date,
            order.location
        )
    }
}

/// Partitions the selected sub-orders into consolidation groups.
///
/// Item lines are concatenated, never summed by item code: duplicate codes
/// across merged sub-orders stay as separate lines. Groups come out in
/// first-seen key order; callers sort for presentation.
pub fn consolidate(selected: &[SubOrder]) -> Vec<ConsolidationGroup> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<ConsolidationGroup> = Vec::new();

    for order in selected {
        let key = ConsolidationGroup::key_for(order);
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(ConsolidationGroup::seed(order));
            groups.len() - 1
        });
        groups[slot].items.extend(order.items.iter().cloned());
        groups[slot].sub_order_ids.push(order.id.clone());
    }

    groups
}

/// Totals shown on the consolidation preview before a shipment is confirmed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsolidationSummary {
    pub line_count: usize,
    pub unit_count: f64,
    pub total_value: f64,
}

pub fn summarize_preview(groups: &[ConsolidationGroup]) -> ConsolidationSummary {
    let mut summary = ConsolidationSummary {
        line_count: 0,
        unit_count: 0.0,
        total_value: 0.0,
    };
    for group in groups {
        summary.line_count += group.items.len();
        for item in &group.items {
            summary.unit_count += item.quantity;
            summary.total_value += item.line_total();
        }
    }
    summary
}
