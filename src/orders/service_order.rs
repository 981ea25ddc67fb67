use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Vertical whose orders are excluded from catering analytics.
pub const DELIVERY_VERTICAL: &str = "Entregas";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum OrderStatus {
    Confirmado,
    Pendiente,
    Cancelado,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ClientKind {
    Empresa,
    Agencia,
}

/// A confirmed (or pending) service order, the "OS" around which every
/// vertical hangs its costs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceOrder {
    pub id: String,
    #[serde(rename = "serviceNumber", default)]
    pub service_number: String,
    pub vertical: String,
    pub status: OrderStatus,
    #[serde(rename = "startDate")]
    pub start_date: NaiveDate,
    #[serde(default)]
    pub space: Option<String>,
    #[serde(default)]
    pub client: Option<String>,
    #[serde(rename = "tipoCliente", default)]
    pub client_kind: Option<ClientKind>,
    #[serde(rename = "comercial", default)]
    pub sales_rep: Option<String>,
    #[serde(rename = "respMetre", default)]
    pub head_waiter: Option<String>,
    #[serde(rename = "asistentes", default)]
    pub attendees: u32,
    #[serde(rename = "facturacion", default)]
    pub gross_billing: f64,
    #[serde(rename = "comisionesAgencia", default)]
    pub agency_commission: f64,
    #[serde(rename = "comisionesCanon", default)]
    pub venue_fee: f64,
    /// Direct cost per cost category ("Gastronomía", "Bodega", ...), already
    /// aggregated from the vertical modules that spend against this order.
    #[serde(default)]
    pub costs: BTreeMap<String, f64>,
}

impl ServiceOrder {
    /// Gross billing minus agency and venue commissions.
    pub fn net_billing(&self) -> f64 {
        self.gross_billing - (self.agency_commission + self.venue_fee)
    }

    pub fn total_cost(&self) -> f64 {
        self.costs.values().sum()
    }
}

/// One milestone ("hito") inside a commercial briefing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BriefingItem {
    #[serde(default)]
    pub label: String,
    #[serde(rename = "asistentes", default)]
    pub attendees: u32,
}

/// Commercial briefing attached to a service order. Its milestone attendee
/// figures can diverge from the order header once hitos are adjusted after
/// booking, so analytics tracks both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Briefing {
    #[serde(rename = "osId")]
    pub os_id: String,
    #[serde(default)]
    pub items: Vec<BriefingItem>,
}

impl Briefing {
    pub fn milestone_attendees(&self) -> u32 {
        self.items.iter().map(|item| item.attendees).sum()
    }
}
