use serde::{Deserialize, Serialize};

/// External-staff rate card entry. Wire names are camelCase because the CSV
/// exchange and the upstream store share this exact header set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StaffRate {
    pub id: String,
    #[serde(rename = "proveedorId", default)]
    pub provider_id: Option<String>,
    #[serde(rename = "nombreProveedor", default)]
    pub provider_name: Option<String>,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "precioHora")]
    pub hourly_rate: f64,
}
