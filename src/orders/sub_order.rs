use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single line within a sub-order.
///
/// `price_snapshot` freezes the price at order time; once the order is placed
/// its monetary value must not change when the catalog price moves later.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    #[serde(rename = "itemCode")]
    pub item_code: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "cantidad", default)]
    pub quantity: f64,
    #[serde(default)]
    pub price: f64,
    #[serde(
        rename = "priceSnapshot",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub price_snapshot: Option<f64>,
}

impl OrderItem {
    pub fn new(item_code: impl Into<String>, quantity: f64, price: f64) -> Self {
        Self {
            item_code: item_code.into(),
            description: String::new(),
            quantity,
            price,
            price_snapshot: None,
        }
    }

    /// Price used when valuing this line. A zero snapshot falls back to the
    /// live price, matching how the order forms value lines.
    pub fn effective_price(&self) -> f64 {
        match self.price_snapshot {
            Some(snapshot) if snapshot != 0.0 => snapshot,
            _ => self.price,
        }
    }

    pub fn line_total(&self) -> f64 {
        self.effective_price() * self.quantity
    }
}

/// A pending sub-order raised by one requesting department, waiting to be
/// consolidated into a delivery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubOrder {
    pub id: String,
    #[serde(rename = "proveedor_id", default)]
    pub provider_id: Option<String>,
    #[serde(rename = "fecha_entrega")]
    pub delivery_date: NaiveDate,
    #[serde(rename = "localizacion")]
    pub location: String,
    #[serde(rename = "solicita", default)]
    pub requested_by: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

impl SubOrder {
    pub fn total_value(&self) -> f64 {
        self.items.iter().map(OrderItem::line_total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_wins_over_live_price() {
        let mut item = OrderItem::new("X", 2.0, 10.0);
        item.price_snapshot = Some(8.0);
        assert!((item.effective_price() - 8.0).abs() < f64::EPSILON);
        assert!((item.line_total() - 16.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_snapshot_falls_back_to_live_price() {
        let mut item = OrderItem::new("X", 1.0, 10.0);
        item.price_snapshot = Some(0.0);
        assert!((item.effective_price() - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn deserializes_upstream_row_shape() {
        let raw = r#"{
            "id": "PED-1",
            "proveedor_id": "P1",
            "fecha_entrega": "2024-05-01",
            "localizacion": "Almacén Central",
            "solicita": "Bodega",
            "items": [{"itemCode": "X", "cantidad": 2, "price": 3.5}]
        }"#;
        let order: SubOrder = serde_json::from_str(raw).expect("sub-order row");
        assert_eq!(order.provider_id.as_deref(), Some("P1"));
        assert_eq!(order.items.len(), 1);
        assert!((order.total_value() - 7.0).abs() < f64::EPSILON);
    }
}
