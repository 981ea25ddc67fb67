use serde::{Deserialize, Serialize};

use crate::pricing::normalize_price;

/// Raw ERP article row, exactly as the upstream export hands it over.
/// Optional fields vary by export age; `Article::from_record` is the only
/// place allowed to coalesce them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticleRecord {
    pub erp_id: String,
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub nombre_comercial: Option<String>,
    #[serde(default)]
    pub referencia_proveedor: Option<String>,
    #[serde(default)]
    pub proveedor_id: Option<String>,
    #[serde(default)]
    pub nombre_proveedor: Option<String>,
    #[serde(default)]
    pub familia_categoria: Option<String>,
    #[serde(default)]
    pub precio: Option<f64>,
    #[serde(default)]
    pub precio_alquiler: Option<f64>,
    #[serde(default)]
    pub unidad_medida: Option<String>,
    #[serde(default)]
    pub observaciones: Option<String>,
}

/// Normalized catalog article. Prices are already rounded to cents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Article {
    #[serde(rename = "erp_id")]
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "proveedor_id", default)]
    pub provider_id: Option<String>,
    #[serde(rename = "nombre_proveedor", default)]
    pub provider_name: Option<String>,
    #[serde(rename = "referencia_proveedor", default)]
    pub provider_reference: Option<String>,
    #[serde(rename = "familia_categoria", default)]
    pub category: Option<String>,
    #[serde(rename = "precio")]
    pub price: f64,
    #[serde(rename = "precio_alquiler")]
    pub rental_price: f64,
    /// True when the article is rented out rather than consumed.
    #[serde(rename = "alquiler")]
    pub rental: bool,
    #[serde(rename = "unidad_medida", default)]
    pub unit: Option<String>,
    #[serde(rename = "observaciones", default)]
    pub notes: Option<String>,
}

impl Article {
    /// Single normalization point for heterogeneous upstream rows: name
    /// coalescing, price rounding, and the rental flag all happen here and
    /// nowhere else.
    pub fn from_record(record: ArticleRecord) -> Self {
        let name = record
            .nombre_comercial
            .filter(|value| !value.trim().is_empty())
            .or(record.nombre)
            .unwrap_or_default();
        let rental_price = normalize_price(record.precio_alquiler.unwrap_or(0.0));
        Self {
            id: record.erp_id,
            name,
            provider_id: record.proveedor_id,
            provider_name: record.nombre_proveedor,
            provider_reference: record.referencia_proveedor,
            category: record.familia_categoria,
            price: normalize_price(record.precio.unwrap_or(0.0)),
            rental_price,
            rental: rental_price > 0.0,
            unit: record.unidad_medida,
            notes: record.observaciones,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coalesces_commercial_name_first() {
        let record = ArticleRecord {
            erp_id: "1001".into(),
            nombre: Some("Agua 1L".into()),
            nombre_comercial: Some("Agua Mineral 1L".into()),
            ..Default::default()
        };
        assert_eq!(Article::from_record(record).name, "Agua Mineral 1L");
    }

    #[test]
    fn blank_commercial_name_falls_back() {
        let record = ArticleRecord {
            erp_id: "1001".into(),
            nombre: Some("Agua 1L".into()),
            nombre_comercial: Some("  ".into()),
            ..Default::default()
        };
        assert_eq!(Article::from_record(record).name, "Agua 1L");
    }

    #[test]
    fn rental_flag_follows_rental_price() {
        let record = ArticleRecord {
            erp_id: "2001".into(),
            nombre: Some("Mantel".into()),
            precio_alquiler: Some(3.5),
            ..Default::default()
        };
        let article = Article::from_record(record);
        assert!(article.rental);
        assert!((article.rental_price - 3.5).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_prices_normalize_to_zero() {
        let article = Article::from_record(ArticleRecord {
            erp_id: "3001".into(),
            ..Default::default()
        });
        assert_eq!(article.price, 0.0);
        assert!(!article.rental);
    }
}
