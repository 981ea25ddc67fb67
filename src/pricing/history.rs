use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::Article;

use super::normalize_price;

/// Changes smaller than this are treated as "no change". Prices are
/// normalized to cents first, so the tolerance mostly absorbs unnormalized
/// baselines written by older sync runs.
pub const PRICE_CHANGE_TOLERANCE: f64 = 0.001;

/// Append-only record of one detected price change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceHistoryEntry {
    #[serde(rename = "articulo_erp_id")]
    pub article_id: String,
    #[serde(rename = "fecha")]
    pub date: DateTime<Utc>,
    #[serde(rename = "precio_calculado")]
    pub computed_price: f64,
    #[serde(rename = "proveedor_id", default)]
    pub provider_id: Option<String>,
    #[serde(rename = "variacion_porcentaje")]
    pub variation_pct: f64,
}

/// Reference prices an article is compared against, in priority order: the
/// most recent history entry, else the currently stored catalog price.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriceBaseline {
    pub history: Option<f64>,
    pub stored: Option<f64>,
}

impl PriceBaseline {
    pub fn last_price(&self) -> Option<f64> {
        self.history.or(self.stored)
    }

    /// Decides whether a history entry is warranted for `new_price`.
    ///
    /// No entry when the price is unchanged within tolerance, and none for a
    /// never-seen article whose price is exactly zero (unpriced rows would
    /// otherwise spam the history on their first sync).
    pub fn evaluate(
        &self,
        article_id: &str,
        provider_id: Option<&str>,
        new_price: f64,
        at: DateTime<Utc>,
    ) -> Option<PriceHistoryEntry> {
        let new_price = normalize_price(new_price);
        match self.last_price() {
            Some(last) if (new_price - last).abs() < PRICE_CHANGE_TOLERANCE => None,
            None if new_price == 0.0 => None,
            last => {
                let variation_pct = match last {
                    Some(prior) if prior != 0.0 => (new_price - prior) / prior.abs() * 100.0,
                    _ => 0.0,
                };
                Some(PriceHistoryEntry {
                    article_id: article_id.to_string(),
                    date: at,
                    computed_price: new_price,
                    provider_id: provider_id.map(ToString::to_string),
                    variation_pct: normalize_price(variation_pct),
                })
            }
        }
    }
}

/// Plans the history entries for one sync run: one entry per article whose
/// computed price moved against its baseline.
pub fn plan_history(
    articles: &[Article],
    latest_history: &HashMap<String, f64>,
    stored_prices: &HashMap<String, f64>,
    at: DateTime<Utc>,
) -> Vec<PriceHistoryEntry> {
    articles
        .iter()
        .filter_map(|article| {
            let baseline = PriceBaseline {
                history: latest_history.get(&article.id).copied(),
                stored: stored_prices.get(&article.id).copied(),
            };
            baseline.evaluate(
                &article.id,
                article.provider_id.as_deref(),
                article.price,
                at,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at() -> DateTime<Utc> {
        "2024-05-01T08:00:00Z".parse().unwrap()
    }

    #[test]
    fn unchanged_price_emits_nothing() {
        let baseline = PriceBaseline {
            history: Some(10.0),
            stored: Some(9.5),
        };
        assert!(baseline.evaluate("A", None, 10.0, at()).is_none());
    }

    #[test]
    fn history_takes_priority_over_stored_price() {
        // Stored price differs but the last history entry already recorded
        // 10.00, so a 10.00 sync is a no-op.
        let baseline = PriceBaseline {
            history: Some(10.0),
            stored: Some(8.0),
        };
        assert!(baseline.evaluate("A", None, 10.0, at()).is_none());
    }

    #[test]
    fn new_unpriced_article_is_suppressed() {
        let baseline = PriceBaseline::default();
        assert!(baseline.evaluate("A", None, 0.0, at()).is_none());
    }

    #[test]
    fn new_priced_article_records_zero_variation() {
        let entry = PriceBaseline::default()
            .evaluate("A", Some("P1"), 12.5, at())
            .expect("first sighting with a price");
        assert_eq!(entry.variation_pct, 0.0);
        assert_eq!(entry.computed_price, 12.5);
        assert_eq!(entry.provider_id.as_deref(), Some("P1"));
    }

    #[test]
    fn increase_yields_positive_variation() {
        let baseline = PriceBaseline {
            history: Some(10.0),
            stored: None,
        };
        let entry = baseline.evaluate("A", None, 10.5, at()).expect("change");
        assert!((entry.variation_pct - 5.0).abs() < 1e-9);
    }

    #[test]
    fn decrease_yields_negative_variation() {
        let baseline = PriceBaseline {
            history: None,
            stored: Some(20.0),
        };
        let entry = baseline.evaluate("A", None, 15.0, at()).expect("change");
        assert!((entry.variation_pct + 25.0).abs() < 1e-9);
    }

    #[test]
    fn zero_baseline_guards_division() {
        let baseline = PriceBaseline {
            history: Some(0.0),
            stored: None,
        };
        let entry = baseline.evaluate("A", None, 4.0, at()).expect("change");
        assert_eq!(entry.variation_pct, 0.0);
    }

    #[test]
    fn sub_tolerance_wiggle_is_ignored() {
        let baseline = PriceBaseline {
            history: Some(10.0),
            stored: None,
        };
        assert!(baseline.evaluate("A", None, 10.0004, at()).is_none());
    }
}
