use std::collections::HashMap;

use chrono::{DateTime, Utc};
use mice_core::catalog::{Article, ArticleRecord};
use mice_core::pricing::{normalize_price, plan_history, PriceBaseline};

fn at() -> DateTime<Utc> {
    "2024-05-01T08:00:00Z".parse().unwrap()
}

fn article(id: &str, price: f64) -> Article {
    Article::from_record(ArticleRecord {
        erp_id: id.into(),
        nombre: Some(format!("Artículo {id}")),
        proveedor_id: Some("P1".into()),
        precio: Some(price),
        ..Default::default()
    })
}

#[test]
fn equal_price_emits_no_entry() {
    let baseline = PriceBaseline {
        history: Some(10.0),
        stored: None,
    };
    assert!(baseline.evaluate("A", None, 10.0, at()).is_none());
}

#[test]
fn five_percent_increase_is_recorded() {
    let baseline = PriceBaseline {
        history: Some(10.0),
        stored: None,
    };
    let entry = baseline.evaluate("A", None, 10.5, at()).expect("entry");
    assert!((entry.variation_pct - 5.0).abs() < 1e-9);
    assert_eq!(entry.computed_price, 10.5);
}

#[test]
fn plan_covers_a_whole_catalog_in_one_pass() {
    let articles = vec![
        article("unchanged", 10.0),
        article("increased", 21.0),
        article("fresh", 5.0),
        article("fresh-unpriced", 0.0),
    ];
    let latest: HashMap<String, f64> = HashMap::from([("unchanged".into(), 10.0)]);
    let stored: HashMap<String, f64> = HashMap::from([
        ("unchanged".into(), 10.0),
        ("increased".into(), 20.0),
    ]);

    let planned = plan_history(&articles, &latest, &stored, at());
    assert_eq!(planned.len(), 2);

    let increased = planned
        .iter()
        .find(|entry| entry.article_id == "increased")
        .expect("increased entry");
    assert!((increased.variation_pct - 5.0).abs() < 1e-9);

    let fresh = planned
        .iter()
        .find(|entry| entry.article_id == "fresh")
        .expect("fresh entry");
    assert_eq!(fresh.variation_pct, 0.0);
}

#[test]
fn normalization_keeps_noisy_inputs_from_spamming_history() {
    // 19.999999999 is the same price as the stored 20.00.
    let baseline = PriceBaseline {
        history: None,
        stored: Some(20.0),
    };
    assert!(baseline.evaluate("A", None, 19.999999999, at()).is_none());
}

#[test]
fn history_entry_serializes_with_upstream_field_names() {
    let entry = PriceBaseline::default()
        .evaluate("A", Some("P1"), 12.5, at())
        .expect("entry");
    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["articulo_erp_id"], "A");
    assert_eq!(json["precio_calculado"], 12.5);
    assert_eq!(json["proveedor_id"], "P1");
    assert!(json.get("variacion_porcentaje").is_some());
}

#[test]
fn normalize_is_idempotent_for_plan_inputs() {
    for raw in [0.1 + 0.2, 19.999999999, 2.675, 1234.5649] {
        let once = normalize_price(raw);
        assert_eq!(normalize_price(once), once);
    }
}
