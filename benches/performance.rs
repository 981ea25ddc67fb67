use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mice_core::analytics::{kpi_summary, monthly_buckets};
use mice_core::orders::{
    consolidate, ClientKind, OrderItem, OrderStatus, ServiceOrder, SubOrder,
};
use mice_core::storage::{CatalogStore, JsonStorage};
use mice_core::sync::sync_articles;
use mice_core::catalog::ArticleRecord;
use tempfile::tempdir;

fn build_sub_orders(count: usize) -> Vec<SubOrder> {
    let start_date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    (0..count)
        .map(|idx| SubOrder {
            id: format!("sp-{idx}"),
            provider_id: if idx % 7 == 0 {
                None
            } else {
                Some(format!("P{}", idx % 40))
            },
            delivery_date: start_date + Duration::days((idx % 10) as i64),
            location: format!("Sala {}", idx % 6),
            requested_by: "Almacén".into(),
            items: vec![
                OrderItem::new(format!("ART-{}", idx % 300), (idx % 9) as f64 + 1.0, 4.5),
                OrderItem::new(format!("ART-{}", idx % 150), 2.0, 12.0),
            ],
        })
        .collect()
}

fn build_orders(count: usize) -> Vec<ServiceOrder> {
    let start_date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    (0..count)
        .map(|idx| ServiceOrder {
            id: format!("os-{idx}"),
            service_number: format!("24/{idx}"),
            vertical: "Catering".into(),
            status: OrderStatus::Confirmado,
            start_date: start_date + Duration::days((idx % 365) as i64),
            space: Some(format!("Espacio {}", idx % 12)),
            client: Some(format!("Cliente {}", idx % 80)),
            client_kind: Some(if idx % 4 == 0 {
                ClientKind::Agencia
            } else {
                ClientKind::Empresa
            }),
            sales_rep: Some(format!("Comercial {}", idx % 9)),
            head_waiter: Some(format!("Metre {}", idx % 5)),
            attendees: 50 + (idx % 200) as u32,
            gross_billing: 5_000.0 + (idx % 100) as f64 * 37.0,
            agency_commission: 150.0,
            venue_fee: 90.0,
            costs: BTreeMap::from([
                ("Gastronomía".to_string(), 1_200.0 + (idx % 50) as f64),
                ("Bodega".to_string(), 300.0),
                ("Personal".to_string(), 800.0),
            ]),
        })
        .collect()
}

fn bench_consolidation(c: &mut Criterion) {
    let sub_orders = build_sub_orders(black_box(10_000));

    c.bench_function("consolidate_10k_sub_orders", |b| {
        b.iter(|| {
            let groups = consolidate(&sub_orders);
            black_box(groups);
        })
    });
}

fn bench_analytics(c: &mut Criterion) {
    let owned = build_orders(black_box(10_000));
    let orders: Vec<&ServiceOrder> = owned.iter().collect();

    c.bench_function("monthly_buckets_10k_orders", |b| {
        b.iter(|| {
            let buckets = monthly_buckets(&orders, &[]);
            black_box(buckets);
        })
    });

    c.bench_function("kpi_summary_10k_orders", |b| {
        b.iter(|| {
            let summary = kpi_summary(&orders, &[]);
            black_box(summary);
        })
    });
}

fn bench_sync(c: &mut Criterion) {
    let records: Vec<ArticleRecord> = (0..5_000)
        .map(|idx| ArticleRecord {
            erp_id: format!("{idx}"),
            nombre: Some(format!("Artículo {idx}")),
            proveedor_id: Some(format!("P{}", idx % 40)),
            precio: Some(1.0 + (idx % 500) as f64 / 7.0),
            ..Default::default()
        })
        .collect();
    let at = "2024-05-01T08:00:00Z".parse().unwrap();

    let dir = tempdir().expect("tempdir");
    let storage = JsonStorage::new(Some(dir.path().to_path_buf()), None).expect("storage");
    sync_articles(&storage, records.clone(), at).expect("seed");

    c.bench_function("sync_5k_articles_no_changes", |b| {
        b.iter(|| {
            let report = sync_articles(&storage, records.clone(), at).expect("sync");
            black_box(report);
        })
    });

    c.bench_function("load_articles_5k", |b| {
        b.iter(|| {
            let catalog = storage.load_articles().expect("load");
            black_box(catalog);
        })
    });
}

criterion_group!(benches, bench_consolidation, bench_analytics, bench_sync);
criterion_main!(benches);
