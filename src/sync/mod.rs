//! Catalog synchronization against an ERP export.
//!
//! The run is best-effort: catalog and history writes happen chunk by chunk,
//! a failed chunk is logged and skipped, and the run always completes with a
//! report of what landed.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::catalog::{Article, ArticleRecord};
use crate::pricing::plan_history;
use crate::storage::CatalogStore;

/// Chunk sizes tuned for the hosted backend's request limits.
pub const ARTICLE_CHUNK_SIZE: usize = 200;
pub const HISTORY_CHUNK_SIZE: usize = 500;

/// Outcome of one sync run.
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub updated: usize,
    pub inserted: usize,
    pub price_changes: usize,
    pub history_recorded: usize,
    pub failed_chunks: usize,
}

impl SyncReport {
    pub fn total_written(&self) -> usize {
        self.updated + self.inserted
    }
}

/// Synchronizes the article catalog from already-fetched ERP rows and records
/// price history for every detected change.
pub fn sync_articles<S: CatalogStore + ?Sized>(
    store: &S,
    records: Vec<ArticleRecord>,
    now: DateTime<Utc>,
) -> crate::storage::Result<SyncReport> {
    let run_id = Uuid::new_v4();
    info!(%run_id, count = records.len(), "starting article sync");

    let incoming: Vec<Article> = records.into_iter().map(Article::from_record).collect();

    let mut current = store.load_articles()?;
    let stored_prices: std::collections::HashMap<String, f64> = current
        .iter()
        .map(|article| (article.id.clone(), article.price))
        .collect();
    let latest_history = store.latest_prices()?;

    let planned_history = plan_history(&incoming, &latest_history, &stored_prices, now);

    let mut report = SyncReport {
        run_id,
        started_at: now,
        updated: 0,
        inserted: 0,
        price_changes: planned_history.len(),
        history_recorded: 0,
        failed_chunks: 0,
    };

    for (chunk_index, chunk) in incoming.chunks(ARTICLE_CHUNK_SIZE).enumerate() {
        let mut chunk_updates = 0;
        let mut chunk_inserts = 0;
        for article in chunk {
            match current.iter_mut().find(|existing| existing.id == article.id) {
                Some(existing) => {
                    *existing = article.clone();
                    chunk_updates += 1;
                }
                None => {
                    current.push(article.clone());
                    chunk_inserts += 1;
                }
            }
        }
        match store.save_articles(&current) {
            Ok(()) => {
                report.updated += chunk_updates;
                report.inserted += chunk_inserts;
                info!(
                    chunk = chunk_index + 1,
                    updated = chunk_updates,
                    inserted = chunk_inserts,
                    "article chunk written"
                );
            }
            Err(error) => {
                report.failed_chunks += 1;
                warn!(chunk = chunk_index + 1, %error, "article chunk failed, continuing");
            }
        }
    }

    if planned_history.is_empty() {
        info!(%run_id, "no price changes detected in this sync");
    }
    for (chunk_index, chunk) in planned_history.chunks(HISTORY_CHUNK_SIZE).enumerate() {
        match store.append_history(chunk) {
            Ok(written) => {
                report.history_recorded += written;
            }
            Err(error) => {
                report.failed_chunks += 1;
                warn!(chunk = chunk_index + 1, %error, "history chunk failed, continuing");
            }
        }
    }

    info!(
        %run_id,
        updated = report.updated,
        inserted = report.inserted,
        price_changes = report.price_changes,
        history_recorded = report.history_recorded,
        failed_chunks = report.failed_chunks,
        "article sync finished"
    );
    Ok(report)
}
