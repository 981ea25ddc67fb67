//! Durable storage seam for the catalogs and the price history.

pub mod json_backend;

use std::collections::HashMap;

pub use json_backend::JsonStorage;

use crate::catalog::{Article, StaffRate};
use crate::errors::OpsError;
use crate::pricing::PriceHistoryEntry;

pub type Result<T> = std::result::Result<T, OpsError>;

/// Repository interface over the shared data store. All reads and writes go
/// through explicit calls on this trait; nothing reaches for ambient state.
pub trait CatalogStore {
    fn save_articles(&self, articles: &[Article]) -> Result<()>;
    fn load_articles(&self) -> Result<Vec<Article>>;

    fn save_staff_rates(&self, rates: &[StaffRate]) -> Result<()>;
    fn load_staff_rates(&self) -> Result<Vec<StaffRate>>;

    /// Appends history entries; existing entries are never rewritten.
    fn append_history(&self, entries: &[PriceHistoryEntry]) -> Result<usize>;
    fn load_history(&self) -> Result<Vec<PriceHistoryEntry>>;

    /// Most recent recorded price per article, newest entry winning.
    fn latest_prices(&self) -> Result<HashMap<String, f64>> {
        let mut latest: HashMap<String, (chrono::DateTime<chrono::Utc>, f64)> = HashMap::new();
        for entry in self.load_history()? {
            match latest.get(&entry.article_id) {
                Some((seen, _)) if *seen >= entry.date => {}
                _ => {
                    latest.insert(entry.article_id, (entry.date, entry.computed_price));
                }
            }
        }
        Ok(latest
            .into_iter()
            .map(|(article_id, (_, price))| (article_id, price))
            .collect())
    }
}
