use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::catalog::Article;
use crate::pricing::{normalize_price, plan_history, PriceHistoryEntry};
use crate::storage::CatalogStore;

use super::ServiceResult;

pub struct PricingService;

impl PricingService {
    pub fn normalize(price: f64) -> f64 {
        normalize_price(price)
    }

    /// Plans the history entries a sync of `articles` would record, using the
    /// store's latest history and current catalog as baselines.
    pub fn plan_changes<S: CatalogStore + ?Sized>(
        store: &S,
        articles: &[Article],
        at: DateTime<Utc>,
    ) -> ServiceResult<Vec<PriceHistoryEntry>> {
        let latest = store.latest_prices()?;
        let stored: HashMap<String, f64> = store
            .load_articles()?
            .into_iter()
            .map(|article| (article.id.clone(), article.price))
            .collect();
        Ok(plan_history(articles, &latest, &stored, at))
    }
}
