//! Monetary normalization and the price-history delta calculator.

pub mod history;
pub mod normalize;

pub use history::{plan_history, PriceBaseline, PriceHistoryEntry, PRICE_CHANGE_TOLERANCE};
pub use normalize::normalize_price;
