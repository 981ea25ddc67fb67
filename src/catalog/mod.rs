//! Catalog entities shared by the sync job, the CSV exchange, and pricing.

pub mod article;
pub mod staff_rate;

pub use article::{Article, ArticleRecord};
pub use staff_rate::StaffRate;
