//! Thin stateless façades the application layers call into.

pub mod analytics_service;
pub mod catalog_service;
pub mod consolidation_service;
pub mod pricing_service;

pub use analytics_service::AnalyticsService;
pub use catalog_service::CatalogService;
pub use consolidation_service::ConsolidationService;
pub use pricing_service::PricingService;

use crate::errors::OpsError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Ops(#[from] OpsError),
    #[error("{0}")]
    Invalid(String),
}
