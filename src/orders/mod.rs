//! Service-order domain models and the delivery consolidation engine.

pub mod consolidation;
pub mod service_order;
pub mod sub_order;

pub use consolidation::{
    consolidate, summarize_preview, ConsolidationGroup, ConsolidationSummary, NO_PROVIDER_KEY,
};
pub use service_order::{
    Briefing, BriefingItem, ClientKind, OrderStatus, ServiceOrder, DELIVERY_VERTICAL,
};
pub use sub_order::{OrderItem, SubOrder};
