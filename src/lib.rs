#![doc(test(attr(deny(warnings))))]

//! Operations core for a catering/MICE back office: sub-order consolidation,
//! catalog price-history tracking, service-order analytics, and the JSON
//! repository behind them.

pub mod analytics;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod exchange;
pub mod orders;
pub mod pricing;
pub mod report;
pub mod services;
pub mod storage;
pub mod sync;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("mice_core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
