#![doc(test(attr(deny(warnings))))]

//! Finance Core provides the domain model and pure resolution logic for
//! tracking expenses and receipts across cost centers, including the
//! installment labeling of recurring ("fixed") financial entries.

pub mod config;
pub mod entries;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finance Core tracing initialized.");
    });
}
