#![doc(test(attr(deny(warnings))))]

//! Tally turns raw accounting rows into read-only views: counterparty
//! statements with running balances, aging buckets, payroll batch totals and
//! invoice totals, with money formatted in one place.

pub mod clock;
pub mod errors;
pub mod report;
pub mod utils;

pub use errors::{Result, TallyError};
pub use report::Reporter;

use std::sync::Once;

use tally_config::Config;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing with the default config and emits a startup info log.
pub fn init() {
    init_with_config(&Config::default());
}

/// Initializes global tracing using the config's filter directive when `RUST_LOG` is unset.
pub fn init_with_config(config: &Config) {
    INIT_TRACING.call_once(|| {
        utils::init_tracing(&config.log_filter);
        tracing::info!("Tally tracing initialized.");
    });
}
