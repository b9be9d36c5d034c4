#![doc(test(attr(deny(warnings))))]

//! Expense Tracker keeps a flat, append-only log of personal expenses and
//! offers quick aggregate views over it through an interactive menu.

pub mod cli;
pub mod config;
pub mod errors;
pub mod ledger;
pub mod services;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Expense Tracker tracing initialized.");
    });
}
