#![doc(test(attr(deny(warnings))))]

//! Fintrack Core keeps a single user's bank accounts, credit cards, demat
//! holdings, loans, and cash transactions in JSON-backed collections and
//! derives the summary views (net worth, utilization, repayment progress,
//! cash flow) rendered by the interactive CLI.

pub mod cli;
pub mod core;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Fintrack Core tracing initialized.");
    });
}
