#![doc(test(attr(deny(warnings))))]

//! Schedules Core turns a snapshot of scheduled transactions into the grouped,
//! sub-totalled row list shown by a schedules table.

pub mod cli;
pub mod config;
pub mod currency;
pub mod dates;
pub mod errors;
pub mod schedules;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Schedules Core tracing initialized.");
    });
}
