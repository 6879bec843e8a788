//! Browser console logging

use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_web::MakeWebConsoleWriter;

/// Route `tracing` events to the browser console
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(level: Level) {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        // std::time is unavailable on wasm32-unknown-unknown
        .without_time()
        .with_writer(MakeWebConsoleWriter::new())
        .with_filter(LevelFilter::from_level(level));

    if tracing_subscriber::registry().with(fmt_layer).try_init().is_ok() {
        tracing::debug!(%level, "Console logging initialized");
    }
}
