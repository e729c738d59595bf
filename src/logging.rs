//! Structured logging bootstrap.
//!
//! Library entrypoints emit `tracing` spans and events; embedders call [`init`] once to see them.

use tracing_subscriber::EnvFilter;

/// Install a `fmt` subscriber filtered by `RUST_LOG`, defaulting to `info`.
///
/// Safe to call more than once: later calls leave the first subscriber in place.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init();
}
