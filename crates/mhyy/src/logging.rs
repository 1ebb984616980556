//! Logging setup for binaries built on this crate.
//!
//! Library code only emits `tracing` events; nothing is printed until a
//! binary installs a subscriber. [`init_logging`] is the one-liner for that.

use tracing_subscriber::EnvFilter;

/// Installs a `fmt` subscriber filtered by `RUST_LOG` (default `info`).
///
/// Returns `false` if a global subscriber was already installed, in which
/// case the existing one is left alone.
pub fn init_logging() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}
