//! Tracing setup for the binary.
//!
//! Library code only emits `tracing` events; embedders can install their own
//! subscriber instead of calling `init_tracing`.

use tracing_subscriber::EnvFilter;

/// Install a compact stderr subscriber. `RUST_LOG` wins when set, otherwise
/// the level is `debug` with `verbose` and `warn` without.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_tracing(verbose: bool) -> bool {
    let fallback = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}
