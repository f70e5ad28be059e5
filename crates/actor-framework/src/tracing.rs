//! # Tracing Setup
//!
//! Actors log with structured fields (`entity_type`, `id`, `size`) instead of
//! module paths, so the subscriber drops targets and prints spans inline.
//!
//! Filtering follows `RUST_LOG`; when unset, `info` and above are shown.
//!
//! ```text
//! RUST_LOG=debug cargo run                    # every request and reply
//! RUST_LOG=actor_framework=warn cargo run     # only actor failures
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber.
///
/// Safe to call more than once; only the first call installs anything.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
