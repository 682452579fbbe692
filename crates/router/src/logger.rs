//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Install the global console subscriber. Filtering defaults to `info`
/// and can be tuned through `RUST_LOG`. Safe to call more than once;
/// later calls are no-ops.
pub fn setup() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init()
        .ok();
}
