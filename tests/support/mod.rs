//! Shared helpers for the integration tests.

use std::sync::Once;

static TRACING: Once = Once::new();

/// Install a fmt subscriber once per test binary so `RUST_LOG=debug`
/// shows store and engine activity. Silent by default.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("off"));
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    });
}
