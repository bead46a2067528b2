//! Tracing subscriber setup.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber for matcher diagnostics.
///
/// Call once at startup; later calls do nothing. Only active when
/// `RUST_LOG` is set, e.g. `RUST_LOG=tyre_match=trace` to see every
/// frontier step and nested descent. Leaves an already installed global
/// subscriber in place.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
