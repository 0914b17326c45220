//! Tracing setup for the command-line driver.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Environment variable holding the log filter, e.g. `JSONLEX_LOG=jsonlex=debug`.
pub const LOG_ENV: &str = "JSONLEX_LOG";

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Nothing is installed unless `JSONLEX_LOG`
/// or `RUST_LOG` is set; `JSONLEX_LOG` wins when both are.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = if std::env::var(LOG_ENV).is_ok() {
            EnvFilter::from_env(LOG_ENV)
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
            .with(filter)
            .init();
    });
}
