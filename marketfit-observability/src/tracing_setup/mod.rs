//! Tracing initialization. Logs go to stderr so stdout stays machine-readable.

pub mod events;
pub mod spans;

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding per-target log directives,
/// e.g. `MARKETFIT_LOG=marketfit_shortlist=debug,marketfit_storage=warn`.
pub const LOG_ENV_VAR: &str = "MARKETFIT_LOG";

/// Filter used when `MARKETFIT_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "marketfit=info";

static INIT: Once = Once::new();

/// Initialize human-readable logging. Idempotent.
pub fn init_tracing() {
    install(DEFAULT_FILTER, false);
}

/// Initialize JSON logging. Idempotent.
pub fn init_tracing_json() {
    install(DEFAULT_FILTER, true);
}

/// Initialize with a fallback filter such as `marketfit=debug`.
/// `MARKETFIT_LOG` still wins when set.
pub fn init_tracing_with_filter(fallback: &str, json: bool) {
    install(fallback, json);
}

/// Directive string for all marketfit crates at `level`.
pub fn default_filter(level: &str) -> String {
    format!("marketfit={level}")
}

fn install(fallback: &str, json: bool) {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(fallback));

        // try_init: a host process may already own the global subscriber.
        let result = if json {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .with(filter)
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .with(filter)
                .try_init()
        };

        if let Err(e) = result {
            tracing::debug!(error = %e, "global subscriber already set");
        }
    });
}
