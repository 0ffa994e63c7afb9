use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Default filter used when neither `RUST_LOG` nor configuration provide one.
pub const DEFAULT_FILTER: &str = "info";

fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize tracing subscriber with compact, human readable output.
/// - Respects `RUST_LOG` if set
/// - Falls back to `fallback` (e.g. `info,service=debug`)
/// - Writes to stdout to improve visibility in environments that hide stderr
pub fn init_logging_default(fallback: &str) {
    let _ = fmt()
        .with_env_filter(env_filter(fallback))
        .with_target(false)
        .compact()
        .with_writer(io::stdout)
        .try_init();
}

/// Initialize tracing subscriber with JSON structured output.
/// - Respects `RUST_LOG` if set, otherwise uses `fallback`
/// - Emits one JSON object per event for machine parsing
pub fn init_logging_json(fallback: &str) {
    let _ = fmt()
        .with_env_filter(env_filter(fallback))
        .with_target(false)
        .json()
        .with_writer(io::stdout)
        .try_init();
}
