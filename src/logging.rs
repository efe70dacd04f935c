//! Diagnostic logging setup
//!
//! Logs go to stderr through a `tracing-subscriber` fmt layer so command
//! output on stdout stays clean. `FINANCEHUB_LOG` takes `EnvFilter` syntax
//! and overrides the verbosity flag.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding an explicit filter (e.g. `financehub=trace`)
pub const LOG_ENV: &str = "FINANCEHUB_LOG";

static TRACING_INIT: Once = Once::new();

/// Default filter directive for a `-v` count
pub fn directive_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "financehub=warn",
        1 => "financehub=info",
        _ => "financehub=debug",
    }
}

fn build_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(directive_for(verbosity)))
}

/// Install the global subscriber; later calls do nothing
pub fn init_tracing(verbosity: u8) {
    TRACING_INIT.call_once(|| {
        let _ = fmt()
            .with_env_filter(build_filter(verbosity))
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
