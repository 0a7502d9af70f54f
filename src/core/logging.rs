//! Logging setup
//!
//! Diagnostics go to stderr through `tracing`; stdout carries only rendered
//! results. `RUST_LOG` takes precedence over the verbosity flags.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive for the given verbosity
pub fn default_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize the global subscriber
pub fn init_tracing(verbose: u8, quiet: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    // try_init: a second call (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(false)
                .without_time(),
        )
        .try_init();
}
