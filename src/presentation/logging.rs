//! Tracing subscriber initialization for the strata binary.
//!
//! # Priority (highest to lowest)
//!
//! 1. `STRATA_LOG` env var (per-target directives, e.g. `strata=debug,warn`)
//! 2. `RUST_LOG` env var
//! 3. CLI verbosity (`-v` info, `-vv` debug, `-vvv` trace)
//! 4. Default level: `warn`
//!
//! Logs always go to stderr.

use tracing::Level;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Map the `-v` count to a default level
pub fn level_for_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialize the global tracing subscriber.
///
/// Call once, before config loading so config warnings are captured.
/// A second call is a no-op.
pub fn init_logging(verbose: u8, ansi: bool) {
    let filter = build_env_filter(verbose, |key| std::env::var(key).ok());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(verbose > 1)
        .without_time()
        .compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn build_env_filter(verbose: u8, get_env: impl Fn(&str) -> Option<String>) -> EnvFilter {
    for var in ["STRATA_LOG", "RUST_LOG"] {
        if let Some(directives) = get_env(var) {
            match EnvFilter::try_new(&directives) {
                Ok(filter) => return filter,
                Err(e) => eprintln!("warning: ignoring invalid {var}: {e}"),
            }
        }
    }
    EnvFilter::new(level_for_verbosity(verbose).to_string())
}
