//! Tracing subscriber setup.
//!
//! `RUST_LOG` takes precedence; otherwise the level follows `-v`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive for a `-v` count.
pub fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn filter_for(verbose: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(verbose)))
}

/// Install the global subscriber writing to stderr.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(verbose: u8, ansi: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(ansi);

    let _ = tracing_subscriber::registry()
        .with(filter_for(verbose))
        .with(fmt_layer)
        .try_init();
}
