//! Development-time tracing for the bookshelf CLI.
//!
//! Diagnostics only: output goes to stderr. State files and `show` output are
//! never affected by it.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset, by count of `-v` flags.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the stderr subscriber.
///
/// `RUST_LOG` wins over `verbosity` when set:
/// ```bash
/// RUST_LOG=bookshelf::store=debug bookshelf replay actions.jsonl
/// ```
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbosity > 1)
                .compact(),
        )
        .init();
}
