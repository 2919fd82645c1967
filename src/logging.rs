//! Diagnostic logging on standard error

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise only warnings are shown, or debug
/// events too when `verbose` is true. Standard output is left untouched so
/// the emitted shell code stays sourceable.
pub fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init();
}
