//! Diagnostic tracing on stderr.
//!
//! Progress lines and the summary go to stdout and are not affected by
//! the log level.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins when set. Otherwise the level is `warn`, or `debug`
/// with `--debug`.
pub(crate) fn init(debug: bool) {
    let fallback = if debug { "docorg=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // try_init: a second subscriber (e.g. in tests) is not an error
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
