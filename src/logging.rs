//! Diagnostic tracing, written to stderr.
//!
//! Verbosity comes from `RUST_LOG` and defaults to `warn`, so a successful
//! run prints nothing. The sample file itself is never affected.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber.
///
/// ```bash
/// RUST_LOG=lissajous=trace cargo run
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
