//! Log subscriber setup.
//!
//! Events are filtered through `RUST_LOG` (default [`DEFAULT_FILTER`]) and
//! printed to stdout either as pretty multi-line text or as one JSON object
//! per line.
//! HTTP access events come from the `TraceLayer` on the router and show up
//! under the `tower_http` target.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LogFormat;

/// Filter used when `RUST_LOG` is unset. Access events are emitted at
/// `info`, so they pass it.
pub const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber. Fails if one is already installed.
pub fn init_logging(format: LogFormat) -> anyhow::Result<()> {
    let registry = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()));

    match format {
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .with_thread_ids(true)
                    .with_line_number(true)
                    .with_target(false)
                    .pretty(),
            )
            .try_init()?,
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(true))
            .try_init()?,
    }

    Ok(())
}
