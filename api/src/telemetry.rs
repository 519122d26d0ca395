//! Tracing subscriber setup

use anyhow::Context;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use radar_shared::config::{LogFormat, LoggingConfig};

/// Install the global subscriber
///
/// `RUST_LOG` wins over the configured level. SQLx is capped at `warn`
/// unless `RUST_LOG` says otherwise.
pub fn init_tracing(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(format!("{},sqlx=warn", config.level))
            .with_context(|| format!("invalid log level: {}", config.level))?,
    };

    let registry = tracing_subscriber::registry().with(filter);
    let source = config.source_location;

    match config.format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_file(source)
                    .with_line_number(source),
            )
            .try_init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().pretty().with_file(source).with_line_number(source))
            .try_init(),
    }
    .context("failed to install tracing subscriber")
}
