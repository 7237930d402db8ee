//! Logging setup shared by the Cloak binaries.

use clap::ValueEnum;
use std::fmt::{Display, Formatter};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Output format of the log lines written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    #[default]
    #[value(name = "text")]
    Text,
    #[value(name = "json")]
    Json,
}

impl Display for LogFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log filter directive: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
    #[error("failed to install the global subscriber: {0}")]
    Install(String),
}

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `default_directive` (for example
/// `"info"` or `"cloak_gateway=debug,tower_http=info"`) is used.
pub fn init(format: LogFormat, default_directive: &str) -> Result<(), TelemetryError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_directive)?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    installed.map_err(|e| TelemetryError::Install(e.to_string()))
}
