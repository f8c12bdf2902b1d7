use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// Reasons the log subscriber could not be installed.
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("--log-level '{filter}' is not a valid tracing filter")]
    InvalidFilter {
        filter: String,
        #[source]
        source: ParseError,
    },

    #[error("a global log subscriber is already installed")]
    AlreadyInstalled(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// `RUST_LOG` wins over the command-line level when it parses.
pub fn build_filter(log_level: &str) -> Result<EnvFilter, TelemetryError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(log_level).map_err(|source| TelemetryError::InvalidFilter {
            filter: log_level.to_string(),
            source,
        }),
    }
}

/// Install the global subscriber. Logs go to stderr so stdout stays usable.
pub fn init(log_level: &str) -> Result<(), TelemetryError> {
    let env_filter = build_filter(log_level)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(TelemetryError::AlreadyInstalled)
}
