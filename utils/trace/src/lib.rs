//! Process-wide tracing setup shared by the workspace binaries.

use thiserror::Error;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber.
///
/// `RUST_LOG` wins when it is set; otherwise `level` is used as the filter
/// directive (e.g. `info` or `projects_news=debug,tower_http=info`).
pub fn init(level: &str) -> Result<(), TracingInitError> {
    let filter = build_filter(level)?;

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_target(true));

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|source| TracingInitError::SetGlobalDefault { source })?;

    Ok(())
}

fn build_filter(level: &str) -> Result<EnvFilter, TracingInitError> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|source| TracingInitError::InvalidFilter {
            directive: level.to_string(),
            source,
        })
}

#[derive(Debug, Error)]
pub enum TracingInitError {
    #[error("Invalid filter directive: {directive}")]
    InvalidFilter {
        directive: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("Failed to set global default subscriber")]
    SetGlobalDefault {
        #[from]
        source: tracing::subscriber::SetGlobalDefaultError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_level() {
        assert!(build_filter("info").is_ok());
    }

    #[test]
    fn accepts_per_target_directives() {
        assert!(build_filter("projects_news=debug,tower_http=info").is_ok());
    }
}
