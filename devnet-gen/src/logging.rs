//! Diagnostics for the network generator.
//!
//! Events go to stderr through a `tracing` subscriber, leaving stdout to the
//! generation summary.

use std::env;
use std::str::FromStr;

use thiserror::Error;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Selects the [`LogFormat`].
pub const LOG_FORMAT_ENV: &str = "DEVNET_LOG_FORMAT";

/// Output format of log events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human readable lines.
    #[default]
    Human,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// The format named by `DEVNET_LOG_FORMAT`, or the default when unset.
    pub fn from_env() -> Result<Self, LoggingError> {
        match env::var_os(LOG_FORMAT_ENV) {
            None => Ok(Self::default()),
            Some(raw) => raw.to_string_lossy().parse(),
        }
    }
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            f if f.eq_ignore_ascii_case("human") => Ok(Self::Human),
            f if f.eq_ignore_ascii_case("json") => Ok(Self::Json),
            other => Err(LoggingError::UnsupportedFormat {
                provided: other.to_owned(),
            }),
        }
    }
}

/// Error raised when logging cannot be configured.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoggingError {
    /// `DEVNET_LOG_FORMAT` names an unknown format.
    #[error("unsupported DEVNET_LOG_FORMAT `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Value found in the environment.
        provided: String,
    },
}

/// Installs the global subscriber.
///
/// The filter is read from `RUST_LOG` and defaults to `info`. The subscriber
/// also captures records of the `log` facade. Calling this again once a
/// subscriber is installed leaves the existing one in place.
///
/// # Errors
/// Returns [`LoggingError`] if `DEVNET_LOG_FORMAT` is set to an unknown
/// format.
pub fn init_logging() -> Result<(), LoggingError> {
    let format = LogFormat::from_env()?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_span_events(FmtSpan::CLOSE);
    let layer = match format {
        LogFormat::Human => layer.boxed(),
        LogFormat::Json => layer.json().flatten_event(true).boxed(),
    };

    // Only fails when a global subscriber already exists.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
    Ok(())
}
