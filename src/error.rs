//! Error types for roadmap-timeline
//!
//! The layout engine itself never fails; every variant here belongs to the
//! data boundary (parsing, configuration, fetching) or to adapter options.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// roadmap-timeline error types
#[derive(Error, Debug)]
pub enum Error {
    /// Calendar date was not `YYYY-MM-DD`
    #[error("Invalid calendar date: {0:?} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    /// Unknown size variant name
    #[error("Invalid size variant: {0:?} (expected default, small or tiny)")]
    InvalidVariant(String),

    /// Unknown output format name
    #[error("Invalid output format: {0:?} (expected svg, html or json)")]
    InvalidFormat(String),

    /// Required configuration value missing
    #[error("Missing configuration: {0}\nSet it in the environment before fetching timeline data.")]
    MissingConfig(String),

    /// Upstream answered with a non-success status
    #[error("Upstream returned HTTP {status}: {message}")]
    Upstream {
        /// HTTP status code
        status: u16,
        /// Response body or reason phrase
        message: String,
    },

    /// Every configured endpoint failed
    #[error("All {attempted} timeline endpoints failed; last error: {last_error}")]
    EndpointsExhausted {
        /// Number of endpoints tried
        attempted: usize,
        /// Message of the final failure
        last_error: String,
    },

    /// Transport-level failure talking to the data source
    #[error("Network error: {0}")]
    Network(String),

    /// Payload could not be decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(feature = "fetch")]
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::Upstream {
                status: status.as_u16(),
                message: err.to_string(),
            },
            None => Self::Network(err.to_string()),
        }
    }
}
