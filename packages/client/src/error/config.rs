//! Detail carried by `Kind::Builder` errors
//!
//! Every fallible setter reports one of these synchronously, wrapped in an
//! [`Error`](super::Error) so callers handle one error type throughout.

use thiserror::Error;

/// The reason a piece of request configuration was rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("url not usable as a request target: {0}")]
    InvalidUri(#[from] http::uri::InvalidUri),

    #[error("unsupported url scheme `{0}`, expected http or https")]
    UnsupportedScheme(String),

    #[error("{0} must not be blank")]
    Blank(&'static str),

    #[error("{name} must be positive, got {value}")]
    OutOfRange { name: &'static str, value: i64 },

    #[error("invalid header name `{0}`")]
    InvalidHeaderName(String),

    #[error("invalid value for header `{0}`")]
    InvalidHeaderValue(String),

    #[error("unknown character encoding `{0}`")]
    UnknownEncoding(String),

    #[error("body serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConfigError {
    /// True for a numeric argument outside its allowed range.
    #[must_use]
    pub fn is_range(&self) -> bool {
        matches!(self, ConfigError::OutOfRange { .. })
    }
}
