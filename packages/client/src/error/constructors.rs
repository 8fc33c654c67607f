use super::config::ConfigError;
use super::helpers::TimedOut;
use super::types::{Error, Kind};

pub(crate) type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Creates an `Error` for a builder error.
pub fn builder<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Builder).with(e.into())
}

/// Creates an `Error` for a request error.
pub fn request<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Request).with(e.into())
}

/// Creates a request `Error` for an elapsed send deadline.
pub fn timeout(url: url::Url) -> Error {
    Error::new(Kind::Request).with(TimedOut).with_url(url)
}

pub fn url_parse_error(e: url::ParseError) -> Error {
    builder(ConfigError::InvalidUrl(e))
}

pub fn uri_parse_error(e: http::uri::InvalidUri) -> Error {
    builder(ConfigError::InvalidUri(e))
}

pub fn url_bad_scheme(url: url::Url) -> Error {
    Error::new(Kind::Builder)
        .with(ConfigError::UnsupportedScheme(url.scheme().to_owned()))
        .with_url(url)
}

pub fn blank(what: &'static str) -> Error {
    builder(ConfigError::Blank(what))
}

pub fn out_of_range(name: &'static str, value: i64) -> Error {
    builder(ConfigError::OutOfRange { name, value })
}

pub fn invalid_header_name(name: &str) -> Error {
    builder(ConfigError::InvalidHeaderName(name.to_owned()))
}

pub fn invalid_header_value(name: &str) -> Error {
    builder(ConfigError::InvalidHeaderValue(name.to_owned()))
}

pub fn unknown_encoding(label: &str) -> Error {
    builder(ConfigError::UnknownEncoding(label.to_owned()))
}

pub fn serialization_error(e: serde_json::Error) -> Error {
    builder(ConfigError::Json(e))
}
