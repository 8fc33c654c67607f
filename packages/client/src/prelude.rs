//! Types most callers need, re-exported in one place

pub use crate::client::{ClientStats, ClientStatsSnapshot, HttpClient, HttpClientBuilder};
pub use crate::config::{DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, HttpConfig};
pub use crate::error::{ConfigError, Error, Kind, Result};
pub use crate::http::{Content, HttpRequest, HttpResponse, MultipartForm};

// HTTP standard types from the http crate
pub use ::http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};

pub use encoding_rs::Encoding;
pub use url::Url;
