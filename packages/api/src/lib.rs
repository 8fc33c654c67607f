//! courier public API
//!
//! A fluent builder for one HTTP request at a time: pick a method, add a
//! body, headers, a form or credentials, set a timeout, then `send`. The
//! builder sends through an [`HttpClient`] that the application creates once
//! and shares, so connections are reused across requests.
//!
//! ```no_run
//! use courier::{ClientExt, HttpClient};
//!
//! # async fn run() -> courier::Result<()> {
//! let client = HttpClient::new()?;
//!
//! let response = client
//!     .put("https://api.example.com/notes/7")?
//!     .body("remember the milk")
//!     .media_type("text/markdown")?
//!     .basic_auth("user", "pass")?
//!     .send()
//!     .await?;
//!
//! assert!(response.status().is_success());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;

pub use builder::{ClientExt, RequestBuilder};

// Re-export important types from client package
pub use courier_client::{
    ClientStatsSnapshot, ConfigError, Content, Encoding, Error, HttpClient, HttpClientBuilder,
    HttpConfig, HttpRequest, HttpResponse, Method, MultipartForm, Result,
};

/// Start a `GET` request to `url` through `client`
///
/// Shorthand for [`RequestBuilder::create`].
///
/// # Errors
///
/// Fails if `url` is not an absolute `http`/`https` URL.
pub fn request(client: &HttpClient, url: &str) -> Result<RequestBuilder> {
    RequestBuilder::create(client, url)
}
