//! Core HTTP client implementation
//!
//! `HttpClient` wraps one hyper-util connection pool behind an `Arc`, so
//! clones are cheap and all of them reuse the same connections.

use std::fmt;
use std::sync::Arc;

use bytes::Bytes;
use http::HeaderValue;
use http_body::Body as _;
use http_body_util::Full;
use hyper_rustls::HttpsConnector;
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;

use super::configuration::HttpClientBuilder;
use super::stats::{ClientStats, ClientStatsSnapshot};
use crate::config::HttpConfig;
use crate::error::{self, Result};
use crate::http::{HttpRequest, HttpResponse};

pub(crate) type Transport = Client<HttpsConnector<HttpConnector>, Full<Bytes>>;

/// Shared HTTP client
///
/// Construct one at the application's composition root and hand it to every
/// request builder; it is safe to use from many tasks at once.
#[derive(Clone)]
pub struct HttpClient {
    transport: Transport,
    config: Arc<HttpConfig>,
    user_agent: HeaderValue,
    stats: Arc<ClientStats>,
}

impl HttpClient {
    /// Create a client with the default configuration
    ///
    /// # Errors
    ///
    /// Returns a builder error if the TLS configuration cannot be assembled.
    pub fn new() -> Result<Self> {
        HttpClientBuilder::new().build()
    }

    #[must_use]
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::new()
    }

    pub(crate) fn from_parts(transport: Transport, config: HttpConfig, user_agent: HeaderValue) -> Self {
        Self {
            transport,
            config: Arc::new(config),
            user_agent,
            stats: Arc::new(ClientStats::new()),
        }
    }

    #[must_use]
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    #[must_use]
    pub fn stats(&self) -> ClientStatsSnapshot {
        self.stats.snapshot()
    }

    /// Send `request`, failing once its timeout elapses before the response
    /// head arrives.
    ///
    /// The response is returned untouched, with its body still streaming.
    ///
    /// # Errors
    ///
    /// Transport failures and deadline expiry are both reported as request
    /// errors carrying the underlying cause and the request URL.
    pub async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        let url = request.url().clone();
        let deadline = request.timeout();

        let hyper_request = request.into_hyper(&self.user_agent)?;
        let payload_bytes = hyper_request.body().size_hint().exact().unwrap_or(0);

        tracing::debug!(
            method = %hyper_request.method(),
            url = %url,
            timeout = ?deadline,
            payload_bytes,
            "dispatching request"
        );
        self.stats.record_request(payload_bytes);

        match tokio::time::timeout(deadline, self.transport.request(hyper_request)).await {
            Ok(Ok(response)) => {
                self.stats.record_success();
                tracing::debug!(url = %url, status = %response.status(), "response received");
                Ok(response)
            }
            Ok(Err(err)) => {
                self.stats.record_failure();
                tracing::warn!(url = %url, error = %err, "request failed");
                Err(error::request(err).with_url(url))
            }
            Err(_) => {
                self.stats.record_timeout();
                tracing::warn!(url = %url, timeout = ?deadline, "request timed out");
                Err(error::timeout(url))
            }
        }
    }
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("stats", &self.stats.snapshot())
            .finish_non_exhaustive()
    }
}
