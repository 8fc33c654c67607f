//! HTTP client configuration and construction
//!
//! Assembles the rustls config, the hyper-rustls connector and the pooled
//! hyper-util client behind [`HttpClient`].

use std::sync::Arc;
use std::time::Duration;

use http::HeaderValue;
use hyper_rustls::HttpsConnectorBuilder;
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::{TokioExecutor, TokioTimer};

use super::HttpClient;
use crate::config::HttpConfig;
use crate::error::{self, Result};

/// HTTP client builder for configuration
#[derive(Debug, Clone, Default)]
pub struct HttpClientBuilder {
    config: HttpConfig,
}

impl HttpClientBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: HttpConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn user_agent(mut self, agent: &str) -> Self {
        self.config.user_agent = agent.to_owned();
        self
    }

    /// Timeout that builders created from this client start with
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    #[must_use]
    pub fn tcp_nodelay(mut self, enable: bool) -> Self {
        self.config.tcp_nodelay = enable;
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Fails on a zero default timeout, a user agent that is not a valid
    /// header value, or a TLS configuration rustls rejects.
    pub fn build(self) -> Result<HttpClient> {
        let config = self.config;

        if config.timeout.is_zero() {
            return Err(error::out_of_range("timeout", 0));
        }

        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|_| error::invalid_header_value("user-agent"))?;

        let roots = rustls::RootCertStore::from_iter(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());
        let tls = rustls::ClientConfig::builder_with_provider(Arc::new(
            rustls::crypto::ring::default_provider(),
        ))
        .with_safe_default_protocol_versions()
        .map_err(error::builder)?
        .with_root_certificates(roots)
        .with_no_client_auth();

        let mut http = HttpConnector::new();
        http.enforce_http(false);
        http.set_nodelay(config.tcp_nodelay);

        let https = HttpsConnectorBuilder::new()
            .with_tls_config(tls)
            .https_or_http()
            .enable_http1()
            .enable_http2()
            .wrap_connector(http);

        let transport = Client::builder(TokioExecutor::new())
            .pool_timer(TokioTimer::new())
            .build(https);

        tracing::debug!(
            user_agent = %config.user_agent,
            timeout = ?config.timeout,
            "http client constructed"
        );

        Ok(HttpClient::from_parts(transport, config, user_agent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_default_timeout() {
        let err = HttpClientBuilder::new()
            .timeout(Duration::ZERO)
            .build()
            .unwrap_err();
        assert!(err.is_range());
    }

    #[test]
    fn rejects_invalid_user_agent() {
        let err = HttpClientBuilder::new()
            .user_agent("bad\nagent")
            .build()
            .unwrap_err();
        assert!(err.is_builder());
    }

    #[tokio::test]
    async fn carries_configuration() {
        let client = HttpClientBuilder::new()
            .user_agent("tests/1.0")
            .timeout(Duration::from_secs(3))
            .build()
            .unwrap();

        assert_eq!(client.config().user_agent, "tests/1.0");
        assert_eq!(client.config().timeout, Duration::from_secs(3));
        assert_eq!(client.stats().requests_total, 0);
    }
}
