//! HTTP method selection and the terminal operations
//!
//! [`RequestBuilder::build`] freezes the configuration into an immutable
//! [`HttpRequest`]; [`RequestBuilder::send`] builds and dispatches it through
//! the shared client.

use courier_client::error::Result;
use courier_client::{HttpRequest, HttpResponse};
use http::Method;

use crate::builder::core::RequestBuilder;

impl RequestBuilder {
    /// Set the HTTP method (`GET` by default)
    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Resolve the payload and produce the immutable request value
    ///
    /// # Errors
    ///
    /// Fails if the payload cannot be resolved.
    pub fn build(self) -> Result<HttpRequest> {
        let content = self.resolve_content()?;

        if self.debug_enabled {
            log::debug!(
                "courier: {} {} ({}, timeout {}ms)",
                self.method,
                self.url,
                content
                    .as_ref()
                    .map_or_else(|| "no payload".to_owned(), |c| c.content_type()),
                self.timeout.as_millis()
            );
        }

        Ok(HttpRequest::new(
            self.method,
            self.url,
            self.headers,
            content,
            self.timeout,
        ))
    }

    /// Build the request and send it through the shared client
    ///
    /// Makes a single attempt. The response is returned as received, with
    /// status, headers and a still-streaming body.
    ///
    /// # Errors
    ///
    /// Transport failures and an elapsed timeout both surface as a request
    /// error (`Error::is_request`); `Error::is_timeout` tells them apart.
    pub async fn send(self) -> Result<HttpResponse> {
        let client = self.client.clone();
        let debug_enabled = self.debug_enabled;
        let request = self.build()?;
        let url = request.url().clone();

        let result = client.execute(request).await;

        if debug_enabled {
            match &result {
                Ok(response) => log::debug!("courier: {url} -> {}", response.status()),
                Err(err) => log::debug!("courier: {url} failed: {err}"),
            }
        }

        result
    }
}
