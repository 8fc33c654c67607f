//! The immutable request value handed to [`HttpClient::execute`]
//!
//! [`HttpClient::execute`]: crate::HttpClient::execute

use std::time::Duration;

use bytes::Bytes;
use http::header::{CONTENT_TYPE, USER_AGENT};
use http::{HeaderMap, HeaderValue, Method};
use http_body_util::Full;
use url::Url;

use super::content::Content;
use crate::error::{self, Result};

/// A fully resolved outbound request: target, method, headers, optional
/// payload and the deadline applied when it is sent.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    method: Method,
    url: Url,
    headers: HeaderMap,
    content: Option<Content>,
    timeout: Duration,
}

impl HttpRequest {
    #[must_use]
    pub fn new(
        method: Method,
        url: Url,
        headers: HeaderMap,
        content: Option<Content>,
        timeout: Duration,
    ) -> Self {
        Self {
            method,
            url,
            headers,
            content,
            timeout,
        }
    }

    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    #[must_use]
    pub fn content(&self) -> Option<&Content> {
        self.content.as_ref()
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Convert into a hyper request.
    ///
    /// The payload's content type replaces any `Content-Type` header, and
    /// `user_agent` is only applied when no `User-Agent` header was set.
    pub(crate) fn into_hyper(
        self,
        user_agent: &HeaderValue,
    ) -> Result<http::Request<Full<Bytes>>> {
        let uri = target_uri(&self.url)?;

        let mut headers = self.headers;
        let body = match self.content {
            Some(content) => {
                let content_type = HeaderValue::try_from(content.content_type())
                    .map_err(|_| error::invalid_header_value(CONTENT_TYPE.as_str()))?;
                headers.insert(CONTENT_TYPE, content_type);
                content.to_bytes()
            }
            None => Bytes::new(),
        };

        if !headers.contains_key(USER_AGENT) {
            headers.insert(USER_AGENT, user_agent.clone());
        }

        let mut request = http::Request::builder()
            .method(self.method)
            .uri(uri)
            .body(Full::new(body))
            .map_err(error::builder)?;
        *request.headers_mut() = headers;

        Ok(request)
    }
}

/// The `http::Uri` a request to `url` is sent to, fragment removed.
///
/// # Errors
///
/// Fails when the URL is valid but cannot be expressed as an `http::Uri`,
/// for example because it exceeds the length `http` accepts.
pub fn target_uri(url: &Url) -> Result<http::Uri> {
    let mut target = url.clone();
    target.set_fragment(None);
    http::Uri::try_from(target.as_str()).map_err(error::uri_parse_error)
}
