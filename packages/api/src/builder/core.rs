//! Core `RequestBuilder` structure and base functionality
//!
//! Holds the accumulated configuration of one outbound request, plus the
//! construction path and the settings that apply regardless of payload.

use std::fmt;
use std::time::Duration;

use courier_client::error::{self, Result};
use courier_client::http::target_uri;
use courier_client::{Encoding, HttpClient};
use http::{HeaderMap, Method};
use url::Url;

/// Fluent configuration for a single HTTP request
///
/// Each setter takes the builder by value and hands it back, so calls chain;
/// setters that validate their input return `Result<Self>` and fail at the
/// call that supplied the bad value. The terminal [`send`](Self::send)
/// consumes the builder.
///
/// # Examples
/// ```no_run
/// use courier::{ClientExt, HttpClient};
///
/// # async fn run() -> courier::Result<()> {
/// let client = HttpClient::new()?;
/// let response = client
///     .post("https://api.example.com/users")?
///     .bearer_auth("token")?
///     .form_field("name", "Ada")?
///     .timeout_millis(5_000)?
///     .send()
///     .await?;
/// println!("{}", response.status());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct RequestBuilder {
    pub(crate) client: HttpClient,
    pub(crate) url: Url,
    pub(crate) method: Method,
    pub(crate) body: String,
    pub(crate) media_type: Option<String>,
    pub(crate) encoding: &'static Encoding,
    pub(crate) headers: HeaderMap,
    pub(crate) multipart_fields: Vec<(String, String)>,
    pub(crate) encoded_form: Option<Vec<(String, String)>>,
    pub(crate) timeout: Duration,
    pub(crate) debug_enabled: bool,
}

impl RequestBuilder {
    /// Start a `GET` request to `url` sent through `client`
    ///
    /// The builder starts with an empty body, UTF-8 encoding and the
    /// client's default timeout (20 seconds unless configured otherwise).
    ///
    /// # Errors
    ///
    /// Fails if `url` does not parse, its scheme is not `http`/`https`, or it
    /// cannot be carried as an HTTP request target.
    pub fn create(client: &HttpClient, url: &str) -> Result<Self> {
        let url = Url::parse(url).map_err(error::url_parse_error)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(error::url_bad_scheme(url));
        }
        target_uri(&url).map_err(|err| err.with_url(url.clone()))?;

        Ok(Self {
            client: client.clone(),
            url,
            method: Method::GET,
            body: String::new(),
            media_type: None,
            encoding: encoding_rs::UTF_8,
            headers: HeaderMap::new(),
            multipart_fields: Vec::new(),
            encoded_form: None,
            timeout: client.config().timeout,
            debug_enabled: false,
        })
    }

    /// The request target, fixed at construction
    #[must_use]
    pub fn target(&self) -> &Url {
        &self.url
    }

    /// Enable debug logging for this request
    ///
    /// Logs the resolved request and the response status through the `log`
    /// facade at debug level.
    #[must_use]
    pub fn debug(mut self) -> Self {
        self.debug_enabled = true;
        self
    }

    /// Set the request timeout in milliseconds
    ///
    /// The deadline covers dispatch up to the arrival of the response head.
    ///
    /// # Errors
    ///
    /// Fails with a range error unless `millis` is positive.
    ///
    /// # Examples
    /// ```no_run
    /// # use courier::{ClientExt, HttpClient};
    /// # fn run(client: &HttpClient) -> courier::Result<()> {
    /// let _builder = client.get("https://api.example.com/data")?.timeout_millis(1_500)?;
    /// assert!(client.get("https://api.example.com/data")?.timeout_millis(0).is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn timeout_millis(mut self, millis: i64) -> Result<Self> {
        let millis = u64::try_from(millis)
            .ok()
            .filter(|m| *m > 0)
            .ok_or_else(|| error::out_of_range("timeout", millis))?;
        self.timeout = Duration::from_millis(millis);
        Ok(self)
    }

    /// Set the request timeout from a `Duration`
    ///
    /// # Errors
    ///
    /// Fails with a range error on a zero duration.
    pub fn timeout(mut self, timeout: Duration) -> Result<Self> {
        if timeout.is_zero() {
            return Err(error::out_of_range("timeout", 0));
        }
        self.timeout = timeout;
        Ok(self)
    }
}

impl fmt::Debug for RequestBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestBuilder")
            .field("url", &self.url.as_str())
            .field("method", &self.method)
            .field("body_len", &self.body.len())
            .field("media_type", &self.media_type)
            .field("encoding", &self.encoding.name())
            .field("headers", &self.headers)
            .field("multipart_fields", &self.multipart_fields.len())
            .field("encoded_form", &self.encoded_form.as_ref().map(Vec::len))
            .field("timeout", &self.timeout)
            .field("debug_enabled", &self.debug_enabled)
            .finish()
    }
}

/// Request factories on the shared client
///
/// Each returns a [`RequestBuilder`] bound to the client, with the method
/// preset where the name says so.
pub trait ClientExt {
    /// Start a `GET` request; the method can be changed later
    ///
    /// # Errors
    ///
    /// Fails if `url` is not an absolute `http`/`https` URL.
    fn request(&self, url: &str) -> Result<RequestBuilder>;

    /// # Errors
    ///
    /// See [`ClientExt::request`].
    fn get(&self, url: &str) -> Result<RequestBuilder> {
        self.request(url)
    }

    /// # Errors
    ///
    /// See [`ClientExt::request`].
    fn post(&self, url: &str) -> Result<RequestBuilder> {
        Ok(self.request(url)?.method(Method::POST))
    }

    /// # Errors
    ///
    /// See [`ClientExt::request`].
    fn put(&self, url: &str) -> Result<RequestBuilder> {
        Ok(self.request(url)?.method(Method::PUT))
    }

    /// # Errors
    ///
    /// See [`ClientExt::request`].
    fn patch(&self, url: &str) -> Result<RequestBuilder> {
        Ok(self.request(url)?.method(Method::PATCH))
    }

    /// # Errors
    ///
    /// See [`ClientExt::request`].
    fn delete(&self, url: &str) -> Result<RequestBuilder> {
        Ok(self.request(url)?.method(Method::DELETE))
    }
}

impl ClientExt for HttpClient {
    fn request(&self, url: &str) -> Result<RequestBuilder> {
        RequestBuilder::create(self, url)
    }
}
