//! Header management
//!
//! Header names are case-insensitive and every setter replaces: setting a
//! name that already exists leaves exactly one header with the new value.

use courier_client::error::{self, Result};
use http::header::{ACCEPT, USER_AGENT};
use http::{HeaderName, HeaderValue};

use crate::builder::core::RequestBuilder;

impl RequestBuilder {
    /// Set a header, replacing any existing header with the same name
    ///
    /// # Errors
    ///
    /// Fails if `name` is blank or not a valid header name, or if `value`
    /// contains characters not allowed in a header value.
    ///
    /// # Examples
    /// ```no_run
    /// # use courier::{ClientExt, HttpClient};
    /// # fn run(client: &HttpClient) -> courier::Result<()> {
    /// let request = client
    ///     .get("https://api.example.com/data")?
    ///     .header("Content-Type", "text/csv")?
    ///     .header("content-type", "application/json")?
    ///     .build()?;
    /// assert_eq!(request.headers().get_all("content-type").iter().count(), 1);
    /// # Ok(())
    /// # }
    /// ```
    pub fn header(self, name: &str, value: &str) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(error::blank("header name"));
        }
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|_| error::invalid_header_name(name))?;
        let header_value =
            HeaderValue::from_str(value).map_err(|_| error::invalid_header_value(name))?;
        Ok(self.insert_header(header_name, header_value))
    }

    /// Set an already validated header, replacing any existing value
    #[must_use]
    pub fn insert_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        if self.debug_enabled {
            log::debug!("courier: set header {name}");
        }
        self.headers.insert(name, value);
        self
    }

    /// Set several headers at once
    ///
    /// # Errors
    ///
    /// Fails on the first pair [`header`](Self::header) would reject.
    pub fn headers<'a>(
        mut self,
        headers_config: impl Into<hashbrown::HashMap<&'a str, &'a str>>,
    ) -> Result<Self> {
        for (name, value) in headers_config.into() {
            self = self.header(name, value)?;
        }
        Ok(self)
    }

    /// Set the `User-Agent` header
    ///
    /// # Errors
    ///
    /// Fails if `user_agent` is not a valid header value.
    pub fn user_agent(self, user_agent: &str) -> Result<Self> {
        let value = HeaderValue::from_str(user_agent)
            .map_err(|_| error::invalid_header_value(USER_AGENT.as_str()))?;
        Ok(self.insert_header(USER_AGENT, value))
    }

    /// Set the `Accept` header
    ///
    /// # Errors
    ///
    /// Fails if `accept` is not a valid header value.
    pub fn accept(self, accept: &str) -> Result<Self> {
        let value = HeaderValue::from_str(accept)
            .map_err(|_| error::invalid_header_value(ACCEPT.as_str()))?;
        Ok(self.insert_header(ACCEPT, value))
    }
}
