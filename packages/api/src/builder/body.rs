//! Request body handling
//!
//! Three payload forms can be configured side by side; which one is sent is
//! decided only when the request is built (see
//! [`RequestBuilder::resolve_content`]).

use courier_client::error::{self, Result};
use courier_client::{Content, Encoding};
use http::{HeaderValue, Method};
use serde::Serialize;

use crate::builder::core::RequestBuilder;

impl RequestBuilder {
    /// Set the raw body text, replacing any previous body
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Set the media type of the raw body
    ///
    /// When no media type is set the raw body is sent as `text/plain`.
    ///
    /// # Errors
    ///
    /// Fails if `media_type` is blank or not usable as a header value.
    pub fn media_type(mut self, media_type: &str) -> Result<Self> {
        if media_type.trim().is_empty() {
            return Err(error::blank("media type"));
        }
        HeaderValue::from_str(media_type).map_err(|_| error::invalid_header_value("content-type"))?;
        self.media_type = Some(media_type.to_owned());
        Ok(self)
    }

    /// Set the character encoding of the raw body (UTF-8 by default)
    #[must_use]
    pub fn encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Set the character encoding by WHATWG label, e.g. `"latin1"`
    ///
    /// # Errors
    ///
    /// Fails if the label names no known encoding.
    pub fn encoding_label(self, label: &str) -> Result<Self> {
        let encoding =
            Encoding::for_label(label.trim().as_bytes()).ok_or_else(|| error::unknown_encoding(label))?;
        Ok(self.encoding(encoding))
    }

    /// Append a multipart form field
    ///
    /// Once any field is added the request is sent as `multipart/form-data`
    /// (for methods other than `GET`), taking priority over both the
    /// URL-encoded form and the raw body.
    ///
    /// # Errors
    ///
    /// Fails if `name` is blank.
    pub fn form_field(mut self, name: &str, value: impl Into<String>) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(error::blank("form field name"));
        }
        self.multipart_fields.push((name.to_owned(), value.into()));
        Ok(self)
    }

    /// Replace the URL-encoded form payload wholesale
    ///
    /// Pairs are encoded in iteration order; pass an ordered collection if
    /// the order on the wire matters.
    #[must_use]
    pub fn encoded_form<I, K, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.encoded_form = Some(
            values
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// Serialize `value` as JSON into the raw body, with media type
    /// `application/json`
    ///
    /// # Errors
    ///
    /// Fails if `value` cannot be serialized.
    pub fn json<T: Serialize + ?Sized>(mut self, value: &T) -> Result<Self> {
        self.body = serde_json::to_string(value).map_err(error::serialization_error)?;
        self.media_type = Some("application/json".to_owned());
        Ok(self)
    }

    /// Decide the payload that will be sent
    ///
    /// `GET` never carries a payload. Otherwise multipart fields win, then
    /// the URL-encoded form, then the raw body encoded with the configured
    /// encoding and media type.
    ///
    /// # Errors
    ///
    /// Fails if the URL-encoded form cannot be serialized.
    pub fn resolve_content(&self) -> Result<Option<Content>> {
        if self.method == Method::GET {
            return Ok(None);
        }

        if !self.multipart_fields.is_empty() {
            return Ok(Some(Content::multipart(self.multipart_fields.clone())));
        }

        if let Some(pairs) = &self.encoded_form {
            return Content::url_encoded(pairs).map(Some);
        }

        Ok(Some(Content::text(
            &self.body,
            self.media_type.as_deref(),
            self.encoding,
        )))
    }
}
