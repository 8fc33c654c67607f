//! Resolved request payloads
//!
//! A request carries at most one [`Content`]: encoded text, a multipart
//! form, or a URL-encoded form. Each knows its own `Content-Type`.

use bytes::Bytes;
use encoding_rs::Encoding;

use super::multipart::MultipartForm;
use crate::error::{self, Result};

/// Media type used for text bodies when none was configured
pub const DEFAULT_TEXT_MEDIA_TYPE: &str = "text/plain";

/// Media type of URL-encoded form bodies
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Text already encoded to bytes, tagged with its media type and charset
    Text { bytes: Bytes, content_type: String },
    Multipart(MultipartForm),
    UrlEncoded(String),
}

impl Content {
    /// Encode `body` with `encoding` and tag it with `media_type`.
    ///
    /// The charset parameter always names the encoding actually produced: a
    /// charset already present in `media_type` is replaced, and UTF-16 labels
    /// are tagged UTF-8 because that is what they encode as.
    #[must_use]
    pub fn text(body: &str, media_type: Option<&str>, encoding: &'static Encoding) -> Self {
        let (bytes, used, _) = encoding.encode(body);
        let media_type = media_type.unwrap_or(DEFAULT_TEXT_MEDIA_TYPE);
        let content_type = with_charset(media_type, used);

        Content::Text {
            bytes: Bytes::from(bytes.into_owned()),
            content_type,
        }
    }

    /// Serialize ordered pairs as `application/x-www-form-urlencoded`.
    ///
    /// # Errors
    ///
    /// Returns a builder error if the pairs cannot be serialized.
    pub fn url_encoded(pairs: &[(String, String)]) -> Result<Self> {
        serde_urlencoded::to_string(pairs)
            .map(Content::UrlEncoded)
            .map_err(error::builder)
    }

    #[must_use]
    pub fn multipart(fields: Vec<(String, String)>) -> Self {
        Content::Multipart(MultipartForm::new(fields))
    }

    #[must_use]
    pub fn content_type(&self) -> String {
        match self {
            Content::Text { content_type, .. } => content_type.clone(),
            Content::Multipart(form) => form.content_type(),
            Content::UrlEncoded(_) => FORM_URLENCODED.to_owned(),
        }
    }

    #[must_use]
    pub fn to_bytes(&self) -> Bytes {
        match self {
            Content::Text { bytes, .. } => bytes.clone(),
            Content::Multipart(form) => form.to_bytes(),
            Content::UrlEncoded(encoded) => Bytes::copy_from_slice(encoded.as_bytes()),
        }
    }
}

fn with_charset(media_type: &str, used: &'static Encoding) -> String {
    let mut parts = media_type.split(';');
    let mut content_type = parts.next().unwrap_or_default().trim().to_owned();

    for param in parts.map(str::trim).filter(|p| !p.is_empty()) {
        let is_charset = param
            .get(..8)
            .is_some_and(|key| key.eq_ignore_ascii_case("charset="));
        if !is_charset {
            content_type.push_str("; ");
            content_type.push_str(param);
        }
    }

    content_type.push_str("; charset=");
    content_type.push_str(used.name());
    content_type
}
