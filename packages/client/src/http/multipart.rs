//! `multipart/form-data` bodies built from ordered text fields

use std::fmt;

use bytes::{BufMut, Bytes, BytesMut};

const BOUNDARY_PREFIX: &str = "----formdata-courier-";

/// A multipart form with text fields in insertion order.
#[derive(Clone, PartialEq, Eq)]
pub struct MultipartForm {
    boundary: String,
    fields: Vec<(String, String)>,
}

impl MultipartForm {
    /// Create a form with a freshly generated boundary.
    #[must_use]
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self::with_boundary(generate_boundary(), fields)
    }

    #[must_use]
    pub fn with_boundary(boundary: impl Into<String>, fields: Vec<(String, String)>) -> Self {
        Self {
            boundary: boundary.into(),
            fields,
        }
    }

    #[must_use]
    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    #[must_use]
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// `multipart/form-data; boundary=...`
    #[must_use]
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// Serialize the form into its wire representation.
    #[must_use]
    pub fn to_bytes(&self) -> Bytes {
        let mut buf = BytesMut::new();

        for (name, value) in &self.fields {
            buf.put_slice(b"--");
            buf.put_slice(self.boundary.as_bytes());
            buf.put_slice(b"\r\n");
            buf.put_slice(b"Content-Disposition: form-data; name=\"");
            buf.put_slice(escape_name(name).as_bytes());
            buf.put_slice(b"\"\r\n\r\n");
            buf.put_slice(value.as_bytes());
            buf.put_slice(b"\r\n");
        }

        buf.put_slice(b"--");
        buf.put_slice(self.boundary.as_bytes());
        buf.put_slice(b"--\r\n");

        buf.freeze()
    }
}

impl fmt::Debug for MultipartForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultipartForm")
            .field("boundary", &self.boundary)
            .field("fields", &self.fields.len())
            .finish()
    }
}

fn generate_boundary() -> String {
    format!("{BOUNDARY_PREFIX}{:016x}", fastrand::u64(..))
}

// Quotes and line breaks would end the quoted name early.
fn escape_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for ch in name.chars() {
        match ch {
            '"' => out.push_str("%22"),
            '\r' => out.push_str("%0D"),
            '\n' => out.push_str("%0A"),
            c => out.push(c),
        }
    }
    out
}
