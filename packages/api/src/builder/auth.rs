//! Authentication methods for HTTP requests
//!
//! Both schemes write the `Authorization` header, so whichever is called
//! last wins.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use courier_client::error::{self, Result};
use http::HeaderValue;
use http::header::AUTHORIZATION;

use crate::builder::core::RequestBuilder;

impl RequestBuilder {
    /// Set basic authentication header
    ///
    /// The `username:password` string is encoded one byte per character
    /// (ISO-8859-1) before base64 encoding; characters outside that range
    /// are sent as `?`.
    ///
    /// # Errors
    ///
    /// Never fails for any input; the `Result` keeps the chain uniform with
    /// the other header setters.
    ///
    /// # Examples
    /// ```no_run
    /// # use courier::{ClientExt, HttpClient};
    /// # fn run(client: &HttpClient) -> courier::Result<()> {
    /// let request = client
    ///     .get("https://api.example.com/protected")?
    ///     .basic_auth("user", "pass")?
    ///     .build()?;
    /// assert_eq!(request.headers()["authorization"], "Basic dXNlcjpwYXNz");
    /// # Ok(())
    /// # }
    /// ```
    pub fn basic_auth(self, username: &str, password: &str) -> Result<Self> {
        let credentials = latin1_bytes(&format!("{username}:{password}"));
        let encoded = STANDARD.encode(credentials);
        let mut value = HeaderValue::try_from(format!("Basic {encoded}"))
            .map_err(|_| error::invalid_header_value(AUTHORIZATION.as_str()))?;
        value.set_sensitive(true);
        Ok(self.insert_header(AUTHORIZATION, value))
    }

    /// Set bearer token authentication header
    ///
    /// # Errors
    ///
    /// Fails if `token` is blank or contains characters not allowed in a
    /// header value.
    pub fn bearer_auth(self, token: &str) -> Result<Self> {
        if token.trim().is_empty() {
            return Err(error::blank("bearer token"));
        }
        let mut value = HeaderValue::try_from(format!("Bearer {token}"))
            .map_err(|_| error::invalid_header_value(AUTHORIZATION.as_str()))?;
        value.set_sensitive(true);
        Ok(self.insert_header(AUTHORIZATION, value))
    }
}

fn latin1_bytes(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::latin1_bytes;

    #[test]
    fn latin1_maps_one_byte_per_char() {
        assert_eq!(latin1_bytes("user:pass"), b"user:pass");
        assert_eq!(latin1_bytes("é"), vec![0xe9]);
        assert_eq!(latin1_bytes("€"), b"?");
    }
}
