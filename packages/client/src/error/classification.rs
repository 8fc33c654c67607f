use std::error::Error as StdError;
use std::io;

use super::config::ConfigError;
use super::helpers::TimedOut;
use super::types::{Error, Kind};

impl Error {
    /// Returns true if the error came from request configuration.
    #[must_use]
    pub fn is_builder(&self) -> bool {
        matches!(self.inner.kind, Kind::Builder)
    }

    /// Returns true if the error came from sending the request.
    ///
    /// Deadline expiry and transport failures both land here; use
    /// [`Error::is_timeout`] or [`Error::is_connect`] to tell them apart.
    #[must_use]
    pub fn is_request(&self) -> bool {
        matches!(self.inner.kind, Kind::Request)
    }

    /// Returns true if the error is related to a timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        let mut source = self.source();

        while let Some(err) = source {
            if err.is::<TimedOut>() {
                return true;
            }
            if let Some(hyper_err) = err.downcast_ref::<hyper::Error>()
                && hyper_err.is_timeout()
            {
                return true;
            }
            if let Some(io) = err.downcast_ref::<io::Error>()
                && io.kind() == io::ErrorKind::TimedOut
            {
                return true;
            }
            source = err.source();
        }

        false
    }

    /// Returns true if the connection to the target could not be established.
    #[must_use]
    pub fn is_connect(&self) -> bool {
        let mut source = self.source();

        while let Some(err) = source {
            if let Some(client_err) = err.downcast_ref::<hyper_util::client::legacy::Error>()
                && client_err.is_connect()
            {
                return true;
            }
            source = err.source();
        }

        false
    }

    /// Returns true if a numeric argument such as the timeout was out of range.
    #[must_use]
    pub fn is_range(&self) -> bool {
        self.config_error().is_some_and(ConfigError::is_range)
    }

    /// The configuration problem behind a builder error.
    #[must_use]
    pub fn config_error(&self) -> Option<&ConfigError> {
        self.inner
            .source
            .as_ref()
            .and_then(|err| err.downcast_ref::<ConfigError>())
    }
}
