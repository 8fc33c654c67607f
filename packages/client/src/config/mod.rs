//! Client configuration
//!
//! `HttpConfig` holds the settings shared by every request sent through one
//! [`HttpClient`](crate::HttpClient).

use std::time::Duration;

/// Deadline applied to a request when the builder is not told otherwise
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(20_000);

/// `User-Agent` sent when a request sets none
pub const DEFAULT_USER_AGENT: &str = concat!("courier/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    pub user_agent: String,
    /// Initial timeout of builders created from the client
    pub timeout: Duration,
    pub tcp_nodelay: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            tcp_nodelay: true,
        }
    }
}

impl HttpConfig {
    /// Set the default `User-Agent`
    ///
    /// # Examples
    /// ```
    /// use courier_client::HttpConfig;
    ///
    /// let config = HttpConfig::default().with_user_agent("my-app/1.0");
    /// assert_eq!(config.user_agent, "my-app/1.0");
    /// ```
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the timeout new builders start with
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_tcp_nodelay(mut self, enabled: bool) -> Self {
        self.tcp_nodelay = enabled;
        self
    }
}
