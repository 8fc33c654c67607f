//! HTTP client modules
//!
//! Core execution, construction and statistics live in separate files.

pub mod configuration;
pub mod core;
pub mod stats;

pub use self::core::HttpClient;

pub use configuration::HttpClientBuilder;
pub use stats::{ClientStats, ClientStatsSnapshot};
