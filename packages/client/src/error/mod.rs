pub mod classification;
pub mod config;
pub mod constructors;
pub mod helpers;
pub mod types;

pub use config::ConfigError;
pub use constructors::*;
pub use helpers::TimedOut;
pub use types::{Error, Kind, Result};
