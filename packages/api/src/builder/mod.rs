//! Request builder modules
//!
//! Provides the fluent API for configuring and sending one HTTP request.

pub mod auth;
pub mod body;
pub mod core;
pub mod headers;
pub mod methods;

pub use self::core::{ClientExt, RequestBuilder};
