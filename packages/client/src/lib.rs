//! # courier client
//!
//! The shared machinery behind the `courier` request builder:
//!
//! - [`HttpClient`]: one pooled hyper-util client (HTTP/1.1 and HTTP/2 over
//!   rustls) meant to be built once and shared
//! - [`HttpRequest`]: the immutable, fully resolved request value
//! - [`Content`]: the three payload forms (encoded text, multipart form,
//!   URL-encoded form)
//! - [`Error`]: configuration errors and request failures
//!
//! Responses come back as `http::Response<hyper::body::Incoming>` without
//! any interpretation of the body.

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod error;
pub mod http;

pub mod prelude;

pub use crate::prelude::*;
