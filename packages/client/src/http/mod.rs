//! Request values and payload encodings

pub mod content;
pub mod multipart;
pub mod request;

pub use content::Content;
pub use multipart::MultipartForm;
pub use request::{HttpRequest, target_uri};

/// Responses are passed through exactly as the transport produced them.
pub type HttpResponse = ::http::Response<hyper::body::Incoming>;
