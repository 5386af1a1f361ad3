//! Axum extractors for request handling
//!
//! JSON bodies and path identifiers, both rejecting with [`ApiError`](crate::response::ApiError).

mod json;
mod path;

pub use json::JsonBody;
pub use path::EventIdPath;
