//! # Restwire Public API
//!
//! Composite REST+JSON request encoder with a fluent builder pattern.
//! Describe each value once, tagged with where it belongs - path, query,
//! header, body field, or raw payload - and assemble one final request.

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;

// Re-export all public API components
pub use builder::EncodeBuilder;

// Re-export important types from the protocol package
pub use restwire_protocol::{
    Error, FieldMarshaler, FieldWriter, JsonBodyEncoder, ListWriter, MapWriter, Metadata,
    Request, RequestBody, RestEncoder, RestJsonEncoder, Result, Serialized, StreamMarshaler,
    Target, TimeValue, TimestampFormat, ValueMarshaler,
};

// HTTP standard types
pub use http::{HeaderMap, HeaderName, HeaderValue, Method, Version};

// URL handling
pub use url::Url;

// Bytes for bodies and blob values
pub use bytes::Bytes;

/// Main entry point providing static builder constructors
pub struct RestJson;

impl RestJson {
    /// Start encoding a GET request
    ///
    /// Shorthand for `EncodeBuilder::new(Request::get(url))`
    #[must_use]
    pub fn get(url: Url) -> EncodeBuilder {
        EncodeBuilder::new(Request::get(url))
    }

    /// Start encoding a POST request
    #[must_use]
    pub fn post(url: Url) -> EncodeBuilder {
        EncodeBuilder::new(Request::post(url))
    }

    /// Start encoding a PUT request
    #[must_use]
    pub fn put(url: Url) -> EncodeBuilder {
        EncodeBuilder::new(Request::put(url))
    }

    /// Start encoding a DELETE request
    #[must_use]
    pub fn delete(url: Url) -> EncodeBuilder {
        EncodeBuilder::new(Request::delete(url))
    }

    /// Start encoding a PATCH request
    #[must_use]
    pub fn patch(url: Url) -> EncodeBuilder {
        EncodeBuilder::new(Request::patch(url))
    }

    /// Start encoding over a caller-built request template
    #[must_use]
    pub fn for_request(request: Request) -> EncodeBuilder {
        EncodeBuilder::new(request)
    }
}

/// Start encoding over a caller-built request template
///
/// Shorthand for `RestJson::for_request(request)`
#[must_use]
pub fn encode(request: Request) -> EncodeBuilder {
    RestJson::for_request(request)
}
