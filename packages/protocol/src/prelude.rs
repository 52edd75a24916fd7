//! Restwire Protocol Prelude
//!
//! The essential types for encoding requests. Only canonical types that are
//! part of the public API belong here.

// Routing and assembly
pub use crate::restjson::Encoder as RestJsonEncoder;

// Carrier encoders
pub use crate::json::JsonBodyEncoder;
pub use crate::rest::RestEncoder;

// Request envelope and result body
pub use crate::body::RequestBody;
pub use crate::request::Request;

// Value routing vocabulary
pub use crate::metadata::Metadata;
pub use crate::target::Target;

// Marshaling surface
pub use crate::marshal::{
    FieldMarshaler, FieldWriter, ListWriter, MapWriter, PayloadReader, Serialized,
    StreamMarshaler, TimeValue, TimestampFormat, ValueMarshaler,
};

// Error types
pub use crate::error::{Error, Kind, Result};

// HTTP standard types from http crate
pub use ::http::{HeaderMap, HeaderName, HeaderValue, Method, Version};

// URL handling
pub use url::Url;

// Bytes for bodies and blob values
pub use bytes::Bytes;
