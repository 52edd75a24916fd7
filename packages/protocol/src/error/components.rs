//! Typed component errors carried as sources inside the crate `Error`

use thiserror::Error;

/// Header-related errors.
#[derive(Debug, Clone, Error)]
pub enum HeaderError {
    /// Represents an error when a header name is invalid.
    #[error("invalid header name `{name}`: {message}")]
    InvalidName {
        /// The rejected header name
        name: String,
        /// Error message describing why the name was rejected
        message: String,
    },
    /// Represents an error when a header value is invalid.
    #[error("invalid value for header `{name}`: {message}")]
    InvalidValue {
        /// The header the value was destined for
        name: String,
        /// Error message describing why the value was rejected
        message: String,
    },
}

/// Path substitution errors.
#[derive(Debug, Clone, Error)]
pub enum PathError {
    /// The URL path template has no placeholder for the given key.
    #[error("no `{{{key}}}` placeholder in path `{path}`")]
    MissingPlaceholder { key: String, path: String },
}

/// Errors raised by value marshalers.
#[derive(Debug, Clone, Error)]
pub enum MarshalError {
    #[error("non-finite float cannot be encoded as a JSON number")]
    NonFiniteFloat,
    #[error("nested object cannot be rendered into a query or header collection")]
    ObjectInStructuralCollection,
    #[error("json serialization failed: {0}")]
    Json(String),
    /// Escape hatch for marshaler implementations outside this crate.
    #[error("{0}")]
    Custom(String),
}
