//! # Restwire Protocol
//!
//! Composite structured-value encoding for REST+JSON protocols. A single
//! logical message is split across the physical carriers of an HTTP request:
//! URL path segments, query parameters, headers, a structured JSON body, and
//! an optional raw payload stream.
//!
//! ## Architecture
//!
//! - [`restjson::Encoder`] routes each tagged value to the encoder that owns
//!   its carrier and assembles the final request.
//! - [`rest::RestEncoder`] renders path, query, and header targets onto the
//!   request envelope.
//! - [`json::JsonBodyEncoder`] accumulates body-field targets into a JSON
//!   document.
//! - [`marshal`] holds the opaque value/stream producers and the writer
//!   capabilities for collections and nested objects.
//!
//! Errors latch instead of raising: the first routing or encoding error on
//! an encoder wins, later calls become no-ops, and the error surfaces once
//! at assembly.

#![deny(unsafe_code)]
#![warn(clippy::all)]

// Core modules
pub mod body;
pub mod error;
pub mod json;
pub mod marshal;
pub mod metadata;
pub mod request;
pub mod rest;
pub mod restjson;
pub mod target;

// Prelude with canonical types
pub mod prelude;

// Essential public API - only what end users actually need
pub use crate::prelude::*;
