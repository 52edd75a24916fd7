//! Core `EncodeBuilder` structure and base functionality

use std::fmt;

use http::Method;
use restwire_protocol::{Request, RequestBody, Result, RestJsonEncoder};

/// Fluent builder over the composite encoder.
///
/// Every value-setting method consumes and returns the builder, so a whole
/// request encodes as one chain ending in [`assemble`](Self::assemble).
/// Routing mistakes latch inside the underlying encoder and surface from
/// `assemble`; nothing in the chain returns early.
pub struct EncodeBuilder {
    pub(crate) encoder: RestJsonEncoder,
    /// Debug logging enabled flag
    pub(crate) debug_enabled: bool,
}

impl EncodeBuilder {
    /// Start building over a request template
    #[must_use]
    pub fn new(request: Request) -> Self {
        Self {
            encoder: RestJsonEncoder::new(request),
            debug_enabled: false,
        }
    }

    /// Enable debug logging for this encode chain
    ///
    /// When enabled, each routed value is logged to help with debugging
    /// and development.
    #[must_use]
    pub fn debug(mut self) -> Self {
        self.debug_enabled = true;
        self
    }

    /// The HTTP method of the request being encoded
    #[inline]
    pub fn method(&self) -> &Method {
        self.encoder.method()
    }

    /// Check whether an error has latched in the underlying encoder
    #[inline]
    pub fn has_error(&self) -> bool {
        self.encoder.has_error()
    }

    /// Finalize the chain into the assembled request and its body.
    ///
    /// Returns the first error latched by any earlier call, a sub-encoder
    /// finalize failure, or the ambiguous-body error if both a structured
    /// body and a raw payload were produced.
    pub fn assemble(self) -> Result<(Request, Option<RequestBody>)> {
        if self.debug_enabled {
            log::debug!("Encode Builder: assembling request");
        }
        self.encoder.assemble()
    }
}

impl fmt::Debug for EncodeBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodeBuilder")
            .field("method", self.encoder.method())
            .field("debug_enabled", &self.debug_enabled)
            .field("has_error", &self.encoder.has_error())
            .finish()
    }
}
