//! Assembly result body

use std::fmt;
use std::io::Cursor;

use bytes::Bytes;

use crate::marshal::PayloadReader;

/// The single body a finished request carries: either the serialized
/// structured document or the raw payload stream, never both.
pub enum RequestBody {
    /// Serialized structured-body document
    Structured(Bytes),
    /// Raw payload stream
    Payload(PayloadReader),
}

impl fmt::Debug for RequestBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestBody::Structured(bytes) => f
                .debug_tuple("Structured")
                .field(&format!("{} bytes", bytes.len()))
                .finish(),
            RequestBody::Payload(_) => f.debug_tuple("Payload").field(&"<reader>").finish(),
        }
    }
}

impl RequestBody {
    /// Check whether this is the structured-body variant
    #[inline]
    #[must_use]
    pub fn is_structured(&self) -> bool {
        matches!(self, RequestBody::Structured(_))
    }

    /// Check whether this is the raw payload variant
    #[inline]
    #[must_use]
    pub fn is_payload(&self) -> bool {
        matches!(self, RequestBody::Payload(_))
    }

    /// The structured document bytes, if that is what was produced
    #[inline]
    #[must_use]
    pub fn structured(&self) -> Option<&Bytes> {
        match self {
            RequestBody::Structured(bytes) => Some(bytes),
            RequestBody::Payload(_) => None,
        }
    }

    /// Consume the body as a uniform reader, whichever variant it is
    #[must_use]
    pub fn into_reader(self) -> PayloadReader {
        match self {
            RequestBody::Structured(bytes) => Box::new(Cursor::new(bytes)),
            RequestBody::Payload(reader) => reader,
        }
    }
}
