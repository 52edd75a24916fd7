//! Encode targets - where a value lands on the outgoing request

use std::fmt;

/// Identifies which physical carrier of the request a value belongs to.
///
/// Every `set_*` operation on an encoder is tagged with a `Target`; the
/// encoders route the value to the matching carrier or reject the
/// combination. The set is closed so routing matches stay exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// A `{name}` placeholder segment of the URL path
    Path,
    /// A single query string parameter
    Query,
    /// A single named header
    Header,
    /// A map of headers, entry names joined onto a common prefix
    Headers,
    /// A named field of the structured body document
    Body,
    /// The raw request payload
    Payload,
}

impl Target {
    /// Wire-facing name of the target, used in error messages
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Target::Path => "path",
            Target::Query => "query",
            Target::Header => "header",
            Target::Headers => "headers",
            Target::Body => "body",
            Target::Payload => "payload",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
