use std::error::Error as StdError;
use std::fmt;

use crate::target::Target;

/// A Result alias where the Err case is the crate `Error`.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents errors that can occur while encoding a request.
pub struct Error {
    pub inner: Box<Inner>,
}

pub struct Inner {
    pub kind: Kind,
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

#[derive(Debug, Clone)]
pub enum Kind {
    /// A `set_*` operation was tagged with a target it cannot route
    Routing {
        op: &'static str,
        target: Target,
        key: String,
    },
    /// A stream value was tagged with anything but the payload target
    Stream { target: Target },
    /// Both a structured body and a raw payload were produced at assembly
    AmbiguousBody,
    /// A header name or value could not be encoded
    Header,
    /// A path placeholder could not be filled
    Path,
    /// A value could not render itself for its carrier
    Marshal,
    /// The structured body document could not be serialized
    Body,
}

impl Error {
    pub fn new(kind: Kind) -> Error {
        Error {
            inner: Box::new(Inner { kind, source: None }),
        }
    }

    #[must_use = "Error builder methods return a new Error and should be used"]
    pub fn with<E: Into<Box<dyn StdError + Send + Sync>>>(mut self, source: E) -> Error {
        self.inner.source = Some(source.into());
        self
    }

    #[must_use]
    pub fn kind(&self) -> &Kind {
        &self.inner.kind
    }

    /// True for the routing taxonomy (latched by a `set_*` call)
    #[must_use]
    pub fn is_routing(&self) -> bool {
        matches!(self.inner.kind, Kind::Routing { .. } | Kind::Stream { .. })
    }

    /// True for the assembly-time mutual-exclusion failure
    #[must_use]
    pub fn is_ambiguous_body(&self) -> bool {
        matches!(self.inner.kind, Kind::AmbiguousBody)
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_struct("restwire::Error");

        f.field("kind", &self.inner.kind);

        if let Some(ref source) = self.inner.source {
            f.field("source", source);
        }

        f.finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner.kind {
            Kind::Routing { op, target, key } => {
                write!(f, "unknown encode target for {op}: {target}, {key}")
            }
            Kind::Stream { target } => {
                write!(f, "invalid target {target} for set_stream, must be payload")
            }
            Kind::AmbiguousBody => {
                f.write_str("ambiguous body: both structured body and raw payload produced")
            }
            Kind::Header => f.write_str("header encode error"),
            Kind::Path => f.write_str("path encode error"),
            Kind::Marshal => f.write_str("value marshal error"),
            Kind::Body => f.write_str("body encode error"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner
            .source
            .as_ref()
            .map(|err| &**err as &(dyn StdError + 'static))
    }
}
