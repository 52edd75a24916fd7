use super::types::{Error, Kind};
use super::BoxError;
use crate::target::Target;

/// Creates an `Error` for a `set_*` call whose target is outside the
/// operation's valid set.
pub fn routing(op: &'static str, target: Target, key: &str) -> Error {
    Error::new(Kind::Routing {
        op,
        target,
        key: key.to_string(),
    })
}

/// Creates an `Error` for a stream tagged with a non-payload target.
pub fn stream_target(target: Target) -> Error {
    Error::new(Kind::Stream { target })
}

/// Creates an `Error` for the assembly-time mutual-exclusion failure.
pub fn ambiguous_body() -> Error {
    Error::new(Kind::AmbiguousBody)
}

/// Creates an `Error` for a header encoding failure.
pub fn header<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Header).with(e.into())
}

/// Creates an `Error` for a path substitution failure.
pub fn path<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Path).with(e.into())
}

/// Creates an `Error` for a value marshal failure.
pub fn marshal<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Marshal).with(e.into())
}

/// Creates an `Error` for a body serialization failure.
pub fn body<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Body).with(e.into())
}
