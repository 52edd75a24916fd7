//! The composite REST+JSON encoder

use http::Method;

use crate::body::RequestBody;
use crate::error::{self, Error, Result};
use crate::json::JsonBodyEncoder;
use crate::marshal::{
    FieldMarshaler, ListWriter, MapWriter, StreamMarshaler, ValueMarshaler,
};
use crate::metadata::Metadata;
use crate::request::Request;
use crate::rest::RestEncoder;
use crate::target::Target;

/// Combines the structural and body encoders, delegating to them by target.
///
/// It is invalid to produce both a structured body and a raw payload on the
/// same encoder; [`assemble`](Self::assemble) rejects that combination.
///
/// Routing mistakes latch rather than raise: the first error wins, every
/// later `set_*` call is a no-op, and the latched error surfaces from
/// `assemble`. `assemble` consumes the encoder, so nothing can be set after
/// it.
pub struct Encoder {
    method: Method,
    structural: RestEncoder,
    body: JsonBodyEncoder,
    err: Option<Error>,
}

impl Encoder {
    /// Create an encoder for the given request template. The template's
    /// method drives body-to-query redirection for GET requests.
    #[must_use]
    pub fn new(request: Request) -> Self {
        let method = request.method().clone();
        Self {
            method,
            structural: RestEncoder::new(request),
            body: JsonBodyEncoder::new(),
            err: None,
        }
    }

    /// Create an encoder over caller-seeded sub-encoders.
    #[must_use]
    pub fn from_parts(structural: RestEncoder, body: JsonBodyEncoder) -> Self {
        let method = structural.request().method().clone();
        Self {
            method,
            structural,
            body,
            err: None,
        }
    }

    /// The HTTP method of the in-flight request
    #[inline]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Check if an error has latched
    #[inline]
    pub fn has_error(&self) -> bool {
        self.err.is_some()
    }

    /// The latched error, if any
    #[inline]
    pub fn error(&self) -> Option<&Error> {
        self.err.as_ref()
    }

    fn latch(&mut self, err: Error) {
        if self.err.is_none() {
            self.err = Some(err);
        }
    }

    /// Route a scalar value to the path, query, headers, or body.
    ///
    /// If the request's method is GET, body and payload values are written
    /// to the query string instead of a body that verb should not carry.
    pub fn set_scalar(&mut self, t: Target, k: &str, v: &dyn ValueMarshaler, meta: &Metadata) {
        if self.err.is_some() {
            return;
        }

        match t {
            Target::Path | Target::Query | Target::Header => {
                self.structural.set_scalar(t, k, v, meta);
            }
            Target::Body | Target::Payload => {
                if self.method == Method::GET {
                    self.structural.set_scalar(t, k, v, meta);
                } else {
                    self.body.set_scalar(t, k, v, meta);
                }
            }
            Target::Headers => self.latch(error::routing("set_scalar", t, k)),
        }
    }

    /// Route a stream to the raw payload of the request. Streams never
    /// redirect: any target but payload is an error regardless of method.
    pub fn set_stream(&mut self, t: Target, k: &str, v: &dyn StreamMarshaler, meta: &Metadata) {
        if self.err.is_some() {
            return;
        }

        match t {
            Target::Payload => self.structural.set_stream(t, k, v, meta),
            Target::Path
            | Target::Query
            | Target::Header
            | Target::Headers
            | Target::Body => self.latch(error::stream_target(t)),
        }
    }

    /// Route a nested sequence to the headers, query, or body. Collections
    /// are not subject to GET redirection: they cannot be flattened into a
    /// query string unambiguously, so body lists stay in the body.
    pub fn set_list<F>(&mut self, t: Target, k: &str, write: F, meta: &Metadata)
    where
        F: FnOnce(&mut dyn ListWriter),
    {
        if self.err.is_some() {
            return;
        }

        match t {
            Target::Header | Target::Query => self.structural.set_list(t, k, write, meta),
            Target::Body => self.body.set_list(t, k, write, meta),
            Target::Path | Target::Headers | Target::Payload => {
                self.latch(error::routing("set_list", t, k));
            }
        }
    }

    /// Route a nested mapping to the query, headers, or body.
    pub fn set_map<F>(&mut self, t: Target, k: &str, write: F, meta: &Metadata)
    where
        F: FnOnce(&mut dyn MapWriter),
    {
        if self.err.is_some() {
            return;
        }

        match t {
            Target::Query | Target::Headers => self.structural.set_map(t, k, write, meta),
            Target::Body => self.body.set_map(t, k, write, meta),
            Target::Path | Target::Header | Target::Payload => {
                self.latch(error::routing("set_map", t, k));
            }
        }
    }

    /// Route a nested type's fields to the body.
    pub fn set_fields(&mut self, t: Target, k: &str, m: &dyn FieldMarshaler, meta: &Metadata) {
        if self.err.is_some() {
            return;
        }

        match t {
            Target::Payload | Target::Body => self.body.set_fields(t, k, m, meta),
            Target::Path | Target::Query | Target::Header | Target::Headers => {
                self.latch(error::routing("set_fields", t, k));
            }
        }
    }

    /// Finalize both sub-encoders and return the assembled request with at
    /// most one body.
    ///
    /// A latched error is returned as-is, without finalizing anything: the
    /// earliest error always wins. Otherwise the structural encoder
    /// finalizes first, then the body encoder; if both produced content the
    /// build fails with an ambiguous-body error and no partial result.
    pub fn assemble(self) -> Result<(Request, Option<RequestBody>)> {
        if let Some(err) = self.err {
            return Err(err);
        }

        let (request, payload) = self.structural.finalize()?;
        let structured = self.body.finalize()?;

        if payload.is_some() && structured.is_some() {
            return Err(error::ambiguous_body());
        }

        let body = match (payload, structured) {
            (Some(reader), None) => Some(RequestBody::Payload(reader)),
            (None, Some(bytes)) => Some(RequestBody::Structured(bytes)),
            _ => None,
        };

        Ok((request, body))
    }
}
