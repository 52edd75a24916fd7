//! The structural encoder

use http::{HeaderName, HeaderValue};

use super::path::fill_placeholder;
use crate::error::{self, Error, HeaderError, MarshalError, PathError, Result};
use crate::marshal::{
    FieldMarshaler, ListWriter, MapWriter, PayloadReader, StreamMarshaler, ValueMarshaler,
};
use crate::metadata::Metadata;
use crate::request::Request;
use crate::target::Target;

/// Renders path-, query-, and header-targeted values onto a request
/// envelope, and holds the raw payload stream until finalize.
///
/// Body- and payload-targeted scalars are also accepted and rendered into
/// the query string; this is the landing site for the composite encoder's
/// GET redirection.
///
/// Errors latch on first write and surface at [`finalize`](Self::finalize);
/// once latched, every subsequent `set_*` call is a no-op.
pub struct RestEncoder {
    request: Request,
    payload: Option<PayloadReader>,
    err: Option<Error>,
}

impl RestEncoder {
    /// Create an encoder seeded from the request template
    #[must_use]
    pub fn new(request: Request) -> Self {
        Self {
            request,
            payload: None,
            err: None,
        }
    }

    /// The request template being encoded onto
    #[inline]
    pub fn request(&self) -> &Request {
        &self.request
    }

    /// Check if an error has latched
    #[inline]
    pub fn has_error(&self) -> bool {
        self.err.is_some()
    }

    fn latch(&mut self, err: Error) {
        if self.err.is_none() {
            self.err = Some(err);
        }
    }

    /// Route a scalar value to the path, query string, or headers.
    pub fn set_scalar(&mut self, t: Target, k: &str, v: &dyn ValueMarshaler, meta: &Metadata) {
        if self.err.is_some() {
            return;
        }

        let name = meta.wire_name(k);
        let outcome = match t {
            Target::Path => self.set_path(name, v),
            Target::Query | Target::Body | Target::Payload => self.set_query(name, v),
            Target::Header => self.set_header(name, v),
            Target::Headers => Err(error::routing("set_scalar", t, k)),
        };

        if let Err(err) = outcome {
            self.latch(err);
        }
    }

    /// Set the raw payload stream of the request.
    pub fn set_stream(&mut self, t: Target, _k: &str, v: &dyn StreamMarshaler, _meta: &Metadata) {
        if self.err.is_some() {
            return;
        }

        match t {
            Target::Payload => match v.marshal_stream() {
                Ok(reader) => self.payload = Some(reader),
                Err(e) => self.latch(error::marshal(e)),
            },
            _ => self.latch(error::stream_target(t)),
        }
    }

    /// Route a sequence value to repeated query pairs or headers.
    pub fn set_list<F>(&mut self, t: Target, k: &str, write: F, meta: &Metadata)
    where
        F: FnOnce(&mut dyn ListWriter),
    {
        if self.err.is_some() {
            return;
        }

        let items = match self.collect_list(t, k, write) {
            Some(items) => items,
            None => return,
        };

        let name = meta.wire_name(k);
        let outcome = match t {
            Target::Query => self.apply_query_list(name, items),
            _ => self.apply_header_list(name, items, meta.flatten),
        };

        if let Err(err) = outcome {
            self.latch(err);
        }
    }

    /// Run the caller's list callback if the target is routable, latching
    /// otherwise. Returns the collected elements only on the happy path.
    fn collect_list<F>(&mut self, t: Target, k: &str, write: F) -> Option<Vec<String>>
    where
        F: FnOnce(&mut dyn ListWriter),
    {
        match t {
            Target::Header | Target::Query => {}
            _ => {
                self.latch(error::routing("set_list", t, k));
                return None;
            }
        }

        let mut writer = StringListWriter::default();
        write(&mut writer);
        if let Some(err) = writer.err {
            self.latch(err);
            return None;
        }
        Some(writer.items)
    }

    /// Route a mapping value to query pairs or prefixed headers.
    pub fn set_map<F>(&mut self, t: Target, k: &str, write: F, meta: &Metadata)
    where
        F: FnOnce(&mut dyn MapWriter),
    {
        if self.err.is_some() {
            return;
        }

        match t {
            Target::Query | Target::Headers => {}
            _ => {
                self.latch(error::routing("set_map", t, k));
                return;
            }
        }

        let mut writer = StringMapWriter::default();
        write(&mut writer);
        if let Some(err) = writer.err {
            self.latch(err);
            return;
        }

        let outcome = if t == Target::Query {
            let mut pairs = self.request.url_mut().query_pairs_mut();
            for (entry, value) in &writer.entries {
                pairs.append_pair(entry, value);
            }
            drop(pairs);
            Ok(())
        } else {
            // The key acts as a shared name prefix for every entry.
            self.apply_header_map(meta.wire_name(k), writer.entries)
        };

        if let Err(err) = outcome {
            self.latch(err);
        }
    }

    /// Finalize the envelope, yielding the finished request and the raw
    /// payload if one was set. The earliest latched error wins.
    pub fn finalize(self) -> Result<(Request, Option<PayloadReader>)> {
        if let Some(err) = self.err {
            return Err(err);
        }

        tracing::debug!(url = %self.request.url(), "finalized request envelope");
        Ok((self.request, self.payload))
    }

    fn set_path(&mut self, name: &str, v: &dyn ValueMarshaler) -> Result<()> {
        let value = v.marshal_string().map_err(error::marshal)?;
        let current = self.request.url().path().to_string();
        match fill_placeholder(&current, name, &value) {
            Some(filled) => {
                self.request.url_mut().set_path(&filled);
                Ok(())
            }
            None => Err(error::path(PathError::MissingPlaceholder {
                key: name.to_string(),
                path: current,
            })),
        }
    }

    fn set_query(&mut self, name: &str, v: &dyn ValueMarshaler) -> Result<()> {
        let value = v.marshal_string().map_err(error::marshal)?;
        self.request
            .url_mut()
            .query_pairs_mut()
            .append_pair(name, &value);
        Ok(())
    }

    fn set_header(&mut self, name: &str, v: &dyn ValueMarshaler) -> Result<()> {
        let value = v.marshal_string().map_err(error::marshal)?;
        let (header_name, header_value) = encode_header(name, &value)?;
        self.request.headers_mut().insert(header_name, header_value);
        Ok(())
    }

    fn apply_query_list(&mut self, name: &str, items: Vec<String>) -> Result<()> {
        let mut pairs = self.request.url_mut().query_pairs_mut();
        for item in &items {
            pairs.append_pair(name, item);
        }
        drop(pairs);
        Ok(())
    }

    fn apply_header_list(&mut self, name: &str, items: Vec<String>, flatten: bool) -> Result<()> {
        if flatten {
            let (header_name, header_value) = encode_header(name, &items.join(", "))?;
            self.request.headers_mut().insert(header_name, header_value);
            return Ok(());
        }

        for item in items {
            let (header_name, header_value) = encode_header(name, &item)?;
            self.request.headers_mut().append(header_name, header_value);
        }
        Ok(())
    }

    fn apply_header_map(&mut self, prefix: &str, entries: Vec<(String, String)>) -> Result<()> {
        for (entry, value) in entries {
            let full_name = format!("{prefix}{entry}");
            let (header_name, header_value) = encode_header(&full_name, &value)?;
            self.request.headers_mut().insert(header_name, header_value);
        }
        Ok(())
    }
}

fn encode_header(name: &str, value: &str) -> Result<(HeaderName, HeaderValue)> {
    let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
        error::header(HeaderError::InvalidName {
            name: name.to_string(),
            message: e.to_string(),
        })
    })?;
    let header_value = HeaderValue::from_str(value).map_err(|e| {
        error::header(HeaderError::InvalidValue {
            name: name.to_string(),
            message: e.to_string(),
        })
    })?;
    Ok((header_name, header_value))
}

/// Collects list elements in their string wire form.
#[derive(Default)]
struct StringListWriter {
    items: Vec<String>,
    err: Option<Error>,
}

impl ListWriter for StringListWriter {
    fn value(&mut self, v: &dyn ValueMarshaler) {
        if self.err.is_some() {
            return;
        }
        match v.marshal_string() {
            Ok(s) => self.items.push(s),
            Err(e) => self.err = Some(error::marshal(e)),
        }
    }

    fn object(&mut self, _m: &dyn FieldMarshaler) {
        if self.err.is_none() {
            self.err = Some(error::marshal(MarshalError::ObjectInStructuralCollection));
        }
    }
}

/// Collects map entries in their string wire form.
#[derive(Default)]
struct StringMapWriter {
    entries: Vec<(String, String)>,
    err: Option<Error>,
}

impl MapWriter for StringMapWriter {
    fn entry(&mut self, key: &str, v: &dyn ValueMarshaler) {
        if self.err.is_some() {
            return;
        }
        match v.marshal_string() {
            Ok(s) => self.entries.push((key.to_string(), s)),
            Err(e) => self.err = Some(error::marshal(e)),
        }
    }

    fn entry_object(&mut self, _key: &str, _m: &dyn FieldMarshaler) {
        if self.err.is_none() {
            self.err = Some(error::marshal(MarshalError::ObjectInStructuralCollection));
        }
    }
}
