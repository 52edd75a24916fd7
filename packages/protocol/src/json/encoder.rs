//! The body encoder

use bytes::Bytes;
use serde_json::{Map, Value};

use super::writers::{JsonFieldWriter, JsonListWriter, JsonMapWriter};
use crate::error::{self, Error, Result};
use crate::marshal::{FieldMarshaler, ListWriter, MapWriter, ValueMarshaler};
use crate::metadata::Metadata;
use crate::target::Target;

/// Accumulates body-field-targeted values into a JSON document and renders
/// it at finalize.
///
/// An encoder that never received a value finalizes to `None`, so an unused
/// body encoder contributes no body to the assembled request. Errors latch
/// on first write; once latched, every subsequent `set_*` call is a no-op.
#[derive(Default)]
pub struct JsonBodyEncoder {
    root: Map<String, Value>,
    touched: bool,
    err: Option<Error>,
}

impl JsonBodyEncoder {
    /// Create an empty body encoder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
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

    /// Set a scalar field of the document.
    pub fn set_scalar(&mut self, t: Target, k: &str, v: &dyn ValueMarshaler, meta: &Metadata) {
        if self.err.is_some() {
            return;
        }

        match t {
            Target::Body | Target::Payload => match v.marshal_json() {
                Ok(value) => {
                    self.root.insert(meta.wire_name(k).to_string(), value);
                    self.touched = true;
                }
                Err(e) => self.latch(error::marshal(e)),
            },
            _ => self.latch(error::routing("set_scalar", t, k)),
        }
    }

    /// Set a sequence field of the document.
    pub fn set_list<F>(&mut self, t: Target, k: &str, write: F, meta: &Metadata)
    where
        F: FnOnce(&mut dyn ListWriter),
    {
        if self.err.is_some() {
            return;
        }

        if t != Target::Body {
            self.latch(error::routing("set_list", t, k));
            return;
        }

        let mut writer = JsonListWriter::default();
        write(&mut writer);
        match writer.err {
            Some(err) => self.latch(err),
            None => {
                self.root
                    .insert(meta.wire_name(k).to_string(), Value::Array(writer.items));
                self.touched = true;
            }
        }
    }

    /// Set a mapping field of the document.
    pub fn set_map<F>(&mut self, t: Target, k: &str, write: F, meta: &Metadata)
    where
        F: FnOnce(&mut dyn MapWriter),
    {
        if self.err.is_some() {
            return;
        }

        if t != Target::Body {
            self.latch(error::routing("set_map", t, k));
            return;
        }

        let mut writer = JsonMapWriter::default();
        write(&mut writer);
        match writer.err {
            Some(err) => self.latch(err),
            None => {
                self.root
                    .insert(meta.wire_name(k).to_string(), Value::Object(writer.map));
                self.touched = true;
            }
        }
    }

    /// Embed a nested type's fields: under a key for body targets, at the
    /// document root for payload targets.
    pub fn set_fields(&mut self, t: Target, k: &str, m: &dyn FieldMarshaler, meta: &Metadata) {
        if self.err.is_some() {
            return;
        }

        match t {
            Target::Body | Target::Payload => {}
            _ => {
                self.latch(error::routing("set_fields", t, k));
                return;
            }
        }

        let mut writer = JsonFieldWriter::default();
        m.marshal_fields(&mut writer);
        if let Some(err) = writer.err {
            self.latch(err);
            return;
        }

        if t == Target::Payload {
            self.root.extend(writer.map);
        } else {
            self.root
                .insert(meta.wire_name(k).to_string(), Value::Object(writer.map));
        }
        self.touched = true;
    }

    /// Finalize the document. `None` when nothing was ever set; the earliest
    /// latched error wins.
    pub fn finalize(self) -> Result<Option<Bytes>> {
        if let Some(err) = self.err {
            return Err(err);
        }

        if !self.touched {
            return Ok(None);
        }

        let document = Value::Object(self.root);
        let serialized = serde_json::to_vec(&document).map_err(error::body)?;
        tracing::debug!(bytes = serialized.len(), "serialized structured body");
        Ok(Some(Bytes::from(serialized)))
    }
}
