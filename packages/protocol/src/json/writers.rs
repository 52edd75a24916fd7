//! Writer capabilities backed by a JSON document in progress

use serde_json::{Map, Value};

use crate::error::{self, Error};
use crate::marshal::{FieldMarshaler, FieldWriter, ListWriter, MapWriter, ValueMarshaler};

/// Collects list elements as JSON values.
#[derive(Default)]
pub(crate) struct JsonListWriter {
    pub(crate) items: Vec<Value>,
    pub(crate) err: Option<Error>,
}

impl ListWriter for JsonListWriter {
    fn value(&mut self, v: &dyn ValueMarshaler) {
        if self.err.is_some() {
            return;
        }
        match v.marshal_json() {
            Ok(value) => self.items.push(value),
            Err(e) => self.err = Some(error::marshal(e)),
        }
    }

    fn object(&mut self, m: &dyn FieldMarshaler) {
        if self.err.is_some() {
            return;
        }
        let mut nested = JsonFieldWriter::default();
        m.marshal_fields(&mut nested);
        match nested.err {
            Some(e) => self.err = Some(e),
            None => self.items.push(Value::Object(nested.map)),
        }
    }
}

/// Collects map entries as JSON object members.
#[derive(Default)]
pub(crate) struct JsonMapWriter {
    pub(crate) map: Map<String, Value>,
    pub(crate) err: Option<Error>,
}

impl MapWriter for JsonMapWriter {
    fn entry(&mut self, key: &str, v: &dyn ValueMarshaler) {
        if self.err.is_some() {
            return;
        }
        match v.marshal_json() {
            Ok(value) => {
                self.map.insert(key.to_string(), value);
            }
            Err(e) => self.err = Some(error::marshal(e)),
        }
    }

    fn entry_object(&mut self, key: &str, m: &dyn FieldMarshaler) {
        if self.err.is_some() {
            return;
        }
        let mut nested = JsonFieldWriter::default();
        m.marshal_fields(&mut nested);
        match nested.err {
            Some(e) => self.err = Some(e),
            None => {
                self.map.insert(key.to_string(), Value::Object(nested.map));
            }
        }
    }
}

/// Builds the fields of a JSON object, recursing for nested shapes.
#[derive(Default)]
pub(crate) struct JsonFieldWriter {
    pub(crate) map: Map<String, Value>,
    pub(crate) err: Option<Error>,
}

impl FieldWriter for JsonFieldWriter {
    fn scalar(&mut self, name: &str, v: &dyn ValueMarshaler) {
        if self.err.is_some() {
            return;
        }
        match v.marshal_json() {
            Ok(value) => {
                self.map.insert(name.to_string(), value);
            }
            Err(e) => self.err = Some(error::marshal(e)),
        }
    }

    fn object(&mut self, name: &str, m: &dyn FieldMarshaler) {
        if self.err.is_some() {
            return;
        }
        let mut nested = JsonFieldWriter::default();
        m.marshal_fields(&mut nested);
        match nested.err {
            Some(e) => self.err = Some(e),
            None => {
                self.map.insert(name.to_string(), Value::Object(nested.map));
            }
        }
    }

    fn list(&mut self, name: &str, write: &mut dyn FnMut(&mut dyn ListWriter)) {
        if self.err.is_some() {
            return;
        }
        let mut nested = JsonListWriter::default();
        write(&mut nested);
        match nested.err {
            Some(e) => self.err = Some(e),
            None => {
                self.map.insert(name.to_string(), Value::Array(nested.items));
            }
        }
    }

    fn map(&mut self, name: &str, write: &mut dyn FnMut(&mut dyn MapWriter)) {
        if self.err.is_some() {
            return;
        }
        let mut nested = JsonMapWriter::default();
        write(&mut nested);
        match nested.err {
            Some(e) => self.err = Some(e),
            None => {
                self.map.insert(name.to_string(), Value::Object(nested.map));
            }
        }
    }
}
