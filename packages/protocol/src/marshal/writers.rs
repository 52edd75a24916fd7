//! Writer capabilities for collection and nested-object values
//!
//! The encoders hand these to caller callbacks; the routing layer never
//! invokes them itself. Writers follow the crate's deferred-error idiom:
//! failures latch inside the owning encoder and surface at finalize, so the
//! callbacks stay infallible.

use super::value::ValueMarshaler;

/// Capability for writing the elements of an ordered sequence.
pub trait ListWriter {
    /// Append a scalar element
    fn value(&mut self, v: &dyn ValueMarshaler);

    /// Append a nested object element
    fn object(&mut self, m: &dyn FieldMarshaler);
}

/// Capability for writing the entries of a key-value mapping.
pub trait MapWriter {
    /// Write a scalar entry
    fn entry(&mut self, key: &str, v: &dyn ValueMarshaler);

    /// Write a nested object entry
    fn entry_object(&mut self, key: &str, m: &dyn FieldMarshaler);
}

/// Capability for writing the fields of a nested object.
pub trait FieldWriter {
    /// Write a scalar field
    fn scalar(&mut self, name: &str, v: &dyn ValueMarshaler);

    /// Write a nested object field
    fn object(&mut self, name: &str, m: &dyn FieldMarshaler);

    /// Write a sequence field
    fn list(&mut self, name: &str, write: &mut dyn FnMut(&mut dyn ListWriter));

    /// Write a mapping field
    fn map(&mut self, name: &str, write: &mut dyn FnMut(&mut dyn MapWriter));
}

/// A nested structured type that can write its fields through a
/// [`FieldWriter`] capability.
pub trait FieldMarshaler {
    fn marshal_fields(&self, w: &mut dyn FieldWriter);
}
