//! Value-setting methods for the fluent encode builder

use restwire_protocol::{
    FieldMarshaler, ListWriter, MapWriter, Metadata, StreamMarshaler, Target, ValueMarshaler,
};

use super::core::EncodeBuilder;

impl EncodeBuilder {
    /// Route a scalar value to its target carrier
    ///
    /// # Arguments
    /// * `target` - Carrier the value belongs to
    /// * `key` - Placeholder, parameter, header, or field name
    /// * `value` - The scalar to render
    ///
    /// # Returns
    /// `Self` for method chaining
    #[must_use]
    pub fn scalar<V: ValueMarshaler>(mut self, target: Target, key: &str, value: &V) -> Self {
        if self.debug_enabled {
            log::debug!("Encode Builder: scalar {target} {key}");
        }
        self.encoder
            .set_scalar(target, key, value, &Metadata::new());
        self
    }

    /// Route a scalar value with explicit rendering hints
    #[must_use]
    pub fn scalar_with<V: ValueMarshaler>(
        mut self,
        target: Target,
        key: &str,
        value: &V,
        meta: &Metadata,
    ) -> Self {
        if self.debug_enabled {
            log::debug!("Encode Builder: scalar {target} {key}");
        }
        self.encoder.set_scalar(target, key, value, meta);
        self
    }

    /// Route a stream to the raw request payload
    #[must_use]
    pub fn stream<S: StreamMarshaler>(mut self, target: Target, key: &str, value: &S) -> Self {
        if self.debug_enabled {
            log::debug!("Encode Builder: stream {target} {key}");
        }
        self.encoder
            .set_stream(target, key, value, &Metadata::new());
        self
    }

    /// Route a sequence value, written through the list capability
    #[must_use]
    pub fn list<F>(mut self, target: Target, key: &str, write: F) -> Self
    where
        F: FnOnce(&mut dyn ListWriter),
    {
        if self.debug_enabled {
            log::debug!("Encode Builder: list {target} {key}");
        }
        self.encoder.set_list(target, key, write, &Metadata::new());
        self
    }

    /// Route a mapping value, written through the map capability
    #[must_use]
    pub fn map<F>(mut self, target: Target, key: &str, write: F) -> Self
    where
        F: FnOnce(&mut dyn MapWriter),
    {
        if self.debug_enabled {
            log::debug!("Encode Builder: map {target} {key}");
        }
        self.encoder.set_map(target, key, write, &Metadata::new());
        self
    }

    /// Route a mapping value with explicit rendering hints
    #[must_use]
    pub fn map_with<F>(mut self, target: Target, key: &str, write: F, meta: &Metadata) -> Self
    where
        F: FnOnce(&mut dyn MapWriter),
    {
        if self.debug_enabled {
            log::debug!("Encode Builder: map {target} {key}");
        }
        self.encoder.set_map(target, key, write, meta);
        self
    }

    /// Embed a nested type's fields into the body
    #[must_use]
    pub fn fields<M: FieldMarshaler>(mut self, target: Target, key: &str, value: &M) -> Self {
        if self.debug_enabled {
            log::debug!("Encode Builder: fields {target} {key}");
        }
        self.encoder
            .set_fields(target, key, value, &Metadata::new());
        self
    }
}
