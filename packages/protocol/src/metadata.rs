//! Per-value rendering hints threaded through every `set_*` call

/// Rendering hints attached to a single encoded value.
///
/// The composite encoder forwards metadata unmodified; only the encoder that
/// ends up rendering the value reads it.
#[derive(Debug, Clone, Default)]
pub struct Metadata {
    /// Overrides the wire name of the value (query key, header name, body
    /// field name) when set; the call's key is used otherwise.
    pub name: Option<String>,
    /// Render a collection as one flattened value instead of repeated
    /// entries. Honored by the structural encoder for header lists.
    pub flatten: bool,
}

impl Metadata {
    /// Metadata with no hints set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Metadata carrying a wire-name override
    #[must_use]
    pub fn named<S: Into<String>>(name: S) -> Self {
        Self {
            name: Some(name.into()),
            flatten: false,
        }
    }

    /// The wire name for a value: the override if present, else `key`
    #[must_use]
    pub fn wire_name<'a>(&'a self, key: &'a str) -> &'a str {
        self.name.as_deref().unwrap_or(key)
    }
}
