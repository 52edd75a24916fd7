pub mod components;
pub mod constructors;
pub mod types;

// Re-export main types and functions
pub use components::{HeaderError, MarshalError, PathError};
pub use constructors::*;
pub use types::{Error, Inner, Kind, Result};

// Boxed source type shared by the constructors
pub(crate) type BoxError = Box<dyn std::error::Error + Send + Sync>;
