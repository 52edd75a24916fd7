//! Value and stream marshaling abstractions
//!
//! Marshalers are opaque producers: they know how to render themselves into
//! whichever encoder accepts them. The encoders forward them without ever
//! inspecting their contents.

pub mod stream;
pub mod value;
pub mod writers;

pub use stream::{PayloadReader, StreamMarshaler};
pub use value::{MarshalResult, Serialized, TimeValue, TimestampFormat, ValueMarshaler};
pub use writers::{FieldMarshaler, FieldWriter, ListWriter, MapWriter};
