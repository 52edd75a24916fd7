//! Structural encoder: renders path, query, and header targets onto the
//! request envelope and carries the raw payload through to assembly.

pub mod encoder;
mod path;

pub use encoder::RestEncoder;
