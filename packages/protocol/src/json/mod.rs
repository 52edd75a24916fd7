//! Body encoder: accumulates body-field targets into a JSON document.

pub mod encoder;
mod writers;

pub use encoder::JsonBodyEncoder;
