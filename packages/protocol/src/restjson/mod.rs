//! Composite encoder: routes each tagged value to the structural or body
//! encoder and assembles one final request.

pub mod encoder;

pub use encoder::Encoder;
