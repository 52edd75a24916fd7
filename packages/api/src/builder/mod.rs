//! Fluent encode builder
//!
//! A consuming wrapper over the composite encoder: chain `scalar`, `list`,
//! `map`, `fields`, and `stream` calls, then `assemble` once.

pub mod core;
mod values;

pub use core::EncodeBuilder;
