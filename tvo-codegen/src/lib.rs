//! Code generation for transparent value objects.
//!
//! # Module Organization
//!
//! - [`builder`] - Text assembly primitives (CodeBuilder, BlockGuard)
//! - [`value_object`] - The generation engine and the generated file

pub mod builder;
pub mod value_object;

pub use builder::{BlockGuard, CodeBuilder};
pub use value_object::{Generator, ValueObjectFile};
