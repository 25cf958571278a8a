//! Parsing and validation of `tvo.toml` manifests.
//!
//! A manifest declares the value objects to generate and their
//! capabilities; [`Manifest::descriptors`] turns it into generator input.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result};
pub use manifest::{
    DEFAULT_OUTPUT_DIR, GeneratorConfig, Manifest, ParseContext, TvoToml, ValueObjectConfig,
};
