//! Core types for the transparent value object generator.
//!
//! This crate holds the resolved [`ValueObjectDescriptor`] handed to the
//! generation engine and the file layer used to persist generated sources.

mod descriptor;
mod file;

pub use descriptor::{ValueObjectDescriptor, is_guid_type_name};
pub use file::{FileRules, GeneratedFile, Overwrite, WriteResult};
