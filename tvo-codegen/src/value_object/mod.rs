//! Value object generation engine.
//!
//! - [`members`] - Emission procedures, one per fragment of the type body
//! - [`Generator`] - Runs the procedures for one descriptor
//! - [`ValueObjectFile`] - The complete `*.g.cs` companion source

mod file;
mod generator;
pub mod members;

pub use file::{AUGMENTS_NAMESPACE, ValueObjectFile};
pub use generator::Generator;
pub use members::{FACTORY_METHOD, VALUE_FIELD, generate_members};
