//! Manifest types and parsing for tvo.toml files.

mod file;
mod parse;
mod validate;
mod value_object;

use std::path::PathBuf;

pub use file::TvoToml;
use indexmap::IndexMap;
use serde::Deserialize;
use tvo_core::ValueObjectDescriptor;
pub use validate::ParseContext;
pub use value_object::ValueObjectConfig;

/// Default output directory, relative to the manifest.
pub const DEFAULT_OUTPUT_DIR: &str = "Generated";

/// Root manifest for tvo.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Output settings shared by all value objects
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Declared value objects, in declaration order
    #[serde(default)]
    pub value_objects: IndexMap<String, ValueObjectConfig>,
}

/// The `[generator]` table
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// File-scoped namespace of the generated types
    pub namespace: Option<String>,

    /// Directory receiving the `*.g.cs` files
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            namespace: None,
            output: default_output(),
        }
    }
}

impl Manifest {
    /// Resolve every declared value object into a generator descriptor.
    pub fn descriptors(&self) -> impl Iterator<Item = ValueObjectDescriptor> + '_ {
        self.value_objects
            .iter()
            .map(|(name, config)| config.descriptor(name))
    }

    /// Check if a value object is declared
    pub fn has_value_object(&self, name: &str) -> bool {
        self.value_objects.contains_key(name)
    }
}
