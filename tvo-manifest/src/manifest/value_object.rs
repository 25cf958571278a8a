//! The `[value_objects.<Name>]` tables.

use serde::Deserialize;
use tvo_core::{ValueObjectDescriptor, is_guid_type_name};

/// Declaration of one value object.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValueObjectConfig {
    /// Fully-qualified wrapped type
    pub inner: String,

    /// Whether the bare-value `Equals` parameter may be null.
    /// Defaults to true unless the inner type is a GUID.
    pub nullable: Option<bool>,

    /// The type implements `IHasDefaultValue`
    #[serde(default)]
    pub default_value: bool,

    /// The type implements `IHasDefaultEqualityComparer`
    #[serde(default)]
    pub default_equality_comparer: bool,

    /// Override GUID detection on the inner type
    pub guid: Option<bool>,
}

impl ValueObjectConfig {
    pub fn is_guid_like(&self) -> bool {
        self.guid.unwrap_or_else(|| is_guid_type_name(&self.inner))
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable.unwrap_or_else(|| !self.is_guid_like())
    }

    /// Build the generator descriptor for the value object called `name`.
    pub fn descriptor(&self, name: &str) -> ValueObjectDescriptor {
        let mut descriptor = ValueObjectDescriptor::new(name, &self.inner);
        if self.is_nullable() {
            descriptor = descriptor.nullable();
        }
        if self.default_value {
            descriptor = descriptor.with_default_value();
        }
        if self.default_equality_comparer {
            descriptor = descriptor.with_default_equality_comparer();
        }
        if self.is_guid_like() {
            descriptor = descriptor.guid_like();
        }
        descriptor
    }

    /// Short capability summary, e.g. `default value, comparer, guid`.
    pub fn capabilities(&self) -> Vec<&'static str> {
        let mut capabilities = Vec::new();
        if self.default_value {
            capabilities.push("default value");
        }
        if self.default_equality_comparer {
            capabilities.push("equality comparer");
        }
        if self.is_guid_like() {
            capabilities.push("guid");
        }
        capabilities
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(toml_src: &str) -> ValueObjectConfig {
        toml::from_str(toml_src).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = config("inner = \"string\"");
        assert!(!config.default_value);
        assert!(!config.default_equality_comparer);
        assert!(!config.is_guid_like());
        assert!(config.is_nullable());
        assert!(config.capabilities().is_empty());
    }

    #[test]
    fn test_guid_detection() {
        let config = config("inner = \"global::System.Guid\"");
        assert!(config.is_guid_like());
        assert!(!config.is_nullable());

        let descriptor = config.descriptor("UserId");
        assert!(descriptor.is_guid_like);
        assert_eq!(descriptor.nullability_marker, "");
    }

    #[test]
    fn test_guid_override() {
        let config = config("inner = \"MyGuidAlias\"\nguid = true\nnullable = true");
        assert!(config.is_guid_like());
        assert!(config.is_nullable());
    }

    #[test]
    fn test_guid_detection_disabled() {
        let config = config("inner = \"Guid\"\nguid = false");
        assert!(!config.is_guid_like());
        assert!(!config.descriptor("NotAnId").is_guid_like);
    }

    #[test]
    fn test_descriptor() {
        let config = config(
            "inner = \"global::System.String\"\ndefault_value = true\ndefault_equality_comparer = true",
        );
        let descriptor = config.descriptor("SampleValueObject");

        assert_eq!(
            descriptor,
            ValueObjectDescriptor::new("SampleValueObject", "global::System.String")
                .nullable()
                .with_default_value()
                .with_default_equality_comparer()
        );
        assert_eq!(
            config.capabilities(),
            vec!["default value", "equality comparer"]
        );
    }

    #[test]
    fn test_rejects_unknown_fields() {
        let result: Result<ValueObjectConfig, _> = toml::from_str("inner = \"int\"\ncolor = \"red\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_declaration_kind() {
        // Only `readonly partial struct` is generated.
        let result: Result<ValueObjectConfig, _> =
            toml::from_str("inner = \"int\"\nkind = \"record-struct\"");
        assert!(result.is_err());
    }
}
