//! Resolved description of one value object type.

/// Resolved, immutable input of a single generation run.
///
/// The caller is responsible for filling it with well-formed names: the
/// generator emits them verbatim and performs no validation of its own.
///
/// # Example
///
/// ```
/// use tvo_core::ValueObjectDescriptor;
///
/// let descriptor = ValueObjectDescriptor::new("UserName", "global::System.String")
///     .nullable()
///     .with_default_equality_comparer();
///
/// assert_eq!(descriptor.nullability_marker, "?");
/// assert!(!descriptor.has_default_value);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValueObjectDescriptor {
    /// Name of the wrapper type being generated.
    pub type_name: String,
    /// Fully-qualified name of the wrapped type.
    pub inner_type_name: String,
    /// Appended to the inner type name for the nullable equality parameter.
    pub nullability_marker: String,
    /// The type provides a static `DefaultValue`.
    pub has_default_value: bool,
    /// The type provides `InnerValueDefaultEqualityComparer`.
    pub has_default_equality_comparer: bool,
    /// The inner type is a GUID; enables `NewId()`.
    pub is_guid_like: bool,
}

impl ValueObjectDescriptor {
    /// Create a descriptor with no capabilities and no nullability marker.
    pub fn new(type_name: impl Into<String>, inner_type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            inner_type_name: inner_type_name.into(),
            nullability_marker: String::new(),
            has_default_value: false,
            has_default_equality_comparer: false,
            is_guid_like: false,
        }
    }

    /// Mark the bare-value equality parameter as possibly absent (`?`).
    pub fn nullable(self) -> Self {
        self.with_nullability_marker("?")
    }

    /// Set the nullability marker verbatim.
    pub fn with_nullability_marker(mut self, marker: impl Into<String>) -> Self {
        self.nullability_marker = marker.into();
        self
    }

    pub fn with_default_value(mut self) -> Self {
        self.has_default_value = true;
        self
    }

    pub fn with_default_equality_comparer(mut self) -> Self {
        self.has_default_equality_comparer = true;
        self
    }

    pub fn guid_like(mut self) -> Self {
        self.is_guid_like = true;
        self
    }

    /// Name of the generated source file, e.g. `UserId.g.cs`.
    pub fn file_name(&self) -> String {
        format!("{}.g.cs", self.type_name)
    }
}

/// Check whether a type name refers to `System.Guid`.
///
/// Accepts the short, namespaced and `global::` qualified spellings.
/// Nullable spellings (`Guid?`) are not GUID-like.
pub fn is_guid_type_name(name: &str) -> bool {
    let name = name.trim();
    let name = name.strip_prefix("global::").unwrap_or(name);
    let name = name.strip_prefix("System.").unwrap_or(name);
    name == "Guid"
}
