//! Validation context and utilities for manifest parsing.

use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "tvo.toml");
/// ctx.validate_type_name("UserId")?;
/// ctx.validate_inner_type("UserId", "global::System.Guid")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext {
    source: SourceContext,
}

impl ParseContext {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: SourceContext::new(src, filename),
        }
    }

    /// Validate that a value object name is a usable C# type name.
    pub fn validate_type_name(&self, name: &str) -> Result<()> {
        self.validate_identifier(name, "value object", find_table_span(self.source.src(), name))
    }

    /// Validate each segment of a dotted namespace.
    pub fn validate_namespace(&self, namespace: &str) -> Result<()> {
        let span = find_value_span(self.source.src(), "namespace", namespace);
        for segment in namespace.split('.') {
            self.validate_identifier(segment, "namespace segment", span)?;
        }
        Ok(())
    }

    /// Validate the `inner` type of a value object.
    pub fn validate_inner_type(&self, value_object: &str, inner: &str) -> Result<()> {
        if let Some(reason) = validate_type_expression(inner) {
            return Err(self.source.invalid_inner_type_error(
                value_object,
                inner,
                reason,
                find_value_span(self.source.src(), "inner", inner),
            ));
        }
        Ok(())
    }

    /// Report an inconsistent combination of settings.
    pub fn validation_error(&self, message: impl Into<String>, name: &str) -> Box<crate::Error> {
        self.source
            .validation_error(message, find_table_span(self.source.src(), name))
    }

    fn validate_identifier(&self, name: &str, kind: &str, span: Option<SourceSpan>) -> Result<()> {
        if is_csharp_keyword(name) {
            return Err(self.source.reserved_keyword_error(name, kind, span));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(self
                .source
                .invalid_identifier_error(name, kind, reason, span));
        }

        Ok(())
    }
}

/// C# reserved keywords that cannot be used as identifiers
/// Source: https://learn.microsoft.com/dotnet/csharp/language-reference/keywords/
pub(crate) const CSHARP_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

/// Check if a name is a C# reserved keyword
pub(crate) fn is_csharp_keyword(name: &str) -> bool {
    CSHARP_KEYWORDS.contains(&name)
}

/// Validate that a name is a valid C# identifier
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_')) {
        return Some("name must contain only letters, numbers, and underscores");
    }

    None
}

/// Validate a type expression such as `global::System.String` or `List<int>`
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_type_expression(ty: &str) -> Option<&'static str> {
    if ty.trim().is_empty() {
        return Some("the inner type cannot be empty");
    }

    if ty != ty.trim() {
        return Some("the inner type cannot have surrounding whitespace");
    }

    if ty.ends_with('?') {
        return Some("the inner type cannot be nullable, use 'nullable = true' instead");
    }

    let allowed = |c: char| c.is_ascii_alphanumeric() || "_.:<>, []".contains(c);
    if !ty.chars().all(allowed) {
        return Some("the inner type contains characters that cannot appear in a type name");
    }

    let mut depth = 0i32;
    for c in ty.chars() {
        match c {
            '<' => depth += 1,
            '>' => depth -= 1,
            _ => {}
        }
        if depth < 0 {
            return Some("the inner type has unbalanced angle brackets");
        }
    }
    if depth != 0 {
        return Some("the inner type has unbalanced angle brackets");
    }

    None
}

/// Find the span of a value object name in a table header like `[value_objects.Name]`
pub(crate) fn find_table_span(src: &str, name: &str) -> Option<SourceSpan> {
    let patterns = [format!(".{}]", name), format!(".{}.", name)];

    for pattern in &patterns {
        if let Some(pos) = src.find(pattern.as_str()) {
            // +1 to skip the leading dot
            let start = pos + 1;
            return Some(SourceSpan::from((start, name.len())));
        }
    }

    None
}

/// Find the span of a string value assigned to `key`, e.g. `inner = "Guid"`
pub(crate) fn find_value_span(src: &str, key: &str, value: &str) -> Option<SourceSpan> {
    for quote in ['"', '\''] {
        for separator in [" = ", "="] {
            let pattern = format!("{key}{separator}{quote}{value}{quote}");
            if let Some(pos) = src.find(&pattern) {
                let start = pos + key.len() + separator.len() + 1;
                return Some(SourceSpan::from((start, value.len())));
            }
        }
    }

    None
}
