//! Emission procedures for the members of a value object.
//!
//! Each procedure appends one self-contained fragment to a [`CodeBuilder`].
//! They are pure functions of their arguments, so they can be called and
//! tested on their own. [`generate_members`] runs them in their fixed order.

use tvo_core::ValueObjectDescriptor;

use crate::builder::CodeBuilder;

/// Name of the static factory every value object exposes.
pub const FACTORY_METHOD: &str = "From";

/// Static property supplied by types with a custom equality comparer.
pub const DEFAULT_EQUALITY_COMPARER: &str = "InnerValueDefaultEqualityComparer";

/// Static property supplied by types with a default value.
pub const DEFAULT_VALUE: &str = "DefaultValue";

/// Name of the wrapped field.
pub const VALUE_FIELD: &str = "Value";

/// Emit every member of a value object in order.
///
/// The GUID factory is gated on [`ValueObjectDescriptor::is_guid_like`] and
/// is always the last fragment.
pub fn generate_members(builder: &mut CodeBuilder, descriptor: &ValueObjectDescriptor) {
    let type_name = descriptor.type_name.as_str();
    let inner = descriptor.inner_type_name.as_str();

    add_public_constructor(builder, type_name, descriptor.has_default_value);
    add_private_constructor(builder, type_name, inner);
    add_factory_method(builder, type_name, inner);
    override_base_methods(builder);
    implement_equals_methods(
        builder,
        type_name,
        inner,
        &descriptor.nullability_marker,
        descriptor.has_default_equality_comparer,
    );
    add_equality_operators(builder, type_name, inner);
    add_explicit_cast_operators(builder, type_name, inner);

    if descriptor.is_guid_like {
        add_guid_specific_code(builder, type_name, inner);
    }
}

/// Emit the public parameterless constructor.
///
/// Without a default value the constructor is obsolete-as-error and throws,
/// pointing callers at the factory.
pub fn add_public_constructor(builder: &mut CodeBuilder, type_name: &str, has_default_value: bool) {
    if has_default_value {
        builder.push_line(&format!("public {type_name}()"));
        let mut block = builder.open_block();
        block.push_line(&format!("{VALUE_FIELD} = {DEFAULT_VALUE}.{VALUE_FIELD};"));
        return;
    }

    let message = format!("$\"Use {type_name}.{{nameof({FACTORY_METHOD})}} instead.\"");
    builder
        .push_line(&format!(
            "[global::System.Obsolete({message}, error: true)]"
        ))
        .push_line(&format!("public {type_name}()"));
    let mut block = builder.open_block();
    block.push_line(&format!(
        "throw new global::System.InvalidOperationException({message});"
    ));
}

/// Emit the private constructor that stores the inner value.
pub fn add_private_constructor(builder: &mut CodeBuilder, type_name: &str, inner: &str) {
    builder.push_line(&format!("private {type_name}({inner} value)"));
    let mut block = builder.open_block();
    block.push_line(&format!("{VALUE_FIELD} = value;"));
}

/// Emit the static `From` factory forwarding to the private constructor.
pub fn add_factory_method(builder: &mut CodeBuilder, type_name: &str, inner: &str) {
    builder
        .push_line(&format!(
            "public static {type_name} {FACTORY_METHOD}({inner} value) => new(value);"
        ))
        .push_blank();
}

/// Emit `GetHashCode` and `ToString`, both delegating to the inner value.
pub fn override_base_methods(builder: &mut CodeBuilder) {
    builder
        .push_line(&format!(
            "public override int GetHashCode() => {VALUE_FIELD}.GetHashCode();"
        ))
        .push_blank()
        .push_line(&format!(
            "public override string ToString() => {VALUE_FIELD}.ToString();"
        ))
        .push_blank();
}

/// Emit the `Equals` overloads.
///
/// Only the bare-value overload depends on `has_default_equality_comparer`;
/// the overload taking an explicit comparer always ignores the default one.
pub fn implement_equals_methods(
    builder: &mut CodeBuilder,
    type_name: &str,
    inner: &str,
    nullability_marker: &str,
    has_default_equality_comparer: bool,
) {
    let inner_equality = if has_default_equality_comparer {
        format!("{DEFAULT_EQUALITY_COMPARER}.Equals({VALUE_FIELD}, other)")
    } else {
        format!("{VALUE_FIELD}.Equals(other)")
    };

    builder
        .push_line(&format!(
            "public bool Equals({type_name} other) => Equals(other.{VALUE_FIELD});"
        ))
        .push_line(&format!(
            "public bool Equals({inner}{nullability_marker} other) => {inner_equality};"
        ))
        .push_line(&format!(
            "public bool Equals({type_name} other, global::System.Collections.Generic.IEqualityComparer<{inner}> comparer) => comparer.Equals({VALUE_FIELD}, other.{VALUE_FIELD});"
        ))
        .push_line("public override bool Equals(object? obj)");

    // Same-type match must come before the inner-type match.
    let mut block = builder.open_block();
    block
        .push_line("if (obj is null) return false;")
        .push_line(&format!("if (obj is {type_name} value) return Equals(value);"))
        .push_line(&format!(
            "if (obj is {inner} innerValue) return Equals(innerValue);"
        ))
        .push_line("return false;");
}

/// Emit `==`/`!=` for wrapper/wrapper, wrapper/inner and inner/wrapper.
///
/// Only the first pair is followed by a separating blank line; the two
/// mixed pairs are adjacent.
pub fn add_equality_operators(builder: &mut CodeBuilder, type_name: &str, inner: &str) {
    builder
        .push_line(&equality_operator("==", type_name, type_name, "left.Equals(right)"))
        .push_line(&equality_operator("!=", type_name, type_name, "!left.Equals(right)"))
        .push_blank()
        .push_line(&equality_operator("==", type_name, inner, "left.Equals(right)"))
        .push_line(&equality_operator("!=", type_name, inner, "!left.Equals(right)"))
        .push_line(&equality_operator("==", inner, type_name, "right.Equals(left)"))
        .push_line(&equality_operator("!=", inner, type_name, "!right.Equals(left)"))
        .push_blank();
}

fn equality_operator(op: &str, left: &str, right: &str, body: &str) -> String {
    format!("public static bool operator {op}({left} left, {right} right) => {body};")
}

/// Emit the explicit conversions between the wrapper and its inner value.
pub fn add_explicit_cast_operators(builder: &mut CodeBuilder, type_name: &str, inner: &str) {
    builder
        .push_line(&format!(
            "public static explicit operator {type_name}({inner} value) => {FACTORY_METHOD}(value);"
        ))
        .push_line(&format!(
            "public static explicit operator {inner}({type_name} value) => value.{VALUE_FIELD};"
        ))
        .push_blank();
}

/// Emit the `NewId` factory for GUID-backed value objects.
pub fn add_guid_specific_code(builder: &mut CodeBuilder, type_name: &str, inner: &str) {
    builder
        .push_line(&format!(
            "public static {type_name} NewId() => {FACTORY_METHOD}({inner}.NewGuid());"
        ))
        .push_blank();
}

#[cfg(test)]
mod tests {
    use super::*;

    const TYPE_NAME: &str = "MyValueObject";
    const INNER: &str = "string";

    fn emit(f: impl FnOnce(&mut CodeBuilder)) -> String {
        let mut builder = CodeBuilder::new();
        f(&mut builder);
        builder.build()
    }

    #[test]
    fn test_public_constructor_without_default_value() {
        let code = emit(|b| add_public_constructor(b, TYPE_NAME, false));
        assert_eq!(
            code,
            "[global::System.Obsolete($\"Use MyValueObject.{nameof(From)} instead.\", error: true)]\n\
             public MyValueObject()\n\
             {\n\
             \tthrow new global::System.InvalidOperationException($\"Use MyValueObject.{nameof(From)} instead.\");\n\
             }\n\
             \n"
        );
    }

    #[test]
    fn test_public_constructor_with_default_value() {
        let code = emit(|b| add_public_constructor(b, TYPE_NAME, true));
        assert_eq!(
            code,
            "public MyValueObject()\n{\n\tValue = DefaultValue.Value;\n}\n\n"
        );
    }

    #[test]
    fn test_private_constructor() {
        let code = emit(|b| add_private_constructor(b, TYPE_NAME, INNER));
        assert_eq!(
            code,
            "private MyValueObject(string value)\n{\n\tValue = value;\n}\n\n"
        );
    }

    #[test]
    fn test_factory_method() {
        let code = emit(|b| add_factory_method(b, TYPE_NAME, INNER));
        assert_eq!(
            code,
            "public static MyValueObject From(string value) => new(value);\n\n"
        );
    }

    #[test]
    fn test_override_base_methods() {
        let code = emit(override_base_methods);
        assert_eq!(
            code,
            "public override int GetHashCode() => Value.GetHashCode();\n\
             \n\
             public override string ToString() => Value.ToString();\n\
             \n"
        );
    }

    #[test]
    fn test_equals_methods_without_default_equality_comparer() {
        let code = emit(|b| implement_equals_methods(b, TYPE_NAME, INNER, "?", false));
        assert_eq!(
            code,
            "public bool Equals(MyValueObject other) => Equals(other.Value);\n\
             public bool Equals(string? other) => Value.Equals(other);\n\
             public bool Equals(MyValueObject other, global::System.Collections.Generic.IEqualityComparer<string> comparer) => comparer.Equals(Value, other.Value);\n\
             public override bool Equals(object? obj)\n\
             {\n\
             \tif (obj is null) return false;\n\
             \tif (obj is MyValueObject value) return Equals(value);\n\
             \tif (obj is string innerValue) return Equals(innerValue);\n\
             \treturn false;\n\
             }\n\
             \n"
        );
    }

    #[test]
    fn test_equals_methods_with_default_equality_comparer() {
        let code = emit(|b| implement_equals_methods(b, TYPE_NAME, INNER, "?", true));
        assert!(code.contains(
            "public bool Equals(string? other) => InnerValueDefaultEqualityComparer.Equals(Value, other);\n"
        ));
        assert!(!code.contains("=> Value.Equals(other);"));
        // The explicit comparer overload is unaffected by the default comparer.
        assert!(code.contains("=> comparer.Equals(Value, other.Value);\n"));
    }

    #[test]
    fn test_equals_methods_without_nullability_marker() {
        let code = emit(|b| implement_equals_methods(b, "MyId", "global::System.Guid", "", false));
        assert!(code.contains("public bool Equals(global::System.Guid other) => Value.Equals(other);\n"));
        assert!(!code.contains("Guid?"));
    }

    #[test]
    fn test_equals_object_checks_wrapper_before_inner() {
        let code = emit(|b| implement_equals_methods(b, TYPE_NAME, INNER, "?", false));
        let wrapper = code.find("obj is MyValueObject value").unwrap();
        let inner = code.find("obj is string innerValue").unwrap();
        let null = code.find("obj is null").unwrap();
        assert!(null < wrapper);
        assert!(wrapper < inner);
    }

    #[test]
    fn test_equality_operators() {
        let code = emit(|b| add_equality_operators(b, TYPE_NAME, INNER));
        assert_eq!(
            code,
            "public static bool operator ==(MyValueObject left, MyValueObject right) => left.Equals(right);\n\
             public static bool operator !=(MyValueObject left, MyValueObject right) => !left.Equals(right);\n\
             \n\
             public static bool operator ==(MyValueObject left, string right) => left.Equals(right);\n\
             public static bool operator !=(MyValueObject left, string right) => !left.Equals(right);\n\
             public static bool operator ==(string left, MyValueObject right) => right.Equals(left);\n\
             public static bool operator !=(string left, MyValueObject right) => !right.Equals(left);\n\
             \n"
        );
    }

    #[test]
    fn test_explicit_cast_operators() {
        let code = emit(|b| add_explicit_cast_operators(b, TYPE_NAME, INNER));
        assert_eq!(
            code,
            "public static explicit operator MyValueObject(string value) => From(value);\n\
             public static explicit operator string(MyValueObject value) => value.Value;\n\
             \n"
        );
    }

    #[test]
    fn test_guid_specific_code() {
        let code = emit(|b| add_guid_specific_code(b, "MyId", "Guid"));
        assert_eq!(
            code,
            "public static MyId NewId() => From(Guid.NewGuid());\n\n"
        );
    }

    #[test]
    fn test_members_are_indented_by_builder_depth() {
        let mut builder = CodeBuilder::new();
        {
            let mut block = builder.open_block();
            add_private_constructor(&mut block, TYPE_NAME, INNER);
        }
        assert_eq!(
            builder.build(),
            "{\n\tprivate MyValueObject(string value)\n\t{\n\t\tValue = value;\n\t}\n\n}\n\n"
        );
    }
}
