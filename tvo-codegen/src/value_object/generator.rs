use tvo_core::ValueObjectDescriptor;

use super::generate_members;
use crate::builder::CodeBuilder;

/// Generates the member bodies of one value object.
///
/// Rendering is total and deterministic: the same descriptor always yields
/// byte-identical text.
#[derive(Debug, Clone, Copy)]
pub struct Generator<'a> {
    descriptor: &'a ValueObjectDescriptor,
}

impl<'a> Generator<'a> {
    pub fn new(descriptor: &'a ValueObjectDescriptor) -> Self {
        Self { descriptor }
    }

    pub fn descriptor(&self) -> &'a ValueObjectDescriptor {
        self.descriptor
    }

    /// Render the members into a fresh builder.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::new();
        self.render_into(&mut builder);
        builder.build()
    }

    /// Render the members into an existing builder at its current depth.
    pub fn render_into(&self, builder: &mut CodeBuilder) {
        tracing::debug!(
            type_name = %self.descriptor.type_name,
            inner = %self.descriptor.inner_type_name,
            "rendering value object members"
        );
        generate_members(builder, self.descriptor);
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    fn string_descriptor() -> ValueObjectDescriptor {
        ValueObjectDescriptor::new("MyValueObject", "string").nullable()
    }

    fn count_lines(code: &str, trimmed: &str) -> usize {
        code.lines().filter(|l| l.trim() == trimmed).count()
    }

    #[test]
    fn test_render_is_deterministic() {
        let descriptor = string_descriptor().with_default_equality_comparer();
        let first = Generator::new(&descriptor).render();
        let second = Generator::new(&descriptor).render();
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_is_deterministic_across_threads() {
        let descriptor = ValueObjectDescriptor::new("MyId", "global::System.Guid").guid_like();
        let expected = Generator::new(&descriptor).render();

        let outputs: Vec<String> = thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| Generator::new(&descriptor).render()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        for output in outputs {
            assert_eq!(output, expected);
        }
    }

    #[test]
    fn test_render_without_default_value() {
        let code = Generator::new(&string_descriptor()).render();

        assert!(code.starts_with(
            "[global::System.Obsolete($\"Use MyValueObject.{nameof(From)} instead.\", error: true)]\npublic MyValueObject()\n{\n\tthrow new global::System.InvalidOperationException("
        ));
        assert!(code.contains("private MyValueObject(string value)\n{\n\tValue = value;\n}\n"));
        assert!(!code.contains("DefaultValue.Value"));
    }

    #[test]
    fn test_render_with_default_value() {
        let descriptor = string_descriptor().with_default_value();
        let code = Generator::new(&descriptor).render();

        assert!(code.starts_with("public MyValueObject()\n{\n\tValue = DefaultValue.Value;\n}\n"));
        assert!(!code.contains("Obsolete"));
        assert!(!code.contains("InvalidOperationException"));
    }

    #[test]
    fn test_render_equality_fork() {
        let plain = Generator::new(&string_descriptor()).render();
        assert!(plain.contains("public bool Equals(string? other) => Value.Equals(other);"));

        let descriptor = string_descriptor().with_default_equality_comparer();
        let custom = Generator::new(&descriptor).render();
        assert!(custom.contains(
            "public bool Equals(string? other) => InnerValueDefaultEqualityComparer.Equals(Value, other);"
        ));
        // Hashing is unaffected by the comparer.
        assert!(custom.contains("public override int GetHashCode() => Value.GetHashCode();"));
    }

    #[test]
    fn test_render_operator_symmetry() {
        let code = Generator::new(&string_descriptor()).render();
        assert!(code.contains(
            "public static bool operator ==(string left, MyValueObject right) => right.Equals(left);"
        ));
        assert!(code.contains(
            "public static bool operator ==(MyValueObject left, string right) => left.Equals(right);"
        ));
    }

    #[test]
    fn test_render_without_guid_has_no_new_id() {
        let code = Generator::new(&string_descriptor()).render();
        assert!(!code.contains("NewId"));
        assert!(code.ends_with(
            "public static explicit operator string(MyValueObject value) => value.Value;\n\n"
        ));
    }

    #[test]
    fn test_render_guid_appends_new_id_last() {
        let descriptor = ValueObjectDescriptor::new("MyId", "Guid").guid_like();
        let with_guid = Generator::new(&descriptor).render();
        let without_guid = Generator::new(&ValueObjectDescriptor::new("MyId", "Guid")).render();

        assert_eq!(with_guid.matches("NewId").count(), 1);
        assert_eq!(
            with_guid,
            format!("{without_guid}public static MyId NewId() => From(Guid.NewGuid());\n\n")
        );
    }

    #[test]
    fn test_render_braces_are_balanced() {
        let descriptor = string_descriptor().with_default_value().guid_like();
        let code = Generator::new(&descriptor).render();

        assert_eq!(count_lines(&code, "{"), 3);
        assert_eq!(count_lines(&code, "}"), 3);
    }

    #[test]
    fn test_render_into_nests_members() {
        let descriptor = string_descriptor();
        let mut builder = CodeBuilder::new();
        builder.with_block(|b| Generator::new(&descriptor).render_into(b));

        let code = builder.build();
        assert!(code.starts_with("{\n\t[global::System.Obsolete("));
        assert!(code.contains("\n\tprivate MyValueObject(string value)\n\t{\n\t\tValue = value;\n\t}\n"));
        assert!(code.ends_with(
            "\tpublic static explicit operator string(MyValueObject value) => value.Value;\n\n}\n\n"
        ));
    }
}
