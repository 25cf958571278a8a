use std::path::{Path, PathBuf};

use tvo_core::{FileRules, GeneratedFile, Overwrite, ValueObjectDescriptor};

use super::{Generator, VALUE_FIELD};
use crate::builder::{CodeBuilder, INDENT};

/// Namespace of the marker interfaces shipped with the runtime package.
pub const AUGMENTS_NAMESPACE: &str = "global::TransparentValueObjects.Augments";

const DEBUGGER_DISPLAY: &str = "[global::System.Diagnostics.DebuggerDisplay(\"{Value}\")]";
const DECLARATION: &str = "readonly partial struct";
const EXCLUDE_FROM_CODE_COVERAGE: &str = "[global::System.Diagnostics.CodeAnalysis.ExcludeFromCodeCoverage(Justification = \"Auto-generated.\")]";

/// The `<TypeName>.g.cs` companion source of one value object.
#[derive(Debug, Clone)]
pub struct ValueObjectFile {
    descriptor: ValueObjectDescriptor,
    namespace: Option<String>,
}

impl ValueObjectFile {
    pub fn new(descriptor: ValueObjectDescriptor) -> Self {
        Self {
            descriptor,
            namespace: None,
        }
    }

    /// Place the type in a file-scoped namespace.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn descriptor(&self) -> &ValueObjectDescriptor {
        &self.descriptor
    }

    fn render_header(&self, builder: &mut CodeBuilder) {
        builder
            .push_line("// <auto-generated/>")
            .push_line("#nullable enable");
        if let Some(namespace) = &self.namespace {
            builder.push_line(&format!("namespace {namespace};"));
        }
        builder.push_blank();
    }

    fn render_declaration(&self, builder: &mut CodeBuilder) {
        let type_name = &self.descriptor.type_name;
        let inner = &self.descriptor.inner_type_name;

        builder
            .push_line(DEBUGGER_DISPLAY)
            .push_line(EXCLUDE_FROM_CODE_COVERAGE)
            .push_line(&format!("{DECLARATION} {type_name} :"))
            .push_line(&format!(
                "{INDENT}{AUGMENTS_NAMESPACE}.IValueObject<{inner}>,"
            ))
            .push_line(&format!("{INDENT}global::System.IEquatable<{type_name}>,"))
            .push_line(&format!("{INDENT}global::System.IEquatable<{inner}>"));
    }
}

impl GeneratedFile for ValueObjectFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.descriptor.file_name())
    }

    fn rules(&self) -> FileRules {
        FileRules {
            overwrite: Overwrite::Always,
        }
    }

    fn render(&self) -> String {
        let mut builder = CodeBuilder::new();
        self.render_header(&mut builder);
        self.render_declaration(&mut builder);

        let inner = &self.descriptor.inner_type_name;
        builder.with_block(|body| {
            body.push_line(&format!("public readonly {inner} {VALUE_FIELD};"))
                .push_blank();
            Generator::new(&self.descriptor).render_into(body);
        });

        builder.build()
    }
}
