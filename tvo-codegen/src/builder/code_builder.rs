//! Code builder utility for generating properly indented code.

use std::ops::{Deref, DerefMut};

/// One indentation level of generated C# source.
pub const INDENT: &str = "\t";

/// Incremental builder for indented, brace-scoped code.
///
/// Blocks are opened with [`CodeBuilder::open_block`], which returns a
/// [`BlockGuard`]. The closing brace is written when the guard goes out of
/// scope, so a block can never be left unbalanced.
///
/// # Example
///
/// ```
/// use tvo_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::new();
/// builder.push_line("public MyValueObject()");
/// {
///     let mut block = builder.open_block();
///     block.push_line("Value = DefaultValue.Value;");
/// }
///
/// assert_eq!(
///     builder.build(),
///     "public MyValueObject()\n{\n\tValue = DefaultValue.Value;\n}\n\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    pub fn new() -> Self {
        Self {
            indent_level: 0,
            buffer: String::new(),
        }
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add raw text without indentation or newline.
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    /// Write `{` at the current depth and indent until the guard is dropped.
    ///
    /// Dropping the guard dedents, writes `}` and a blank line. This also
    /// happens on early returns and while unwinding.
    pub fn open_block(&mut self) -> BlockGuard<'_> {
        self.push_line("{");
        self.indent_level += 1;
        BlockGuard { builder: self }
    }

    /// Run `f` inside a block.
    pub fn with_block<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut CodeBuilder),
    {
        {
            let mut block = self.open_block();
            f(&mut block);
        }
        self
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn close_block(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
        self.push_line("}");
        self.push_blank();
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Scope guard for a block opened with [`CodeBuilder::open_block`].
///
/// Dereferences to the builder, so the block body is written through it.
#[must_use = "the block is closed as soon as the guard is dropped"]
#[derive(Debug)]
pub struct BlockGuard<'a> {
    builder: &'a mut CodeBuilder,
}

impl Deref for BlockGuard<'_> {
    type Target = CodeBuilder;

    fn deref(&self) -> &Self::Target {
        self.builder
    }
}

impl DerefMut for BlockGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.builder
    }
}

impl Drop for BlockGuard<'_> {
    fn drop(&mut self) {
        self.builder.close_block();
    }
}
