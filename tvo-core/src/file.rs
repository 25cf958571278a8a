use std::path::{Path, PathBuf};

use eyre::{Context, Result};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        let rules = self.rules();

        if path.exists() && rules.overwrite == Overwrite::IfMissing {
            tracing::debug!(path = %path.display(), "skipping existing file");
            return Ok(WriteResult::Skipped);
        }

        let content = self.render();
        if is_up_to_date(&path, &content) {
            tracing::debug!(path = %path.display(), "file is up to date");
            return Ok(WriteResult::Unchanged);
        }

        write_file(&path, &content)?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
        Ok(WriteResult::Written)
    }
}

fn is_up_to_date(path: &Path, content: &str) -> bool {
    std::fs::read_to_string(path).is_ok_and(|existing| existing == content)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create '{}'", parent.display()))?;
    }
    std::fs::write(path, content).wrap_err_with(|| format!("failed to write '{}'", path.display()))
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had the rendered content
    Unchanged,
    /// File was skipped (already exists)
    Skipped,
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Default)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (generated code)
    #[default]
    Always,
    /// Only create if file doesn't exist
    IfMissing,
}
