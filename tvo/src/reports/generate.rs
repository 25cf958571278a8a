//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Number of value objects declared in the manifest.
    pub value_object_count: usize,

    /// Namespace of the generated types.
    pub namespace: Option<String>,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug, Default)]
pub struct WrittenResult {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Files whose content changed.
    pub written: Vec<String>,
    /// Files that already had the generated content.
    pub unchanged: Vec<String>,
    /// Files left untouched by their write rules.
    pub skipped: Vec<String>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file that would be generated.
#[derive(Debug)]
pub struct PreviewFile {
    /// File name relative to the output directory.
    pub path: String,
    /// Rendered content.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Preview(preview) => {
                for file in &preview.files {
                    out.divider(&file.path);
                    out.preformatted(&file.content);
                }
                out.divider("Summary");
                out.preformatted(&format!(
                    "{} file{} would be generated",
                    preview.files.len(),
                    plural(preview.files.len())
                ));
            }
            GenerationResult::Written(written) => {
                out.section(&format!(
                    "Value objects ({})",
                    self.value_object_count
                ));
                for file in &written.written {
                    out.added_item(file);
                }
                for file in written.unchanged.iter().chain(&written.skipped) {
                    out.list_item(&format!("{} (unchanged)", file));
                }
                out.newline();

                if let Some(namespace) = &self.namespace {
                    out.key_value("Namespace", namespace);
                }
                out.key_value("Generated", &written.output_dir.display().to_string());
            }
        }
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
