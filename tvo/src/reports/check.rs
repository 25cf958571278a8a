//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from validating a manifest.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the manifest.
    pub config_path: PathBuf,
    /// Namespace of the generated types.
    pub namespace: Option<String>,
    /// Directory receiving the generated files.
    pub output_dir: PathBuf,
    /// Declared value objects.
    pub value_objects: Vec<ValueObjectSummary>,
}

/// Summary of one declared value object.
#[derive(Debug)]
pub struct ValueObjectSummary {
    pub name: String,
    pub inner: String,
    pub capabilities: Vec<String>,
}

impl ValueObjectSummary {
    fn describe(&self) -> String {
        let mut text = format!("{} ({})", self.name, self.inner);
        if !self.capabilities.is_empty() {
            text.push_str(&format!(" [{}]", self.capabilities.join(", ")));
        }
        text
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.success(&format!("{} is valid", self.config_path.display()));
        out.newline();

        if let Some(namespace) = &self.namespace {
            out.key_value("Namespace", namespace);
        }
        out.key_value("Output", &self.output_dir.display().to_string());
        out.newline();

        let count = self.value_objects.len();
        out.section(&format!(
            "{} value object{}",
            count,
            if count == 1 { "" } else { "s" }
        ));
        for value_object in &self.value_objects {
            out.list_item(&value_object.describe());
        }
    }
}
