//! Generate operation - value object sources from a manifest.

use std::path::Path;

use eyre::{Context, Result};
use tvo_codegen::ValueObjectFile;
use tvo_core::{GeneratedFile, WriteResult};
use tvo_manifest::Manifest;

use crate::reports::{GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory receiving the generated files.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Build the generated file of every declared value object.
pub fn value_object_files(manifest: &Manifest) -> Vec<ValueObjectFile> {
    manifest
        .value_objects
        .iter()
        .map(|(name, config)| {
            let file = ValueObjectFile::new(config.descriptor(name));
            match &manifest.generator.namespace {
                Some(namespace) => file.with_namespace(namespace),
                None => file,
            }
        })
        .collect()
}

/// Execute the generate operation.
pub fn generate(manifest: &Manifest, opts: GenerateOptions) -> Result<GenerateReport> {
    let files = value_object_files(manifest);
    tracing::info!(
        count = files.len(),
        output = %opts.output_dir.display(),
        dry_run = opts.dry_run,
        "generating value objects"
    );

    let result = if opts.dry_run {
        let files = files
            .iter()
            .map(|file| PreviewFile {
                path: file.descriptor().file_name(),
                content: file.render(),
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let mut written = WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            ..Default::default()
        };

        for file in &files {
            let file_name = file.descriptor().file_name();
            let outcome = file
                .write(opts.output_dir)
                .wrap_err_with(|| format!("Failed to write {}", file_name))?;

            match outcome {
                WriteResult::Written => written.written.push(file_name),
                WriteResult::Unchanged => written.unchanged.push(file_name),
                WriteResult::Skipped => written.skipped.push(file_name),
            }
        }
        GenerationResult::Written(written)
    };

    Ok(GenerateReport {
        value_object_count: files.len(),
        namespace: manifest.generator.namespace.clone(),
        result,
    })
}
