//! Check operation - summarize a validated manifest.

use std::path::Path;

use tvo_manifest::Manifest;

use crate::reports::{CheckReport, ValueObjectSummary};

/// Execute the check operation.
///
/// The manifest is already validated by parsing; this collects what it declares.
pub fn check(manifest: &Manifest, config_path: &Path, output_dir: &Path) -> CheckReport {
    let value_objects = manifest
        .value_objects
        .iter()
        .map(|(name, config)| ValueObjectSummary {
            name: name.clone(),
            inner: config.inner.clone(),
            capabilities: config
                .capabilities()
                .into_iter()
                .map(String::from)
                .collect(),
        })
        .collect();

    CheckReport {
        config_path: config_path.to_path_buf(),
        namespace: manifest.generator.namespace.clone(),
        output_dir: output_dir.to_path_buf(),
        value_objects,
    }
}
