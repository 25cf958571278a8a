use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use tvo_manifest::TvoToml;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to tvo.toml (defaults to ./tvo.toml)
    #[arg(short, long, default_value = "tvo.toml")]
    pub config: PathBuf,

    /// Output directory (overrides [generator].output)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let tvo_toml = TvoToml::open(&self.config).unwrap_or_exit();
        let output_dir = self
            .output
            .clone()
            .unwrap_or_else(|| tvo_toml.output_dir());

        let report = ops::generate(
            tvo_toml.manifest(),
            GenerateOptions {
                output_dir: &output_dir,
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
