use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use tvo_manifest::TvoToml;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to tvo.toml (defaults to ./tvo.toml)
    #[arg(short, long, default_value = "tvo.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let tvo_toml = TvoToml::open(&self.config).unwrap_or_exit();

        let report = ops::check(tvo_toml.manifest(), &self.config, &tvo_toml.output_dir());
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
