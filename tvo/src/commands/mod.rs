mod check;
mod completions;
mod generate;

use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for tvo_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "tvo")]
#[command(version)]
#[command(about = "Generate C# value objects from tvo.toml declarations")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug); TVO_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate value object sources from tvo.toml
    Generate(GenerateCommand),

    /// Validate tvo.toml without generating code
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate_arguments() {
        let cli = Cli::try_parse_from(["tvo", "-vv", "generate", "--dry-run", "-c", "app.toml"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Generate(cmd) => {
                assert!(cmd.dry_run);
                assert_eq!(cmd.config, std::path::Path::new("app.toml"));
                assert!(cmd.output.is_none());
            }
            _ => panic!("expected generate command"),
        }
    }
}
