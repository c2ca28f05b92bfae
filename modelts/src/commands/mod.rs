mod check;
mod completions;
mod generate;
mod init;
mod list;

use std::path::PathBuf;

use check::CheckCommand;
use clap::{ArgAction, Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use init::InitCommand;
use list::ListCommand;
use modelts_codegen::InspectError;
use modelts_ir::Snapshot;
use modelts_manifest::{CONFIG_FILE, Config, ModeltsToml, load_snapshot};
use tracing::debug;

/// Extension trait for exiting on diagnosable errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for modelts_manifest::Result<T> {
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

impl<T> UnwrapOrExit<T> for Result<T> {
    /// Inspection errors are printed as diagnostics; anything else is
    /// reported through color-eyre.
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(report) => match report.downcast::<InspectError>() {
                Ok(e) => {
                    eprintln!("{:?}", miette::Report::new(e));
                    std::process::exit(1);
                }
                Err(report) => {
                    eprintln!("Error: {:?}", report);
                    std::process::exit(1);
                }
            },
        }
    }
}

/// Where the configuration and model snapshot are read from.
#[derive(Args)]
pub struct ProjectArgs {
    /// Path to modelts.toml (defaults are used when it does not exist)
    #[arg(short, long, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Model snapshot to read (overrides `snapshot` in modelts.toml)
    #[arg(long)]
    pub snapshot: Option<PathBuf>,
}

impl ProjectArgs {
    /// Load the configuration, with paths resolved against its directory.
    pub fn config(&self) -> Config {
        let modelts_toml = ModeltsToml::open_or_default(&self.config).unwrap_or_exit();
        let mut config = modelts_toml.rooted_config();
        if let Some(snapshot) = &self.snapshot {
            config.snapshot = snapshot.clone();
        }
        config
    }

    /// Load the configuration and the model snapshot it points to.
    pub fn load(&self) -> (Config, Snapshot) {
        let config = self.config();
        let snapshot = load_snapshot(&config.snapshot).unwrap_or_exit();
        debug!(
            config = %self.config.display(),
            snapshot = %config.snapshot.display(),
            classes = snapshot.classes.len(),
            "loaded snapshot"
        );
        (config, snapshot)
    }
}

#[derive(Parser)]
#[command(name = "modelts")]
#[command(version)]
#[command(about = "Generate TypeScript declarations from Eloquent models")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Init(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }

    /// Default log filter for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the declaration file
    Generate(GenerateCommand),

    /// Verify the declaration file is up to date
    Check(CheckCommand),

    /// List discovered models
    List(ListCommand),

    /// Write a starter modelts.toml
    Init(InitCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_levels() {
        let cli = Cli::parse_from(["modelts", "list"]);
        assert_eq!(cli.log_level(), "warn");

        let cli = Cli::parse_from(["modelts", "-vv", "list"]);
        assert_eq!(cli.log_level(), "debug");

        let cli = Cli::parse_from(["modelts", "generate", "-vvvv"]);
        assert_eq!(cli.log_level(), "trace");
    }

    #[test]
    fn test_project_args() {
        let cli = Cli::parse_from([
            "modelts",
            "generate",
            "--config",
            "app/modelts.toml",
            "--snapshot",
            "dump.json",
        ]);
        let Commands::Generate(cmd) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(cmd.project.config, PathBuf::from("app/modelts.toml"));
        assert_eq!(cmd.project.snapshot, Some(PathBuf::from("dump.json")));
    }
}
