use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::{ProjectArgs, UnwrapOrExit};
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Declaration file to write (overrides `output_path` in modelts.toml)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview the declarations without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let (config, snapshot) = self.project.load();
        let output_path = self.output.as_ref().unwrap_or(&config.output_path);

        let report = ops::generate(
            &snapshot,
            &config,
            GenerateOptions {
                output_path,
                dry_run: self.dry_run,
            },
        )
        .unwrap_or_exit();

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
