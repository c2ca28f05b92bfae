use clap::Args;
use eyre::Result;

use super::{ProjectArgs, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub project: ProjectArgs,
}

impl CheckCommand {
    /// Run the check command, exiting with status 1 when the file is stale
    pub fn run(&self) -> Result<()> {
        let (config, snapshot) = self.project.load();

        let report = ops::check(&snapshot, &config, &config.output_path).unwrap_or_exit();
        report.render(&mut TerminalOutput::new());

        if !report.is_current() {
            std::process::exit(1);
        }
        Ok(())
    }
}
