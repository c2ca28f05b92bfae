use clap::Args;
use eyre::Result;

use super::{ProjectArgs, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    #[command(flatten)]
    pub project: ProjectArgs,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let (config, snapshot) = self.project.load();

        let report = ops::list(&snapshot, &config).unwrap_or_exit();
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
