use clap::Args;
use eyre::Result;

use crate::{
    ops,
    project::ProjectArgs,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Print the identifiers as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let project = self.project.resolve(None, None)?;
        let report = ops::list(&project)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            report.render(&mut TerminalOutput::new());
        }

        Ok(())
    }
}
