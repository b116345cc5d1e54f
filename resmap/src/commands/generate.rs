use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use resmap_manifest::Language;

use crate::{
    ops::{self, GenerateOptions},
    project::ProjectArgs,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Output directory (defaults to the one configured for the language)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Target language (overrides resmap.toml setting)
    #[arg(short, long)]
    pub language: Option<Language>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let project = self
            .project
            .resolve(self.language, self.output.as_deref())?;

        let report = ops::generate(
            &project,
            GenerateOptions {
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
