use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::SpecArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct NewCommand {
    #[command(flatten)]
    pub spec: SpecArgs,

    /// Output directory (defaults to ./<file-case domain name>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl NewCommand {
    /// Run the new command
    pub fn run(&self) -> Result<()> {
        let (spec, ws) = self.spec.resolve()?;

        let output_dir = match &self.output {
            Some(dir) => dir.clone(),
            None => {
                // mirror the generated file names: kebab-case directory
                PathBuf::from(strata_core::to_kebab_case(&spec.name))
            }
        };

        let report = ops::new(&spec, &ws, &output_dir)?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
