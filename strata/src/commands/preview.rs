use clap::Args;
use eyre::{Context, Result};

use super::SpecArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct PreviewCommand {
    #[command(flatten)]
    pub spec: SpecArgs,

    /// Emit the artifact list as JSON instead of rendered text
    #[arg(long)]
    pub json: bool,
}

impl PreviewCommand {
    /// Run the preview command
    pub fn run(&self) -> Result<()> {
        let (spec, ws) = self.spec.resolve()?;
        let report = ops::preview(&spec, &ws)?;

        if self.json {
            let json = serde_json::to_string_pretty(&report.artifacts)
                .wrap_err("Failed to serialize artifacts")?;
            println!("{}", json);
        } else {
            report.render(&mut TerminalOutput::new());
        }

        Ok(())
    }
}
