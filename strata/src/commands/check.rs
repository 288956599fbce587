use clap::Args;
use eyre::Result;
use strata_codegen_typescript::DomainGenerator;

use super::{SpecArgs, UnwrapOrExit};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub spec: SpecArgs,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let (spec, ws) = self.spec.resolve()?;

        let generator = DomainGenerator::new(ws);
        let plan = generator.plan(&spec).unwrap_or_exit();

        println!("✓ '{}' is a valid domain spec\n", spec.name);
        println!(
            "  {} file{} would be generated:",
            plan.tasks.len(),
            if plan.tasks.len() == 1 { "" } else { "s" }
        );
        for task in &plan.tasks {
            println!("    {} [{}]", task.relative_path, task.phase);
        }

        Ok(())
    }
}
