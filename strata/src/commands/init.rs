use std::path::PathBuf;

use clap::Args;
use dialoguer::{Select, theme::ColorfulTheme};
use eyre::{Context, Result};
use strata_core::{File, FileRules, WriteResult};
use strata_manifest::Platform;

#[derive(Args)]
pub struct InitCommand {
    /// Domain name (defaults to current directory name)
    #[arg(default_value = ".")]
    pub name: String,

    /// Where to write strata.toml (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Target runtime (prompted when omitted)
    #[arg(short, long)]
    pub platform: Option<Platform>,

    /// Package scope (e.g. "@acme")
    #[arg(long)]
    pub scope: Option<String>,
}

impl InitCommand {
    /// Run the init command
    pub fn run(&self) -> Result<()> {
        let name = self.resolve_name()?;
        let platform = match self.platform {
            Some(platform) => platform,
            None => Self::prompt_platform()?,
        };

        let path = self.output.join("strata.toml");
        let content = Self::starter_manifest(&name, platform, self.scope.as_deref());

        let result = File::new(&path, content)
            .with_rules(FileRules::create_once())
            .write()?;

        match result {
            WriteResult::Written => {
                println!("Created {}", path.display());
                println!();
                println!("Next steps:");
                println!("  strata preview");
                println!("  strata new");
            }
            WriteResult::Skipped => {
                println!("{} already exists, leaving it alone", path.display());
            }
        }

        Ok(())
    }

    fn resolve_name(&self) -> Result<String> {
        if self.name != "." {
            return Ok(self.name.clone());
        }
        let cwd = std::env::current_dir().wrap_err("Failed to get current directory")?;
        cwd.file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.to_string())
            .ok_or_else(|| eyre::eyre!("Current directory has no valid name"))
    }

    fn prompt_platform() -> Result<Platform> {
        let platforms = ["node", "browser", "edge"];
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select a target platform")
            .items(&platforms)
            .default(0)
            .interact()
            .wrap_err("Failed to get platform selection")?;

        Ok(match selection {
            1 => Platform::Browser,
            2 => Platform::Edge,
            _ => Platform::Node,
        })
    }

    fn starter_manifest(name: &str, platform: Platform, scope: Option<&str>) -> String {
        let mut content = format!(
            "[domain]\n\
             name = \"{}\"\n\
             cqrs = false\n\
             rpc = false\n\
             platform = \"{}\"\n\
             submodules = []\n",
            name, platform
        );
        if let Some(scope) = scope {
            content.push_str(&format!("\n[workspace]\nscope = \"{}\"\n", scope));
        }
        content
    }
}
