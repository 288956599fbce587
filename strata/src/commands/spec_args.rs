//! Shared flags that resolve into a domain spec and workspace context.

use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use strata_manifest::{DomainSpec, Platform, StrataToml, WorkspaceContext};

use super::UnwrapOrExit;
use crate::workspace;

#[derive(Args)]
pub(crate) struct SpecArgs {
    /// Domain name (omit to read it from strata.toml)
    pub name: Option<String>,

    /// Path to strata.toml (used when no name is given)
    #[arg(short, long, default_value = "strata.toml")]
    pub config: PathBuf,

    /// Generate command/query/projection files
    #[arg(long)]
    pub cqrs: bool,

    /// Generate RPC contract definitions
    #[arg(long)]
    pub rpc: bool,

    /// Target runtime for RPC transports
    #[arg(short, long)]
    pub platform: Option<Platform>,

    /// Submodule to scaffold under the domain (repeatable)
    #[arg(short, long = "submodule")]
    pub submodules: Vec<String>,

    /// Package scope (e.g. "@acme"); detected from package.json if omitted
    #[arg(long)]
    pub scope: Option<String>,
}

impl SpecArgs {
    /// Resolve flags (and strata.toml, when no name is given) into the
    /// spec and workspace the engine consumes.
    pub fn resolve(&self) -> Result<(DomainSpec, WorkspaceContext)> {
        let (mut spec, manifest_scope) = match &self.name {
            Some(name) => (DomainSpec::new(name), None),
            None => {
                let strata_toml = StrataToml::open(&self.config).unwrap_or_exit();
                let manifest = strata_toml.manifest();
                (
                    manifest.domain.clone(),
                    Some(manifest.workspace.scope.clone()),
                )
            }
        };

        if self.cqrs {
            spec.include_cqrs = true;
        }
        if self.rpc {
            spec.include_rpc = true;
        }
        if let Some(platform) = self.platform {
            spec.platform = platform;
        }
        if !self.submodules.is_empty() {
            spec.submodules.extend(self.submodules.iter().cloned());
        }

        let scope = match &self.scope {
            Some(scope) => scope.clone(),
            None => manifest_scope
                .filter(|s| !s.is_empty())
                .or_else(|| {
                    let cwd = std::env::current_dir().ok()?;
                    workspace::detect_scope(&cwd)
                })
                .unwrap_or_default(),
        };

        Ok((spec, WorkspaceContext::new(scope, ".")))
    }
}
