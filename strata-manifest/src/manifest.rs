//! Manifest types and parsing for strata.toml files.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{DomainSpec, Error, Result, WorkspaceContext};

/// Root manifest for strata.toml
///
/// ```toml
/// [domain]
/// name = "order"
/// cqrs = true
/// submodules = ["cart", "checkout"]
///
/// [workspace]
/// scope = "@acme"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// The domain to scaffold.
    pub domain: DomainSpec,

    /// Workspace context (scope, root).
    #[serde(default)]
    pub workspace: WorkspaceContext,
}

impl Manifest {
    /// Parse a manifest from TOML content.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let manifest: Manifest =
            toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
        Ok(manifest)
    }
}

impl std::str::FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "strata.toml")
    }
}

/// Represents a strata.toml file with both raw content and parsed manifest.
pub struct StrataToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl StrataToml {
    /// Open and parse a strata.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }
}
