//! Domain spec and workspace context types.

use std::{fmt, path::PathBuf, str::FromStr};

use serde::{Deserialize, Serialize};

/// What to scaffold: one domain and its generation options.
///
/// A `DomainSpec` is a plain value. The engine treats it as the sole
/// input of a generation run, so two runs with equal specs produce
/// byte-identical output.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DomainSpec {
    /// Raw domain name as supplied by the caller (e.g. "order-management").
    pub name: String,

    /// Generate command/query/projection files for the domain.
    #[serde(default, rename = "cqrs")]
    pub include_cqrs: bool,

    /// Generate RPC contract definitions for the domain.
    #[serde(default, rename = "rpc")]
    pub include_rpc: bool,

    /// Target runtime for RPC transport imports.
    #[serde(default)]
    pub platform: Platform,

    /// Dependent sub-modules scaffolded after the parent domain.
    #[serde(default)]
    pub submodules: Vec<String>,
}

impl DomainSpec {
    /// Create a spec with default options.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            include_cqrs: false,
            include_rpc: false,
            platform: Platform::default(),
            submodules: Vec::new(),
        }
    }

    /// Enable CQRS file generation.
    pub fn with_cqrs(mut self) -> Self {
        self.include_cqrs = true;
        self
    }

    /// Enable RPC contract generation.
    pub fn with_rpc(mut self) -> Self {
        self.include_rpc = true;
        self
    }

    /// Set the target platform.
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Add sub-modules to scaffold under the parent domain.
    pub fn with_submodules(
        mut self,
        submodules: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.submodules
            .extend(submodules.into_iter().map(Into::into));
        self
    }
}

/// Target runtime for generated RPC transports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Node.js
    #[default]
    Node,
    /// Browser
    Browser,
    /// Edge runtimes (workers)
    Edge,
}

impl Platform {
    /// Returns the platform identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Node => "node",
            Platform::Browser => "browser",
            Platform::Edge => "edge",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "node" => Ok(Platform::Node),
            "browser" => Ok(Platform::Browser),
            "edge" => Ok(Platform::Edge),
            _ => Err(format!(
                "unknown platform '{}', expected 'node', 'browser', or 'edge'",
                s
            )),
        }
    }
}

/// Where generated packages live: npm scope and workspace root.
///
/// Always injected explicitly by the outermost caller. Nothing inside
/// the engine walks the filesystem to infer a scope.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct WorkspaceContext {
    /// Package scope prefix (e.g. "@acme"), empty for unscoped packages.
    #[serde(default)]
    pub scope: String,

    /// Workspace root the generated paths are relative to.
    #[serde(default = "default_root")]
    pub root: PathBuf,
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

impl WorkspaceContext {
    /// Create a workspace context.
    pub fn new(scope: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            scope: scope.into(),
            root: root.into(),
        }
    }

    /// Scoped package name for a file-case domain name,
    /// e.g. scope "@acme" + "order" -> "@acme/order".
    pub fn package_name(&self, file_name: &str) -> String {
        if self.scope.is_empty() {
            file_name.to_string()
        } else {
            format!("{}/{}", self.scope, file_name)
        }
    }
}

impl Default for WorkspaceContext {
    fn default() -> Self {
        Self {
            scope: String::new(),
            root: default_root(),
        }
    }
}
