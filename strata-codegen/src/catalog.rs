//! The template-catalog seam between the engine and template content.
//!
//! The orchestrator knows how to sequence file tasks and assemble
//! source text; it knows nothing about what any particular file says.
//! That knowledge lives behind [`TemplateCatalog`], implemented by a
//! language-specific template crate.

use strata_manifest::{DomainSpec, WorkspaceContext};

use crate::{FileTask, NameVariants, Result, SourceBuilder};

/// Generation rules available for a submodule kind.
#[derive(Debug, Clone)]
pub struct SubmoduleCaps {
    /// Kind tag the submodule name resolved to (e.g. "cart", "generic").
    pub kind: &'static str,
    /// Whether the kind has an RPC contract generation rule.
    pub rpc: bool,
    /// Whether the kind has a CQRS query generation rule.
    pub cqrs: bool,
}

/// Read-only context shared by every task of one generation run.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// The domain spec the run was invoked with.
    pub spec: &'a DomainSpec,
    /// Workspace scope and root, injected by the outermost caller.
    pub workspace: &'a WorkspaceContext,
    /// Variants of the parent domain name.
    pub parent: &'a NameVariants,
}

/// A catalog of file templates for one target language.
pub trait TemplateCatalog {
    /// Capabilities of the kind a submodule name maps to.
    ///
    /// Consulted during planning so option conflicts fail before any
    /// task executes.
    fn submodule_caps(&self, submodule: &str) -> SubmoduleCaps;

    /// Render one planned file into the builder.
    ///
    /// The builder (and the import registry inside it) is freshly
    /// created by the orchestrator for this single task.
    fn render_task(
        &self,
        task: &FileTask,
        ctx: &RenderContext<'_>,
        builder: &mut SourceBuilder,
    ) -> Result<()>;
}
