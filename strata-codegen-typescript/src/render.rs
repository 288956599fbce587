//! Single-template rendering for snapshot tests.

use strata_codegen::{
    FileTask, NameVariants, Phase, RenderContext, Result, SourceBuilder, Template, TemplateCatalog,
};
use strata_manifest::{DomainSpec, WorkspaceContext};

use crate::TsCatalog;

/// Inputs for rendering one template in isolation.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Spec of the domain the template belongs to. For submodule
    /// templates this names the parent.
    pub spec: DomainSpec,
    /// Workspace scope and root.
    pub workspace: WorkspaceContext,
}

impl RenderOptions {
    pub fn new(spec: DomainSpec) -> Self {
        Self {
            spec,
            workspace: WorkspaceContext::default(),
        }
    }

    pub fn with_workspace(mut self, workspace: WorkspaceContext) -> Self {
        self.workspace = workspace;
        self
    }
}

/// Render one template without running the planner or orchestrator.
///
/// `variant` names the file's subject: the domain itself for domain
/// templates, the submodule for submodule templates. Deterministic like
/// the full pipeline, which is what makes per-template snapshot tests
/// meaningful.
pub fn render_file(
    template: Template,
    variant: &NameVariants,
    options: &RenderOptions,
) -> Result<String> {
    let catalog = TsCatalog::new();
    let parent = NameVariants::resolve(&options.spec.name)?;
    let task = synthetic_task(template, variant);
    let ctx = RenderContext {
        spec: &options.spec,
        workspace: &options.workspace,
        parent: &parent,
    };

    let mut builder = SourceBuilder::new();
    catalog.render_task(&task, &ctx, &mut builder)?;
    builder.render()
}

fn synthetic_task(template: Template, variant: &NameVariants) -> FileTask {
    let (phase, relative_path, submodule) = match template {
        Template::SourceRootKeep => (
            Phase::Infrastructure,
            "src/lib/.gitkeep".to_string(),
            None,
        ),
        Template::Index => (Phase::Domain, "src/index.ts".to_string(), None),
        Template::SubmoduleEntities
        | Template::SubmoduleErrors
        | Template::SubmoduleQueries
        | Template::SubmoduleRpcDefinitions
        | Template::SubmoduleIndex => (
            Phase::Submodule,
            format!(
                "src/lib/{}/{}.ts",
                variant.file_name,
                template_stem(template)
            ),
            Some(variant.file_name.clone()),
        ),
        _ => (
            Phase::Domain,
            format!("src/lib/{}.ts", template_stem(template)),
            None,
        ),
    };

    FileTask {
        relative_path,
        phase,
        template,
        variant: variant.clone(),
        submodule,
        depends_on: Vec::new(),
    }
}

fn template_stem(template: Template) -> &'static str {
    match template {
        Template::SourceRootKeep => ".gitkeep",
        Template::Entities | Template::SubmoduleEntities => "entities",
        Template::Errors | Template::SubmoduleErrors => "errors",
        Template::Events => "events",
        Template::Ports => "ports",
        Template::Index | Template::SubmoduleIndex => "index",
        Template::Commands => "commands",
        Template::Queries | Template::SubmoduleQueries => "queries",
        Template::Projections => "projections",
        Template::RpcDefinitions | Template::SubmoduleRpcDefinitions => "rpc-definitions",
    }
}
