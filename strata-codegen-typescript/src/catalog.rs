//! The TypeScript implementation of the engine's template-catalog seam.

use strata_codegen::{
    FileTask, RenderContext, Result, SourceBuilder, SubmoduleCaps, Template, TemplateCatalog,
};

use crate::{
    files,
    registry::{SubmoduleRegistry, SubmoduleTemplate},
    resource::ResourceSpec,
};

/// TypeScript template catalog.
///
/// Holds the submodule kind registry and the declarative resource shape;
/// everything else about a task arrives through the render context.
pub struct TsCatalog {
    registry: SubmoduleRegistry,
    resource: ResourceSpec,
}

impl TsCatalog {
    pub fn new() -> Self {
        Self {
            registry: SubmoduleRegistry::with_defaults(),
            resource: ResourceSpec::standard(),
        }
    }

    /// Replace the submodule kind registry.
    pub fn with_registry(mut self, registry: SubmoduleRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Replace the resource shape.
    pub fn with_resource(mut self, resource: ResourceSpec) -> Self {
        self.resource = resource;
        self
    }

    fn handler_for(&self, task: &FileTask) -> &dyn SubmoduleTemplate {
        let name = task
            .submodule
            .as_deref()
            .unwrap_or(task.variant.file_name.as_str());
        self.registry.resolve(name)
    }
}

impl Default for TsCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateCatalog for TsCatalog {
    fn submodule_caps(&self, submodule: &str) -> SubmoduleCaps {
        let handler = self.registry.resolve(submodule);
        SubmoduleCaps {
            kind: handler.kind(),
            rpc: handler.supports_rpc(),
            cqrs: handler.supports_cqrs(),
        }
    }

    fn render_task(
        &self,
        task: &FileTask,
        ctx: &RenderContext<'_>,
        builder: &mut SourceBuilder,
    ) -> Result<()> {
        match task.template {
            // directory marker, intentionally empty
            Template::SourceRootKeep => {}
            Template::Entities => files::entities::render(ctx, task, &self.resource, builder),
            Template::Errors => files::errors::render(ctx, task, &self.resource, builder),
            Template::Events => files::events::render(ctx, task, &self.resource, builder),
            Template::Ports => files::ports::render(ctx, task, builder),
            Template::Index => files::barrel::render(ctx, task, builder)?,
            Template::Commands => files::cqrs::commands(ctx, task, builder),
            Template::Queries => files::cqrs::queries(ctx, task, builder),
            Template::Projections => files::cqrs::projections(ctx, task, &self.resource, builder),
            Template::RpcDefinitions => files::rpc::render(ctx, task, builder),
            Template::SubmoduleEntities => {
                files::entities::render_submodule(ctx, task, &self.resource, builder)
            }
            Template::SubmoduleErrors => {
                files::errors::render_submodule(ctx, task, &self.resource, self.handler_for(task), builder)
            }
            Template::SubmoduleQueries => files::cqrs::submodule_queries(ctx, task, builder),
            Template::SubmoduleRpcDefinitions => {
                files::rpc::render_submodule(ctx, task, self.handler_for(task), builder)
            }
            Template::SubmoduleIndex => {
                files::barrel::render_submodule(ctx, task, self.handler_for(task), builder)
            }
        }
        Ok(())
    }
}
