//! Plan execution and run lifecycle.

use serde::Serialize;
use strata_manifest::{DomainSpec, WorkspaceContext};

use crate::{
    Error, GenerationPlan, NameVariants, Planner, RenderContext, Result, SourceBuilder,
    TemplateCatalog,
};

/// One generated file: path and content, nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    /// Path relative to the generated package root.
    pub relative_path: String,
    /// Rendered file content.
    pub content: String,
}

/// Lifecycle of one generation run.
///
/// ```text
/// NotStarted -> Planning -> (PlanningFailed | Planned)
///            -> Executing -> (ExecutionFailed | Completed)
/// ```
///
/// Failed states are terminal; a failed run is re-invoked from
/// `NotStarted` with corrected input rather than retried in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    NotStarted,
    Planning,
    PlanningFailed,
    Planned,
    Executing,
    ExecutionFailed,
    Completed,
}

/// Walks a [`GenerationPlan`] and collects rendered artifacts.
///
/// Each task gets a fresh [`SourceBuilder`] (with its own import
/// registry); nothing is shared between tasks except the read-only
/// render context. Any task failure aborts the whole run with no
/// partial artifact list, so callers never write files from a partially
/// failed plan.
pub struct Orchestrator<'a> {
    catalog: &'a dyn TemplateCatalog,
    state: RunState,
}

impl<'a> Orchestrator<'a> {
    pub fn new(catalog: &'a dyn TemplateCatalog) -> Self {
        Self {
            catalog,
            state: RunState::NotStarted,
        }
    }

    /// Current run state.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Plan and execute in one step.
    pub fn run(
        &mut self,
        spec: &DomainSpec,
        workspace: &WorkspaceContext,
    ) -> Result<Vec<Artifact>> {
        self.state = RunState::Planning;
        let plan = match Planner::new(self.catalog).plan(spec, workspace) {
            Ok(plan) => plan,
            Err(e) => {
                self.state = RunState::PlanningFailed;
                return Err(e);
            }
        };
        self.state = RunState::Planned;
        self.execute(&plan)
    }

    /// Execute an already-computed plan.
    pub fn execute(&mut self, plan: &GenerationPlan) -> Result<Vec<Artifact>> {
        self.state = RunState::Executing;
        match self.execute_inner(plan) {
            Ok(artifacts) => {
                self.state = RunState::Completed;
                Ok(artifacts)
            }
            Err(e) => {
                self.state = RunState::ExecutionFailed;
                Err(e)
            }
        }
    }

    fn execute_inner(&self, plan: &GenerationPlan) -> Result<Vec<Artifact>> {
        verify_naming_consistency(plan)?;

        let ctx = RenderContext {
            spec: &plan.spec,
            workspace: &plan.workspace,
            parent: &plan.parent,
        };

        let mut artifacts = Vec::with_capacity(plan.tasks.len());
        for task in &plan.tasks {
            let mut builder = SourceBuilder::new();
            self.catalog.render_task(task, &ctx, &mut builder)?;
            artifacts.push(Artifact {
                relative_path: task.relative_path.clone(),
                content: builder.render()?,
            });
        }
        Ok(artifacts)
    }
}

/// Every generated symbol is a pure function of `(variant, role suffix)`,
/// so files that reference each other agree on spellings without a
/// shared symbol table — provided each variant survives re-derivation
/// from its own file-case form. Check that before rendering anything.
fn verify_naming_consistency(plan: &GenerationPlan) -> Result<()> {
    for task in &plan.tasks {
        let rederived = NameVariants::resolve(&task.variant.file_name)?;
        if rederived.class_name != task.variant.class_name {
            return Err(Error::name_validation(
                &task.variant.file_name,
                format!(
                    "variant for '{}' does not survive re-derivation",
                    task.relative_path
                ),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use strata_manifest::DomainSpec;

    use super::*;
    use crate::{FileTask, SubmoduleCaps, Template};

    struct StubCatalog {
        fail_on: Option<Template>,
    }

    impl StubCatalog {
        fn new() -> Self {
            Self { fail_on: None }
        }

        fn failing_on(template: Template) -> Self {
            Self {
                fail_on: Some(template),
            }
        }
    }

    impl TemplateCatalog for StubCatalog {
        fn submodule_caps(&self, _submodule: &str) -> SubmoduleCaps {
            SubmoduleCaps {
                kind: "generic",
                rpc: true,
                cqrs: true,
            }
        }

        fn render_task(
            &self,
            task: &FileTask,
            ctx: &RenderContext<'_>,
            builder: &mut SourceBuilder,
        ) -> Result<()> {
            if self.fail_on == Some(task.template) {
                return Err(Error::name_validation("stub", "forced failure"));
            }
            builder.add_raw(format!(
                "// {} for {}",
                task.relative_path, ctx.parent.class_name
            ));
            Ok(())
        }
    }

    #[test]
    fn test_run_produces_artifact_per_task() {
        let catalog = StubCatalog::new();
        let mut orchestrator = Orchestrator::new(&catalog);
        let artifacts = orchestrator
            .run(&DomainSpec::new("product"), &WorkspaceContext::default())
            .unwrap();

        assert_eq!(orchestrator.state(), RunState::Completed);
        // marker + 4 lib files + index
        assert_eq!(artifacts.len(), 6);
        assert!(
            artifacts
                .iter()
                .any(|a| a.relative_path == "src/lib/entities.ts")
        );
    }

    #[test]
    fn test_run_is_deterministic() {
        let catalog = StubCatalog::new();
        let spec = DomainSpec::new("order").with_cqrs().with_submodules(["cart"]);
        let ws = WorkspaceContext::default();

        let first = Orchestrator::new(&catalog).run(&spec, &ws).unwrap();
        let second = Orchestrator::new(&catalog).run(&spec, &ws).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_planning_failure_is_terminal_and_empty() {
        let catalog = StubCatalog::new();
        let mut orchestrator = Orchestrator::new(&catalog);
        let result = orchestrator.run(&DomainSpec::new(""), &WorkspaceContext::default());

        assert!(result.is_err());
        assert_eq!(orchestrator.state(), RunState::PlanningFailed);
    }

    #[test]
    fn test_task_failure_yields_no_partial_artifacts() {
        // fail on the barrel, after several tasks already rendered
        let catalog = StubCatalog::failing_on(Template::Index);
        let mut orchestrator = Orchestrator::new(&catalog);
        let result = orchestrator.run(&DomainSpec::new("product"), &WorkspaceContext::default());

        assert!(result.is_err());
        assert_eq!(orchestrator.state(), RunState::ExecutionFailed);
    }

    #[test]
    fn test_state_starts_not_started() {
        let catalog = StubCatalog::new();
        let orchestrator = Orchestrator::new(&catalog);
        assert_eq!(orchestrator.state(), RunState::NotStarted);
    }

    #[test]
    fn test_independent_runs_share_nothing() {
        let catalog = StubCatalog::new();
        let ws = WorkspaceContext::default();

        let a = Orchestrator::new(&catalog)
            .run(&DomainSpec::new("product"), &ws)
            .unwrap();
        let b = Orchestrator::new(&catalog)
            .run(&DomainSpec::new("order"), &ws)
            .unwrap();

        assert!(a.iter().all(|art| art.content.contains("Product")));
        assert!(b.iter().all(|art| art.content.contains("Order")));
    }
}
