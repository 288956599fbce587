//! Facade gluing planner, orchestrator, and the TypeScript catalog.

use strata_codegen::{Artifact, GenerationPlan, Orchestrator, Planner, Result, RunState};
use strata_manifest::{DomainSpec, WorkspaceContext};

use crate::TsCatalog;

/// Generates the full TypeScript file set for one domain spec.
///
/// The whole run is a pure function of `(spec, workspace)`: no file
/// system access, no clock, no randomness. Re-running the same spec
/// yields byte-identical artifacts, so callers can cache or retry
/// freely. The caller applies the returned artifacts to disk.
pub struct DomainGenerator {
    workspace: WorkspaceContext,
    catalog: TsCatalog,
    state: RunState,
}

impl DomainGenerator {
    /// Generator with the default catalog.
    pub fn new(workspace: WorkspaceContext) -> Self {
        Self::with_catalog(workspace, TsCatalog::new())
    }

    /// Generator with a customized catalog (registry or resource shape).
    pub fn with_catalog(workspace: WorkspaceContext, catalog: TsCatalog) -> Self {
        Self {
            workspace,
            catalog,
            state: RunState::NotStarted,
        }
    }

    /// Compute the validated, dependency-ordered plan without rendering.
    pub fn plan(&self, spec: &DomainSpec) -> Result<GenerationPlan> {
        Planner::new(&self.catalog).plan(spec, &self.workspace)
    }

    /// Plan and render every artifact.
    pub fn generate(&mut self, spec: &DomainSpec) -> Result<Vec<Artifact>> {
        let mut orchestrator = Orchestrator::new(&self.catalog);
        let result = orchestrator.run(spec, &self.workspace);
        self.state = orchestrator.state();
        result
    }

    /// State of the most recent run.
    pub fn state(&self) -> RunState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use strata_codegen::Error;

    use super::*;

    fn generate(spec: &DomainSpec) -> Vec<Artifact> {
        DomainGenerator::new(WorkspaceContext::default())
            .generate(spec)
            .unwrap()
    }

    fn content<'a>(artifacts: &'a [Artifact], path: &str) -> &'a str {
        artifacts
            .iter()
            .find(|a| a.relative_path == path)
            .unwrap_or_else(|| panic!("missing artifact {path}"))
            .content
            .as_str()
    }

    #[test]
    fn test_minimal_domain_index_exports() {
        let artifacts = generate(&DomainSpec::new("product"));
        let index = content(&artifacts, "src/index.ts");

        assert!(index.contains("from './lib/entities'"));
        assert!(index.contains("from './lib/ports'"));
        assert!(!index.contains("./lib/commands'"));
        assert!(!index.contains("./lib/rpc-definitions'"));
    }

    #[test]
    fn test_cqrs_domain_index_exports() {
        let artifacts = generate(&DomainSpec::new("product").with_cqrs());
        let index = content(&artifacts, "src/index.ts");

        assert!(index.contains("from './lib/commands'"));
        assert!(index.contains("from './lib/queries'"));
        assert!(index.contains("from './lib/projections'"));
    }

    #[test]
    fn test_cross_file_symbol_agreement() {
        // errors.ts defines the class; nothing else re-declares it, and
        // both files compute the spelling from the variant alone
        let artifacts = generate(&DomainSpec::new("product"));
        let errors = content(&artifacts, "src/lib/errors.ts");
        assert!(errors.contains("export class ProductNotFoundError extends Error {"));

        let events = content(&artifacts, "src/lib/events.ts");
        assert!(events.contains("import type { Product } from './entities';"));
    }

    #[test]
    fn test_submodule_rpc_operations_use_submodule_prefix() {
        let artifacts = generate(&DomainSpec::new("order").with_submodules(["cart"]));
        let rpc = content(&artifacts, "src/lib/cart/rpc-definitions.ts");

        assert!(rpc.contains("name: 'Cart.Get'"));
        assert!(rpc.contains("name: 'Cart.AddItem'"));
        assert!(!rpc.contains("'Order."));
    }

    #[test]
    fn test_submodule_errors_use_parent_prefix() {
        let artifacts = generate(&DomainSpec::new("order").with_submodules(["cart"]));
        let errors = content(&artifacts, "src/lib/cart/errors.ts");

        assert!(errors.contains("export class OrderCartNotFoundError extends Error {"));
        assert!(errors.contains("export class OrderCartRpcError extends Error {"));

        let rpc = content(&artifacts, "src/lib/cart/rpc-definitions.ts");
        assert!(rpc.contains("import { OrderCartRpcError } from './errors';"));
    }

    #[test]
    fn test_submodule_entities_reexport_parent() {
        let artifacts = generate(&DomainSpec::new("order").with_submodules(["cart"]));
        let entities = content(&artifacts, "src/lib/cart/entities.ts");

        assert!(entities.contains("export type { Order } from '../entities';"));
        assert!(entities.contains("orderId: string;"));
    }

    #[test]
    fn test_parent_index_exports_submodule() {
        let artifacts = generate(&DomainSpec::new("order").with_submodules(["cart"]));
        let index = content(&artifacts, "src/index.ts");
        assert!(index.contains("export * from './lib/cart';"));
    }

    #[test]
    fn test_empty_name_produces_zero_artifacts() {
        let mut generator = DomainGenerator::new(WorkspaceContext::default());
        let result = generator.generate(&DomainSpec::new(""));

        assert!(matches!(result, Err(Error::NameValidation { .. })));
        assert_eq!(generator.state(), RunState::PlanningFailed);
    }

    #[test]
    fn test_generation_is_idempotent() {
        let spec = DomainSpec::new("order")
            .with_cqrs()
            .with_rpc()
            .with_submodules(["cart", "checkout"]);

        // checkout has no cqrs rule, so this must conflict
        let result = DomainGenerator::new(WorkspaceContext::default()).generate(&spec);
        assert!(matches!(result, Err(Error::OptionConflict { .. })));

        let spec = DomainSpec::new("order").with_rpc().with_submodules(["cart"]);
        let first = generate(&spec);
        let second = generate(&spec);
        assert_eq!(first, second);
    }

    #[test]
    fn test_scope_flows_into_headers() {
        let mut generator = DomainGenerator::new(WorkspaceContext::new("@acme", "."));
        let artifacts = generator.generate(&DomainSpec::new("product")).unwrap();
        let entities = artifacts
            .iter()
            .find(|a| a.relative_path == "src/lib/entities.ts")
            .unwrap();
        assert!(entities.content.contains("@module @acme/product"));
    }
}
