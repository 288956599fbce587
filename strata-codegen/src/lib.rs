//! Source-synthesis and generation-orchestration engine for strata.
//!
//! The engine turns a [`DomainSpec`](strata_manifest::DomainSpec) into an
//! ordered list of `{path, content}` artifacts without touching the file
//! system. It is a deterministic pure function of its input: no clock, no
//! randomness, no ambient state.
//!
//! # Module Organization
//!
//! - [`naming`] - Identifier variants derived from one raw name
//! - [`imports`] - Per-file import accumulation and rendering
//! - [`source`] - Fragment accumulation and deterministic rendering
//! - [`catalog`] - The template-catalog seam the orchestrator renders through
//! - [`plan`] - Dependency-ordered file task planning
//! - [`orchestrator`] - Plan execution and run lifecycle

mod error;

pub mod catalog;
pub mod imports;
pub mod naming;
pub mod orchestrator;
pub mod plan;
pub mod source;

pub use catalog::{RenderContext, SubmoduleCaps, TemplateCatalog};
pub use error::{Error, Result};
pub use imports::ImportRegistry;
pub use naming::NameVariants;
pub use orchestrator::{Artifact, Orchestrator, RunState};
pub use plan::{FileTask, GenerationPlan, Phase, Planner, Template};
pub use source::{FileHeader, Fragment, SourceBuilder};
