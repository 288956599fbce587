//! Dependency-ordered file task planning.

use std::collections::{BTreeSet, VecDeque};

use indexmap::IndexMap;
use serde::Serialize;
use strata_manifest::{DomainSpec, WorkspaceContext};

use crate::{Error, NameVariants, Result, TemplateCatalog};

/// Generation stage a file task belongs to.
///
/// Infrastructure tasks precede domain tasks, which precede every
/// submodule's tasks; the planner encodes this as explicit dependency
/// edges rather than relying on stage order alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Scaffold files the domain phase assumes exist.
    Infrastructure,
    /// The parent domain's own file set.
    Domain,
    /// A dependent submodule's file set.
    Submodule,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Infrastructure => "infrastructure",
            Phase::Domain => "domain",
            Phase::Submodule => "submodule",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which template renders a planned file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// Source-root directory marker.
    SourceRootKeep,
    /// Contract-layer entity types.
    Entities,
    /// Contract-layer error classes.
    Errors,
    /// Contract-layer domain events.
    Events,
    /// Data-access ports.
    Ports,
    /// Package barrel.
    Index,
    /// CQRS command types.
    Commands,
    /// CQRS query types.
    Queries,
    /// CQRS projection types.
    Projections,
    /// RPC contract definitions.
    RpcDefinitions,
    /// Submodule entity types (re-exporting the parent entity).
    SubmoduleEntities,
    /// Submodule error classes (parent class-case prefix).
    SubmoduleErrors,
    /// Submodule read-side queries.
    SubmoduleQueries,
    /// Submodule RPC contract definitions.
    SubmoduleRpcDefinitions,
    /// Submodule barrel.
    SubmoduleIndex,
}

/// One file to generate, bound to the naming variant it is spelled with.
#[derive(Debug, Clone)]
pub struct FileTask {
    /// Path relative to the generated package root; doubles as task id.
    pub relative_path: String,
    /// Generation stage.
    pub phase: Phase,
    /// Template that renders the content.
    pub template: Template,
    /// Naming variant the file's identifiers derive from (the parent's
    /// for domain tasks, the submodule's for submodule tasks).
    pub variant: NameVariants,
    /// Raw submodule name for submodule tasks.
    pub submodule: Option<String>,
    /// Relative paths of tasks that must be generated first.
    pub depends_on: Vec<String>,
}

/// A dependency-ordered list of file tasks for one invocation.
///
/// Created once per top-level invocation and discarded after the
/// orchestrator finishes; never persisted.
#[derive(Debug, Clone)]
pub struct GenerationPlan {
    /// The spec this plan was computed from.
    pub spec: DomainSpec,
    /// Workspace context the caller injected.
    pub workspace: WorkspaceContext,
    /// Variants of the parent domain name.
    pub parent: NameVariants,
    /// Tasks in an order satisfying every `depends_on` edge.
    pub tasks: Vec<FileTask>,
}

impl GenerationPlan {
    /// Relative paths of every planned file, in execution order.
    pub fn paths(&self) -> Vec<&str> {
        self.tasks.iter().map(|t| t.relative_path.as_str()).collect()
    }

    /// Check whether the plan contains a file path.
    pub fn contains(&self, path: &str) -> bool {
        self.tasks.iter().any(|t| t.relative_path == path)
    }
}

/// Computes a validated, dependency-ordered [`GenerationPlan`].
pub struct Planner<'a> {
    catalog: &'a dyn TemplateCatalog,
}

impl<'a> Planner<'a> {
    pub fn new(catalog: &'a dyn TemplateCatalog) -> Self {
        Self { catalog }
    }

    /// Validate the spec and produce the plan.
    ///
    /// Validation is all-or-nothing: every name must resolve, the
    /// submodule list must be duplicate-free, and every requested option
    /// must have a generation rule for every submodule kind — all
    /// checked before a single task would execute.
    pub fn plan(&self, spec: &DomainSpec, workspace: &WorkspaceContext) -> Result<GenerationPlan> {
        let parent = NameVariants::resolve(&spec.name)?;

        let mut submodules = Vec::new();
        let mut seen = BTreeSet::new();
        for name in &spec.submodules {
            let variant = NameVariants::resolve(name)?;
            if !seen.insert(variant.file_name.clone()) {
                return Err(Error::name_validation(
                    name,
                    "duplicate submodule name in spec",
                ));
            }
            let caps = self.catalog.submodule_caps(name);
            if spec.include_rpc && !caps.rpc {
                return Err(Error::OptionConflict {
                    option: "rpc",
                    submodule: name.clone(),
                    kind: caps.kind.to_string(),
                });
            }
            if spec.include_cqrs && !caps.cqrs {
                return Err(Error::OptionConflict {
                    option: "cqrs",
                    submodule: name.clone(),
                    kind: caps.kind.to_string(),
                });
            }
            submodules.push((name.clone(), variant, caps));
        }

        let mut tasks = Vec::new();

        let keep = "src/lib/.gitkeep".to_string();
        tasks.push(FileTask {
            relative_path: keep.clone(),
            phase: Phase::Infrastructure,
            template: Template::SourceRootKeep,
            variant: parent.clone(),
            submodule: None,
            depends_on: Vec::new(),
        });

        let mut domain_templates = vec![
            (Template::Entities, "entities"),
            (Template::Errors, "errors"),
            (Template::Events, "events"),
            (Template::Ports, "ports"),
        ];
        if spec.include_cqrs {
            domain_templates.push((Template::Commands, "commands"));
            domain_templates.push((Template::Queries, "queries"));
            domain_templates.push((Template::Projections, "projections"));
        }
        if spec.include_rpc {
            domain_templates.push((Template::RpcDefinitions, "rpc-definitions"));
        }

        let mut domain_paths = Vec::new();
        for (template, stem) in domain_templates {
            let path = format!("src/lib/{}.ts", stem);
            domain_paths.push(path.clone());
            tasks.push(FileTask {
                relative_path: path,
                phase: Phase::Domain,
                template,
                variant: parent.clone(),
                submodule: None,
                depends_on: vec![keep.clone()],
            });
        }

        let index = "src/index.ts".to_string();
        tasks.push(FileTask {
            relative_path: index.clone(),
            phase: Phase::Domain,
            template: Template::Index,
            variant: parent.clone(),
            submodule: None,
            depends_on: domain_paths.clone(),
        });

        for (name, variant, caps) in submodules {
            let dir = format!("src/lib/{}", variant.file_name);

            let mut sub_templates = vec![
                (Template::SubmoduleEntities, "entities"),
                (Template::SubmoduleErrors, "errors"),
            ];
            if spec.include_cqrs {
                sub_templates.push((Template::SubmoduleQueries, "queries"));
            }
            if caps.rpc {
                sub_templates.push((Template::SubmoduleRpcDefinitions, "rpc-definitions"));
            }

            let mut sub_paths = Vec::new();
            for (template, stem) in sub_templates {
                let path = format!("{}/{}.ts", dir, stem);
                sub_paths.push(path.clone());
                tasks.push(FileTask {
                    relative_path: path,
                    phase: Phase::Submodule,
                    template,
                    variant: variant.clone(),
                    submodule: Some(name.clone()),
                    depends_on: vec![index.clone()],
                });
            }

            tasks.push(FileTask {
                relative_path: format!("{}/index.ts", dir),
                phase: Phase::Submodule,
                template: Template::SubmoduleIndex,
                variant: variant.clone(),
                submodule: Some(name.clone()),
                depends_on: sub_paths,
            });
        }

        let tasks = toposort(tasks)?;

        Ok(GenerationPlan {
            spec: spec.clone(),
            workspace: workspace.clone(),
            parent,
            tasks,
        })
    }
}

/// Order tasks so every dependency precedes its dependents.
///
/// Ready tasks are emitted in insertion order, so the result is
/// deterministic for a given input. An unknown dependency or a cycle
/// raises [`Error::PlanDependency`].
fn toposort(tasks: Vec<FileTask>) -> Result<Vec<FileTask>> {
    let index: IndexMap<&str, usize> = tasks
        .iter()
        .enumerate()
        .map(|(i, t)| (t.relative_path.as_str(), i))
        .collect();

    let mut indegree = vec![0usize; tasks.len()];
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); tasks.len()];
    for (i, task) in tasks.iter().enumerate() {
        for dep in &task.depends_on {
            let Some(&d) = index.get(dep.as_str()) else {
                return Err(Error::PlanDependency {
                    task: task.relative_path.clone(),
                });
            };
            if d == i {
                return Err(Error::PlanDependency {
                    task: task.relative_path.clone(),
                });
            }
            dependents[d].push(i);
            indegree[i] += 1;
        }
    }

    let mut ready: VecDeque<usize> = (0..tasks.len()).filter(|&i| indegree[i] == 0).collect();
    let mut order = Vec::with_capacity(tasks.len());
    while let Some(i) = ready.pop_front() {
        order.push(i);
        for &dep in &dependents[i] {
            indegree[dep] -= 1;
            if indegree[dep] == 0 {
                ready.push_back(dep);
            }
        }
    }

    if order.len() != tasks.len() {
        let stuck = (0..tasks.len())
            .find(|&i| indegree[i] > 0)
            .expect("cycle implies a task with remaining dependencies");
        return Err(Error::PlanDependency {
            task: tasks[stuck].relative_path.clone(),
        });
    }

    let mut slots: Vec<Option<FileTask>> = tasks.into_iter().map(Some).collect();
    Ok(order
        .into_iter()
        .map(|i| slots[i].take().expect("each task emitted once"))
        .collect())
}
