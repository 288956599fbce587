//! Preview operation - plan and render without writing.

use eyre::Result;
use strata_codegen_typescript::DomainGenerator;
use strata_manifest::{DomainSpec, WorkspaceContext};

use crate::{
    commands::UnwrapOrExit,
    reports::{PlannedFile, PreviewReport},
};

/// Execute the preview operation.
pub fn preview(spec: &DomainSpec, ws: &WorkspaceContext) -> Result<PreviewReport> {
    let mut generator = DomainGenerator::new(ws.clone());
    let plan = generator.plan(spec).unwrap_or_exit();

    let planned: Vec<PlannedFile> = plan
        .tasks
        .iter()
        .map(|task| PlannedFile {
            path: task.relative_path.clone(),
            phase: task.phase.to_string(),
        })
        .collect();

    let artifacts = generator.generate(spec).unwrap_or_exit();

    Ok(PreviewReport {
        domain: spec.name.clone(),
        planned,
        artifacts,
    })
}
