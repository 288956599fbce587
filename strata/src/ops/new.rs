//! New operation - generate a domain package and apply it to disk.

use std::path::Path;

use eyre::{Context, Result};
use strata_codegen_typescript::DomainGenerator;
use strata_manifest::{DomainSpec, WorkspaceContext};

use crate::{commands::UnwrapOrExit, reports::NewReport, writer};

/// Execute the new operation.
///
/// The engine produces the full artifact list first; nothing touches
/// the file system unless every file rendered successfully.
pub fn new(spec: &DomainSpec, ws: &WorkspaceContext, output_dir: &Path) -> Result<NewReport> {
    let mut generator = DomainGenerator::new(ws.clone());
    let artifacts = generator.generate(spec).unwrap_or_exit();

    let summary = writer::apply(&artifacts, output_dir).wrap_err("Failed to write files")?;

    Ok(NewReport {
        domain: spec.name.clone(),
        output_dir: output_dir.to_path_buf(),
        written: summary.written,
        skipped: summary.skipped,
    })
}
