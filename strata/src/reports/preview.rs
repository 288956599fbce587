//! Report for the preview command.

use strata_codegen::Artifact;

use super::{Output, Report};

/// One planned file with its generation phase.
pub struct PlannedFile {
    pub path: String,
    pub phase: String,
}

/// Result of a dry-run generation.
pub struct PreviewReport {
    pub domain: String,
    pub planned: Vec<PlannedFile>,
    pub artifacts: Vec<Artifact>,
}

impl Report for PreviewReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Domain", &self.domain);
        out.newline();

        out.section(&format!("Plan ({} files)", self.planned.len()));
        for file in &self.planned {
            out.list_item(&format!("{} [{}]", file.path, file.phase));
        }
        out.newline();

        for artifact in &self.artifacts {
            out.divider(&artifact.relative_path);
            out.preformatted(&artifact.content);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} files would be generated",
            self.artifacts.len()
        ));
    }
}
