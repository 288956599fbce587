//! Report for the new command.

use std::path::PathBuf;

use super::{Output, Report};

/// Result of generating a domain package to disk.
pub struct NewReport {
    pub domain: String,
    pub output_dir: PathBuf,
    /// Files written this run.
    pub written: Vec<String>,
    /// Files left untouched (already present, user-owned).
    pub skipped: Vec<String>,
}

impl Report for NewReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Domain", &self.domain);
        out.key_value("Output", &self.output_dir.display().to_string());
        out.newline();

        out.section(&format!("Generated {} files", self.written.len()));
        for path in &self.written {
            out.added_item(path);
        }

        if !self.skipped.is_empty() {
            out.newline();
            out.section("Skipped (already present)");
            for path in &self.skipped {
                out.list_item(path);
            }
        }
    }
}
