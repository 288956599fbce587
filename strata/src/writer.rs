//! Applies generated artifacts to the file system.
//!
//! The only part of the tool that writes files. Generated source always
//! refreshes; directory markers are created once and never clobber
//! whatever the user put there.

use std::path::Path;

use eyre::Result;
use strata_codegen::Artifact;
use strata_core::{File, FileRules, WriteResult};

/// Which files ended up on disk.
#[derive(Debug, Default)]
pub struct WriteSummary {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// Write every artifact under `output_dir`, creating directories as
/// needed.
pub fn apply(artifacts: &[Artifact], output_dir: &Path) -> Result<WriteSummary> {
    let mut summary = WriteSummary::default();

    for artifact in artifacts {
        let rules = if artifact.relative_path.ends_with(".gitkeep") {
            FileRules::create_once()
        } else {
            FileRules::always()
        };

        let file = File::new(output_dir.join(&artifact.relative_path), artifact.content.as_str())
            .with_rules(rules);

        match file.write()? {
            WriteResult::Written => summary.written.push(artifact.relative_path.clone()),
            WriteResult::Skipped => summary.skipped.push(artifact.relative_path.clone()),
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn artifact(path: &str, content: &str) -> Artifact {
        Artifact {
            relative_path: path.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_apply_creates_nested_files() {
        let temp = TempDir::new().unwrap();
        let artifacts = vec![
            artifact("src/lib/entities.ts", "export interface Product {}\n"),
            artifact("src/lib/cart/index.ts", "export * from './entities';\n"),
        ];

        let summary = apply(&artifacts, temp.path()).unwrap();

        assert_eq!(summary.written.len(), 2);
        assert!(temp.path().join("src/lib/cart/index.ts").exists());
    }

    #[test]
    fn test_apply_refreshes_generated_source() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("src/index.ts");

        apply(&[artifact("src/index.ts", "old")], temp.path()).unwrap();
        apply(&[artifact("src/index.ts", "new")], temp.path()).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_apply_never_clobbers_markers() {
        let temp = TempDir::new().unwrap();
        let marker = temp.path().join("src/lib/.gitkeep");
        fs::create_dir_all(marker.parent().unwrap()).unwrap();
        fs::write(&marker, "user notes").unwrap();

        let summary = apply(&[artifact("src/lib/.gitkeep", "")], temp.path()).unwrap();

        assert_eq!(summary.skipped, vec!["src/lib/.gitkeep"]);
        assert_eq!(fs::read_to_string(&marker).unwrap(), "user notes");
    }
}
