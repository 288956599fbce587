//! Optional workspace-scope detection.
//!
//! Detection runs once here, at the outermost caller; the engine only
//! ever sees the resulting explicit `WorkspaceContext` value.

use std::path::Path;

/// Walk up from `start` looking for a package.json with a scoped name
/// and return the scope (e.g. "@acme").
pub fn detect_scope(start: &Path) -> Option<String> {
    for dir in start.ancestors() {
        let manifest = dir.join("package.json");
        if !manifest.is_file() {
            continue;
        }
        let content = std::fs::read_to_string(&manifest).ok()?;
        let json: serde_json::Value = serde_json::from_str(&content).ok()?;
        let name = json.get("name")?.as_str()?;
        if let Some((scope, _)) = name.split_once('/') {
            if scope.starts_with('@') {
                return Some(scope.to_string());
            }
        }
        // nearest package.json wins, scoped or not
        return None;
    }
    None
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_detects_scope_from_package_json() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("package.json"),
            r#"{ "name": "@acme/workspace" }"#,
        )
        .unwrap();

        let nested = temp.path().join("libs").join("order");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(detect_scope(&nested), Some("@acme".to_string()));
    }

    #[test]
    fn test_unscoped_package_yields_none() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), r#"{ "name": "workspace" }"#).unwrap();

        assert_eq!(detect_scope(temp.path()), None);
    }

    #[test]
    fn test_no_package_json_yields_none() {
        let temp = TempDir::new().unwrap();
        assert_eq!(detect_scope(temp.path()), None);
    }
}
