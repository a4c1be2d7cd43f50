use crate::error::DocsError;
use crate::resolver::is_directory;
use std::fs;
use std::path::{Path, PathBuf};

/// Hand-written overview kept across regenerations
pub const PROTECTED_FILE: &str = "README.md";

/// Destination folders below the docs root, one per route
#[derive(Debug, Clone)]
pub struct DocsFolder {
    docs_root: PathBuf,
}

impl DocsFolder {
    pub fn new(docs_root: impl Into<PathBuf>) -> Self {
        Self {
            docs_root: docs_root.into(),
        }
    }

    pub fn path(&self, route: &str) -> PathBuf {
        self.docs_root.join(route)
    }

    /// Prepare `docs_root/route` for regeneration.
    ///
    /// A missing folder is created (its parent must exist). An existing one
    /// loses every direct child file except `README.md`; subdirectories are
    /// left alone. Returns the folder path and the files removed.
    pub fn clear(&self, route: &str) -> Result<(PathBuf, Vec<PathBuf>), DocsError> {
        let folder = self.path(route);

        if !is_directory(&folder) {
            fs::create_dir(&folder).map_err(|e| DocsError::io(&folder, e))?;
            tracing::debug!(folder = %folder.display(), "created docs folder");
            return Ok((folder, Vec::new()));
        }

        let removed = remove_generated(&folder)?;
        tracing::debug!(
            folder = %folder.display(),
            removed = removed.len(),
            "cleared docs folder"
        );
        Ok((folder, removed))
    }
}

fn remove_generated(folder: &Path) -> Result<Vec<PathBuf>, DocsError> {
    let mut removed = Vec::new();

    let entries = fs::read_dir(folder).map_err(|e| DocsError::io(folder, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| DocsError::io(folder, e))?;
        let path = entry.path();

        if entry.file_name() == PROTECTED_FILE {
            continue;
        }

        let file_type = entry.file_type().map_err(|e| DocsError::io(&path, e))?;
        if file_type.is_dir() {
            continue;
        }

        fs::remove_file(&path).map_err(|e| DocsError::io(&path, e))?;
        removed.push(path);
    }

    removed.sort();
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_clear_keeps_readme() {
        let dir = TempDir::new().unwrap();
        let folder = dir.path().join("packages");
        fs::create_dir(&folder).unwrap();
        fs::write(folder.join("README.md"), "# Packages\n").unwrap();
        fs::write(folder.join("button.md"), "old").unwrap();
        fs::write(folder.join("icon.md"), "old").unwrap();

        let (path, removed) = DocsFolder::new(dir.path()).clear("packages").unwrap();

        assert_eq!(path, folder);
        assert_eq!(removed, vec![folder.join("button.md"), folder.join("icon.md")]);
        assert!(folder.join("README.md").is_file());
        assert!(!folder.join("button.md").exists());
        assert_eq!(fs::read_dir(&folder).unwrap().count(), 1);
    }

    #[test]
    fn test_clear_creates_missing_folder() {
        let dir = TempDir::new().unwrap();

        let (path, removed) = DocsFolder::new(dir.path()).clear("analytics").unwrap();

        assert!(path.is_dir());
        assert!(removed.is_empty());
    }

    #[test]
    fn test_clear_leaves_subdirectories() {
        let dir = TempDir::new().unwrap();
        let folder = dir.path().join("packages");
        fs::create_dir_all(folder.join("images")).unwrap();
        fs::write(folder.join("images").join("chart.png"), "png").unwrap();

        DocsFolder::new(dir.path()).clear("packages").unwrap();

        assert!(folder.join("images").join("chart.png").is_file());
    }

    #[test]
    fn test_clear_without_parent_fails() {
        let dir = TempDir::new().unwrap();
        let docs = DocsFolder::new(dir.path().join("missing-root"));

        let result = docs.clear("packages");
        assert!(matches!(result, Err(DocsError::Io { .. })));
    }

    #[test]
    fn test_clear_when_route_is_a_file_fails() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("packages"), "not a folder").unwrap();

        let result = DocsFolder::new(dir.path()).clear("packages");
        assert!(matches!(result, Err(DocsError::Io { .. })));
    }
}
