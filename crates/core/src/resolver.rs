//! Resolution of re-export module strings to files on disk

use crate::config::DEFAULT_EXTENSION;
use std::ffi::OsString;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Maps `./button` style module strings to the source file they refer to
#[derive(Debug, Clone)]
pub struct PathResolver {
    extension: String,
}

impl Default for PathResolver {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSION)
    }
}

impl PathResolver {
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
        }
    }

    /// Sort `files` and resolve each against `base`, one output per input
    pub fn resolve_all(&self, files: &[String], base: &Path) -> Vec<PathBuf> {
        let mut sorted = files.to_vec();
        sorted.sort();
        sorted
            .iter()
            .map(|file| self.resolve(file, base).unwrap_or_else(|| join_normalized(base, file)))
            .collect()
    }

    /// First existing regular file among the candidates for `file`:
    /// `base/file`, `base/file.<ext>`, `base/file/index.<ext>`,
    /// `base/file/<name>.<ext>`. `None` when nothing matches.
    pub fn resolve(&self, file: &str, base: &Path) -> Option<PathBuf> {
        let full_path = join_normalized(base, file);
        self.candidates(&full_path).into_iter().find(|c| is_file(c))
    }

    fn candidates(&self, full_path: &Path) -> Vec<PathBuf> {
        let mut candidates = vec![
            full_path.to_path_buf(),
            with_suffix(full_path, &self.extension),
            full_path.join(format!("index.{}", self.extension)),
        ];
        if let Some(folder_name) = full_path.file_name() {
            let mut name = folder_name.to_os_string();
            name.push(".");
            name.push(&self.extension);
            candidates.push(full_path.join(name));
        }
        candidates
    }
}

/// Join `file` onto `base`, folding `.` and `..` segments lexically
pub fn join_normalized(base: &Path, file: &str) -> PathBuf {
    normalize(&base.join(file))
}

/// Fold `.` and `..` segments of `path` without touching the filesystem.
/// Leading `..` of a relative path are kept.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `..` above the root stays at the root
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    out
}

/// `path` with `.<ext>` appended to its last segment; existing dots are kept
fn with_suffix(path: &Path, ext: &str) -> PathBuf {
    let mut raw: OsString = path.as_os_str().to_os_string();
    raw.push(".");
    raw.push(ext);
    PathBuf::from(raw)
}

/// True only for an existing regular file; directories never qualify
pub fn is_file(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

/// True only for an existing directory
pub fn is_directory(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
}
