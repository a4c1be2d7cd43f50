//! Configuration for the docs generator
//!
//! All folders the pipeline touches live in [`DocsConfig`], so the generator
//! can be pointed at any tree. A config can be derived from a project root
//! or loaded from a TOML file whose relative paths resolve against the
//! file's own directory.

use crate::resolver::normalize;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Module substring that marks the shared filtering helper, which is not a component
pub const DEFAULT_EXCLUDED_MODULE: &str = "use-filters";

/// Source file extension tried by the path resolver
pub const DEFAULT_EXTENSION: &str = "js";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    TomlError(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// One logical group of components documented in its own folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteConfig {
    /// Folder name under the docs root
    pub route: String,
    /// Section title in the table of contents
    pub title: String,
    /// Directory re-export paths are resolved against
    pub base_path: PathBuf,
    /// Files scanned for `export { .. } from '..'` statements
    pub index_files: Vec<PathBuf>,
}

impl RouteConfig {
    pub fn new(route: impl Into<String>, title: impl Into<String>, base_path: PathBuf) -> Self {
        let index_files = vec![base_path.join(format!("index.{}", DEFAULT_EXTENSION))];
        Self {
            route: route.into(),
            title: title.into(),
            base_path,
            index_files,
        }
    }

    pub fn with_index_files(mut self, index_files: Vec<PathBuf>) -> Self {
        self.index_files = index_files;
        self
    }
}

/// Configuration for a generation run
#[derive(Debug, Clone)]
pub struct DocsConfig {
    /// Shared component package sources
    pub components_root: PathBuf,
    /// App-specific analytics components
    pub analytics_root: PathBuf,
    /// Root of the generated docs tree; each route is a folder below it
    pub docs_root: PathBuf,
    /// Table of contents document
    pub toc_path: PathBuf,
    /// Extension appended by the path resolver
    pub extension: String,
    /// Re-exports whose module contains this substring are skipped
    pub excluded_module: String,
    /// Routes regenerated in order
    pub routes: Vec<RouteConfig>,
    /// Scan and resolve only; leave the docs tree untouched
    pub dry_run: bool,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self::from_project_root(PathBuf::from("."))
    }
}

impl DocsConfig {
    /// Standard layout of a project checked out at `root`.
    ///
    /// A relative `root` is taken from the current directory; every path in
    /// the config is absolute.
    pub fn from_project_root(root: PathBuf) -> Self {
        let root = absolute_path(&root);
        let components_root = root.join("packages").join("components").join("src");
        let analytics_root = root.join("client").join("analytics").join("components");
        let docs_root = root.join("docs").join("components");
        let toc_path = root.join("docs").join("_sidebar.md");

        let routes = vec![
            RouteConfig::new("packages", "Package Components", components_root.clone()),
            RouteConfig::new("analytics", "Analytics Components", analytics_root.clone()),
        ];

        Self {
            components_root,
            analytics_root,
            docs_root,
            toc_path,
            extension: DEFAULT_EXTENSION.to_string(),
            excluded_module: DEFAULT_EXCLUDED_MODULE.to_string(),
            routes,
            dry_run: false,
        }
    }

    /// Load a TOML config file. Missing keys fall back to the standard layout
    /// rooted at the file's directory.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        Self::from_toml_str(&content, base)
    }

    /// Parse TOML config content, resolving relative paths against `base`
    pub fn from_toml_str(content: &str, base: &Path) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        file.into_config(&absolute_path(base))
    }

    pub fn with_docs_root(mut self, docs_root: PathBuf) -> Self {
        self.docs_root = absolute_path(&docs_root);
        self
    }

    pub fn with_toc_path(mut self, toc_path: PathBuf) -> Self {
        self.toc_path = absolute_path(&toc_path);
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Reject configs the pipeline cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.extension.is_empty() || self.extension.starts_with('.') {
            return Err(ConfigError::InvalidConfig(format!(
                "extension must be non-empty and given without a leading dot, got {:?}",
                self.extension
            )));
        }

        for route in &self.routes {
            if route.route.is_empty() || route.route.contains(['/', '\\']) {
                return Err(ConfigError::InvalidConfig(format!(
                    "route must be a single folder name, got {:?}",
                    route.route
                )));
            }
        }

        Ok(())
    }
}

/// `path` made absolute against the current directory, `.` and `..` folded.
/// An empty path means the current directory.
fn absolute_path(path: &Path) -> PathBuf {
    let path = if path.as_os_str().is_empty() {
        Path::new(".")
    } else {
        path
    };
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    normalize(&absolute)
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    components_root: Option<PathBuf>,
    analytics_root: Option<PathBuf>,
    docs_root: Option<PathBuf>,
    toc_path: Option<PathBuf>,
    extension: Option<String>,
    excluded_module: Option<String>,
    routes: Option<Vec<RouteFile>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RouteFile {
    route: String,
    title: String,
    base_path: PathBuf,
    #[serde(default)]
    index_files: Vec<PathBuf>,
}

impl ConfigFile {
    fn into_config(self, base: &Path) -> Result<DocsConfig, ConfigError> {
        let mut config = DocsConfig::from_project_root(base.to_path_buf());
        let at = |path: PathBuf| normalize(&base.join(path));

        if let Some(path) = self.components_root {
            config.components_root = at(path);
            if let Some(route) = config.routes.get_mut(0) {
                *route = RouteConfig::new(
                    route.route.clone(),
                    route.title.clone(),
                    config.components_root.clone(),
                );
            }
        }
        if let Some(path) = self.analytics_root {
            config.analytics_root = at(path);
            if let Some(route) = config.routes.get_mut(1) {
                *route = RouteConfig::new(
                    route.route.clone(),
                    route.title.clone(),
                    config.analytics_root.clone(),
                );
            }
        }
        if let Some(path) = self.docs_root {
            config.docs_root = at(path);
        }
        if let Some(path) = self.toc_path {
            config.toc_path = at(path);
        }
        if let Some(extension) = self.extension {
            config.extension = extension;
        }
        if let Some(module) = self.excluded_module {
            config.excluded_module = module;
        }

        if let Some(routes) = self.routes {
            config.routes = routes
                .into_iter()
                .map(|r| {
                    let base_path = at(r.base_path);
                    let route = RouteConfig::new(r.route, r.title, base_path);
                    if r.index_files.is_empty() {
                        route
                    } else {
                        let index_files = r.index_files.into_iter().map(at).collect();
                        route.with_index_files(index_files)
                    }
                })
                .collect();
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_root_layout() {
        let config = DocsConfig::from_project_root(PathBuf::from("/repo"));
        assert_eq!(
            config.components_root,
            PathBuf::from("/repo/packages/components/src")
        );
        assert_eq!(
            config.analytics_root,
            PathBuf::from("/repo/client/analytics/components")
        );
        assert_eq!(config.docs_root, PathBuf::from("/repo/docs/components"));
        assert_eq!(config.routes.len(), 2);
        assert_eq!(
            config.routes[0].index_files,
            vec![PathBuf::from("/repo/packages/components/src/index.js")]
        );
        assert_eq!(config.excluded_module, "use-filters");
    }

    #[test]
    fn test_config_builder() {
        let config = DocsConfig::from_project_root(PathBuf::from("/repo"))
            .with_docs_root(PathBuf::from("/out"))
            .with_toc_path(PathBuf::from("/out/../TOC.md"))
            .with_dry_run(true);

        assert_eq!(config.docs_root, PathBuf::from("/out"));
        assert_eq!(config.toc_path, PathBuf::from("/TOC.md"));
        assert!(config.dry_run);
    }

    #[test]
    fn test_relative_project_root_becomes_absolute() {
        let _lock = crate::CWD_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let cwd = std::env::current_dir().unwrap();
        let config = DocsConfig::from_project_root(PathBuf::from("../.."));

        let expected = normalize(&cwd.join("../.."));
        assert!(config.components_root.is_absolute());
        assert_eq!(
            config.components_root,
            expected.join("packages").join("components").join("src")
        );
        assert_eq!(config.routes[0].base_path, config.components_root);
        assert_eq!(config.docs_root, expected.join("docs").join("components"));
    }

    #[test]
    fn test_empty_config_base_is_current_dir() {
        let _lock = crate::CWD_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let cwd = std::env::current_dir().unwrap();
        let content = r#"
[[routes]]
route = "widgets"
title = "Widgets"
base_path = "components/src"
"#;
        let config = DocsConfig::from_toml_str(content, Path::new("")).unwrap();

        assert_eq!(
            config.routes[0].base_path,
            normalize(&cwd).join("components").join("src")
        );
        assert!(config.toc_path.is_absolute());
    }

    #[test]
    fn test_toml_relative_paths() {
        let content = r#"
docs_root = "site/docs"
toc_path = "site/TOC.md"

[[routes]]
route = "widgets"
title = "Widgets"
base_path = "lib/widgets"
"#;
        let config = DocsConfig::from_toml_str(content, Path::new("/project")).unwrap();

        assert_eq!(config.docs_root, PathBuf::from("/project/site/docs"));
        assert_eq!(config.toc_path, PathBuf::from("/project/site/TOC.md"));
        assert_eq!(config.routes.len(), 1);
        assert_eq!(config.routes[0].base_path, PathBuf::from("/project/lib/widgets"));
        assert_eq!(
            config.routes[0].index_files,
            vec![PathBuf::from("/project/lib/widgets/index.js")]
        );
    }

    #[test]
    fn test_toml_components_root_moves_default_route() {
        let config =
            DocsConfig::from_toml_str("components_root = \"ui/src\"", Path::new("/p")).unwrap();
        assert_eq!(config.routes[0].base_path, PathBuf::from("/p/ui/src"));
        assert_eq!(config.routes[1].base_path, PathBuf::from("/p/client/analytics/components"));
    }

    #[test]
    fn test_invalid_route_rejected() {
        let content = r#"
[[routes]]
route = "a/b"
title = "Nested"
base_path = "src"
"#;
        let result = DocsConfig::from_toml_str(content, Path::new("/p"));
        assert!(matches!(result, Err(ConfigError::InvalidConfig(_))));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = DocsConfig::from_toml_str("doc_root = \"x\"", Path::new("/p"));
        assert!(matches!(result, Err(ConfigError::TomlError(_))));
    }
}
