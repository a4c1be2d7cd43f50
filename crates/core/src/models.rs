use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Language of a scanned source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    JavaScript,
    TypeScript,
    /// TypeScript with JSX
    Tsx,
}

impl Language {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "js" | "mjs" | "cjs" | "jsx" => Some(Language::JavaScript),
            "ts" | "mts" | "cts" => Some(Language::TypeScript),
            "tsx" => Some(Language::Tsx),
            _ => None,
        }
    }
}

/// A named re-export (`export { x } from './module'`) found in a source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReExport {
    /// The module string exactly as written, without quotes
    pub module: String,
    /// Line number in source file
    pub line: usize,
    /// Column position
    pub column: usize,
}

/// A generated component doc and the source files it was built from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentDoc {
    /// Doc file name relative to the route folder (e.g. `button.md`)
    pub name: String,
    /// Human readable title used in the table of contents
    pub title: String,
    /// Resolved source files that map to this doc
    pub sources: Vec<PathBuf>,
}

/// Outcome of regenerating one route
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteReport {
    /// Route folder name under the docs root
    pub route: String,
    /// Section title in the table of contents
    pub title: String,
    /// Absolute docs folder for this route
    pub folder: PathBuf,
    /// Number of re-exports collected from the index files
    pub exports: usize,
    /// Docs written (or planned, on a dry run)
    pub docs: Vec<ComponentDoc>,
    /// Paths that matched none of the resolution candidates
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unresolved: Vec<PathBuf>,
    /// Paths without a `components/` segment, left out of the docs
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<PathBuf>,
}

/// Aggregate counters for a generation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationStats {
    pub routes: usize,
    pub exports: usize,
    pub docs_written: usize,
    pub unresolved: usize,
    pub skipped: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationMetadata {
    pub duration_ms: u64,
    pub timestamp: String,
    pub tool_version: String,
    pub dry_run: bool,
}

impl Default for GenerationMetadata {
    fn default() -> Self {
        Self {
            duration_ms: 0,
            timestamp: chrono::Utc::now().to_rfc3339(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            dry_run: false,
        }
    }
}

/// Full result of a generation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub docs_root: PathBuf,
    pub toc_path: PathBuf,
    pub routes: Vec<RouteReport>,
    pub stats: GenerationStats,
    pub metadata: GenerationMetadata,
}

impl GenerationReport {
    /// Recompute `stats` from the route reports
    pub fn calculate_stats(routes: &[RouteReport], dry_run: bool) -> GenerationStats {
        let mut stats = GenerationStats {
            routes: routes.len(),
            ..Default::default()
        };

        for route in routes {
            stats.exports += route.exports;
            stats.unresolved += route.unresolved.len();
            stats.skipped += route.skipped.len();
            if !dry_run {
                stats.docs_written += route.docs.len();
            }
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_extension() {
        assert_eq!(Language::from_extension("js"), Some(Language::JavaScript));
        assert_eq!(Language::from_extension("JSX"), Some(Language::JavaScript));
        assert_eq!(Language::from_extension("tsx"), Some(Language::Tsx));
        assert_eq!(Language::from_extension("mts"), Some(Language::TypeScript));
        assert_eq!(Language::from_extension("py"), None);
    }

    #[test]
    fn test_calculate_stats() {
        let route = RouteReport {
            route: "packages".to_string(),
            title: "Package Components".to_string(),
            folder: PathBuf::from("/docs/packages"),
            exports: 3,
            docs: vec![ComponentDoc {
                name: "button.md".to_string(),
                title: "Button".to_string(),
                sources: vec![PathBuf::from("/src/components/button/index.js")],
            }],
            unresolved: vec![PathBuf::from("/src/components/missing")],
            skipped: vec![],
        };

        let stats = GenerationReport::calculate_stats(&[route.clone()], false);
        assert_eq!(stats.routes, 1);
        assert_eq!(stats.exports, 3);
        assert_eq!(stats.docs_written, 1);
        assert_eq!(stats.unresolved, 1);

        let dry = GenerationReport::calculate_stats(&[route], true);
        assert_eq!(dry.docs_written, 0);
    }
}
