mod json;
mod yaml;

pub use json::to_json;
pub use yaml::to_yaml;

use crate::models::GenerationReport;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
    Summary,
}

/// Format a GenerationReport according to the specified format
pub fn format_output(report: &GenerationReport, format: OutputFormat) -> Result<String, FormatError> {
    match format {
        OutputFormat::Json => to_json(report),
        OutputFormat::Yaml => to_yaml(report),
        OutputFormat::Summary => Ok(format_summary(report)),
    }
}

/// Generate a human-readable summary
pub fn format_summary(report: &GenerationReport) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Component Docs Summary{}\n\
         ======================\n\
         Docs Root: {}\n\
         Table of Contents: {}\n\n",
        if report.metadata.dry_run { " (dry run)" } else { "" },
        report.docs_root.display(),
        report.toc_path.display()
    ));

    for route in &report.routes {
        output.push_str(&format!("## {} ({})\n", route.title, route.route));
        output.push_str(&format!(
            "Exports: {} | Docs: {}\n",
            route.exports,
            route.docs.len()
        ));
        for doc in &route.docs {
            output.push_str(&format!("  {} -> {}\n", doc.title, doc.name));
        }
        if !route.unresolved.is_empty() {
            output.push_str("Unresolved:\n");
            for path in &route.unresolved {
                output.push_str(&format!("  {}\n", path.display()));
            }
        }
        if !route.skipped.is_empty() {
            output.push_str("Skipped (no components/ segment):\n");
            for path in &route.skipped {
                output.push_str(&format!("  {}\n", path.display()));
            }
        }
        output.push('\n');
    }

    output.push_str(&format!(
        "Routes: {} | Exports: {} | Docs Written: {} | Unresolved: {} | Skipped: {}\n\
         Duration: {}ms\n\
         Timestamp: {}\n\
         Tool Version: {}\n",
        report.stats.routes,
        report.stats.exports,
        report.stats.docs_written,
        report.stats.unresolved,
        report.stats.skipped,
        report.metadata.duration_ms,
        report.metadata.timestamp,
        report.metadata.tool_version
    ));

    output
}

#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("YAML serialization error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ComponentDoc, GenerationMetadata, GenerationStats, RouteReport};
    use std::path::PathBuf;

    #[test]
    fn test_format_summary() {
        let report = GenerationReport {
            docs_root: PathBuf::from("/docs/components"),
            toc_path: PathBuf::from("/docs/_sidebar.md"),
            routes: vec![RouteReport {
                route: "packages".to_string(),
                title: "Package Components".to_string(),
                folder: PathBuf::from("/docs/components/packages"),
                exports: 2,
                docs: vec![ComponentDoc {
                    name: "date-range.md".to_string(),
                    title: "DateRange".to_string(),
                    sources: vec![],
                }],
                unresolved: vec![PathBuf::from("/src/missing")],
                skipped: vec![],
            }],
            stats: GenerationStats::default(),
            metadata: GenerationMetadata {
                dry_run: true,
                ..Default::default()
            },
        };

        let summary = format_output(&report, OutputFormat::Summary).unwrap();
        assert!(summary.starts_with("Component Docs Summary (dry run)"));
        assert!(summary.contains("## Package Components (packages)"));
        assert!(summary.contains("  DateRange -> date-range.md"));
        assert!(summary.contains("Unresolved:\n  /src/missing"));
        assert!(!summary.contains("Skipped"));
    }
}
