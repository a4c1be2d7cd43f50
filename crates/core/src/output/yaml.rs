use crate::models::GenerationReport;
use super::FormatError;

/// Serialize a GenerationReport to YAML
pub fn to_yaml(report: &GenerationReport) -> Result<String, FormatError> {
    serde_yaml::to_string(report).map_err(FormatError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GenerationMetadata, GenerationStats};
    use std::path::PathBuf;

    #[test]
    fn test_to_yaml() {
        let report = GenerationReport {
            docs_root: PathBuf::from("/docs/components"),
            toc_path: PathBuf::from("/docs/_sidebar.md"),
            routes: vec![],
            stats: GenerationStats::default(),
            metadata: GenerationMetadata::default(),
        };

        let yaml = to_yaml(&report).unwrap();
        assert!(yaml.contains("docs_root:"));
        assert!(yaml.contains("stats:"));
    }
}
