use crate::models::GenerationReport;
use super::FormatError;

/// Serialize a GenerationReport to pretty-printed JSON
pub fn to_json(report: &GenerationReport) -> Result<String, FormatError> {
    serde_json::to_string_pretty(report).map_err(FormatError::from)
}
