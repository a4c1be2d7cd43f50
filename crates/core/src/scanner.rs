use crate::config::DEFAULT_EXCLUDED_MODULE;
use crate::error::DocsError;
use crate::models::{Language, ReExport};
use crate::parsers::{create_parser, ExportParser, ParserError};
use std::fs;
use std::path::Path;

/// Extracts the modules an index file re-exports
#[derive(Debug, Clone)]
pub struct ExportScanner {
    excluded_module: String,
}

impl Default for ExportScanner {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDED_MODULE)
    }
}

impl ExportScanner {
    pub fn new(excluded_module: impl Into<String>) -> Self {
        Self {
            excluded_module: excluded_module.into(),
        }
    }

    /// Module strings of every named re-export in `path`, in source order.
    ///
    /// Modules containing the excluded substring are dropped; duplicates are kept.
    pub fn scan(&self, path: &Path) -> Result<Vec<String>, DocsError> {
        let exports = self.scan_statements(path)?;
        let before = exports.len();

        let modules: Vec<String> = exports
            .into_iter()
            .filter(|export| !self.is_excluded(&export.module))
            .map(|export| export.module)
            .collect();

        tracing::debug!(
            file = %path.display(),
            found = before,
            kept = modules.len(),
            "scanned re-exports"
        );

        Ok(modules)
    }

    /// Every named re-export statement in `path`, before exclusion
    pub fn scan_statements(&self, path: &Path) -> Result<Vec<ReExport>, DocsError> {
        let source = read_source(path)?;
        let mut parser = parser_for(path)?;
        parser
            .reexports(&source)
            .map_err(|e| DocsError::parse(path, e))
    }

    pub fn is_excluded(&self, module: &str) -> bool {
        !self.excluded_module.is_empty() && module.contains(&self.excluded_module)
    }
}

/// Shorthand for [`ExportScanner::scan`] with the default exclusion
pub fn scan_exports(path: &Path) -> Result<Vec<String>, DocsError> {
    ExportScanner::default().scan(path)
}

/// Names a source file exports, used to describe a component in its stub
pub fn exported_names(path: &Path) -> Result<Vec<String>, DocsError> {
    let source = read_source(path)?;
    let mut parser = parser_for(path)?;
    parser
        .exported_names(&source)
        .map_err(|e| DocsError::parse(path, e))
}

fn read_source(path: &Path) -> Result<String, DocsError> {
    let bytes = fs::read(path).map_err(|e| DocsError::io(path, e))?;
    String::from_utf8(bytes).map_err(|e| DocsError::parse(path, ParserError::from(e)))
}

fn parser_for(path: &Path) -> Result<Box<dyn ExportParser>, DocsError> {
    let ext = path
        .extension()
        .map(|ext| ext.to_string_lossy().into_owned())
        .unwrap_or_default();
    let language = Language::from_extension(&ext)
        .ok_or_else(|| DocsError::parse(path, ParserError::UnsupportedExtension(ext)))?;
    create_parser(language).map_err(|e| DocsError::parse(path, e))
}
