mod javascript;

pub use javascript::JavaScriptParser;

use crate::models::{Language, ReExport};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParserError {
    #[error("Failed to initialize parser: {0}")]
    InitError(String),
    #[error("Source is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
    #[error("Syntax error at {line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },
    #[error("Unsupported file extension: {0:?}")]
    UnsupportedExtension(String),
}

/// Trait for language-specific export parsers
pub trait ExportParser {
    /// Collect every `export { .. } from '<module>'` statement in source order
    fn reexports(&mut self, source: &str) -> Result<Vec<ReExport>, ParserError>;

    /// Names a module makes available to importers (`default` for a default export)
    fn exported_names(&mut self, source: &str) -> Result<Vec<String>, ParserError>;
}

/// Create a parser for the given language
pub fn create_parser(language: Language) -> Result<Box<dyn ExportParser>, ParserError> {
    Ok(Box::new(JavaScriptParser::new(language)?))
}
