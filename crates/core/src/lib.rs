//! MTA Rust DocGen Core Library
//!
//! This library regenerates Markdown documentation for a component library.
//! It reads the library's index files, follows each named re-export to its
//! source file, writes one doc stub per component and assembles a linked
//! table of contents.
//!
//! # Features
//!
//! - Scan `export { x } from './module'` statements with Tree-sitter
//! - Resolve module strings to files (`.js`, `index.js`, `<name>/<name>.js`)
//! - Clear route folders while keeping a hand-written `README.md`
//! - Build sorted, de-duplicated TOC sections
//! - Report results as JSON, YAML or a summary
//!
//! # Example
//!
//! ```no_run
//! use mta_rust_docgen_core::{DocsConfig, DocsGenerator, OutputFormat, format_output};
//! use std::path::PathBuf;
//!
//! let config = DocsConfig::from_project_root(PathBuf::from("."));
//! let generator = DocsGenerator::new(config).unwrap();
//! let report = generator.generate().unwrap();
//!
//! println!("{}", format_output(&report, OutputFormat::Summary).unwrap());
//! ```

pub mod config;
pub mod error;
pub mod folder;
pub mod generator;
pub mod models;
pub mod naming;
pub mod output;
pub mod parsers;
pub mod resolver;
pub mod scanner;
pub mod stub;
pub mod toc;

// Re-exports for convenience
pub use config::{ConfigError, DocsConfig, RouteConfig};
pub use error::DocsError;
pub use folder::DocsFolder;
pub use generator::DocsGenerator;
pub use models::*;
pub use naming::{camel_case_dash, component_name, md_file_name, NameMode};
pub use output::{format_output, format_summary, FormatError, OutputFormat};
pub use resolver::PathResolver;
pub use scanner::{scan_exports, ExportScanner};
pub use toc::{toc_section, TableOfContents};

/// Serializes tests that read or change the process working directory
#[cfg(test)]
pub(crate) static CWD_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
