//! Table of contents lines for the generated docs

use crate::naming::{camel_case_dash, md_file_name, NameMode};
use std::path::Path;

/// Heading written at the top of the table of contents document
pub const TOC_HEADER: &str = "<!-- Generated by docgen. Do not edit by hand. -->";

/// Sorted, de-duplicated doc names for a list of component files.
///
/// Files without a `components/` segment are dropped.
pub fn doc_names<P: AsRef<Path>>(files: &[P], route: &str) -> Vec<String> {
    let mut names: Vec<String> = files
        .iter()
        .filter_map(|f| md_file_name(f.as_ref(), route, NameMode::Relative))
        .map(|name| name.to_string_lossy().into_owned())
        .collect();
    names.sort();
    names.dedup();
    names
}

/// One TOC section: a heading linking the route folder, then one entry per doc
pub fn toc_section<P: AsRef<Path>>(files: &[P], route: &str, title: &str) -> Vec<String> {
    let mut lines = vec![format!("  * [{}](components/{}/)", title, route)];

    lines.extend(doc_names(files, route).into_iter().map(|doc| {
        let name = camel_case_dash(doc.strip_suffix(".md").unwrap_or(&doc));
        format!("    * [{}](components/{}/{})", name, route, doc)
    }));

    lines
}

/// The whole TOC document, assembled section by section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableOfContents {
    sections: Vec<Vec<String>>,
}

impl TableOfContents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_section(&mut self, lines: Vec<String>) {
        self.sections.push(lines);
    }

    /// Render with a trailing newline; output depends only on the sections
    pub fn render(&self) -> String {
        let mut output = String::new();
        output.push_str(TOC_HEADER);
        output.push_str("\n\n* [Components](components/)\n");
        for line in self.sections.iter().flatten() {
            output.push_str(line);
            output.push('\n');
        }
        output
    }
}
