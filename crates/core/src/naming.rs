//! Doc file names and titles derived from component source paths

use regex::{Captures, Regex};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

const COMPONENTS_MARKER: &str = "/components/";

/// Whether [`md_file_name`] returns a bare file name or a path in the docs tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameMode<'a> {
    /// `button.md`
    Relative,
    /// `<docs_root>/<route>/button.md`
    Absolute(&'a Path),
}

/// Component name for a source path: the segment after `/components/`,
/// skipping a leading `src/`.
///
/// `None` when the path has no `/components/` segment or nothing follows it.
pub fn component_name(path: &Path) -> Option<String> {
    let path = path.to_string_lossy().replace('\\', "/");
    let after = path.split(COMPONENTS_MARKER).nth(1)?;
    let rest = after.strip_prefix("src/").unwrap_or(after);
    let name = rest.split('/').next()?;

    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Markdown file for a component source path
pub fn md_file_name(path: &Path, route: &str, mode: NameMode<'_>) -> Option<PathBuf> {
    let file_name = format!("{}.md", component_name(path)?);
    match mode {
        NameMode::Relative => Some(PathBuf::from(file_name)),
        NameMode::Absolute(docs_root) => Some(docs_root.join(route).join(file_name)),
    }
}

/// `date-range_picker` -> `DateRangePicker`.
///
/// The first character is uppercased; a `-` or `_` before a lowercase letter
/// is dropped and the letter uppercased. Anything else is left as is.
pub fn camel_case_dash(s: &str) -> String {
    static DELIMITED: OnceLock<Regex> = OnceLock::new();
    let re = DELIMITED.get_or_init(|| Regex::new(r"[-_]([a-z])").expect("valid regex"));

    let joined = re.replace_all(s, |caps: &Captures| caps[1].to_uppercase());

    let mut chars = joined.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
