//! Per-component Markdown stubs

use crate::error::DocsError;
use crate::models::ComponentDoc;
use crate::scanner::exported_names;
use std::fs;
use std::path::Path;

/// Render the stub for `doc`. Every source file is read here, so a reference
/// the resolver could not match fails at this point.
pub fn render_stub(doc: &ComponentDoc, base: &Path) -> Result<String, DocsError> {
    let mut output = format!("# {}\n\n", doc.title);
    output.push_str("<!-- Generated by docgen from the sources listed below. -->\n\n");

    output.push_str("## Sources\n\n");
    let mut exports: Vec<String> = Vec::new();
    for source in &doc.sources {
        let display = source.strip_prefix(base).unwrap_or(source.as_path());
        output.push_str(&format!("- `{}`\n", display.to_string_lossy().replace('\\', "/")));

        for name in exported_names(source)? {
            if !exports.contains(&name) {
                exports.push(name);
            }
        }
    }

    if !exports.is_empty() {
        output.push_str("\n## Exports\n\n");
        for name in &exports {
            output.push_str(&format!("- `{}`\n", name));
        }
    }

    Ok(output)
}

/// Write the stub for `doc` to `path`
pub fn write_stub(doc: &ComponentDoc, path: &Path, base: &Path) -> Result<(), DocsError> {
    let content = render_stub(doc, base)?;
    fs::write(path, content).map_err(|e| DocsError::io(path, e))?;
    tracing::debug!(file = %path.display(), "wrote component doc");
    Ok(())
}
