use crate::models::{Language, ReExport};
use tree_sitter::{Node, Parser, Tree};

use super::{ExportParser, ParserError};

pub struct JavaScriptParser {
    parser: Parser,
}

impl JavaScriptParser {
    pub fn new(language: Language) -> Result<Self, ParserError> {
        let mut parser = Parser::new();

        let grammar = match language {
            Language::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
            Language::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Language::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        };

        parser
            .set_language(&grammar)
            .map_err(|e| ParserError::InitError(e.to_string()))?;

        Ok(Self { parser })
    }

    /// Parse source into a tree, failing on any ERROR or MISSING node
    fn parse_tree(&mut self, source: &str) -> Result<Tree, ParserError> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| ParserError::InitError("parser returned no tree".to_string()))?;

        let root = tree.root_node();
        if root.has_error() {
            let node = first_error(&root).unwrap_or(root);
            let pos = node.start_position();
            return Err(ParserError::Syntax {
                line: pos.row + 1,
                column: pos.column,
                message: if node.is_missing() {
                    format!("missing {}", node.kind())
                } else {
                    format!("unexpected `{}`", truncate(self.get_node_text(&node, source), 40))
                },
            });
        }

        Ok(tree)
    }

    fn traverse_reexports(&self, node: &Node, source: &str, exports: &mut Vec<ReExport>) {
        if node.kind() == "export_statement" {
            if let Some(module) = self.named_reexport_source(node, source) {
                exports.push(ReExport {
                    module,
                    line: node.start_position().row + 1,
                    column: node.start_position().column,
                });
            }
        }

        // Keep descending after a match
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.traverse_reexports(&child, source, exports);
        }
    }

    /// Source module of `export { a, b as c } from '<module>'`.
    ///
    /// `export * from` and `export * as ns from` carry no export clause and
    /// are rejected, as is an empty clause.
    fn named_reexport_source(&self, node: &Node, source: &str) -> Option<String> {
        let module = node.child_by_field_name("source")?;
        if module.kind() != "string" {
            return None;
        }

        let mut cursor = node.walk();
        let clause = node
            .children(&mut cursor)
            .find(|child| child.kind() == "export_clause")?;

        let mut clause_cursor = clause.walk();
        let first = clause
            .named_children(&mut clause_cursor)
            .find(|child| child.kind() != "comment")?;
        if first.kind() != "export_specifier" {
            return None;
        }

        Some(self.extract_string_value(&module, source))
    }

    fn collect_exported_names(&self, root: &Node, source: &str, names: &mut Vec<String>) {
        let mut cursor = root.walk();
        for child in root.children(&mut cursor) {
            if child.kind() == "export_statement" {
                self.parse_export_statement(&child, source, names);
            }
        }
    }

    fn parse_export_statement(&self, node: &Node, source: &str, names: &mut Vec<String>) {
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            match child.kind() {
                "default" => push_unique(names, "default".to_string()),
                "export_clause" => self.parse_export_clause(&child, source, names),
                "namespace_export" => {
                    let mut inner = child.walk();
                    for ident in child.named_children(&mut inner) {
                        push_unique(names, self.get_node_text(&ident, source).to_string());
                    }
                }
                _ => {}
            }
        }

        if let Some(declaration) = node.child_by_field_name("declaration") {
            self.parse_declaration(&declaration, source, names);
        }
    }

    fn parse_export_clause(&self, node: &Node, source: &str, names: &mut Vec<String>) {
        let mut cursor = node.walk();
        for specifier in node.named_children(&mut cursor) {
            if specifier.kind() != "export_specifier" {
                continue;
            }
            let exported = specifier
                .child_by_field_name("alias")
                .or_else(|| specifier.child_by_field_name("name"));
            if let Some(exported) = exported {
                let name = self.extract_string_value(&exported, source);
                push_unique(names, name);
            }
        }
    }

    fn parse_declaration(&self, node: &Node, source: &str, names: &mut Vec<String>) {
        match node.kind() {
            "lexical_declaration" | "variable_declaration" => {
                let mut cursor = node.walk();
                for declarator in node.named_children(&mut cursor) {
                    if declarator.kind() != "variable_declarator" {
                        continue;
                    }
                    if let Some(name) = declarator.child_by_field_name("name") {
                        if name.kind() == "identifier" {
                            push_unique(names, self.get_node_text(&name, source).to_string());
                        }
                    }
                }
            }
            _ => {
                if let Some(name) = node.child_by_field_name("name") {
                    push_unique(names, self.get_node_text(&name, source).to_string());
                }
            }
        }
    }

    fn extract_string_value(&self, node: &Node, source: &str) -> String {
        let text = self.get_node_text(node, source);
        // Remove quotes
        text.trim_matches(|c| c == '"' || c == '\'' || c == '`')
            .to_string()
    }

    fn get_node_text<'s>(&self, node: &Node, source: &'s str) -> &'s str {
        &source[node.byte_range()]
    }
}

impl ExportParser for JavaScriptParser {
    fn reexports(&mut self, source: &str) -> Result<Vec<ReExport>, ParserError> {
        let tree = self.parse_tree(source)?;
        let mut exports = Vec::new();
        self.traverse_reexports(&tree.root_node(), source, &mut exports);
        Ok(exports)
    }

    fn exported_names(&mut self, source: &str) -> Result<Vec<String>, ParserError> {
        let tree = self.parse_tree(source)?;
        let mut names = Vec::new();
        self.collect_exported_names(&tree.root_node(), source, &mut names);
        Ok(names)
    }
}

fn first_error<'t>(node: &Node<'t>) -> Option<Node<'t>> {
    if node.is_error() || node.is_missing() {
        return Some(*node);
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'t>> = node.children(&mut cursor).collect();
    children
        .iter()
        .filter(|child| child.has_error())
        .find_map(|child| first_error(child))
}

fn push_unique(names: &mut Vec<String>, name: String) {
    if !names.contains(&name) {
        names.push(name);
    }
}

fn truncate(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modules(exports: &[ReExport]) -> Vec<&str> {
        exports.iter().map(|e| e.module.as_str()).collect()
    }

    #[test]
    fn test_named_reexport() {
        let mut parser = JavaScriptParser::new(Language::JavaScript).unwrap();
        let exports = parser
            .reexports("export { default as Button } from './button';")
            .unwrap();

        assert_eq!(modules(&exports), vec!["./button"]);
        assert_eq!(exports[0].line, 1);
    }

    #[test]
    fn test_namespace_and_star_exports_ignored() {
        let mut parser = JavaScriptParser::new(Language::JavaScript).unwrap();
        let source = r#"
export * as icons from './icon';
export * from './everything';
export { } from './empty';
export { card } from "./card";
"#;
        let exports = parser.reexports(source).unwrap();

        assert_eq!(modules(&exports), vec!["./card"]);
        assert_eq!(exports[0].line, 5);
    }

    #[test]
    fn test_local_exports_ignored() {
        let mut parser = JavaScriptParser::new(Language::JavaScript).unwrap();
        let source = r#"
const a = 1;
export { a };
export const b = 2;
export default function Chart() {}
"#;
        let exports = parser.reexports(source).unwrap();
        assert!(exports.is_empty());
    }

    #[test]
    fn test_source_order_and_duplicates_kept() {
        let mut parser = JavaScriptParser::new(Language::JavaScript).unwrap();
        let source = r#"
export { z } from './zeta';
export { a } from './alpha';
export { a2 } from './alpha';
"#;
        let exports = parser.reexports(source).unwrap();
        assert_eq!(modules(&exports), vec!["./zeta", "./alpha", "./alpha"]);
    }

    #[test]
    fn test_syntax_error() {
        let mut parser = JavaScriptParser::new(Language::JavaScript).unwrap();
        let result = parser.reexports("export { a from './a';\n}}}");

        assert!(matches!(result, Err(ParserError::Syntax { .. })));
    }

    #[test]
    fn test_jsx_source() {
        let mut parser = JavaScriptParser::new(Language::JavaScript).unwrap();
        let source = r#"
export { default as Card } from './card';
export const Wrapper = ( { children } ) => <div className="wrapper">{ children }</div>;
"#;
        let exports = parser.reexports(source).unwrap();
        assert_eq!(modules(&exports), vec!["./card"]);
    }

    #[test]
    fn test_exported_names() {
        let mut parser = JavaScriptParser::new(Language::JavaScript).unwrap();
        let source = r#"
import { helper } from './helper';

export const SIZE = 4, LIMIT = 10;
export function useChart() {}
export class Legend {}
const local = 1;
export { local as renamed };
export default Legend;
"#;
        let names = parser.exported_names(source).unwrap();

        assert_eq!(
            names,
            vec!["SIZE", "LIMIT", "useChart", "Legend", "renamed", "default"]
        );
    }

    #[test]
    fn test_typescript_reexport() {
        let mut parser = JavaScriptParser::new(Language::TypeScript).unwrap();
        let source = r#"
export { Table } from './table';
export interface Props { rows: number }
"#;
        let exports = parser.reexports(source).unwrap();
        assert_eq!(modules(&exports), vec!["./table"]);

        let names = parser.exported_names(source).unwrap();
        assert_eq!(names, vec!["Table", "Props"]);
    }
}
