//! Single-pass tree builder for lorg documents
//!
//! The builder consumes the scanner line by line, dispatching on the
//! first significant character: `#` runs open nodes, `$` lines define
//! units, blank lines are skipped and anything else is discarded so
//! future line kinds stay forward-compatible.
//!
//! Hierarchy is tracked with an explicit stack of open nodes whose depth
//! always equals the level of the node on top. A header at level L first
//! closes every open node at level >= L (each pop attaches a whole
//! completed subtree to the node below it, or to the root when the stack
//! empties), then pushes the new node. No native recursion is involved,
//! so nesting depth is bounded by memory, not by the call stack.

use std::collections::BTreeSet;

use crate::lorg::ast::{Document, Node, Unit};
use crate::lorg::error::{ParseError, ParseErrorKind};
use crate::lorg::lexical::{
    is_end_of_line, is_valid_unit_value, is_whitespace, trim_ends, trim_trailing,
};
use crate::lorg::propagate::propagate;
use crate::lorg::scanner::Scanner;

/// Opens a node header; the length of the run is the nesting level.
pub const NODE_MARKER: char = '#';
/// Opens a unit definition line.
pub const UNIT_MARKER: char = '$';
/// Splits a unit definition into name and value; the last occurrence on
/// the line is the structural one, so names may contain the separator.
pub const UNIT_SEPARATOR: char = ':';

/// Parse a complete document: build the tree, then aggregate unit values.
///
/// Returns the first error encountered; there are no partial results.
pub fn parse(content: &str) -> Result<Document, ParseError> {
    let (mut root, unit_names) = build_tree(content)?;
    propagate(&mut root, &unit_names);
    Ok(Document { root, unit_names })
}

/// Build the raw node tree and collect the set of authored unit names.
/// Unit values are exactly as written; aggregation happens afterwards.
fn build_tree(content: &str) -> Result<(Node, BTreeSet<String>), ParseError> {
    let mut scanner = Scanner::new(content);
    let mut root = Node::root();
    let mut unit_names = BTreeSet::new();
    let mut open_nodes: Vec<Node> = Vec::new();

    while !scanner.eof() {
        // Column 0 means a line was just finished (or nothing consumed
        // yet): skip the next line's leading whitespace.
        if scanner.column() == 0 && scanner.peek().is_some_and(is_whitespace) {
            skip_whitespace(&mut scanner);
            if scanner.eof() {
                break;
            }
        }

        let Some(c) = scanner.advance() else {
            break;
        };

        if c == NODE_MARKER {
            parse_node_header(&mut scanner, &mut open_nodes, &mut root)?;
        } else if c == UNIT_MARKER {
            parse_unit_definition(&mut scanner, &mut open_nodes, &mut unit_names)?;
        } else if c == '\n' {
            continue;
        } else {
            skip_line(&mut scanner);
        }
    }

    // Close whatever is still open, deepest first.
    while let Some(node) = open_nodes.pop() {
        attach(node, &mut open_nodes, &mut root);
    }

    Ok((root, unit_names))
}

/// Attach a completed node to the deepest open node, or to the root when
/// nothing is open.
fn attach(node: Node, open_nodes: &mut [Node], root: &mut Node) {
    match open_nodes.last_mut() {
        Some(parent) => parent.children.push(node),
        None => root.children.push(node),
    }
}

// Called with the first marker character already consumed.
fn parse_node_header(
    scanner: &mut Scanner,
    open_nodes: &mut Vec<Node>,
    root: &mut Node,
) -> Result<(), ParseError> {
    let line = scanner.line();

    let mut level: usize = 1;
    while scanner.peek() == Some(NODE_MARKER) {
        scanner.advance();
        level += 1;
    }

    skip_whitespace(scanner);
    if is_end_of_line(scanner.peek()) {
        return Err(ParseError::new(ParseErrorKind::MissingTitle, line));
    }
    let title = rest_of_line(scanner);

    // A node may only nest one deeper than the deepest open node.
    if level > open_nodes.len() + 1 {
        return Err(ParseError::new(ParseErrorKind::OrphanNode, line));
    }
    while open_nodes.len() >= level {
        let Some(completed) = open_nodes.pop() else {
            break;
        };
        attach(completed, open_nodes, root);
    }
    open_nodes.push(Node::new(title));
    Ok(())
}

// Called with the marker character already consumed. The whole line is
// read at once because unit names may contain the separator; the split
// happens at the last separator occurrence.
fn parse_unit_definition(
    scanner: &mut Scanner,
    open_nodes: &mut [Node],
    unit_names: &mut BTreeSet<String>,
) -> Result<(), ParseError> {
    let line = scanner.line();

    skip_whitespace(scanner);
    let definition_column = scanner.peek_column();
    let definition = rest_of_line(scanner);
    if definition.is_empty() {
        return Err(ParseError::new(ParseErrorKind::IllFormedUnitDefinition, line));
    }

    let Some(separator_index) = definition.rfind(UNIT_SEPARATOR) else {
        return Err(ParseError::new(ParseErrorKind::IllFormedUnitDefinition, line));
    };

    let name = trim_ends(&definition[..separator_index]);
    if name.is_empty() {
        return Err(ParseError::new(ParseErrorKind::IllFormedUnitDefinition, line));
    }

    let value_part = &definition[separator_index + 1..];
    let value_text = trim_ends(value_part);
    if value_text.is_empty() {
        return Err(ParseError::new(ParseErrorKind::IllFormedUnitDefinition, line));
    }
    let value_column = definition_column
        + definition[..separator_index].chars().count()
        + 1
        + value_part.chars().take_while(|c| is_whitespace(*c)).count();
    if !is_valid_unit_value(value_text) {
        return Err(ParseError::with_column(
            ParseErrorKind::InvalidUnitValue,
            line,
            value_column,
        ));
    }

    // Checked after the syntax so a malformed line outside any node is
    // still reported as malformed.
    let Some(node) = open_nodes.last_mut() else {
        return Err(ParseError::new(ParseErrorKind::UnitOutsideNode, line));
    };

    let value: f64 = value_text.parse().map_err(|_| {
        ParseError::with_column(ParseErrorKind::InvalidUnitValue, line, value_column)
    })?;
    node.insert_unit(Unit::real(name, value));
    unit_names.insert(name.to_string());
    Ok(())
}

fn skip_whitespace(scanner: &mut Scanner) {
    while scanner.peek().is_some_and(is_whitespace) {
        scanner.advance();
    }
}

// Consume through the end of the current line, discarding it.
fn skip_line(scanner: &mut Scanner) {
    while !is_end_of_line(scanner.peek()) {
        scanner.advance();
    }
    scanner.advance();
}

// Consume through the end of the current line and return its content
// with trailing whitespace stripped. The line break itself is consumed
// so the next iteration starts at column 0.
fn rest_of_line(scanner: &mut Scanner) -> String {
    let mut content = String::new();
    while let Some(c) = scanner.peek() {
        if c == '\n' {
            break;
        }
        content.push(c);
        scanner.advance();
    }
    scanner.advance();
    trim_trailing(&content).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(content: &str) -> (Node, BTreeSet<String>) {
        build_tree(content).expect("document should parse")
    }

    fn build_err(content: &str) -> ParseError {
        build_tree(content).expect_err("document should not parse")
    }

    #[test]
    fn test_empty_document() {
        let (root, unit_names) = build("");
        assert!(root.children.is_empty());
        assert!(unit_names.is_empty());
    }

    #[test]
    fn test_whitespace_only_document() {
        let (root, _) = build("   \n\t\n  ");
        assert!(root.children.is_empty());
    }

    #[test]
    fn test_flat_headers_in_document_order() {
        let (root, _) = build("# A\n# B\n# C\n");
        let titles: Vec<&str> = root.children.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, ["A", "B", "C"]);
    }

    #[test]
    fn test_title_trimming() {
        let (root, _) = build("#    Spaced title   \n");
        assert_eq!(root.children[0].title, "Spaced title");
    }

    #[test]
    fn test_title_without_separating_whitespace() {
        let (root, _) = build("#Tight\n");
        assert_eq!(root.children[0].title, "Tight");
    }

    #[test]
    fn test_leading_whitespace_before_marker() {
        let (root, _) = build("   # Indented\n");
        assert_eq!(root.children[0].title, "Indented");
    }

    #[test]
    fn test_missing_final_newline() {
        let (root, _) = build("# A");
        assert_eq!(root.children[0].title, "A");
    }

    #[test]
    fn test_nested_hierarchy() {
        let (root, _) = build("# A\n## B\n### C\n");
        assert_eq!(root.children.len(), 1);
        let a = &root.children[0];
        assert_eq!(a.title, "A");
        assert_eq!(a.children[0].title, "B");
        assert_eq!(a.children[0].children[0].title, "C");
    }

    #[test]
    fn test_sibling_after_deep_nesting_closes_subtree() {
        let (root, _) = build("# A\n## B\n### C\n# D\n");
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].title, "A");
        assert_eq!(root.children[0].children[0].title, "B");
        assert_eq!(root.children[0].children[0].children[0].title, "C");
        assert_eq!(root.children[1].title, "D");
    }

    #[test]
    fn test_partial_close_to_intermediate_level() {
        let (root, _) = build("# A\n## B\n### C\n## E\n");
        let a = &root.children[0];
        assert_eq!(a.children.len(), 2);
        assert_eq!(a.children[0].title, "B");
        assert_eq!(a.children[0].children[0].title, "C");
        assert_eq!(a.children[1].title, "E");
    }

    #[test]
    fn test_missing_title_at_end_of_input() {
        let error = build_err("#");
        assert_eq!(error.kind, ParseErrorKind::MissingTitle);
        assert_eq!(error.line, 1);
    }

    #[test]
    fn test_missing_title_before_newline() {
        let error = build_err("# A\n##   \n");
        assert_eq!(error.kind, ParseErrorKind::MissingTitle);
        assert_eq!(error.line, 2);
    }

    #[test]
    fn test_marker_alone_on_line_is_missing_title() {
        // The next line is not silently taken as the title.
        let error = build_err("#\nA\n");
        assert_eq!(error.kind, ParseErrorKind::MissingTitle);
        assert_eq!(error.line, 1);
    }

    #[test]
    fn test_orphan_node_at_document_start() {
        let error = build_err("## A\n");
        assert_eq!(error.kind, ParseErrorKind::OrphanNode);
        assert_eq!(error.line, 1);
    }

    #[test]
    fn test_orphan_node_skipping_a_level() {
        let error = build_err("# A\n### C\n");
        assert_eq!(error.kind, ParseErrorKind::OrphanNode);
        assert_eq!(error.line, 2);
    }

    #[test]
    fn test_unit_definition_basic() {
        let (root, unit_names) = build("# A\n$ weight : 10\n");
        let unit = &root.children[0].units["weight"];
        assert_eq!(unit.name, "weight");
        assert_eq!(unit.value, 10.0);
        assert!(unit.is_real);
        assert!(!unit.is_ignored);
        assert!(unit_names.contains("weight"));
    }

    #[test]
    fn test_unit_attaches_to_deepest_open_node() {
        let (root, _) = build("# A\n## B\n$ x: 5\n");
        let a = &root.children[0];
        assert!(a.units.is_empty());
        assert_eq!(a.children[0].units["x"].value, 5.0);
    }

    #[test]
    fn test_unit_name_may_contain_separator() {
        let (root, _) = build("# A\n$ a:b: 1\n");
        assert!(root.children[0].units.contains_key("a:b"));
    }

    #[test]
    fn test_unit_value_signs_and_decimals() {
        let (root, _) = build("# A\n$ a: -1\n$ b: +2\n$ c: 1.25\n");
        let units = &root.children[0].units;
        assert_eq!(units["a"].value, -1.0);
        assert_eq!(units["b"].value, 2.0);
        assert_eq!(units["c"].value, 1.25);
    }

    #[test]
    fn test_duplicate_unit_in_same_node_last_wins() {
        let (root, _) = build("# A\n$ x: 1\n$ x: 2\n");
        assert_eq!(root.children[0].units["x"].value, 2.0);
        assert_eq!(root.children[0].units.len(), 1);
    }

    #[test]
    fn test_ill_formed_unit_definitions() {
        for source in [
            "# A\n$\n",
            "# A\n$   \n",
            "# A\n$ name\n",
            "# A\n$ : 1\n",
            "# A\n$ name:\n",
            "# A\n$ name:   \n",
        ] {
            let error = build_err(source);
            assert_eq!(
                error.kind,
                ParseErrorKind::IllFormedUnitDefinition,
                "source: {:?}",
                source
            );
            assert_eq!(error.line, 2);
        }
    }

    #[test]
    fn test_invalid_unit_value_position() {
        let error = build_err("# A\n$ bad: 1.2.3\n");
        assert_eq!(error.kind, ParseErrorKind::InvalidUnitValue);
        assert_eq!(error.line, 2);
        // In `$ bad: 1.2.3` the value starts at column 8.
        assert_eq!(error.column, Some(8));
    }

    #[test]
    fn test_unit_outside_node() {
        let error = build_err("$ x: 1\n");
        assert_eq!(error.kind, ParseErrorKind::UnitOutsideNode);
        assert_eq!(error.line, 1);
    }

    #[test]
    fn test_malformed_unit_outside_node_reports_syntax_first() {
        let error = build_err("$ x: not-a-number\n");
        assert_eq!(error.kind, ParseErrorKind::InvalidUnitValue);
    }

    #[test]
    fn test_unit_after_closing_back_to_shallower_node() {
        let (root, _) = build("# A\n## B\n# C\n$ x: 3\n");
        assert_eq!(root.children[1].units["x"].value, 3.0);
    }

    #[test]
    fn test_unrecognized_lines_are_discarded() {
        let (root, unit_names) = build("prose before\n# A\nsome note\n$ x: 1\nmore prose\n");
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].units["x"].value, 1.0);
        assert_eq!(unit_names.len(), 1);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let (root, _) = build("\n\n# A\n\n\n# B\n\n");
        assert_eq!(root.children.len(), 2);
    }

    #[test]
    fn test_unit_names_collected_document_wide() {
        let (_, unit_names) = build("# A\n$ x: 1\n## B\n$ y: 2\n# C\n$ z: 3\n");
        let names: Vec<&str> = unit_names.iter().map(String::as_str).collect();
        assert_eq!(names, ["x", "y", "z"]);
    }
}
