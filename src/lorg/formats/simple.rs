//! Flat indented text renderer
//!
//! One `#`-run header per node (marker count = level, two spaces of
//! indentation per extra level), each unit on its own line two spaces
//! past its node. The walk is pre-order over an explicit stack.

use crate::lorg::ast::Node;
use crate::lorg::parser::NODE_MARKER;

use super::unit_line;

struct RenderItem<'a> {
    node: &'a Node,
    level: usize,
}

pub fn render(roots: &[&Node], unit_names: &[&str]) -> String {
    let mut output = String::new();
    let mut work: Vec<RenderItem> = Vec::new();
    for &node in roots.iter().rev() {
        work.push(RenderItem { node, level: 1 });
    }

    while let Some(RenderItem { node, level }) = work.pop() {
        let indentation = "  ".repeat(level - 1);

        output.push_str(&indentation);
        for _ in 0..level {
            output.push(NODE_MARKER);
        }
        output.push(' ');
        output.push_str(&node.title);
        output.push('\n');

        for name in unit_names {
            if let Some(unit) = node.units.get(*name) {
                output.push_str(&indentation);
                output.push_str("  ");
                output.push_str(&unit_line(unit));
                output.push('\n');
            }
        }

        for child in node.children.iter().rev() {
            work.push(RenderItem {
                node: child,
                level: level + 1,
            });
        }
    }
    output
}
