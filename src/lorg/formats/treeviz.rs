//! Connector-drawn tree renderer
//!
//! Level-1 titles are flush left; every deeper node hangs off its parent
//! with `├── `/`└── ` connectors, and the prefix inherited from the
//! parent keeps the vertical rails (`│   `) alive while siblings remain.
//! Unit lines sit under their node, behind a `│ ` gutter when the node
//! has children so the rail to the first child is unbroken.
//!
//! The walk is pre-order over an explicit stack of work items carrying
//! the prefix a recursive renderer would have passed down.

use crate::lorg::ast::Node;

use super::unit_line;

struct RenderItem<'a> {
    node: &'a Node,
    level: usize,
    has_next_sibling: bool,
    prefix: String,
}

pub fn render(roots: &[&Node], unit_names: &[&str]) -> String {
    let mut output = String::new();
    let mut work: Vec<RenderItem> = Vec::new();
    for (i, &node) in roots.iter().enumerate().rev() {
        work.push(RenderItem {
            node,
            level: 1,
            has_next_sibling: i + 1 < roots.len(),
            prefix: String::new(),
        });
    }

    while let Some(item) = work.pop() {
        let RenderItem {
            node,
            level,
            has_next_sibling,
            prefix,
        } = item;

        if level == 1 {
            output.push_str(&node.title);
        } else {
            output.push_str(&prefix);
            output.push_str(if has_next_sibling { "├── " } else { "└── " });
            output.push_str(&node.title);
        }
        output.push('\n');

        let child_prefix = if level > 1 {
            let rail = if has_next_sibling { "│   " } else { "    " };
            format!("{}{}", prefix, rail)
        } else {
            String::new()
        };

        let gutter = if node.children.is_empty() { "  " } else { "│ " };
        for name in unit_names {
            if let Some(unit) = node.units.get(*name) {
                output.push_str(&child_prefix);
                output.push_str(gutter);
                output.push_str(&unit_line(unit));
                output.push('\n');
            }
        }

        let child_count = node.children.len();
        for (i, child) in node.children.iter().enumerate().rev() {
            work.push(RenderItem {
                node: child,
                level: level + 1,
                has_next_sibling: i + 1 < child_count,
                prefix: child_prefix.clone(),
            });
        }
    }
    output
}
