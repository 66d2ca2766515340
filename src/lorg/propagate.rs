//! Bottom-up unit aggregation
//!
//! After the tree is built, every node is given an entry for every unit
//! name seen anywhere in the document, and units that were not authored
//! ("calculated" units) receive the sum of the same-named unit across the
//! node's direct children. Authored values are never overwritten.
//!
//! A name that is authored at a node is handed down to the node's whole
//! subtree: every occurrence below is flagged ignored, meaning its value
//! is already covered by the ancestor's authored figure and must not be
//! read as a fresh contribution. The flag itself does not gate the sums
//! (a calculated parent still sums its direct children, and an authored
//! child simply keeps its value); it exists so consumers can tell which
//! figures were superseded.
//!
//! The traversal uses an explicit frame stack instead of native
//! recursion: a frame takes ownership of its node, runs the name-union
//! and ignore-marking phase on the way down, and computes the sums once
//! all of its children have been reassembled. Deep documents therefore
//! cost heap, not call stack.

use std::collections::BTreeSet;

use crate::lorg::ast::{Node, Unit};

/// Aggregate unit values across the tree, in place.
///
/// `unit_names` is the document-wide name set collected during parsing.
/// Running this again on an already-propagated tree with the same name
/// set is a no-op: calculated sums are recomputed, not accumulated.
pub fn propagate(root: &mut Node, unit_names: &BTreeSet<String>) {
    let taken = std::mem::replace(root, Node::root());
    let mut stack = vec![Frame::open(taken, unit_names, &BTreeSet::new())];

    while let Some(mut frame) = stack.pop() {
        if let Some(child) = frame.pending.pop() {
            let child_frame = Frame::open(child, unit_names, &frame.child_ignore);
            stack.push(frame);
            stack.push(child_frame);
        } else {
            let node = frame.close();
            match stack.last_mut() {
                Some(parent) => parent.done.push(node),
                None => *root = node,
            }
        }
    }
}

/// One open node during the traversal, holding the context a recursive
/// implementation would keep in its call frame.
struct Frame {
    node: Node,
    /// Names this node's children must flag as ignored.
    child_ignore: BTreeSet<String>,
    /// Children still to process, in reverse document order.
    pending: Vec<Node>,
    /// Children already processed, in document order.
    done: Vec<Node>,
}

impl Frame {
    /// Downward phase: complete the unit set, apply inherited ignore
    /// marks and derive the set handed to the children.
    fn open(mut node: Node, unit_names: &BTreeSet<String>, inherited: &BTreeSet<String>) -> Self {
        for name in unit_names {
            if !node.units.contains_key(name) {
                node.units
                    .insert(name.clone(), Unit::calculated(name.clone()));
            }
        }

        let mut child_ignore = BTreeSet::new();
        for unit in node.units.values_mut() {
            if inherited.contains(&unit.name) {
                unit.is_ignored = true;
                child_ignore.insert(unit.name.clone());
            }
            if unit.is_real {
                child_ignore.insert(unit.name.clone());
            }
        }

        let mut pending = std::mem::take(&mut node.children);
        pending.reverse();
        Frame {
            node,
            child_ignore,
            pending,
            done: Vec::new(),
        }
    }

    /// Upward phase: reattach the processed children and recompute every
    /// calculated value as the sum over the direct children.
    fn close(self) -> Node {
        let mut node = self.node;
        node.children = self.done;
        for unit in node.units.values_mut() {
            if !unit.is_real {
                unit.value = node
                    .children
                    .iter()
                    .map(|child| child.units.get(&unit.name).map_or(0.0, |u| u.value))
                    .sum();
            }
        }
        node
    }
}
