//! Tree data model for parsed lorg documents
//!
//! A document is a tree of [`Node`]s rooted at a synthetic `TOTAL` node.
//! Each node carries a map of [`Unit`]s keyed by name; after propagation
//! every node holds an entry for every unit name seen anywhere in the
//! document. Parents own their children exclusively; there is no sharing
//! and no back pointers.
//!
//! The types serialize with serde: field names follow the JSON output
//! contract (`isReal`, `isIgnored`) and the `BTreeMap` keying makes unit
//! order deterministic (alphabetical) in every serialized form.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Title of the synthetic root node. Never written in source text.
pub const ROOT_TITLE: &str = "TOTAL";

/// A named numeric quantity attached to a node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub name: String,
    pub value: f64,
    /// True when the value was authored in the source at this node,
    /// false when it was synthesized by aggregation.
    pub is_real: bool,
    /// True when this value already reflects an aggregate owned by an
    /// ancestor and must not be read as a fresh contribution.
    pub is_ignored: bool,
}

impl Unit {
    /// An authored unit, as written in the source.
    pub fn real(name: impl Into<String>, value: f64) -> Self {
        Unit {
            name: name.into(),
            value,
            is_real: true,
            is_ignored: false,
        }
    }

    /// A synthesized unit, value to be filled by aggregation.
    pub fn calculated(name: impl Into<String>) -> Self {
        Unit {
            name: name.into(),
            value: 0.0,
            is_real: false,
            is_ignored: false,
        }
    }
}

/// A titled point in the outline hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub title: String,
    pub units: BTreeMap<String, Unit>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(title: impl Into<String>) -> Self {
        Node {
            title: title.into(),
            units: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// The synthetic root holding the document's top-level nodes.
    pub fn root() -> Self {
        Node::new(ROOT_TITLE)
    }

    /// Insert an authored unit, replacing any earlier definition with the
    /// same name in this node.
    pub fn insert_unit(&mut self, unit: Unit) {
        self.units.insert(unit.name.clone(), unit);
    }
}

impl Drop for Node {
    // Children are drained iteratively so dropping a deeply nested tree
    // cannot recurse through the native stack.
    fn drop(&mut self) {
        let mut queue = std::mem::take(&mut self.children);
        while let Some(mut node) = queue.pop() {
            queue.append(&mut node.children);
        }
    }
}

/// A fully parsed and aggregated document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Synthetic root; its children are the document's level-1 nodes.
    pub root: Node,
    /// Every unit name authored anywhere in the document, sorted.
    pub unit_names: BTreeSet<String>,
}

impl Document {
    /// The unit names in render order (alphabetical).
    pub fn sorted_unit_names(&self) -> Vec<&str> {
        self.unit_names.iter().map(String::as_str).collect()
    }
}
