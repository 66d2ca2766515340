//! JSON renderer
//!
//! Serializes the root-node list as a JSON array of
//! `{"title", "units", "children"}` objects; the unit maps are keyed by
//! name, so keys come out sorted, and string escaping is serde_json's.
//! The pretty variant indents with four spaces.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::lorg::ast::Node;

pub fn render(roots: &[&Node]) -> Result<String, serde_json::Error> {
    serde_json::to_string(roots)
}

pub fn render_pretty(roots: &[&Node]) -> Result<String, serde_json::Error> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    roots.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
