//! YAML renderer
//!
//! The same serialization model as the JSON renderer, through
//! serde_yaml. Handy for piping into YAML-speaking tooling.

use crate::lorg::ast::Node;

pub fn render(roots: &[&Node]) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(roots)
}
