//! Renderers for aggregated documents
//!
//! Every renderer consumes the finished tree read-only: the list of root
//! nodes to display (the synthetic `TOTAL` node, or its children) plus
//! the alphabetically sorted unit names. Values that were synthesized by
//! aggregation are labeled `[Calculated]`, values superseded by an
//! ancestor's authored figure are labeled `[Ignored]`.

pub mod json;
pub mod simple;
pub mod treeviz;
pub mod yaml;

use crate::lorg::ast::Unit;
use crate::lorg::parser::{UNIT_MARKER, UNIT_SEPARATOR};

/// One unit the way the text renderers show it:
/// `$ name: value [Calculated] [Ignored]`.
pub(crate) fn unit_line(unit: &Unit) -> String {
    let mut line = format!(
        "{} {}{} {}",
        UNIT_MARKER, unit.name, UNIT_SEPARATOR, unit.value
    );
    if !unit.is_real {
        line.push_str(" [Calculated]");
    }
    if unit.is_ignored {
        line.push_str(" [Ignored]");
    }
    line
}
