//! Parse error type
//!
//! Every parse failure is fatal: the parser reports the first error it
//! finds and returns no tree. Errors carry the 1-based line of the start
//! of the malformed construct, plus a column when one is meaningful
//! (currently only for invalid unit values, where it points at the first
//! character of the value).

use std::fmt;

/// The reasons a lorg document can fail to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A node marker with nothing but whitespace before the end of line.
    MissingTitle,
    /// A node nested more than one level below the deepest open node.
    OrphanNode,
    /// A unit definition missing its separator, name or value.
    IllFormedUnitDefinition,
    /// A unit value outside the numeric grammar.
    InvalidUnitValue,
    /// A syntactically valid unit definition with no enclosing node.
    UnitOutsideNode,
}

impl ParseErrorKind {
    fn description(&self) -> &'static str {
        match self {
            ParseErrorKind::MissingTitle => "The node has no title.",
            ParseErrorKind::OrphanNode => {
                "The node is not a direct descendant to any other node."
            }
            ParseErrorKind::IllFormedUnitDefinition => {
                "The unit definition is ill-formed.\n\
                 The unit definition should follow this format:\n    \
                 $ UNIT_NAME : UNIT_VALUE"
            }
            ParseErrorKind::InvalidUnitValue => "The unit value is incorrect.",
            ParseErrorKind::UnitOutsideNode => "The unit definition is outside of a node.",
        }
    }
}

/// A located, fatal parse error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// 1-based line of the start of the malformed construct.
    pub line: usize,
    /// 1-based column, when meaningful for the error kind.
    pub column: Option<usize>,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, line: usize) -> Self {
        ParseError {
            kind,
            line,
            column: None,
        }
    }

    pub fn with_column(kind: ParseErrorKind, line: usize, column: usize) -> Self {
        ParseError {
            kind,
            line,
            column: Some(column),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}", self.line)?;
        if let Some(column) = self.column {
            write!(f, ", column {}", column)?;
        }
        write!(f, ": {}", self.kind.description())
    }
}

impl std::error::Error for ParseError {}
