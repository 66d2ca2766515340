//! Line-level lexical helpers
//!
//! Lorg's structural whitespace is spaces and tabs only; newlines are
//! structural on their own and other Unicode whitespace is ordinary text,
//! so these helpers are used instead of `char::is_whitespace`/`str::trim`.

use once_cell::sync::Lazy;
use regex::Regex;

/// Unit values are plain decimal numbers: optional sign, digits, optional
/// fractional part. No exponents, no bare leading or trailing point.
static UNIT_VALUE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-+]?[0-9]+(\.[0-9]+)?$").unwrap());

/// Whitespace that may pad titles, unit names and values.
pub fn is_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// True when the lookahead reached a line break or the end of the input.
pub fn is_end_of_line(c: Option<char>) -> bool {
    matches!(c, None | Some('\n'))
}

/// Check a unit value against the numeric grammar.
pub fn is_valid_unit_value(value: &str) -> bool {
    UNIT_VALUE_REGEX.is_match(value)
}

/// Strip leading and trailing format whitespace.
pub fn trim_ends(s: &str) -> &str {
    s.trim_matches(is_whitespace)
}

/// Strip trailing format whitespace only.
pub fn trim_trailing(s: &str) -> &str {
    s.trim_end_matches(is_whitespace)
}
