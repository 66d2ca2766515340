//! Parameterized error-case table
//!
//! One row per malformed document: expected error kind and line.

use rstest::rstest;

use lorg::lorg::{parse, ParseErrorKind};

#[rstest]
#[case::marker_at_end_of_input("#", ParseErrorKind::MissingTitle, 1)]
#[case::marker_then_blank("# \n", ParseErrorKind::MissingTitle, 1)]
#[case::marker_then_tab("#\t\n", ParseErrorKind::MissingTitle, 1)]
#[case::marker_alone_on_line("#\nFollowing text\n", ParseErrorKind::MissingTitle, 1)]
#[case::nested_marker_without_title("# A\n##\n", ParseErrorKind::MissingTitle, 2)]
#[case::orphan_at_start("## A\n", ParseErrorKind::OrphanNode, 1)]
#[case::orphan_level_jump("# A\n### C\n", ParseErrorKind::OrphanNode, 2)]
#[case::orphan_after_closing("# A\n## B\n# C\n### D\n", ParseErrorKind::OrphanNode, 4)]
#[case::unit_marker_alone("# A\n$\n", ParseErrorKind::IllFormedUnitDefinition, 2)]
#[case::unit_no_separator("# A\n$ name 1\n", ParseErrorKind::IllFormedUnitDefinition, 2)]
#[case::unit_empty_name("# A\n$ : 1\n", ParseErrorKind::IllFormedUnitDefinition, 2)]
#[case::unit_empty_value("# A\n$ name:\n", ParseErrorKind::IllFormedUnitDefinition, 2)]
#[case::unit_blank_value("# A\n$ name:  \n", ParseErrorKind::IllFormedUnitDefinition, 2)]
#[case::value_two_points("# A\n$ x: 1.2.3\n", ParseErrorKind::InvalidUnitValue, 2)]
#[case::value_leading_point("# A\n$ x: .5\n", ParseErrorKind::InvalidUnitValue, 2)]
#[case::value_trailing_point("# A\n$ x: 5.\n", ParseErrorKind::InvalidUnitValue, 2)]
#[case::value_exponent("# A\n$ x: 1e3\n", ParseErrorKind::InvalidUnitValue, 2)]
#[case::value_double_sign("# A\n$ x: --1\n", ParseErrorKind::InvalidUnitValue, 2)]
#[case::value_text("# A\n$ x: lots\n", ParseErrorKind::InvalidUnitValue, 2)]
#[case::value_internal_space("# A\n$ x: 1 2\n", ParseErrorKind::InvalidUnitValue, 2)]
#[case::unit_outside_node("$ x: 1\n", ParseErrorKind::UnitOutsideNode, 1)]
#[case::unit_after_prose_only("some text\n$ x: 1\n", ParseErrorKind::UnitOutsideNode, 2)]
fn test_error_case(
    #[case] source: &str,
    #[case] kind: ParseErrorKind,
    #[case] line: usize,
) {
    let error = parse(source).unwrap_err();
    assert_eq!(error.kind, kind, "source: {:?}", source);
    assert_eq!(error.line, line, "source: {:?}", source);
}

#[rstest]
#[case::plain_integer("# A\n$ x: 7\n", 7.0)]
#[case::signed_negative("# A\n$ x: -7\n", -7.0)]
#[case::signed_positive("# A\n$ x: +7\n", 7.0)]
#[case::leading_zeros("# A\n$ x: 007\n", 7.0)]
#[case::decimal("# A\n$ x: 1.25\n", 1.25)]
#[case::negative_decimal("# A\n$ x: -0.5\n", -0.5)]
fn test_accepted_value(#[case] source: &str, #[case] expected: f64) {
    let document = parse(source).unwrap();
    assert_eq!(document.root.children[0].units["x"].value, expected);
}
