//! # lorg
//!
//! A parser and aggregator for the lorg outline format.
//!
//! Lorg is a plain-text format for trees of titled nodes carrying named
//! numeric quantities ("units"). Node headers start with one or more `#`
//! characters (the count is the nesting level), unit definitions start
//! with `$` and bind a name to a value with the last `:` on the line:
//!
//! ```text
//! # House
//! ## Kitchen
//! $ cost: 1200
//! ## Bedroom
//! $ cost: 800
//! ```
//!
//! Parsing produces a tree rooted at a synthetic `TOTAL` node, then an
//! aggregation pass fills every node with the full set of unit names seen
//! in the document and sums missing values bottom-up, so `House` above
//! ends up with a calculated `cost` of 2000.

pub mod lorg;
