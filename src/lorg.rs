//! The lorg format implementation
//!
//! The pipeline is: raw text → [`scanner::Scanner`] → tree builder
//! ([`parser`]) → unit propagation ([`propagate`]) → [`ast::Document`].
//! Rendering of a finished document lives in [`formats`], and
//! [`processor`] glues file reading, parsing and rendering together for
//! the command-line binary.

pub mod ast;
pub mod error;
pub mod formats;
pub mod lexical;
pub mod parser;
pub mod processor;
pub mod propagate;
pub mod scanner;

pub use self::ast::{Document, Node, Unit};
pub use self::error::{ParseError, ParseErrorKind};
pub use self::parser::parse;
