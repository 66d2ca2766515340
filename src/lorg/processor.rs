//! File processing API
//!
//! Glues file reading, parsing and rendering together for the
//! command-line binary (and anything else that wants "file in, text
//! out"). Parse errors keep their own type and location information;
//! I/O and serialization failures are reported separately so the caller
//! can exit with the right code.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::lorg::ast::{Document, Node};
use crate::lorg::error::ParseError;
use crate::lorg::formats;
use crate::lorg::parser;

/// How a processed document is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Flat indented text with `#`-run headers.
    Simple,
    /// Connector-drawn tree view.
    Treeviz,
    /// Compact JSON array of root-node objects.
    Json,
    /// JSON indented with four spaces.
    JsonPretty,
    /// YAML, same object model as JSON.
    Yaml,
}

/// Rendering choices made on the command line.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub format: OutputFormat,
    /// Show the synthetic `TOTAL` root itself instead of its children.
    pub show_total: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            format: OutputFormat::Simple,
            show_total: false,
        }
    }
}

/// Errors that can occur while processing a file.
#[derive(Debug)]
pub enum ProcessingError {
    /// The file could not be read.
    Io { path: String, message: String },
    /// The document failed to parse; carries the located parse error.
    Parse(ParseError),
    /// The rendered form could not be serialized.
    Serialize(String),
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::Io { path, message } => {
                write!(f, "\"{}\" cannot be read: {}", path, message)
            }
            ProcessingError::Parse(error) => write!(f, "{}", error),
            ProcessingError::Serialize(message) => {
                write!(f, "Serialization failed: {}", message)
            }
        }
    }
}

impl std::error::Error for ProcessingError {}

impl From<ParseError> for ProcessingError {
    fn from(error: ParseError) -> Self {
        ProcessingError::Parse(error)
    }
}

/// Read, parse and render a file.
pub fn process_file<P: AsRef<Path>>(
    path: P,
    options: &RenderOptions,
) -> Result<String, ProcessingError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| ProcessingError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    process_str(&content, options)
}

/// Parse and render an in-memory document.
pub fn process_str(content: &str, options: &RenderOptions) -> Result<String, ProcessingError> {
    let document = parser::parse(content)?;
    render(&document, options)
}

/// Render an already parsed document.
pub fn render(document: &Document, options: &RenderOptions) -> Result<String, ProcessingError> {
    let roots: Vec<&Node> = if options.show_total {
        vec![&document.root]
    } else {
        document.root.children.iter().collect()
    };
    let unit_names = document.sorted_unit_names();

    match options.format {
        OutputFormat::Simple => Ok(formats::simple::render(&roots, &unit_names)),
        OutputFormat::Treeviz => Ok(formats::treeviz::render(&roots, &unit_names)),
        OutputFormat::Json => {
            formats::json::render(&roots).map_err(|e| ProcessingError::Serialize(e.to_string()))
        }
        OutputFormat::JsonPretty => formats::json::render_pretty(&roots)
            .map_err(|e| ProcessingError::Serialize(e.to_string())),
        OutputFormat::Yaml => {
            formats::yaml::render(&roots).map_err(|e| ProcessingError::Serialize(e.to_string()))
        }
    }
}
