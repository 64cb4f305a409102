//! Error types for docanchor library.

use std::io;
use thiserror::Error;

/// Result type alias for docanchor operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading documents or building parsers.
///
/// A parser that simply finds nothing is not an error: resolution reports
/// that through [`Target::NotFound`](crate::Target::NotFound).
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading documents, parsers or templates.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed JSON input.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The parser pattern is not a valid regular expression.
    #[error("Invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        /// Pattern source as written in the parser
        pattern: String,
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },

    /// Parser count must be at least 1.
    #[error("Invalid parser count {0}: must be at least 1")]
    InvalidCount(u32),

    /// Unknown parser method.
    #[error("Invalid parser method {0:?}: expected \"after\" or \"below\"")]
    InvalidMethod(String),

    /// Unknown target unit.
    #[error("Invalid target unit {0:?}: expected \"word\" or \"phrase\"")]
    InvalidUnit(String),

    /// An anchor could not be built from the given input.
    #[error("Invalid anchor: {0}")]
    InvalidAnchor(String),

    /// A parser chain needs at least one parser.
    #[error("Parser chain is empty")]
    EmptyChain,

    /// A template field's parser chain is invalid.
    #[error("Invalid field {field:?}: {source}")]
    InvalidField {
        /// Field name
        field: String,
        /// Why the chain was rejected
        #[source]
        source: Box<Error>,
    },

    /// Invalid page range specification.
    #[error("Invalid page range: {0}")]
    InvalidPageRange(String),

    /// Error during rendering.
    #[error("Rendering error: {0}")]
    Render(String),
}
