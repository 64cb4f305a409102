//! # docanchor
//!
//! Locate text in layout-annotated documents with small positional rules.
//!
//! A document is the output of an OCR/layout engine: pages of lines of
//! phrases of words, each phrase and word carrying a normalized bounding
//! quadrilateral. A parser says "find the Nth word or phrase matching this
//! pattern, either anywhere later in reading order (`after`) or beneath the
//! previous anchor (`below`)". Parsers chain, each resolving against the
//! result of the previous one.
//!
//! ## Quick Start
//!
//! ```no_run
//! use docanchor::{resolve_parser_chain, Document, ParserSpec, Unit};
//!
//! fn main() -> docanchor::Result<()> {
//!     let doc = Document::from_path("annotations.json")?;
//!
//!     // The first phrase below the "Invoice Number" label
//!     let target = resolve_parser_chain(
//!         &doc,
//!         &[
//!             ParserSpec::after(1, Unit::Phrase, "Invoice Number"),
//!             ParserSpec::below(1, Unit::Phrase, ".+"),
//!         ],
//!     )?;
//!
//!     if target.is_found() {
//!         println!("{}", target.value());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Not found
//!
//! Every way of finding nothing (blank document, a pattern that never
//! matches, a count larger than the number of matches) yields the same
//! [`Target::NotFound`]. Errors are reserved for invalid configuration:
//! bad patterns, zero counts, unknown methods or units, empty chains.

pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod resolve;
pub mod template;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{BoundingBox, Cursor, Document, Line, Page, Phrase, Quad, Span, Vertex, Word};
pub use parser::{Method, Parser, ParserSpec, ResolveOptions, TargetSpec, Unit};
pub use render::{JsonFormat, PageSelection};
pub use resolve::{Anchor, ParserChain, PhraseMatch, Segment, Segments, Target, WordMatch};
pub use template::{Extraction, Extractor, Template};

/// Resolve one parser against `document`, continuing from `anchor`.
///
/// Use [`Anchor::seed`] to start at the beginning of the document, or
/// [`Target::anchor`] to continue from a previous result.
///
/// # Errors
///
/// Fails only on invalid configuration (zero count, invalid pattern). A
/// parser that finds nothing returns `Ok(Target::NotFound)`.
///
/// # Example
///
/// ```
/// use docanchor::{resolve_single_parser, Anchor, Document, ParserSpec, Unit};
///
/// let doc = Document::new();
/// let spec = ParserSpec::after(1, Unit::Word, ".+");
/// let target = resolve_single_parser(&doc, &spec, &Anchor::seed()).unwrap();
/// assert!(!target.is_found());
/// ```
pub fn resolve_single_parser(
    document: &Document,
    spec: &ParserSpec,
    anchor: &Anchor,
) -> Result<Target> {
    let parser = Parser::new(spec.clone(), &ResolveOptions::default())?;
    Ok(parser.resolve(document, anchor))
}

/// Resolve a parser chain against `document` from its start.
///
/// Equivalent to folding [`resolve_single_parser`] over `specs`, starting
/// from [`Anchor::seed`] and stopping at the first `NotFound`. Every spec is
/// validated before anything is resolved.
///
/// # Errors
///
/// Fails on an empty chain or any invalid spec.
pub fn resolve_parser_chain(document: &Document, specs: &[ParserSpec]) -> Result<Target> {
    let chain = ParserChain::from_specs(specs)?;
    Ok(chain.resolve(document))
}

/// Load a document and resolve a parser chain against it.
///
/// # Example
///
/// ```no_run
/// use docanchor::{resolve_file, ParserSpec, Unit};
///
/// let specs = [ParserSpec::after(1, Unit::Word, "Total"), ParserSpec::after(1, Unit::Word, ".+")];
/// let target = resolve_file("annotations.json", &specs).unwrap();
/// println!("{}", target.value());
/// ```
pub fn resolve_file<P: AsRef<std::path::Path>>(path: P, specs: &[ParserSpec]) -> Result<Target> {
    let chain = ParserChain::from_specs(specs)?;
    let document = Document::from_path(path)?;
    Ok(chain.resolve(&document))
}
