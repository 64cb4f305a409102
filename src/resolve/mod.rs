//! Parser resolution over layout documents.
//!
//! A single [`Parser`](crate::Parser) resolves to the next qualifying word
//! or phrase after an [`Anchor`]; a [`ParserChain`] folds a list of parsers,
//! feeding each result to the next as its anchor.

mod chain;
mod resolver;
mod target;

pub use chain::ParserChain;
pub(crate) use resolver::resolve;
pub use target::{Anchor, PhraseMatch, Segment, Segments, Target, WordMatch};
