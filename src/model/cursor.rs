//! Positions within a document.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a word: page, line, phrase and word indices.
///
/// Ordering follows reading order, so a cursor produced later in a chain
/// never compares less than an earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Cursor {
    /// Page index
    #[serde(rename = "pageEnd")]
    pub page: usize,

    /// Line index within the page
    #[serde(rename = "lineEnd")]
    pub line: usize,

    /// Phrase index within the line
    #[serde(rename = "phraseEnd")]
    pub phrase: usize,

    /// Word index within the phrase
    #[serde(rename = "wordEnd")]
    pub word: usize,
}

impl Cursor {
    /// Create a cursor.
    pub fn new(page: usize, line: usize, phrase: usize, word: usize) -> Self {
        Self {
            page,
            line,
            phrase,
            word,
        }
    }

    /// The document start.
    pub fn start() -> Self {
        Self::default()
    }

    /// `(page, line)` pair identifying the containing line.
    pub fn line_key(&self) -> (usize, usize) {
        (self.page, self.line)
    }

    /// `(page, line, phrase)` triple identifying the containing phrase.
    pub fn phrase_key(&self) -> (usize, usize, usize) {
        (self.page, self.line, self.phrase)
    }

    /// Same position with a different word index.
    pub fn with_word(self, word: usize) -> Self {
        Self { word, ..self }
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}:{}", self.page, self.line, self.phrase, self.word)
    }
}
