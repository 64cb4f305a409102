//! Document-level types.

use super::{Cursor, Page, Phrase, Word};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Key under which annotation files nest the document.
const LINE_LIST_KEY: &str = "lineList";

/// A layout-annotated document: pages of lines of phrases of words.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Pages in the document
    pub pages: Vec<Page>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from its pages.
    pub fn with_pages(pages: Vec<Page>) -> Self {
        Self { pages }
    }

    /// Parse a document from JSON.
    ///
    /// Accepts either the bare document (`{"pages": [...]}`) or an
    /// annotation file wrapping it (`{"lineList": {"pages": [...]}}`).
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Parse a document from a reader. See [`Document::from_json`].
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let value: Value = serde_json::from_reader(reader)?;
        Self::from_value(value)
    }

    /// Load a document from a JSON file. See [`Document::from_json`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Build a document from an already parsed JSON value.
    pub fn from_value(mut value: Value) -> Result<Self> {
        if let Some(inner) = value.get_mut(LINE_LIST_KEY).map(Value::take) {
            value = inner;
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Add a page to the document.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Get the number of lines across all pages.
    pub fn line_count(&self) -> usize {
        self.pages.iter().map(|p| p.lines.len()).sum()
    }

    /// Get the number of phrases across all pages.
    pub fn phrase_count(&self) -> usize {
        self.pages
            .iter()
            .flat_map(|p| &p.lines)
            .map(|l| l.phrases.len())
            .sum()
    }

    /// Get the number of words across all pages.
    pub fn word_count(&self) -> usize {
        self.pages.iter().map(Page::word_count).sum()
    }

    /// Check if the document contains no words.
    pub fn is_blank(&self) -> bool {
        self.pages.iter().all(Page::is_blank)
    }

    /// Get the phrase containing `cursor`.
    pub fn phrase_at(&self, cursor: &Cursor) -> Option<&Phrase> {
        self.pages
            .get(cursor.page)?
            .lines
            .get(cursor.line)?
            .phrases
            .get(cursor.phrase)
    }

    /// Get the word at `cursor`.
    pub fn word_at(&self, cursor: &Cursor) -> Option<&Word> {
        self.phrase_at(cursor)?.words.get(cursor.word)
    }

    /// Word positions in reading order, starting at `start` inclusive.
    ///
    /// Each level resumes at the index stored in `start` for its first
    /// container only; every later page, line and phrase is walked from 0.
    /// The sequence is finite and can be restarted from any cursor.
    pub fn positions_from(&self, start: Cursor) -> impl Iterator<Item = Cursor> + '_ {
        self.pages
            .iter()
            .enumerate()
            .skip(start.page)
            .flat_map(move |(p, page)| {
                let first_page = p == start.page;
                let line_start = if first_page { start.line } else { 0 };
                page.lines
                    .iter()
                    .enumerate()
                    .skip(line_start)
                    .flat_map(move |(l, line)| {
                        let first_line = first_page && l == start.line;
                        let phrase_start = if first_line { start.phrase } else { 0 };
                        line.phrases
                            .iter()
                            .enumerate()
                            .skip(phrase_start)
                            .flat_map(move |(ph, phrase)| {
                                let first_phrase = first_line && ph == start.phrase;
                                let word_start = if first_phrase { start.word } else { 0 };
                                (word_start..phrase.words.len())
                                    .map(move |w| Cursor::new(p, l, ph, w))
                            })
                    })
            })
    }
}
