//! Page-level types.

use super::Phrase;
use serde::{Deserialize, Serialize};

/// A single page of layout annotations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Lines in reading order
    #[serde(default)]
    pub lines: Vec<Line>,
}

impl Page {
    /// Create a page from its lines.
    pub fn new(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    /// Add a line to the page.
    pub fn add_line(&mut self, line: Line) {
        self.lines.push(line);
    }

    /// Get the number of words on the page.
    pub fn word_count(&self) -> usize {
        self.lines.iter().map(Line::word_count).sum()
    }

    /// Check if the page has no words at all.
    pub fn is_blank(&self) -> bool {
        self.word_count() == 0
    }
}

/// A visual line of text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Phrases in reading order
    #[serde(default)]
    pub phrases: Vec<Phrase>,
}

impl Line {
    /// Create a line from its phrases.
    pub fn new(phrases: Vec<Phrase>) -> Self {
        Self { phrases }
    }

    /// Get the number of words on the line.
    pub fn word_count(&self) -> usize {
        self.phrases.iter().map(Phrase::word_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BoundingBox, Word};

    #[test]
    fn test_blank_page() {
        let mut page = Page::default();
        assert!(page.is_blank());

        page.add_line(Line::default());
        assert!(page.is_blank());
    }

    #[test]
    fn test_line_counts() {
        let bbox = BoundingBox::from_rect(0.0, 0.0, 0.1, 0.1);
        let line = Line::new(vec![
            Phrase::from_words(vec![Word::new("Bill", bbox), Word::new("To", bbox)]),
            Phrase::from_words(vec![Word::new("Total", bbox)]),
        ]);
        assert_eq!(line.word_count(), 3);
        assert!(!Page::new(vec![line]).is_blank());
    }
}
