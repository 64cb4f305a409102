//! Phrase and word types.

use super::{BoundingBox, Quad};
use serde::{Deserialize, Serialize};

/// A single recognized word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    /// Recognized text
    pub text: String,

    /// Word geometry
    pub bounding_box: BoundingBox,
}

impl Word {
    /// Create a new word.
    pub fn new(text: impl Into<String>, bounding_box: BoundingBox) -> Self {
        Self {
            text: text.into(),
            bounding_box,
        }
    }

    /// Get the word quad.
    pub fn quad(&self) -> &Quad {
        self.bounding_box.quad()
    }
}

/// A run of words the annotator grouped together within a line.
///
/// `text` is expected to equal the words' texts joined by single spaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phrase {
    /// Full phrase text
    pub text: String,

    /// Phrase geometry
    pub bounding_box: BoundingBox,

    /// Words in reading order
    #[serde(default)]
    pub words: Vec<Word>,
}

impl Phrase {
    /// Build a phrase from its words, deriving text and bounding box.
    ///
    /// The box spans from the first word's left edge to the last word's
    /// right edge, vertically covering every word.
    pub fn from_words(words: Vec<Word>) -> Self {
        let text = join_text(&words);
        let bounding_box = match (words.first(), words.last()) {
            (Some(first), Some(last)) => {
                let top = words
                    .iter()
                    .map(|w| w.quad().0[Quad::TOP_LEFT].y)
                    .fold(f64::INFINITY, f64::min);
                let bottom = words
                    .iter()
                    .map(|w| w.quad().0[Quad::BOTTOM_LEFT].y)
                    .fold(f64::NEG_INFINITY, f64::max);
                BoundingBox::from_rect(first.quad().left(), top, last.quad().right(), bottom)
            }
            _ => BoundingBox::default(),
        };

        Self {
            text,
            bounding_box,
            words,
        }
    }

    /// Get the phrase quad.
    pub fn quad(&self) -> &Quad {
        self.bounding_box.quad()
    }

    /// Text of the words in `range`, joined by single spaces.
    pub fn words_text(&self, range: std::ops::Range<usize>) -> String {
        join_text(&self.words[range])
    }

    /// Index of the last word, if any.
    pub fn last_word_index(&self) -> Option<usize> {
        self.words.len().checked_sub(1)
    }

    /// Get the number of words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Check if the phrase has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn join_text(words: &[Word]) -> String {
    words
        .iter()
        .map(|w| w.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str, x0: f64, x1: f64) -> Word {
        Word::new(text, BoundingBox::from_rect(x0, 0.1, x1, 0.12))
    }

    #[test]
    fn test_phrase_from_words() {
        let phrase = Phrase::from_words(vec![word("Your", 0.1, 0.2), word("Company", 0.21, 0.35)]);
        assert_eq!(phrase.text, "Your Company");
        assert_eq!(phrase.quad().left(), 0.1);
        assert_eq!(phrase.quad().right(), 0.35);
        assert_eq!(phrase.last_word_index(), Some(1));
    }

    #[test]
    fn test_phrase_words_text() {
        let phrase = Phrase::from_words(vec![
            word("Submitted", 0.6, 0.7),
            word("on", 0.71, 0.73),
            word("01/01/2000", 0.74, 0.85),
        ]);
        assert_eq!(phrase.words_text(0..1), "Submitted");
        assert_eq!(phrase.words_text(1..3), "on 01/01/2000");
    }

    #[test]
    fn test_empty_phrase() {
        let phrase = Phrase::from_words(Vec::new());
        assert!(phrase.is_empty());
        assert_eq!(phrase.text, "");
        assert_eq!(phrase.last_word_index(), None);
    }

    #[test]
    fn test_phrase_json_without_words() {
        let json = r#"{"text":"x","boundingBox":{"normalizedVertices":[{},{},{},{}]}}"#;
        let phrase: Phrase = serde_json::from_str(json).unwrap();
        assert!(phrase.is_empty());
    }
}
