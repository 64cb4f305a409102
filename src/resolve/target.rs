//! Resolution results and anchors.

use crate::error::{Error, Result};
use crate::model::{Cursor, Quad, Span, Vertex};
use crate::parser::Unit;
use serde::{Deserialize, Serialize};

/// Result of resolving a parser.
///
/// `NotFound` is the single failure outcome: a blank document, a pattern
/// that never matches, a `count` larger than the number of qualifying
/// matches and an anchor positioned past the end of the document all
/// produce it. It serializes as `{"value": ""}` and nothing else.
///
/// Found targets serialize as `{value, unitType, normalizedVertices,
/// indices}`; phrase targets add `segments`, which is `null` unless the
/// phrase was split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "TargetRepr", try_from = "TargetRepr")]
pub enum Target {
    /// No qualifying match
    NotFound,
    /// A matched word
    Word(WordMatch),
    /// A matched phrase
    Phrase(PhraseMatch),
}

/// A word match.
#[derive(Debug, Clone, PartialEq)]
pub struct WordMatch {
    /// Word text
    pub value: String,
    /// Word geometry
    pub normalized_vertices: Quad,
    /// Position of the word
    pub indices: Cursor,
}

/// A phrase match.
///
/// When the previous anchor was a word inside this phrase, `value` and
/// `normalized_vertices` cover only the part after that word, and
/// `segments` holds both halves.
#[derive(Debug, Clone, PartialEq)]
pub struct PhraseMatch {
    /// Phrase text, or the text after the split point
    pub value: String,
    /// Phrase geometry, or the geometry after the split point
    pub normalized_vertices: Quad,
    /// Position of the phrase's last word
    pub indices: Cursor,
    /// Both halves of a split phrase
    pub segments: Option<Segments>,
}

/// One half of a split phrase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    /// Segment geometry
    pub normalized_vertices: Quad,
    /// Segment text
    pub text: String,
}

/// A phrase split right after an already consumed word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segments {
    /// Words up to and including the consumed word
    pub first: Segment,
    /// Remaining words
    pub second: Segment,
}

impl Target {
    /// Check if the target holds a match.
    pub fn is_found(&self) -> bool {
        !matches!(self, Target::NotFound)
    }

    /// Matched text, empty when not found.
    pub fn value(&self) -> &str {
        match self {
            Target::NotFound => "",
            Target::Word(m) => &m.value,
            Target::Phrase(m) => &m.value,
        }
    }

    /// Unit of the match.
    pub fn unit(&self) -> Option<Unit> {
        match self {
            Target::NotFound => None,
            Target::Word(_) => Some(Unit::Word),
            Target::Phrase(_) => Some(Unit::Phrase),
        }
    }

    /// Ending cursor of the match.
    pub fn indices(&self) -> Option<Cursor> {
        match self {
            Target::NotFound => None,
            Target::Word(m) => Some(m.indices),
            Target::Phrase(m) => Some(m.indices),
        }
    }

    /// Geometry of the match.
    pub fn normalized_vertices(&self) -> Option<&Quad> {
        match self {
            Target::NotFound => None,
            Target::Word(m) => Some(&m.normalized_vertices),
            Target::Phrase(m) => Some(&m.normalized_vertices),
        }
    }

    /// Segments of a split phrase match.
    pub fn segments(&self) -> Option<&Segments> {
        match self {
            Target::Phrase(m) => m.segments.as_ref(),
            _ => None,
        }
    }

    /// Anchor for the next parser in a chain, if anything was found.
    pub fn anchor(&self) -> Option<Anchor> {
        Some(Anchor::new(
            self.value(),
            self.indices()?,
            self.normalized_vertices()?.span(),
        ))
    }
}

/// What a parser resolves against: the continuation cursor and the
/// reference span for `below`.
///
/// An anchor with a non-empty value has consumed the word at its cursor, so
/// resolution resumes right after it. The seed anchor has an empty value and
/// its cursor word is examined.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "AnchorRepr")]
pub struct Anchor {
    value: String,
    cursor: Cursor,
    span: Span,
}

impl Anchor {
    /// Right edge of the seed span; everything on the page overlaps it.
    pub const SEED_RIGHT: f64 = 0.9999999;

    /// Create an anchor.
    pub fn new(value: impl Into<String>, cursor: Cursor, span: Span) -> Self {
        Self {
            value: value.into(),
            cursor,
            span,
        }
    }

    /// The anchor that starts every chain: document start, full width.
    pub fn seed() -> Self {
        Self::new("", Cursor::start(), Span::new(0.0, Self::SEED_RIGHT))
    }

    /// Anchor text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Continuation cursor.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Reference span for `below`.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Whether the word at the cursor has already been consumed.
    pub fn consumes_cursor(&self) -> bool {
        !self.value.is_empty()
    }

    /// Parse an anchor from JSON: `{value, indices, normalizedVertices}`.
    ///
    /// Only the first two vertices are read, and only their `x`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for Anchor {
    fn default() -> Self {
        Self::seed()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnchorRepr {
    #[serde(default)]
    value: String,
    indices: Cursor,
    normalized_vertices: Vec<Vertex>,
}

impl TryFrom<AnchorRepr> for Anchor {
    type Error = Error;

    fn try_from(repr: AnchorRepr) -> Result<Self> {
        match repr.normalized_vertices.as_slice() {
            [left, right, ..] => Ok(Anchor::new(
                repr.value,
                repr.indices,
                Span::new(left.x, right.x),
            )),
            vertices => Err(Error::InvalidAnchor(format!(
                "expected at least 2 vertices, got {}",
                vertices.len()
            ))),
        }
    }
}

/// Wire shape shared by every target variant.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TargetRepr {
    value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    unit_type: Option<Unit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    normalized_vertices: Option<Quad>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    indices: Option<Cursor>,
    // Outer None: key absent (words). Inner None: `null` (unsplit phrases).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    segments: Option<Option<Segments>>,
}

impl From<Target> for TargetRepr {
    fn from(target: Target) -> Self {
        match target {
            Target::NotFound => TargetRepr {
                value: String::new(),
                unit_type: None,
                normalized_vertices: None,
                indices: None,
                segments: None,
            },
            Target::Word(m) => TargetRepr {
                value: m.value,
                unit_type: Some(Unit::Word),
                normalized_vertices: Some(m.normalized_vertices),
                indices: Some(m.indices),
                segments: None,
            },
            Target::Phrase(m) => TargetRepr {
                value: m.value,
                unit_type: Some(Unit::Phrase),
                normalized_vertices: Some(m.normalized_vertices),
                indices: Some(m.indices),
                segments: Some(m.segments),
            },
        }
    }
}

impl TryFrom<TargetRepr> for Target {
    type Error = Error;

    fn try_from(repr: TargetRepr) -> Result<Self> {
        let Some(unit) = repr.unit_type else {
            return Ok(Target::NotFound);
        };
        let (Some(normalized_vertices), Some(indices)) = (repr.normalized_vertices, repr.indices)
        else {
            return Err(Error::InvalidAnchor(format!(
                "{unit} target requires normalizedVertices and indices"
            )));
        };
        Ok(match unit {
            Unit::Word => Target::Word(WordMatch {
                value: repr.value,
                normalized_vertices,
                indices,
            }),
            Unit::Phrase => Target::Phrase(PhraseMatch {
                value: repr.value,
                normalized_vertices,
                indices,
                segments: repr.segments.flatten(),
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn word_target() -> Target {
        Target::Word(WordMatch {
            value: "Your".to_string(),
            normalized_vertices: Quad::from_rect(0.1, 0.05, 0.2, 0.07),
            indices: Cursor::start(),
        })
    }

    #[test]
    fn test_not_found_json() {
        let value = serde_json::to_value(Target::NotFound).unwrap();
        assert_eq!(value, json!({ "value": "" }));
    }

    #[test]
    fn test_word_target_json_has_no_segments() {
        let value = serde_json::to_value(word_target()).unwrap();
        assert_eq!(value["unitType"], "word");
        assert_eq!(value["indices"]["wordEnd"], 0);
        assert!(value.get("segments").is_none());
    }

    #[test]
    fn test_phrase_target_json_has_null_segments() {
        let target = Target::Phrase(PhraseMatch {
            value: "Your Company".to_string(),
            normalized_vertices: Quad::from_rect(0.1, 0.05, 0.35, 0.07),
            indices: Cursor::new(0, 0, 0, 1),
            segments: None,
        });
        let value = serde_json::to_value(&target).unwrap();
        assert_eq!(value["unitType"], "phrase");
        assert!(value["segments"].is_null());
        assert!(value.as_object().unwrap().contains_key("segments"));

        let back: Target = serde_json::from_value(value).unwrap();
        assert_eq!(back, target);
    }

    #[test]
    fn test_target_accessors() {
        let target = word_target();
        assert!(target.is_found());
        assert_eq!(target.value(), "Your");
        assert_eq!(target.unit(), Some(Unit::Word));
        assert!(target.segments().is_none());

        assert!(!Target::NotFound.is_found());
        assert_eq!(Target::NotFound.value(), "");
        assert!(Target::NotFound.anchor().is_none());
    }

    #[test]
    fn test_anchor_from_target() {
        let anchor = word_target().anchor().unwrap();
        assert_eq!(anchor.value(), "Your");
        assert_eq!(anchor.cursor(), Cursor::start());
        assert_eq!(anchor.span(), Span::new(0.1, 0.2));
        assert!(anchor.consumes_cursor());
    }

    #[test]
    fn test_seed_anchor() {
        let seed = Anchor::seed();
        assert!(!seed.consumes_cursor());
        assert_eq!(seed.cursor(), Cursor::start());
        assert_eq!(seed.span().left, 0.0);
        assert_eq!(seed.span().right, Anchor::SEED_RIGHT);
    }

    #[test]
    fn test_anchor_from_partial_json() {
        let json = r#"{
            "value": "",
            "indices": {"pageEnd": 0, "lineEnd": 0, "phraseEnd": 0, "wordEnd": 0},
            "normalizedVertices": [{"x": 0}, {"x": 0.99999}]
        }"#;
        let anchor = Anchor::from_json(json).unwrap();
        assert!(!anchor.consumes_cursor());
        assert_eq!(anchor.span(), Span::new(0.0, 0.99999));

        let short = r#"{"indices": {"pageEnd": 0, "lineEnd": 0, "phraseEnd": 0, "wordEnd": 0},
            "normalizedVertices": [{"x": 0}]}"#;
        assert!(Anchor::from_json(short).is_err());
    }

    #[test]
    fn test_found_target_requires_geometry() {
        let json = json!({ "value": "x", "unitType": "word" });
        assert!(serde_json::from_value::<Target>(json).is_err());
    }
}
