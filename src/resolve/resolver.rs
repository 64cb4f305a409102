//! Single-parser resolution.
//!
//! Resolution walks the document lazily in reading order from the anchor
//! cursor, turns positions into candidates of the parser's unit, keeps the
//! ones matching the pattern and the method's geometry, and stops at the
//! `count`-th survivor.

use super::{Anchor, PhraseMatch, Segment, Segments, Target, WordMatch};
use crate::model::{Cursor, Document, Phrase, Span, Word};
use crate::parser::{Method, Parser, Unit};

/// A unit of text that may qualify as a match.
struct Candidate<'a> {
    cursor: Cursor,
    /// Text the pattern is matched against
    text: &'a str,
    /// Horizontal extent used by `below`
    span: Span,
    source: Source<'a>,
}

enum Source<'a> {
    Word(&'a Word),
    /// `split_at` is the index of the first word not yet consumed.
    Phrase { phrase: &'a Phrase, split_at: usize },
}

impl<'a> Candidate<'a> {
    fn word(cursor: Cursor, word: &'a Word) -> Self {
        Self {
            cursor,
            text: &word.text,
            span: word.quad().span(),
            source: Source::Word(word),
        }
    }

    fn phrase(cursor: Cursor, phrase: &'a Phrase) -> Self {
        let split_at = cursor.word;
        let quad = phrase.quad();
        let left = if split_at > 0 {
            phrase.words[split_at].quad().left()
        } else {
            quad.left()
        };

        // The full phrase text is matched even when a prefix was consumed.
        Self {
            cursor,
            text: &phrase.text,
            span: Span::new(left, quad.right()),
            source: Source::Phrase { phrase, split_at },
        }
    }

    fn into_target(self) -> Target {
        match self.source {
            Source::Word(word) => Target::Word(WordMatch {
                value: word.text.clone(),
                normalized_vertices: *word.quad(),
                indices: self.cursor,
            }),
            Source::Phrase { phrase, split_at } => {
                let last = phrase.last_word_index().unwrap_or(split_at);
                let indices = self.cursor.with_word(last);
                let segments = split(phrase, split_at);
                let (value, normalized_vertices) = match &segments {
                    Some(s) => (s.second.text.clone(), s.second.normalized_vertices),
                    None => (phrase.text.clone(), *phrase.quad()),
                };
                Target::Phrase(PhraseMatch {
                    value,
                    normalized_vertices,
                    indices,
                    segments,
                })
            }
        }
    }
}

/// Split `phrase` between word `split_at - 1` and word `split_at`.
fn split(phrase: &Phrase, split_at: usize) -> Option<Segments> {
    if split_at == 0 || split_at >= phrase.words.len() {
        return None;
    }
    let quad = *phrase.quad();
    let first_right = phrase.words[split_at - 1].quad().right();
    let second_left = phrase.words[split_at].quad().left();

    Some(Segments {
        first: Segment {
            normalized_vertices: quad.with_right(first_right),
            text: phrase.words_text(0..split_at),
        },
        second: Segment {
            normalized_vertices: quad.with_left(second_left),
            text: phrase.words_text(split_at..phrase.words.len()),
        },
    })
}

/// Candidates of `unit` in reading order after `anchor`.
///
/// Phrases yield one candidate each, built at the first of their words
/// reached from the anchor.
fn candidates<'a>(
    document: &'a Document,
    anchor: &Anchor,
    unit: Unit,
) -> impl Iterator<Item = Candidate<'a>> + 'a {
    let start = anchor.cursor();
    let consumed = anchor.consumes_cursor().then_some(start);
    let mut last_phrase = None;

    document
        .positions_from(start)
        .filter(move |pos| Some(*pos) != consumed)
        .filter_map(move |pos| {
            let phrase = document.phrase_at(&pos)?;
            match unit {
                Unit::Word => Some(Candidate::word(pos, phrase.words.get(pos.word)?)),
                Unit::Phrase => {
                    if last_phrase == Some(pos.phrase_key()) {
                        return None;
                    }
                    last_phrase = Some(pos.phrase_key());
                    Some(Candidate::phrase(pos, phrase))
                }
            }
        })
}

/// Resolve `parser` against `document`, continuing from `anchor`.
pub(crate) fn resolve(document: &Document, parser: &Parser, anchor: &Anchor) -> Target {
    let method = parser.method();
    let reference = anchor.span();
    let mut counted_line = None;
    let mut seen = 0usize;

    log::trace!(
        "Resolving {} {} /{}/ #{} from {}",
        method,
        parser.unit(),
        parser.spec().target.pattern,
        parser.count(),
        anchor.cursor()
    );

    // A consumed cursor must name a word in the document.
    if anchor.consumes_cursor() && document.word_at(&anchor.cursor()).is_none() {
        log::debug!("Anchor cursor {} is outside the document", anchor.cursor());
        return Target::NotFound;
    }

    let found = candidates(document, anchor, parser.unit())
        .filter(|candidate| parser.matches(candidate.text))
        .filter(|candidate| {
            let line = candidate.cursor.line_key();
            let qualifies = match method {
                Method::After => true,
                // Only the first overlapping candidate of each line counts.
                Method::Below => counted_line != Some(line) && reference.overlaps(&candidate.span),
            };
            if qualifies {
                counted_line = Some(line);
                seen += 1;
            }
            qualifies
        })
        .nth(parser.count() - 1);

    match found {
        Some(candidate) => {
            let cursor = candidate.cursor;
            let target = candidate.into_target();
            log::debug!("Matched {:?} at {}", target.value(), cursor);
            target
        }
        None => {
            log::debug!(
                "No match for /{}/: {} of {} qualifying {}s found",
                parser.spec().target.pattern,
                seen,
                parser.count(),
                parser.unit()
            );
            Target::NotFound
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BoundingBox, Line, Page};
    use crate::parser::{ParserSpec, ResolveOptions};

    fn word(text: &str, x0: f64, x1: f64) -> Word {
        Word::new(text, BoundingBox::from_rect(x0, 0.1, x1, 0.12))
    }

    fn one_line() -> Document {
        Document::with_pages(vec![Page::new(vec![Line::new(vec![
            Phrase::from_words(vec![word("Your", 0.1, 0.2), word("Company", 0.21, 0.35)]),
            Phrase::from_words(vec![word("Invoice", 0.7, 0.8)]),
        ])])])
    }

    fn parser(spec: ParserSpec) -> Parser {
        Parser::new(spec, &ResolveOptions::default()).unwrap()
    }

    #[test]
    fn test_seed_examines_first_word() {
        let doc = one_line();
        let target = resolve(&doc, &parser(ParserSpec::after(1, Unit::Word, ".+")), &Anchor::seed());
        assert_eq!(target.value(), "Your");
        assert_eq!(target.indices(), Some(Cursor::start()));
    }

    #[test]
    fn test_found_anchor_skips_its_word() {
        let doc = one_line();
        let anchor = Anchor::new("Your", Cursor::start(), Span::new(0.1, 0.2));
        let target = resolve(&doc, &parser(ParserSpec::after(1, Unit::Word, ".+")), &anchor);
        assert_eq!(target.value(), "Company");
    }

    #[test]
    fn test_split_phrase_segments() {
        let doc = one_line();
        let anchor = Anchor::new("Your", Cursor::start(), Span::new(0.1, 0.2));
        let target = resolve(&doc, &parser(ParserSpec::after(1, Unit::Phrase, ".+")), &anchor);

        assert_eq!(target.value(), "Company");
        assert_eq!(target.indices(), Some(Cursor::new(0, 0, 0, 1)));
        let segments = target.segments().unwrap();
        assert_eq!(segments.first.text, "Your");
        assert_eq!(segments.first.normalized_vertices.right(), 0.2);
        assert_eq!(segments.second.normalized_vertices.left(), 0.21);
        assert_eq!(target.normalized_vertices(), Some(&segments.second.normalized_vertices));
    }

    #[test]
    fn test_split_matches_full_phrase_text() {
        let doc = one_line();
        let anchor = Anchor::new("Your", Cursor::start(), Span::new(0.1, 0.2));
        let target = resolve(
            &doc,
            &parser(ParserSpec::after(1, Unit::Phrase, "Your Company")),
            &anchor,
        );
        assert_eq!(target.value(), "Company");
    }

    #[test]
    fn test_count_past_matches() {
        let doc = one_line();
        let target = resolve(&doc, &parser(ParserSpec::after(4, Unit::Word, ".+")), &Anchor::seed());
        assert_eq!(target, Target::NotFound);
    }

    #[test]
    fn test_below_uses_reference_span() {
        let doc = one_line();
        let anchor = Anchor::new("x", Cursor::new(0, 0, 0, 0), Span::new(0.75, 0.9));
        let target = resolve(&doc, &parser(ParserSpec::below(1, Unit::Word, ".+")), &anchor);
        assert_eq!(target.value(), "Invoice");
    }

    #[test]
    fn test_anchor_cursor_outside_document() {
        let doc = one_line();
        let after = parser(ParserSpec::after(1, Unit::Word, ".+"));
        let below = parser(ParserSpec::below(1, Unit::Phrase, ".+"));

        for cursor in [
            Cursor::new(0, 0, 0, 99),
            Cursor::new(0, 0, 7, 0),
            Cursor::new(0, 3, 0, 0),
            Cursor::new(2, 0, 0, 0),
        ] {
            let anchor = Anchor::new("x", cursor, Span::new(0.0, 1.0));
            assert_eq!(resolve(&doc, &after, &anchor), Target::NotFound, "{cursor}");
            assert_eq!(resolve(&doc, &below, &anchor), Target::NotFound, "{cursor}");
        }
    }

    #[test]
    fn test_split_ignores_out_of_range() {
        let phrase = Phrase::from_words(vec![word("a", 0.1, 0.2)]);
        assert!(split(&phrase, 0).is_none());
        assert!(split(&phrase, 1).is_none());
    }
}
