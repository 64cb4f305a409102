//! Plain text rendering.

use super::PageSelection;
use crate::model::{Cursor, Document};
use crate::template::Extraction;

/// Render an extraction as `name: value` lines. Fields that were not found
/// render with an empty value.
pub fn extraction_to_text(extraction: &Extraction) -> String {
    extraction
        .iter()
        .map(|(name, target)| format!("{}: {}", name, target.value()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// List every word with its cursor and horizontal extent, one per line.
///
/// Cursors are printed as `page:line:phrase:word`, the positions parsers
/// resume from.
pub fn word_listing(doc: &Document, pages: &PageSelection) -> String {
    let mut output = Vec::new();

    for cursor in doc.positions_from(Cursor::start()) {
        if !pages.includes_index(cursor.page) {
            continue;
        }
        if let Some(word) = doc.word_at(&cursor) {
            let quad = word.quad();
            output.push(format!(
                "{:<12} [{:.3}, {:.3}]  {}",
                cursor.to_string(),
                quad.left(),
                quad.right(),
                word.text
            ));
        }
    }

    output.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BoundingBox, Line, Page, Phrase, Word};

    fn doc() -> Document {
        let bbox = BoundingBox::from_rect(0.1, 0.1, 0.25, 0.12);
        Document::with_pages(vec![
            Page::new(vec![Line::new(vec![Phrase::from_words(vec![Word::new("Total", bbox)])])]),
            Page::new(vec![Line::new(vec![Phrase::from_words(vec![Word::new("Hours", bbox)])])]),
        ])
    }

    #[test]
    fn test_word_listing() {
        let listing = word_listing(&doc(), &PageSelection::All);
        let lines: Vec<_> = listing.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("0:0:0:0"));
        assert!(lines[0].contains("[0.100, 0.250]"));
        assert!(lines[1].ends_with("Hours"));
    }

    #[test]
    fn test_word_listing_page_filter() {
        let listing = word_listing(&doc(), &PageSelection::Pages(vec![2]));
        assert_eq!(listing.lines().count(), 1);
        assert!(listing.contains("Hours"));
    }
}
