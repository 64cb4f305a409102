//! Rendering options.

use crate::error::{Error, Result};
use std::ops::RangeInclusive;

/// Page selection for rendering (1-indexed, as users count pages).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PageSelection {
    /// Render all pages
    #[default]
    All,
    /// Render a range of pages (inclusive)
    Range(RangeInclusive<usize>),
    /// Render specific pages
    Pages(Vec<usize>),
}

impl PageSelection {
    /// Check if a page number (1-indexed) should be included.
    pub fn includes(&self, page: usize) -> bool {
        match self {
            PageSelection::All => true,
            PageSelection::Range(range) => range.contains(&page),
            PageSelection::Pages(pages) => pages.contains(&page),
        }
    }

    /// Check if a page index (0-indexed, as in cursors) should be included.
    pub fn includes_index(&self, index: usize) -> bool {
        self.includes(index + 1)
    }

    /// Parse a page selection string (e.g., "1-10", "1,3,5,7-10").
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        if s.is_empty() || s == "all" {
            return Ok(PageSelection::All);
        }

        if !s.contains(',') {
            if let Some((start, end)) = s.split_once('-') {
                return Ok(PageSelection::Range(page(start)?..=page(end)?));
            }
        }

        let mut pages = Vec::new();
        for part in s.split(',') {
            match part.split_once('-') {
                Some((start, end)) => pages.extend(page(start)?..=page(end)?),
                None => pages.push(page(part)?),
            }
        }

        pages.sort_unstable();
        pages.dedup();
        Ok(PageSelection::Pages(pages))
    }
}

fn page(s: &str) -> Result<usize> {
    s.trim()
        .parse()
        .map_err(|_| Error::InvalidPageRange(format!("invalid page number {:?}", s.trim())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_selection_includes() {
        let all = PageSelection::All;
        assert!(all.includes(1));
        assert!(all.includes(100));

        let range = PageSelection::Range(5..=10);
        assert!(!range.includes(4));
        assert!(range.includes(5));
        assert!(range.includes(10));
        assert!(!range.includes(11));
        assert!(range.includes_index(4));
    }

    #[test]
    fn test_page_selection_parse() {
        assert_eq!(PageSelection::parse("all").unwrap(), PageSelection::All);
        assert_eq!(PageSelection::parse("1-10").unwrap(), PageSelection::Range(1..=10));
        assert_eq!(
            PageSelection::parse("1,3,5-7,3,10").unwrap(),
            PageSelection::Pages(vec![1, 3, 5, 6, 7, 10])
        );
        assert!(matches!(
            PageSelection::parse("1-x"),
            Err(Error::InvalidPageRange(_))
        ));
    }
}
