//! Validated, ready-to-run parsers.

use super::{Method, ParserSpec, ResolveOptions, Unit};
use crate::error::{Error, Result};
use crate::model::Document;
use crate::resolve::{self, Anchor, Target};
use regex::{Regex, RegexBuilder};

/// A parser spec whose configuration has been checked and whose pattern
/// has been compiled.
///
/// Construction fails on a zero `count` or an invalid pattern.
#[derive(Debug, Clone)]
pub struct Parser {
    spec: ParserSpec,
    regex: Regex,
}

impl Parser {
    /// Validate `spec` and compile its pattern.
    pub fn new(spec: ParserSpec, options: &ResolveOptions) -> Result<Self> {
        if spec.count == 0 {
            return Err(Error::InvalidCount(spec.count));
        }
        let regex = build_regex(&spec.target.pattern, options)?;
        Ok(Self { spec, regex })
    }

    /// Get the underlying spec.
    pub fn spec(&self) -> &ParserSpec {
        &self.spec
    }

    /// Which qualifying occurrence to return (1-based).
    pub fn count(&self) -> usize {
        self.spec.count as usize
    }

    /// Search method.
    pub fn method(&self) -> Method {
        self.spec.method
    }

    /// Unit the pattern applies to.
    pub fn unit(&self) -> Unit {
        self.spec.target.unit
    }

    /// Check whether `text` matches the pattern in full.
    pub fn matches(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Resolve this parser against `document`, continuing from `anchor`.
    pub fn resolve(&self, document: &Document, anchor: &Anchor) -> Target {
        resolve::resolve(document, self, anchor)
    }
}

impl TryFrom<ParserSpec> for Parser {
    type Error = Error;

    fn try_from(spec: ParserSpec) -> Result<Self> {
        Parser::new(spec, &ResolveOptions::default())
    }
}

/// Anchor the pattern to the whole unit text.
fn build_regex(pattern: &str, options: &ResolveOptions) -> Result<Regex> {
    RegexBuilder::new(&format!("^(?:{})$", pattern))
        .case_insensitive(options.case_insensitive)
        .build()
        .map_err(|source| Error::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_matches_whole_text() {
        let parser = Parser::try_from(ParserSpec::after(1, Unit::Word, r"\d{3}")).unwrap();
        assert!(parser.matches("123"));
        assert!(!parser.matches("1234"));
        assert!(!parser.matches("x123"));
    }

    #[test]
    fn test_alternation_is_anchored_as_a_whole() {
        let parser = Parser::try_from(ParserSpec::after(1, Unit::Word, "Total|Due")).unwrap();
        assert!(parser.matches("Total"));
        assert!(parser.matches("Due"));
        assert!(!parser.matches("Total Due"));
        assert!(!parser.matches("Totals"));
    }

    #[test]
    fn test_case_insensitive_option() {
        let spec = ParserSpec::after(1, Unit::Word, "invoice");
        let strict = Parser::new(spec.clone(), &ResolveOptions::default()).unwrap();
        let relaxed = Parser::new(spec, &ResolveOptions::new().case_insensitive()).unwrap();
        assert!(!strict.matches("INVOICE"));
        assert!(relaxed.matches("INVOICE"));
    }

    #[test]
    fn test_zero_count_rejected() {
        let err = Parser::try_from(ParserSpec::after(0, Unit::Word, ".+")).unwrap_err();
        assert!(matches!(err, Error::InvalidCount(0)));
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let err = Parser::try_from(ParserSpec::below(1, Unit::Phrase, "(unclosed")).unwrap_err();
        match err {
            Error::InvalidPattern { pattern, .. } => assert_eq!(pattern, "(unclosed"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
