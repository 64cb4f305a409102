//! Parser chains.

use super::{Anchor, Target};
use crate::error::{Error, Result};
use crate::model::Document;
use crate::parser::{Parser, ParserSpec, ResolveOptions};
use rayon::prelude::*;

/// An ordered list of parsers, each resolved against the result of the
/// previous one, starting from [`Anchor::seed`].
///
/// The first parser that finds nothing ends the chain with
/// [`Target::NotFound`]; later parsers are not evaluated.
#[derive(Debug, Clone)]
pub struct ParserChain {
    parsers: Vec<Parser>,
    parallel: bool,
}

impl ParserChain {
    /// Validate and compile every spec. Fails on the first invalid one.
    pub fn new<I>(specs: I, options: &ResolveOptions) -> Result<Self>
    where
        I: IntoIterator<Item = ParserSpec>,
    {
        let parsers = specs
            .into_iter()
            .map(|spec| Parser::new(spec, options))
            .collect::<Result<Vec<_>>>()?;
        if parsers.is_empty() {
            return Err(Error::EmptyChain);
        }
        Ok(Self {
            parsers,
            parallel: options.parallel,
        })
    }

    /// Build a chain with default options.
    pub fn from_specs(specs: &[ParserSpec]) -> Result<Self> {
        Self::new(specs.iter().cloned(), &ResolveOptions::default())
    }

    /// Parse a chain from JSON: a list of parser specs, or a single spec.
    pub fn from_json(json: &str, options: &ResolveOptions) -> Result<Self> {
        Self::new(ParserSpec::list_from_json(json)?, options)
    }

    /// Get the compiled parsers.
    pub fn parsers(&self) -> &[Parser] {
        &self.parsers
    }

    /// Get the number of parsers.
    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    /// Always false; empty chains are rejected at construction.
    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }

    /// Resolve the chain from the document start.
    pub fn resolve(&self, document: &Document) -> Target {
        self.resolve_from(document, &Anchor::seed())
    }

    /// Resolve the chain continuing from `anchor`.
    pub fn resolve_from(&self, document: &Document, anchor: &Anchor) -> Target {
        self.parsers
            .iter()
            .enumerate()
            .try_fold((Target::NotFound, anchor.clone()), |(_, anchor), (step, parser)| {
                let target = parser.resolve(document, &anchor);
                match target.anchor() {
                    Some(next) => Some((target, next)),
                    None => {
                        log::debug!("Chain stopped at parser {} of {}", step + 1, self.len());
                        None
                    }
                }
            })
            .map(|(target, _)| target)
            .unwrap_or(Target::NotFound)
    }

    /// Resolve the chain against each document, in parallel unless the
    /// chain was built with sequential options. Results keep input order.
    pub fn resolve_many(&self, documents: &[Document]) -> Vec<Target> {
        if self.parallel {
            documents.par_iter().map(|doc| self.resolve(doc)).collect()
        } else {
            documents.iter().map(|doc| self.resolve(doc)).collect()
        }
    }
}
