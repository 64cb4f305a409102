//! Named field templates.
//!
//! A template maps field names to parser chains, e.g. an invoice template
//! with `invoiceNumber`, `dueDate` and `total` fields. Fields resolve
//! independently of each other, each from the document start.
//!
//! ```
//! use docanchor::{ParserSpec, Template, Unit};
//!
//! let template = Template::new()
//!     .with_field("total", vec![
//!         ParserSpec::after(1, Unit::Word, "Total"),
//!         ParserSpec::after(1, Unit::Word, r"\d+(\.\d+)?"),
//!     ]);
//! assert_eq!(template.field_count(), 1);
//! ```

use crate::error::{Error, Result};
use crate::model::Document;
use crate::parser::{ParserSpec, ResolveOptions};
use crate::resolve::{ParserChain, Target};
use indexmap::IndexMap;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Field names mapped to parser chains, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// Parser chain per field
    pub fields: IndexMap<String, Vec<ParserSpec>>,
}

impl Template {
    /// Create an empty template.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field.
    pub fn with_field(mut self, name: impl Into<String>, parsers: Vec<ParserSpec>) -> Self {
        self.add_field(name, parsers);
        self
    }

    /// Add or replace a field.
    pub fn add_field(&mut self, name: impl Into<String>, parsers: Vec<ParserSpec>) {
        self.fields.insert(name.into(), parsers);
    }

    /// Get the number of fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Parse a template from JSON: `{"fields": {"name": [parser, ...]}}`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a template from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Validate and compile every field's chain.
    pub fn compile(&self, options: &ResolveOptions) -> Result<Extractor> {
        let fields = self
            .fields
            .iter()
            .map(|(name, specs)| {
                ParserChain::new(specs.iter().cloned(), options)
                    .map(|chain| (name.clone(), chain))
                    .map_err(|e| Error::InvalidField {
                        field: name.clone(),
                        source: Box::new(e),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Extractor {
            fields,
            parallel: options.parallel,
        })
    }
}

/// A compiled template.
#[derive(Debug, Clone)]
pub struct Extractor {
    fields: Vec<(String, ParserChain)>,
    parallel: bool,
}

impl Extractor {
    /// Field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Resolve every field against `document`.
    pub fn extract(&self, document: &Document) -> Extraction {
        let resolve = |(name, chain): &(String, ParserChain)| (name.clone(), chain.resolve(document));

        let fields: Vec<(String, Target)> = if self.parallel {
            self.fields.par_iter().map(resolve).collect()
        } else {
            self.fields.iter().map(resolve).collect()
        };

        let extraction = Extraction {
            fields: fields.into_iter().collect(),
        };
        log::debug!(
            "Extracted {} of {} fields",
            extraction.found_count(),
            extraction.len()
        );
        extraction
    }

    /// Resolve every field against each document.
    pub fn extract_many(&self, documents: &[Document]) -> Vec<Extraction> {
        documents.iter().map(|doc| self.extract(doc)).collect()
    }
}

/// Template result: field name to target, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Extraction {
    fields: IndexMap<String, Target>,
}

impl Extraction {
    /// Get a field's target.
    pub fn get(&self, field: &str) -> Option<&Target> {
        self.fields.get(field)
    }

    /// Get a field's value, `None` when missing or not found.
    pub fn value(&self, field: &str) -> Option<&str> {
        self.get(field)
            .filter(|t| t.is_found())
            .map(Target::value)
    }

    /// Values of the fields that were found.
    pub fn values(&self) -> IndexMap<String, String> {
        self.fields
            .iter()
            .filter(|(_, t)| t.is_found())
            .map(|(name, t)| (name.clone(), t.value().to_string()))
            .collect()
    }

    /// Iterate over fields and targets.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Target)> {
        self.fields.iter().map(|(name, t)| (name.as_str(), t))
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the extraction has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Get the number of fields that were found.
    pub fn found_count(&self) -> usize {
        self.fields.values().filter(|t| t.is_found()).count()
    }
}
