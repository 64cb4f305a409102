//! Declarative parser specifications.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// How candidates are located relative to the previous anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Method {
    /// Anywhere later in reading order
    After,
    /// Later in reading order and horizontally overlapping the anchor,
    /// counting at most one candidate per line
    Below,
}

impl Method {
    /// Name used in parser JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::After => "after",
            Method::Below => "below",
        }
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "after" => Ok(Method::After),
            "below" => Ok(Method::Below),
            other => Err(Error::InvalidMethod(other.to_string())),
        }
    }
}

impl TryFrom<String> for Method {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Granularity a parser matches at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Unit {
    /// A single word
    Word,
    /// A whole phrase
    Phrase,
}

impl Unit {
    /// Name used in parser and target JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Word => "word",
            Unit::Phrase => "phrase",
        }
    }
}

impl FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "word" => Ok(Unit::Word),
            "phrase" => Ok(Unit::Phrase),
            other => Err(Error::InvalidUnit(other.to_string())),
        }
    }
}

impl TryFrom<String> for Unit {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a parser looks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSpec {
    /// Regular expression matched against the whole unit text
    pub pattern: String,

    /// Unit the pattern applies to
    pub unit: Unit,
}

/// One matching rule: the `count`-th `target` found by `method`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserSpec {
    /// Which qualifying occurrence to return (1-based)
    pub count: u32,

    /// Search method
    pub method: Method,

    /// Pattern and unit
    pub target: TargetSpec,
}

impl ParserSpec {
    /// Create a parser spec.
    pub fn new(count: u32, method: Method, unit: Unit, pattern: impl Into<String>) -> Self {
        Self {
            count,
            method,
            target: TargetSpec {
                pattern: pattern.into(),
                unit,
            },
        }
    }

    /// The `count`-th `unit` matching `pattern` later in reading order.
    pub fn after(count: u32, unit: Unit, pattern: impl Into<String>) -> Self {
        Self::new(count, Method::After, unit, pattern)
    }

    /// The `count`-th `unit` matching `pattern` beneath the anchor.
    pub fn below(count: u32, unit: Unit, pattern: impl Into<String>) -> Self {
        Self::new(count, Method::Below, unit, pattern)
    }

    /// Parse a list of parser specs from JSON.
    ///
    /// A single spec object is accepted as a one-element list.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>> {
        let value: Value = serde_json::from_str(json)?;
        if value.is_array() {
            Ok(serde_json::from_value(value)?)
        } else {
            Ok(vec![serde_json::from_value(value)?])
        }
    }
}
