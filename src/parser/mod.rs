//! Parser specifications and compiled parsers.

mod compiled;
mod options;
mod spec;

pub use compiled::Parser;
pub use options::ResolveOptions;
pub use spec::{Method, ParserSpec, TargetSpec, Unit};
