//! Rendering of resolution results and documents for output.

mod json;
mod options;
mod text;

pub use json::{to_json, JsonFormat};
pub use options::PageSelection;
pub use text::{extraction_to_text, word_listing};
