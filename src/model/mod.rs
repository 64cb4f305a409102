//! Document model for layout annotations.
//!
//! The model mirrors the annotation JSON produced upstream: a document holds
//! pages, pages hold lines, lines hold phrases and phrases hold words. Every
//! phrase and word carries its normalized bounding quadrilateral. The model
//! is read-only input to resolution and is never mutated by it.

mod cursor;
mod document;
mod geometry;
mod page;
mod phrase;

pub use cursor::Cursor;
pub use document::Document;
pub use geometry::{BoundingBox, Quad, Span, Vertex};
pub use page::{Line, Page};
pub use phrase::{Phrase, Word};
