//! Normalized page geometry.
//!
//! Annotation producers describe every phrase and word with a quadrilateral
//! of four normalized vertices. The vertex order is positional and fixed:
//! top-left, top-right, bottom-right, bottom-left. Everything here indexes
//! vertices by that position.

use serde::{Deserialize, Serialize};

/// A point in normalized page coordinates (0.0 to 1.0).
///
/// Missing coordinates deserialize as `0.0`, since producers usually omit
/// zero-valued fields.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vertex {
    /// Horizontal position
    #[serde(default)]
    pub x: f64,

    /// Vertical position
    #[serde(default)]
    pub y: f64,
}

impl Vertex {
    /// Create a vertex.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Four vertices ordered top-left, top-right, bottom-right, bottom-left.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quad(pub [Vertex; 4]);

impl Quad {
    pub const TOP_LEFT: usize = 0;
    pub const TOP_RIGHT: usize = 1;
    pub const BOTTOM_RIGHT: usize = 2;
    pub const BOTTOM_LEFT: usize = 3;

    /// Create an axis-aligned quad from its left/top and right/bottom corners.
    pub fn from_rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self([
            Vertex::new(x0, y0),
            Vertex::new(x1, y0),
            Vertex::new(x1, y1),
            Vertex::new(x0, y1),
        ])
    }

    /// Get the vertices in positional order.
    pub fn vertices(&self) -> &[Vertex; 4] {
        &self.0
    }

    /// Left edge x (top-left vertex).
    pub fn left(&self) -> f64 {
        self.0[Self::TOP_LEFT].x
    }

    /// Right edge x (top-right vertex).
    pub fn right(&self) -> f64 {
        self.0[Self::TOP_RIGHT].x
    }

    /// Replace the left edge x on both left-hand vertices.
    pub fn with_left(mut self, x: f64) -> Self {
        self.0[Self::TOP_LEFT].x = x;
        self.0[Self::BOTTOM_LEFT].x = x;
        self
    }

    /// Replace the right edge x on both right-hand vertices.
    pub fn with_right(mut self, x: f64) -> Self {
        self.0[Self::TOP_RIGHT].x = x;
        self.0[Self::BOTTOM_RIGHT].x = x;
        self
    }

    /// Horizontal extent of the quad.
    pub fn span(&self) -> Span {
        Span::new(self.left(), self.right())
    }
}

/// Horizontal extent `[left, right]` used by the `below` method.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Span {
    pub left: f64,
    pub right: f64,
}

impl Span {
    /// Create a span.
    pub fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    /// Strict horizontal overlap. Touching edges do not overlap.
    pub fn overlaps(&self, other: &Span) -> bool {
        other.right > self.left && other.left < self.right
    }
}

/// Bounding box as found in annotation JSON.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    /// The four vertices of the box
    pub normalized_vertices: Quad,
}

impl BoundingBox {
    /// Create a bounding box from a quad.
    pub fn new(normalized_vertices: Quad) -> Self {
        Self {
            normalized_vertices,
        }
    }

    /// Create an axis-aligned bounding box.
    pub fn from_rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::new(Quad::from_rect(x0, y0, x1, y1))
    }

    /// Get the quad.
    pub fn quad(&self) -> &Quad {
        &self.normalized_vertices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quad_edges() {
        let quad = Quad::from_rect(0.1, 0.2, 0.4, 0.3);
        assert_eq!(quad.left(), 0.1);
        assert_eq!(quad.right(), 0.4);
        assert_eq!(quad.0[Quad::BOTTOM_RIGHT], Vertex::new(0.4, 0.3));
        assert_eq!(quad.0[Quad::BOTTOM_LEFT], Vertex::new(0.1, 0.3));
    }

    #[test]
    fn test_quad_edge_replacement() {
        let quad = Quad::from_rect(0.1, 0.2, 0.4, 0.3)
            .with_left(0.15)
            .with_right(0.35);
        assert_eq!(quad.0[Quad::TOP_LEFT].x, 0.15);
        assert_eq!(quad.0[Quad::BOTTOM_LEFT].x, 0.15);
        assert_eq!(quad.0[Quad::TOP_RIGHT].x, 0.35);
        assert_eq!(quad.0[Quad::BOTTOM_RIGHT].x, 0.35);
        // y values are untouched
        assert_eq!(quad.0[Quad::TOP_LEFT].y, 0.2);
        assert_eq!(quad.0[Quad::BOTTOM_RIGHT].y, 0.3);
    }

    #[test]
    fn test_span_overlap_is_strict() {
        let anchor = Span::new(0.5, 0.7);
        assert!(anchor.overlaps(&Span::new(0.6, 0.9)));
        assert!(anchor.overlaps(&Span::new(0.1, 0.51)));
        assert!(!anchor.overlaps(&Span::new(0.7, 0.9)));
        assert!(!anchor.overlaps(&Span::new(0.1, 0.5)));
    }

    #[test]
    fn test_bounding_box_json() {
        let json = r#"{"normalizedVertices":[{"x":0.1},{"x":0.2},{"x":0.2,"y":0.05},{"y":0.05}]}"#;
        let bbox: BoundingBox = serde_json::from_str(json).unwrap();
        assert_eq!(bbox.quad().left(), 0.1);
        assert_eq!(bbox.quad().0[Quad::TOP_LEFT].y, 0.0);
        assert_eq!(bbox.quad().0[Quad::BOTTOM_LEFT], Vertex::new(0.0, 0.05));
    }

    #[test]
    fn test_bounding_box_requires_four_vertices() {
        let json = r#"{"normalizedVertices":[{"x":0.1},{"x":0.2}]}"#;
        assert!(serde_json::from_str::<BoundingBox>(json).is_err());
    }
}
