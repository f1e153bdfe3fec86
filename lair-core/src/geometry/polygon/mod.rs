use std::collections::BTreeSet;
use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::ContourError;

use super::point::Point;
use super::rect::Rect;
use super::segment::Segment;

/// A closed rectilinear contour: an ordered vertex sequence with an implicit
/// edge from the last vertex back to the first.
///
/// Rectilinearity is not validated at construction; a diagonal vertex pair
/// surfaces as an error when the edges are materialized as [`Segment`]s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Polygon {
    pub vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        assert!(vertices.len() >= 3, "Polygon must have at least 3 vertices");
        Polygon { vertices }
    }

    /// Parses the input-file format: one `"x,y"` vertex per line, file order
    /// defining the contour path.
    pub fn parse(input: &str) -> Result<Self, ContourError> {
        let mut vertices = Vec::new();
        for (i, line) in input.lines().enumerate() {
            let point: Point = line.trim().parse().map_err(|_| ContourError::ParseLine {
                line: i + 1,
                content: line.to_string(),
            })?;
            vertices.push(point);
        }
        if vertices.len() < 3 {
            return Err(ContourError::TooFewVertices(vertices.len()));
        }
        Ok(Polygon::new(vertices))
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// The contour's edges, one per consecutive vertex pair including the
    /// wrap-around pair. First point where a non-rectilinear contour fails.
    pub fn edges(&self) -> Result<Vec<Segment>, ContourError> {
        let n = self.vertices.len();
        (0..n)
            .map(|i| Segment::new(self.vertices[i], self.vertices[(i + 1) % n]))
            .collect()
    }

    /// Rasterized edge points: every lattice point lying strictly between two
    /// consecutive vertices, across all edges. Vertices are not included.
    pub fn edge_interior_points(&self) -> Result<Vec<Point>, ContourError> {
        let mut points = Vec::new();
        for edge in self.edges()? {
            points.extend(edge.interior_points());
        }
        Ok(points)
    }

    /// The full boundary point set: vertices plus rasterized edge points.
    /// Ordered and deduplicated, so overlapping edge endpoints never produce
    /// a point twice.
    pub fn boundary_points(&self) -> Result<BTreeSet<Point>, ContourError> {
        let mut points: BTreeSet<Point> = self.vertices.iter().copied().collect();
        points.extend(self.edge_interior_points()?);
        Ok(points)
    }

    /// Axis-aligned bounding rectangle of the vertex set.
    pub fn bounds(&self) -> Rect {
        let mut bounds = Rect::from_corners(self.vertices[0], self.vertices[0]);
        for v in self.vertices.iter().skip(1) {
            bounds.left = bounds.left.min(v.x);
            bounds.right = bounds.right.max(v.x);
            bounds.bottom = bounds.bottom.min(v.y);
            bounds.top = bounds.top.max(v.y);
        }
        bounds
    }

    pub fn translate(&self, d: Point) -> Polygon {
        Polygon {
            vertices: self.vertices.iter().map(|&v| v + d).collect(),
        }
    }
}

impl Display for Polygon {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let verts: Vec<String> = self.vertices.iter().map(|v| v.to_string()).collect();
        write!(f, "Polygon[{}]", verts.join(", "))
    }
}

#[cfg(test)]
mod tests;
