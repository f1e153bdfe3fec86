use std::cmp::Reverse;

use itertools::Itertools;

use crate::geometry::polygon::Polygon;
use crate::geometry::rect::Rect;

/// Every candidate rectangle, sorted by strictly decreasing area.
///
/// A candidate is the bounding rectangle of an unordered pair of contour
/// vertices. The stable sort preserves generation order (vertex-index
/// lexicographic) among equal areas, so the decreasing-area walk in the
/// selector is deterministic.
pub fn candidate_rects(polygon: &Polygon) -> Vec<Rect> {
    let mut rects: Vec<Rect> = polygon
        .vertices
        .iter()
        .tuple_combinations()
        .map(|(a, b)| Rect::from_corners(*a, *b))
        .collect();
    rects.sort_by_key(|r| Reverse(r.area()));
    rects
}

/// Area of the largest candidate before any containment testing: the best
/// conceivable answer, useful as an upper bound in reports.
pub fn largest_candidate_area(polygon: &Polygon) -> Option<i64> {
    polygon
        .vertices
        .iter()
        .tuple_combinations()
        .map(|(a, b)| Rect::from_corners(*a, *b).area())
        .max()
}
