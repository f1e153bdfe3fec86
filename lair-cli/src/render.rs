//! ASCII grid rendering of contours and rectangles.

use std::collections::BTreeSet;

use lair_core::{ContourError, Point, Polygon, Rect};

/// Renders the contour as a character grid: vertices `R`, rasterized edge
/// points `G`, empty cells `.`, with the winning rectangle's perimeter
/// highlighted as `*`. Rows run bottom to top in contour coordinates.
pub fn render_grid(polygon: &Polygon, winner: Option<&Rect>) -> Result<String, ContourError> {
    let vertices: BTreeSet<Point> = polygon.vertices.iter().copied().collect();
    let edge_points: BTreeSet<Point> = polygon.edge_interior_points()?.into_iter().collect();

    let mut bounds = polygon.bounds();
    if let Some(r) = winner {
        bounds.left = bounds.left.min(r.left);
        bounds.right = bounds.right.max(r.right);
        bounds.bottom = bounds.bottom.min(r.bottom);
        bounds.top = bounds.top.max(r.top);
    }

    let mut out = String::new();
    for y in bounds.bottom..=bounds.top {
        for x in bounds.left..=bounds.right {
            let p = Point::new(x, y);
            let c = if winner.is_some_and(|r| r.on_perimeter(p)) {
                '*'
            } else if vertices.contains(&p) {
                'R'
            } else if edge_points.contains(&p) {
                'G'
            } else {
                '.'
            };
            out.push(c);
        }
        out.push('\n');
    }
    Ok(out)
}
