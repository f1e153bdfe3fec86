use std::collections::BTreeSet;

use super::super::*;
use crate::geometry::point::Point;

fn polygon(vertices: &[(i64, i64)]) -> Polygon {
    Polygon::new(vertices.iter().map(|&(x, y)| Point::new(x, y)).collect())
}

/// Membership oracle: whether `p` lies exactly on some edge of the contour.
fn on_some_edge(polygon: &Polygon, p: Point) -> bool {
    polygon.edges().unwrap().iter().any(|s| {
        if s.horizontal {
            p.y == s.bottom && s.left <= p.x && p.x <= s.right
        } else {
            p.x == s.left && s.bottom <= p.y && p.y <= s.top
        }
    })
}

#[test]
fn test_edge_interior_points_exclude_vertices() {
    let square = polygon(&[(0, 0), (0, 3), (3, 3), (3, 0)]);
    let interior = square.edge_interior_points().unwrap();
    assert_eq!(interior.len(), 8);
    for v in &square.vertices {
        assert!(!interior.contains(v));
    }
}

#[test]
fn test_boundary_points_match_edge_membership_oracle() {
    for vertices in [
        // Square.
        vec![(0, 0), (0, 5), (5, 5), (5, 0)],
        // L-shape.
        vec![(0, 0), (10, 0), (10, 4), (5, 4), (5, 10), (0, 10)],
        // Notched contour with adjacent edges.
        vec![(0, 0), (10, 0), (10, 4), (6, 4), (6, 5), (10, 5), (10, 9), (0, 9)],
    ] {
        let p = polygon(&vertices);
        let boundary = p.boundary_points().unwrap();
        let bounds = p.bounds();
        for x in bounds.left..=bounds.right {
            for y in bounds.bottom..=bounds.top {
                let point = Point::new(x, y);
                assert_eq!(
                    boundary.contains(&point),
                    on_some_edge(&p, point),
                    "mismatch at {}",
                    point
                );
            }
        }
    }
}

#[test]
fn test_boundary_points_deduplicate_shared_endpoints() {
    // Every vertex is shared by two edges but appears exactly once: the
    // union is exactly vertices plus the pairwise-disjoint open intervals.
    let notched = polygon(&[(0, 0), (10, 0), (10, 4), (6, 4), (6, 5), (10, 5), (10, 9), (0, 9)]);
    let boundary = notched.boundary_points().unwrap();
    let interior = notched.edge_interior_points().unwrap();
    let distinct_interior: BTreeSet<Point> = interior.iter().copied().collect();
    assert_eq!(interior.len(), distinct_interior.len());
    assert_eq!(boundary.len(), notched.vertices.len() + interior.len());
    for v in &notched.vertices {
        assert!(boundary.contains(v));
    }
}
