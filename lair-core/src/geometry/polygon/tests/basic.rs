use super::super::*;
use crate::error::ContourError;
use crate::geometry::point::Point;
use crate::geometry::segment::Segment;

fn square() -> Polygon {
    Polygon::new(vec![
        Point::new(0, 0),
        Point::new(0, 5),
        Point::new(5, 5),
        Point::new(5, 0),
    ])
}

#[test]
fn test_parse() {
    let p = Polygon::parse("0,0\n0,5\n5,5\n5,0\n").unwrap();
    assert_eq!(p, square());
}

#[test]
fn test_parse_rejects_malformed_line() {
    let err = Polygon::parse("0,0\n0,5\nfive,5\n5,0\n").unwrap_err();
    assert_eq!(
        err,
        ContourError::ParseLine {
            line: 3,
            content: "five,5".to_string(),
        }
    );

    let err = Polygon::parse("0,0\n0,5\n").unwrap_err();
    assert_eq!(err, ContourError::TooFewVertices(2));
}

#[test]
fn test_edges_close_the_contour() {
    let edges = square().edges().unwrap();
    assert_eq!(edges.len(), 4);
    // The wrap-around edge from the last vertex back to the first.
    assert_eq!(
        edges[3],
        Segment::new(Point::new(5, 0), Point::new(0, 0)).unwrap()
    );
}

#[test]
fn test_diagonal_pair_surfaces_at_edge_construction() {
    // Parsing does not validate rectilinearity; materializing edges does.
    let p = Polygon::parse("0,0\n3,4\n3,0\n").unwrap();
    assert_eq!(
        p.edges().unwrap_err(),
        ContourError::DiagonalEdge(Point::new(0, 0), Point::new(3, 4))
    );
}

#[test]
fn test_bounds() {
    let p = Polygon::new(vec![
        Point::new(2, -1),
        Point::new(2, 7),
        Point::new(-4, 7),
        Point::new(-4, -1),
    ]);
    let b = p.bounds();
    assert_eq!((b.left, b.right, b.bottom, b.top), (-4, 2, -1, 7));
}

#[test]
fn test_translate() {
    let moved = square().translate(Point::new(3, -2));
    assert_eq!(moved.vertices[0], Point::new(3, -2));
    assert_eq!(moved.vertices[2], Point::new(8, 3));
}

#[test]
fn test_display() {
    let p = Polygon::new(vec![Point::new(0, 0), Point::new(0, 2), Point::new(2, 2)]);
    assert_eq!(p.to_string(), "Polygon[(0, 0), (0, 2), (2, 2)]");
}
