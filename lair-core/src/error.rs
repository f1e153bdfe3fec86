use crate::geometry::point::Point;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContourError {
    #[error("Expected \"x,y\" with two integers, got {0:?}")]
    ParsePoint(String),

    #[error("Line {line}: expected \"x,y\" with two integers, got {content:?}")]
    ParseLine { line: usize, content: String },

    #[error("Edge from {0} to {1} is neither horizontal nor vertical")]
    DiagonalEdge(Point, Point),

    #[error("Zero-length edge at {0}")]
    ZeroLengthEdge(Point),

    #[error("Contour needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),
}
