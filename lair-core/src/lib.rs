// Organized modules
pub mod analysis;
pub mod geometry;
pub mod search;

pub mod error;

// Re-export key types for external use
pub use analysis::contains::contains_rect;
pub use analysis::crossings::CrossingIndex;
pub use error::ContourError;
pub use geometry::point::Point;
pub use geometry::polygon::Polygon;
pub use geometry::rect::Rect;
pub use geometry::segment::Segment;
pub use search::candidates::{candidate_rects, largest_candidate_area};
pub use search::select::largest_interior_rect;

/// Parse a log level string into LevelFilter.
pub fn parse_log_level(level: Option<&str>) -> log::LevelFilter {
    match level {
        Some("error") => log::LevelFilter::Error,
        Some("warn") => log::LevelFilter::Warn,
        Some("info") | Some("") | None => log::LevelFilter::Info,
        Some("debug") => log::LevelFilter::Debug,
        Some("trace") => log::LevelFilter::Trace,
        Some(level) => panic!("invalid log level: {}", level),
    }
}
