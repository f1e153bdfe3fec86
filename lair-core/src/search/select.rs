use log::{debug, info};

use crate::analysis::contains::contains_rect;
use crate::analysis::crossings::CrossingIndex;
use crate::error::ContourError;
use crate::geometry::polygon::Polygon;
use crate::geometry::rect::Rect;

use super::candidates::candidate_rects;

/// Finds the largest axis-aligned rectangle fully inside the contour.
///
/// Walks candidates from largest to smallest area and returns the first one
/// that passes containment; monotonically non-increasing areas make that
/// first success the global maximum. `Ok(None)` means no candidate fits at
/// all.
pub fn largest_interior_rect(polygon: &Polygon) -> Result<Option<Rect>, ContourError> {
    let index = CrossingIndex::build(polygon)?;
    let candidates = candidate_rects(polygon);
    debug!(
        "{} vertices, {} candidate rectangles",
        polygon.num_vertices(),
        candidates.len()
    );
    for (i, rect) in candidates.iter().enumerate() {
        if contains_rect(&index, rect) {
            info!(
                "accepted candidate {} of {}: {}, area {}",
                i + 1,
                candidates.len(),
                rect,
                rect.area()
            );
            return Ok(Some(*rect));
        }
        debug!("rejected candidate {}: {}, area {}", i + 1, rect, rect.area());
    }
    info!("no candidate rectangle fits inside the contour");
    Ok(None)
}
