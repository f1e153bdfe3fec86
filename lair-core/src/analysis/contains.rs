use crate::geometry::rect::Rect;

use super::crossings::CrossingIndex;

/// Rank of `value` in a sorted list: the number of entries `<= value`.
/// Two equal ranks at the ends of a span mean no boundary touch within it.
fn rank_le(list: &[i64], value: i64) -> usize {
    list.partition_point(|&c| c <= value)
}

/// Whether the sorted list holds any coordinate in the span `(lo, hi]`.
fn touched_within(list: &[i64], lo: i64, hi: i64) -> bool {
    rank_le(list, lo) != rank_le(list, hi)
}

/// Tests whether `rect` lies entirely inside the contour described by
/// `index`. Pure function of its inputs.
///
/// Works on the rectangle's strict interior (one-unit shrink on every side):
/// a candidate too thin to have an interior is never contained, since a
/// vacuous pass could accept a rectangle lying wholly outside the contour.
pub fn contains_rect(index: &CrossingIndex, rect: &Rect) -> bool {
    let interior = match rect.interior() {
        Some(interior) => interior,
        None => return false,
    };
    let Rect {
        left,
        right,
        bottom,
        top,
    } = interior;

    // The four bounding interior lines first: a boundary point interrupting
    // any of them rejects most candidates cheaply.
    if touched_within(index.column(left), bottom, top)
        || touched_within(index.column(right), bottom, top)
        || touched_within(index.row(bottom), left, right)
        || touched_within(index.row(top), left, right)
    {
        return false;
    }

    // Every interior row and column. The edge test alone is defeated by
    // zero-width tunnels that smuggle a hole into the interior without
    // touching the four bounding lines.
    for y in bottom..=top {
        if touched_within(index.row(y), left, right) {
            return false;
        }
    }
    for x in left..=right {
        if touched_within(index.column(x), bottom, top) {
            return false;
        }
    }

    // Parity: an interior point with an even number of boundary crossings to
    // its left is outside the contour. One sample suffices once the whole
    // interior is known to be crossing-free.
    rank_le(index.row(top), right) % 2 == 1
}
