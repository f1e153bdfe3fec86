use std::collections::BTreeMap;

use log::debug;

use crate::error::ContourError;
use crate::geometry::polygon::Polygon;

/// Per-column and per-row sorted lists of boundary-touch coordinates, built
/// once from a contour's boundary point set and read-only afterward.
///
/// Each list is adjacency-coalesced: boundary touches one unit apart
/// represent the contour grazing that line rather than crossing it, and
/// counting both would corrupt the parity-based interior test.
#[derive(Debug, Clone)]
pub struct CrossingIndex {
    columns: BTreeMap<i64, Vec<i64>>,
    rows: BTreeMap<i64, Vec<i64>>,
}

impl CrossingIndex {
    pub fn build(polygon: &Polygon) -> Result<Self, ContourError> {
        let boundary = polygon.boundary_points()?;
        let mut columns: BTreeMap<i64, Vec<i64>> = BTreeMap::new();
        let mut rows: BTreeMap<i64, Vec<i64>> = BTreeMap::new();
        for p in &boundary {
            columns.entry(p.x).or_default().push(p.y);
            rows.entry(p.y).or_default().push(p.x);
        }
        for list in columns.values_mut().chain(rows.values_mut()) {
            list.sort_unstable();
            *list = Self::coalesce_adjacent(std::mem::take(list));
        }
        debug!(
            "crossing index: {} boundary points, {} columns, {} rows",
            boundary.len(),
            columns.len(),
            rows.len()
        );
        Ok(CrossingIndex { columns, rows })
    }

    /// Sorted boundary-touch y-values for column `x`; empty when the contour
    /// never touches that column.
    pub fn column(&self, x: i64) -> &[i64] {
        self.columns.get(&x).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Sorted boundary-touch x-values for row `y`.
    pub fn row(&self, y: i64) -> &[i64] {
        self.rows.get(&y).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Cancel-pair coalescing of a sorted coordinate list: scanning in
    /// order, a coordinate within 1 of the previously kept one removes that
    /// survivor instead of being kept itself. Kept coordinates therefore
    /// always differ by more than 1, which makes the pass idempotent.
    fn coalesce_adjacent(coords: Vec<i64>) -> Vec<i64> {
        let mut kept: Vec<i64> = Vec::with_capacity(coords.len());
        for c in coords {
            match kept.last() {
                Some(&prev) if c - prev <= 1 => {
                    kept.pop();
                }
                _ => kept.push(c),
            }
        }
        kept
    }
}
