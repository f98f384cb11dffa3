//! Row/column occupancy projection for text regions.
//!
//! The crop sampler needs to know which image rows and columns pass through
//! a labeled text instance. This module projects every polygon's rounded
//! bounding extent onto the two axes, producing one boolean occupancy array
//! per axis, and provides the helpers that turn the unoccupied indices into
//! maximal free intervals.

use crate::processors::geometry::Polygon;

/// Per-axis occupancy of an image by text regions.
#[derive(Debug, Clone)]
pub struct AxisOccupancy {
    /// `rows[y]` is true if any polygon's extent covers row `y`.
    pub rows: Vec<bool>,
    /// `cols[x]` is true if any polygon's extent covers column `x`.
    pub cols: Vec<bool>,
}

impl AxisOccupancy {
    /// Projects the polygons of an image onto its rows and columns.
    ///
    /// Each polygon's point coordinates are rounded to the nearest integer
    /// and its bounding min/max marks the half-open ranges
    /// `cols[min_x..max_x)` and `rows[min_y..max_y)` as occupied; the max
    /// endpoint itself stays free (bounding extents are exclusive on the
    /// upper end). Ranges are clamped to the image bounds.
    ///
    /// # Arguments
    ///
    /// * `width` - Image width in pixels.
    /// * `height` - Image height in pixels.
    /// * `polygons` - All text instance polygons of the image.
    ///
    /// # Returns
    ///
    /// The per-axis occupancy. An empty polygon set yields all-unoccupied
    /// arrays.
    pub fn project(width: u32, height: u32, polygons: &[Polygon]) -> Self {
        let mut rows = vec![false; height as usize];
        let mut cols = vec![false; width as usize];

        for poly in polygons {
            if poly.points.is_empty() {
                continue;
            }
            let ext = poly.extent();
            mark_span(&mut cols, ext.min_x.round(), ext.max_x.round());
            mark_span(&mut rows, ext.min_y.round(), ext.max_y.round());
        }

        Self { rows, cols }
    }
}

/// Marks `axis[min..max)` occupied, clamped to the array bounds.
fn mark_span(axis: &mut [bool], min: f32, max: f32) {
    let start = (min.max(0.0) as usize).min(axis.len());
    let end = (max.max(0.0) as usize).min(axis.len());
    for slot in &mut axis[start..end] {
        *slot = true;
    }
}

/// Collects the indices of unoccupied entries in an occupancy array.
pub fn free_indices(occupied: &[bool]) -> Vec<usize> {
    occupied
        .iter()
        .enumerate()
        .filter(|(_, &taken)| !taken)
        .map(|(i, _)| i)
        .collect()
}

/// Splits a sorted index array into maximal runs of consecutive indices.
///
/// Each run is returned as a half-open `(start, end)` value range. A gap of
/// even one index starts a new run. Implemented as a single linear scan.
///
/// # Arguments
///
/// * `indices` - Strictly increasing indices (as produced by
///   [`free_indices`]).
///
/// # Returns
///
/// The maximal runs, in order.
pub fn split_regions(indices: &[usize]) -> Vec<(usize, usize)> {
    let mut regions = Vec::new();
    let Some(&first) = indices.first() else {
        return regions;
    };

    let mut start = first;
    let mut prev = first;
    for &i in &indices[1..] {
        if i != prev + 1 {
            regions.push((start, prev + 1));
            start = i;
        }
        prev = i;
    }
    regions.push((start, prev + 1));
    regions
}
