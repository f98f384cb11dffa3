//! Random crop rectangle sampling.
//!
//! The sampler turns the per-axis occupancy into maximal free intervals and
//! draws candidate crop rectangles whose edges avoid every text region.
//! Candidates are retried under a minimum-side constraint and an
//! acceptance rule (the crop must intersect at least one text region), and
//! the whole image is returned as a safe fallback when sampling cannot
//! succeed.
//!
//! All randomness goes through a caller-supplied [`Rng`], so training runs
//! can be made deterministic with a seeded generator.

use rand::Rng;
use tracing::debug;

use crate::processors::geometry::{is_outside_rect, Polygon};
use crate::processors::occupancy::{free_indices, split_regions, AxisOccupancy};

/// An axis-aligned crop rectangle, fully inside the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    /// Left edge of the crop.
    pub x: u32,
    /// Top edge of the crop.
    pub y: u32,
    /// Width of the crop.
    pub width: u32,
    /// Height of the crop.
    pub height: u32,
}

impl CropRegion {
    /// The identity crop covering the whole image.
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    /// Whether this crop covers the whole image of the given size.
    pub fn is_full(&self, width: u32, height: u32) -> bool {
        *self == Self::full(width, height)
    }
}

/// Samples crop rectangles that do not split any text region.
#[derive(Debug, Clone)]
pub struct CropSampler {
    /// Number of candidates to try before falling back to the full image.
    max_tries: usize,
    /// Minimum accepted crop side as a fraction of the image side.
    min_crop_side_ratio: f32,
}

impl CropSampler {
    /// Creates a new sampler.
    ///
    /// # Arguments
    ///
    /// * `max_tries` - Number of candidate rectangles to try.
    /// * `min_crop_side_ratio` - Minimum crop side as a fraction of the
    ///   image side on that axis.
    pub fn new(max_tries: usize, min_crop_side_ratio: f32) -> Self {
        Self {
            max_tries,
            min_crop_side_ratio,
        }
    }

    /// Samples a crop rectangle for an image.
    ///
    /// Edges are drawn from the rows/columns not covered by any polygon,
    /// so no text region is split across the crop boundary. A candidate is
    /// accepted only if it is at least `min_crop_side_ratio` of the image
    /// on both axes and intersects at least one polygon's extent. If either
    /// axis has no free index, or no candidate is accepted within
    /// `max_tries` attempts, the identity crop `(0, 0, width, height)` is
    /// returned.
    ///
    /// # Arguments
    ///
    /// * `width` - Image width in pixels.
    /// * `height` - Image height in pixels.
    /// * `polygons` - All text instance polygons of the image.
    /// * `rng` - Random source for all sampling decisions.
    ///
    /// # Returns
    ///
    /// A crop rectangle fully inside the image.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        width: u32,
        height: u32,
        polygons: &[Polygon],
        rng: &mut R,
    ) -> CropRegion {
        let occupancy = AxisOccupancy::project(width, height, polygons);
        let free_rows = free_indices(&occupancy.rows);
        let free_cols = free_indices(&occupancy.cols);

        if free_rows.is_empty() || free_cols.is_empty() {
            debug!("text occupies a full axis, falling back to identity crop");
            return CropRegion::full(width, height);
        }

        let row_regions = split_regions(&free_rows);
        let col_regions = split_regions(&free_cols);

        for _ in 0..self.max_tries {
            let (xmin, xmax) = if col_regions.len() > 1 {
                region_select(&col_regions, rng)
            } else {
                random_select(&free_cols, width as usize, rng)
            };
            let (ymin, ymax) = if row_regions.len() > 1 {
                region_select(&row_regions, rng)
            } else {
                random_select(&free_rows, height as usize, rng)
            };

            // Reject sliver candidates.
            if ((xmax - xmin) as f32) < self.min_crop_side_ratio * width as f32
                || ((ymax - ymin) as f32) < self.min_crop_side_ratio * height as f32
            {
                continue;
            }

            // Accept only if the candidate intersects some text region.
            let rect_w = (xmax - xmin) as f32;
            let rect_h = (ymax - ymin) as f32;
            let intersects_text = polygons.iter().any(|poly| {
                !is_outside_rect(&poly.extent(), xmin as f32, ymin as f32, rect_w, rect_h)
            });
            if intersects_text {
                return CropRegion {
                    x: xmin as u32,
                    y: ymin as u32,
                    width: (xmax - xmin) as u32,
                    height: (ymax - ymin) as u32,
                };
            }
        }

        debug!(
            "no crop candidate accepted after {} tries, falling back to identity crop",
            self.max_tries
        );
        CropRegion::full(width, height)
    }
}

/// Picks two values uniformly from the free-index array (with replacement),
/// clips them to `[0, axis_len - 1]`, and returns them ordered.
///
/// Used when an axis has at most one free region.
fn random_select<R: Rng + ?Sized>(free: &[usize], axis_len: usize, rng: &mut R) -> (usize, usize) {
    let a = free[rng.random_range(0..free.len())];
    let b = free[rng.random_range(0..free.len())];
    let lo = a.min(b).min(axis_len - 1);
    let hi = a.max(b).min(axis_len - 1);
    (lo, hi)
}

/// Picks two free regions uniformly (with replacement, so both picks may
/// land in the same region), one index uniformly from each, and returns
/// the indices ordered.
///
/// Used when an axis has two or more free regions; drawing the edges from
/// distinct gaps is what lets the crop span text regions without cutting
/// through them.
fn region_select<R: Rng + ?Sized>(regions: &[(usize, usize)], rng: &mut R) -> (usize, usize) {
    let mut pick = |rng: &mut R| {
        let (start, end) = regions[rng.random_range(0..regions.len())];
        start + rng.random_range(0..end - start)
    };
    let a = pick(rng);
    let b = pick(rng);
    (a.min(b), a.max(b))
}
