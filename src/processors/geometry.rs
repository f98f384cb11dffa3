//! Geometric primitives for crop augmentation.
//!
//! This module provides the point, polygon, and bounding-box types used to
//! describe labeled text instances, along with the axis-aligned extent
//! computation and the two rectangle predicates the crop algorithm relies
//! on. The "fully outside" and "fully inside" predicates are deliberately
//! separate named functions: their inequalities are asymmetric and easy to
//! conflate, and different call sites use different ones.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// A 2D point with floating-point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X-coordinate of the point.
    pub x: f32,
    /// Y-coordinate of the point.
    pub y: f32,
}

impl Point {
    /// Creates a new point with the given coordinates.
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// The axis-aligned extent of a set of points.
///
/// For an empty point set the extent is the "impossible" interval
/// (`min = +inf`, `max = -inf`), which every outside test classifies as
/// fully outside. That makes empty shapes drop out naturally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    /// Minimum x-coordinate.
    pub min_x: f32,
    /// Maximum x-coordinate.
    pub max_x: f32,
    /// Minimum y-coordinate.
    pub min_y: f32,
    /// Maximum y-coordinate.
    pub max_y: f32,
}

impl Extent {
    /// Computes the extent of a slice of points.
    ///
    /// # Arguments
    ///
    /// * `points` - The points to bound.
    ///
    /// # Returns
    ///
    /// The axis-aligned extent of the points.
    pub fn of(points: &[Point]) -> Self {
        let (min_x, max_x) = points
            .iter()
            .map(|p| p.x)
            .minmax()
            .into_option()
            .unwrap_or((f32::INFINITY, f32::NEG_INFINITY));
        let (min_y, max_y) = points
            .iter()
            .map(|p| p.y)
            .minmax()
            .into_option()
            .unwrap_or((f32::INFINITY, f32::NEG_INFINITY));
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }
}

/// An ordered sequence of points outlining one labeled text instance.
///
/// Point order matters only for downstream mask rendering; the crop
/// algorithm itself uses the polygon's axis-aligned extent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    /// The boundary points of the polygon.
    pub points: Vec<Point>,
}

impl Polygon {
    /// Creates a new polygon from a vector of points.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Creates a polygon from a flat coordinate slice `[x0, y0, x1, y1, ..]`.
    ///
    /// # Arguments
    ///
    /// * `coords` - Interleaved x/y coordinates. A trailing unpaired value
    ///   is ignored.
    ///
    /// # Returns
    ///
    /// A new `Polygon` instance.
    pub fn from_flat(coords: &[f32]) -> Self {
        let points = coords
            .chunks_exact(2)
            .map(|pair| Point::new(pair[0], pair[1]))
            .collect();
        Self { points }
    }

    /// Computes the axis-aligned extent of the polygon.
    pub fn extent(&self) -> Extent {
        Extent::of(&self.points)
    }

    /// Translates every point by `(dx, dy)` and then scales both
    /// coordinates uniformly by `scale`.
    ///
    /// # Arguments
    ///
    /// * `dx` - Translation along x, applied before scaling.
    /// * `dy` - Translation along y, applied before scaling.
    /// * `scale` - Uniform scale factor applied to both axes.
    ///
    /// # Returns
    ///
    /// The transformed polygon.
    pub fn translate_scale(&self, dx: f32, dy: f32, scale: f32) -> Self {
        Self {
            points: self
                .points
                .iter()
                .map(|p| Point::new((p.x + dx) * scale, (p.y + dy) * scale))
                .collect(),
        }
    }
}

/// A quadrilateral stored as two diagonal corner points.
///
/// The two corners are not required to describe an axis-aligned box; after
/// upstream rotation augmentations the stored corners may be any diagonal
/// of the shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// The two diagonal corner points.
    pub corners: [Point; 2],
}

impl BoundingBox {
    /// Creates a new bounding box from two diagonal corners.
    pub fn new(a: Point, b: Point) -> Self {
        Self { corners: [a, b] }
    }

    /// Creates a bounding box from four coordinates `(x0, y0, x1, y1)`.
    pub fn from_coords(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            corners: [Point::new(x0, y0), Point::new(x1, y1)],
        }
    }

    /// Computes the axis-aligned extent of the box.
    pub fn extent(&self) -> Extent {
        Extent::of(&self.corners)
    }

    /// Translates both corners by `(dx, dy)` and then scales both
    /// coordinates uniformly by `scale`.
    pub fn translate_scale(&self, dx: f32, dy: f32, scale: f32) -> Self {
        let map = |p: &Point| Point::new((p.x + dx) * scale, (p.y + dy) * scale);
        Self {
            corners: [map(&self.corners[0]), map(&self.corners[1])],
        }
    }
}

/// Tests whether a shape extent lies fully outside the rectangle
/// `(x, y, w, h)`.
///
/// A shape touching the rectangle boundary is NOT outside. Note the
/// asymmetry with [`is_inside_rect`]: this predicate compares the shape
/// maximum against the rectangle minimum (and vice versa), so a shape that
/// merely straddles an edge counts as intersecting.
///
/// # Arguments
///
/// * `extent` - The axis-aligned extent of the shape.
/// * `x` - Left edge of the rectangle.
/// * `y` - Top edge of the rectangle.
/// * `w` - Width of the rectangle.
/// * `h` - Height of the rectangle.
///
/// # Returns
///
/// `true` if the shape is fully outside the rectangle.
pub fn is_outside_rect(extent: &Extent, x: f32, y: f32, w: f32, h: f32) -> bool {
    if extent.max_x < x || extent.min_x > x + w {
        return true;
    }
    if extent.max_y < y || extent.min_y > y + h {
        return true;
    }
    false
}

/// Tests whether a shape extent lies fully inside the rectangle
/// `(x, y, w, h)`, boundary included.
///
/// # Arguments
///
/// * `extent` - The axis-aligned extent of the shape.
/// * `x` - Left edge of the rectangle.
/// * `y` - Top edge of the rectangle.
/// * `w` - Width of the rectangle.
/// * `h` - Height of the rectangle.
///
/// # Returns
///
/// `true` if the shape is fully inside the rectangle.
pub fn is_inside_rect(extent: &Extent, x: f32, y: f32, w: f32, h: f32) -> bool {
    if extent.min_x < x || extent.max_x > x + w {
        return false;
    }
    if extent.min_y < y || extent.max_y > y + h {
        return false;
    }
    true
}
