//! Crop augmentation processors.
//!
//! This module contains the three cooperating pieces of the text-aware
//! random crop:
//!
//! * `geometry` - Points, polygons, boxes, and the rectangle predicates
//! * `occupancy` - Projection of text regions onto image rows/columns
//! * `sampler` - Free-interval splitting and crop rectangle sampling
//! * `crop` - Crop extraction, rescaling with padding, annotation remap

pub mod crop;
pub mod geometry;
pub mod occupancy;
pub mod sampler;

pub use crop::{Annotations, CropOutput, RandomCrop};
pub use geometry::{is_inside_rect, is_outside_rect, BoundingBox, Extent, Point, Polygon};
pub use occupancy::{free_indices, split_regions, AxisOccupancy};
pub use sampler::{CropRegion, CropSampler};
