//! # textaug
//!
//! Text-aware random crop augmentation for text detection training data.
//!
//! Produces random training crops of an image that respect a target output
//! size, never split a labeled text region across the crop boundary, and
//! remap every polygon/box annotation into the cropped-and-rescaled
//! coordinate frame.
//!
//! ## How it works
//!
//! - **Occupancy projection**: every polygon's rounded bounding extent
//!   marks the image rows and columns it covers.
//! - **Free-interval sampling**: crop edges are drawn from the unoccupied
//!   rows/columns, retried under a minimum-side constraint until the
//!   candidate intersects at least one text region.
//! - **Crop and remap**: the crop is rescaled uniformly into the top-left
//!   of a zero-padded target-size buffer (aspect ratio preserved), and
//!   annotations are translated, scaled, and filtered.
//!
//! Degenerate inputs (no polygons, text covering a full axis, an exhausted
//! retry budget) fall back to the identity crop of the whole image rather
//! than erroring.
//!
//! ## Modules
//!
//! * [`core`] - Configuration and error handling
//! * [`processors`] - Geometry, occupancy projection, sampling, and the
//!   crop-and-remap engine
//!
//! ## Quick Start
//!
//! ```rust
//! use textaug::prelude::*;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let img = image::RgbImage::new(100, 100);
//! let annotations = Annotations::new(
//!     vec![Polygon::from_flat(&[10.0, 10.0, 20.0, 10.0, 20.0, 20.0, 10.0, 20.0])],
//!     vec![],
//!     vec![],
//! );
//!
//! let crop = RandomCrop::new(RandomCropConfig {
//!     target_size: (50, 50),
//!     ..Default::default()
//! })?;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let out = crop.apply(&img, &annotations, &mut rng)?;
//! assert_eq!(out.image.dimensions(), (50, 50));
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod processors;

/// Prelude module for convenient imports.
///
/// Bring the essentials into scope with a single use statement:
///
/// ```rust
/// use textaug::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::{AugmentError, AugmentResult, RandomCropConfig};
    pub use crate::processors::{
        Annotations, BoundingBox, CropOutput, CropRegion, Point, Polygon, RandomCrop,
    };
}
