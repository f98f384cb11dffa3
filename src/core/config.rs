//! Configuration for the random crop augmentation.
//!
//! The configuration is deserializable so it can be loaded from pipeline
//! JSON alongside other transform settings, and it validates itself before
//! use so that invalid values are caught at construction time rather than
//! in the middle of a training run.

use crate::core::errors::AugmentError;
use serde::{Deserialize, Serialize};

/// Default output size (width, height) of the cropped-and-rescaled image.
pub const DEFAULT_TARGET_SIZE: (u32, u32) = (640, 640);
/// Default number of sampling attempts before falling back to the full image.
pub const DEFAULT_MAX_TRIES: usize = 10;
/// Default minimum crop side length as a fraction of the image side.
pub const DEFAULT_MIN_CROP_SIDE_RATIO: f32 = 0.1;

/// Configuration for [`RandomCrop`](crate::processors::RandomCrop).
///
/// All fields have serde defaults, so a config may be deserialized from an
/// empty JSON object to obtain the standard training settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomCropConfig {
    /// Output size (width, height) of the padded result image.
    #[serde(default = "default_target_size")]
    pub target_size: (u32, u32),
    /// Number of candidate rectangles to try before the identity-crop fallback.
    #[serde(default = "default_max_tries")]
    pub max_tries: usize,
    /// Minimum accepted crop side, as a fraction of the image side on that axis.
    /// Guards against degenerate sliver crops.
    #[serde(default = "default_min_crop_side_ratio")]
    pub min_crop_side_ratio: f32,
}

fn default_target_size() -> (u32, u32) {
    DEFAULT_TARGET_SIZE
}

fn default_max_tries() -> usize {
    DEFAULT_MAX_TRIES
}

fn default_min_crop_side_ratio() -> f32 {
    DEFAULT_MIN_CROP_SIDE_RATIO
}

impl Default for RandomCropConfig {
    fn default() -> Self {
        Self {
            target_size: DEFAULT_TARGET_SIZE,
            max_tries: DEFAULT_MAX_TRIES,
            min_crop_side_ratio: DEFAULT_MIN_CROP_SIDE_RATIO,
        }
    }
}

impl RandomCropConfig {
    /// Validates the configuration.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If all fields are within their valid ranges.
    /// * `Err(AugmentError::ConfigError)` - Describing the first invalid field.
    pub fn validate(&self) -> Result<(), AugmentError> {
        let (target_w, target_h) = self.target_size;
        if target_w == 0 || target_h == 0 {
            return Err(AugmentError::config_error_with_context(
                "target_size",
                &format!("({}, {})", target_w, target_h),
                "both sides must be at least 1",
            ));
        }
        if self.max_tries == 0 {
            return Err(AugmentError::config_error_with_context(
                "max_tries",
                &self.max_tries.to_string(),
                "must be at least 1",
            ));
        }
        if !self.min_crop_side_ratio.is_finite()
            || self.min_crop_side_ratio <= 0.0
            || self.min_crop_side_ratio > 1.0
        {
            return Err(AugmentError::config_error_with_context(
                "min_crop_side_ratio",
                &self.min_crop_side_ratio.to_string(),
                "must be within (0, 1]",
            ));
        }
        Ok(())
    }
}
