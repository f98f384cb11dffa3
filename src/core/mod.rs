//! Core types of the augmentation crate.
//!
//! This module contains the configuration and error handling shared by the
//! processor modules, along with re-exports of commonly used types.

pub mod config;
pub mod errors;

pub use config::{
    RandomCropConfig, DEFAULT_MAX_TRIES, DEFAULT_MIN_CROP_SIDE_RATIO, DEFAULT_TARGET_SIZE,
};
pub use errors::{AugmentError, AugmentResult};
