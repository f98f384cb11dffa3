//! Error types for the augmentation crate.
//!
//! This module defines the error type returned by crop augmentation
//! operations, along with utility constructors for creating errors with
//! appropriate context. Degenerate geometric situations (no polygons, a
//! fully occupied axis, an exhausted retry budget) are handled by
//! well-defined fallbacks and never surface as errors; only contract
//! violations such as a zero-sized image or an invalid configuration do.

use thiserror::Error;

/// Enum representing errors that can occur during crop augmentation.
#[derive(Error, Debug)]
pub enum AugmentError {
    /// Error indicating invalid input.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// A message describing the invalid input.
        message: String,
    },

    /// Error indicating a configuration problem.
    #[error("configuration: {message}")]
    ConfigError {
        /// A message describing the configuration error.
        message: String,
    },
}

/// Implementation of AugmentError with utility functions for creating errors.
impl AugmentError {
    /// Creates an AugmentError for invalid input.
    ///
    /// # Arguments
    ///
    /// * `message` - A message describing the invalid input.
    ///
    /// # Returns
    ///
    /// An AugmentError instance.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Creates an AugmentError for configuration errors.
    ///
    /// # Arguments
    ///
    /// * `message` - A message describing the configuration error.
    ///
    /// # Returns
    ///
    /// An AugmentError instance.
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Creates an AugmentError for configuration errors with context.
    ///
    /// # Arguments
    ///
    /// * `field` - The field where the error occurred.
    /// * `value` - The value of the field.
    /// * `reason` - The reason for the error.
    ///
    /// # Returns
    ///
    /// An AugmentError instance.
    pub fn config_error_with_context(field: &str, value: &str, reason: &str) -> Self {
        Self::ConfigError {
            message: format!(
                "Configuration error in field '{}' with value '{}': {}",
                field, value, reason
            ),
        }
    }
}

/// A convenient Result alias for augmentation operations.
pub type AugmentResult<T> = Result<T, AugmentError>;
