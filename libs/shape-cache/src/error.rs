//! # Shape Errors
//!
//! Error types for shape configuration validation.

use thiserror::Error;

/// Errors reported by [`ShapeConfig::validate`](crate::ShapeConfig::validate).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    /// A size component is below zero
    #[error("Negative size on {axis}: {value}")]
    NegativeSize { axis: char, value: f64 },

    /// A radius is below zero
    #[error("Negative radius: {value}")]
    NegativeRadius { value: f64 },

    /// A quality component is below zero
    #[error("Negative quality: {value}")]
    NegativeQuality { value: f64 },

    /// NaN or infinity in a numeric field
    #[error("Non-finite value in {field}")]
    NonFinite { field: &'static str },
}

/// Result alias for shape validation.
pub type ShapeResult<T> = Result<T, ShapeError>;
