//! Error types for pose tracking.

use thiserror::Error;

/// Result type for tracking operations.
pub type TrackingResult<T> = Result<T, TrackingError>;

/// Errors raised while configuring tracking.
///
/// The smoother itself has no failure modes at run time.
#[derive(Debug, Error)]
pub enum TrackingError {
    #[error("Smoothing factor must be finite and in (0, 1], got {0}")]
    InvalidSmoothingFactor(f64),
}
