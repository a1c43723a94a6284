//! Smoothing configuration.

use crate::error::{TrackingError, TrackingResult};

/// Default smoothing factor.
///
/// Higher values follow the raw pose more tightly but keep more jitter;
/// lower values smooth more but lag behind.
pub const DEFAULT_ALPHA: f64 = 0.1;

/// Configuration for the pose smoother.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothingConfig {
    alpha: f64,
}

impl SmoothingConfig {
    /// Create a config with smoothing factor `alpha` in `(0, 1]`.
    pub fn new(alpha: f64) -> TrackingResult<Self> {
        if alpha.is_finite() && alpha > 0.0 && alpha <= 1.0 {
            Ok(Self { alpha })
        } else {
            Err(TrackingError::InvalidSmoothingFactor(alpha))
        }
    }

    /// Create config from environment variables.
    ///
    /// An unparsable value falls back to the default; a parsed value outside
    /// `(0, 1]` is rejected.
    pub fn from_env() -> TrackingResult<Self> {
        match std::env::var("ANCHORCAM_SMOOTHING_ALPHA")
            .ok()
            .and_then(|s| s.parse::<f64>().ok())
        {
            Some(alpha) => Self::new(alpha),
            None => Ok(Self::default()),
        }
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
        }
    }
}
