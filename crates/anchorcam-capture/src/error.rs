//! Error types for camera discovery.

use std::time::Duration;
use thiserror::Error;

/// Result type for capture operations.
pub type CaptureResult<T> = Result<T, CaptureError>;

/// Errors that can occur while discovering and probing cameras.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("Camera permission denied: {0}")]
    PermissionDenied(String),

    #[error("Device busy: {0}")]
    DeviceBusy(String),

    #[error("Device not found: {0}")]
    DeviceNotFound(String),

    #[error("Constraints cannot be satisfied: {0}")]
    Overconstrained(String),

    #[error("Probe of {label} failed: {reason}")]
    ProbeFailed { label: String, reason: String },

    #[error("Operation timed out after {0:?}")]
    Timeout(Duration),

    #[error("Platform error: {0}")]
    Platform(String),
}

impl CaptureError {
    /// Create a permission denied error.
    pub fn permission_denied(message: impl Into<String>) -> Self {
        Self::PermissionDenied(message.into())
    }

    /// Create a device busy error.
    pub fn device_busy(message: impl Into<String>) -> Self {
        Self::DeviceBusy(message.into())
    }

    /// Create a probe failure error.
    pub fn probe_failed(label: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ProbeFailed {
            label: label.into(),
            reason: reason.into(),
        }
    }

    /// Create a generic platform error.
    pub fn platform(message: impl Into<String>) -> Self {
        Self::Platform(message.into())
    }

    /// Whether this error must abort startup.
    pub fn is_fatal(&self) -> bool {
        matches!(self, CaptureError::PermissionDenied(_))
    }

    /// Short reason tag for metrics labels.
    pub fn reason(&self) -> &'static str {
        match self {
            CaptureError::PermissionDenied(_) => "permission_denied",
            CaptureError::DeviceBusy(_) => "device_busy",
            CaptureError::DeviceNotFound(_) => "not_found",
            CaptureError::Overconstrained(_) => "overconstrained",
            CaptureError::ProbeFailed { .. } => "probe_failed",
            CaptureError::Timeout(_) => "timeout",
            CaptureError::Platform(_) => "platform",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_permission_is_fatal() {
        assert!(CaptureError::permission_denied("NotAllowedError").is_fatal());
        assert!(!CaptureError::device_busy("in use").is_fatal());
        assert!(!CaptureError::Timeout(Duration::from_secs(3)).is_fatal());
        assert!(!CaptureError::probe_failed("Back Camera", "busy").is_fatal());
    }

    #[test]
    fn test_error_display() {
        let err = CaptureError::probe_failed("Back Camera 0", "device busy");
        assert_eq!(err.to_string(), "Probe of Back Camera 0 failed: device busy");
        assert_eq!(err.reason(), "probe_failed");
    }
}
