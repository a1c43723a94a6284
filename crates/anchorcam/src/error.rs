//! Application error types.

use thiserror::Error;

use anchorcam_capture::CaptureError;
use anchorcam_tracking::TrackingError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid device manifest {path}: {message}")]
    Manifest { path: String, message: String },

    #[error("Invalid tracking trace at line {line}: {message}")]
    Trace { line: usize, message: String },

    #[error("Tracking engine error: {0}")]
    Engine(String),

    #[error("Camera error: {0}")]
    Capture(#[from] CaptureError),

    #[error("Tracking error: {0}")]
    Tracking(#[from] TrackingError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn manifest(path: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Manifest {
            path: path.into(),
            message: msg.into(),
        }
    }

    pub fn trace(line: usize, msg: impl Into<String>) -> Self {
        Self::Trace {
            line,
            message: msg.into(),
        }
    }

    pub fn engine(msg: impl Into<String>) -> Self {
        Self::Engine(msg.into())
    }

    /// Whether the failure is the user refusing camera access.
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, AppError::Capture(CaptureError::PermissionDenied(_)))
    }
}
