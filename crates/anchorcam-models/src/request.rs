//! Capture requests handed to the platform.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::device::DeviceId;

/// Preferred camera facing direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FacingMode {
    /// Rear camera, pointing away from the user
    #[default]
    Environment,
    /// Front camera, pointing at the user
    User,
}

impl FacingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FacingMode::Environment => "environment",
            FacingMode::User => "user",
        }
    }
}

impl fmt::Display for FacingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Constraints for acquiring a capture stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CaptureRequest {
    /// Any device facing the given direction.
    ///
    /// When `exact` is false the facing mode is only a preference.
    Facing { mode: FacingMode, exact: bool },

    /// Exactly this device, optionally at a fixed resolution.
    Device {
        device_id: DeviceId,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        width: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        height: Option<u32>,
    },
}

impl CaptureRequest {
    /// Environment-facing preference.
    ///
    /// Used both for the label-unlocking permission request and as the
    /// fallback when no concrete device could be chosen.
    pub fn prefer_environment() -> Self {
        Self::Facing {
            mode: FacingMode::Environment,
            exact: false,
        }
    }

    /// Exact device request without resolution hints.
    pub fn device(device_id: DeviceId) -> Self {
        Self::Device {
            device_id,
            width: None,
            height: None,
        }
    }

    /// Exact device request at a fixed resolution.
    pub fn device_at(device_id: DeviceId, width: u32, height: u32) -> Self {
        Self::Device {
            device_id,
            width: Some(width),
            height: Some(height),
        }
    }
}

impl fmt::Display for CaptureRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureRequest::Facing { mode, exact: true } => write!(f, "facing={}", mode),
            CaptureRequest::Facing { mode, exact: false } => write!(f, "facing~{}", mode),
            CaptureRequest::Device {
                device_id,
                width: Some(w),
                height: Some(h),
            } => write!(f, "device={} @{}x{}", device_id, w, h),
            CaptureRequest::Device { device_id, .. } => write!(f, "device={}", device_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_display() {
        let strict = CaptureRequest::Facing {
            mode: FacingMode::Environment,
            exact: true,
        };
        assert_eq!(strict.to_string(), "facing=environment");
        assert_eq!(
            CaptureRequest::prefer_environment().to_string(),
            "facing~environment"
        );
        assert_eq!(
            CaptureRequest::device_at(DeviceId::from("cam0"), 640, 480).to_string(),
            "device=cam0 @640x480"
        );
    }

    #[test]
    fn test_request_serde_tag() {
        let json = serde_json::to_value(CaptureRequest::device(DeviceId::from("x"))).unwrap();
        assert_eq!(json["type"], "device");
        assert_eq!(json["device_id"], "x");
        assert!(json.get("width").is_none());
    }
}
