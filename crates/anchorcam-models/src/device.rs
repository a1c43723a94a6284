//! Capture device models.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label fragments that mark a front/user-facing sensor.
///
/// Matched case-insensitively as substrings.
pub const FRONT_LABEL_MARKERS: &[&str] = &["front", "facing front", "user"];

/// Opaque platform device handle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(pub String);

impl DeviceId {
    /// Create from an existing string.
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for DeviceId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for DeviceId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Kind of media device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    /// Camera or other video source
    VideoInput,
    /// Microphone
    AudioInput,
    /// Speaker or headphones
    AudioOutput,
}

impl DeviceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceKind::VideoInput => "videoinput",
            DeviceKind::AudioInput => "audioinput",
            DeviceKind::AudioOutput => "audiooutput",
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A device entry as returned by platform enumeration.
///
/// Labels are only populated once capture permission has been granted;
/// before that the platform reports an empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    /// Platform device handle
    pub device_id: DeviceId,

    /// Device kind
    pub kind: DeviceKind,

    /// Human-readable label (may be empty)
    #[serde(default)]
    pub label: String,
}

impl DeviceInfo {
    pub fn new(device_id: impl Into<DeviceId>, kind: DeviceKind, label: impl Into<String>) -> Self {
        Self {
            device_id: device_id.into(),
            kind,
            label: label.into(),
        }
    }

    /// Create a video input entry.
    pub fn video(device_id: impl Into<DeviceId>, label: impl Into<String>) -> Self {
        Self::new(device_id, DeviceKind::VideoInput, label)
    }
}

/// A video capture device considered for selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptureDevice {
    /// Platform device handle
    pub id: DeviceId,

    /// Human-readable label; empty when the platform withheld it
    pub label: String,

    /// Whether the label does not indicate a front/user-facing sensor
    pub is_rear_facing: bool,
}

impl CaptureDevice {
    pub fn new(id: impl Into<DeviceId>, label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            id: id.into(),
            is_rear_facing: !label_indicates_front(&label),
            label,
        }
    }

    /// Label, or `None` when the platform did not provide one.
    pub fn label(&self) -> Option<&str> {
        if self.label.is_empty() {
            None
        } else {
            Some(&self.label)
        }
    }

    /// Display name for logs and prompts.
    pub fn display_name(&self) -> &str {
        self.label().unwrap_or_else(|| self.id.as_str())
    }
}

impl From<&DeviceInfo> for CaptureDevice {
    fn from(info: &DeviceInfo) -> Self {
        Self::new(info.device_id.clone(), info.label.clone())
    }
}

/// Returns true if the label names a front/user-facing sensor.
pub fn label_indicates_front(label: &str) -> bool {
    let label = label.to_lowercase();
    FRONT_LABEL_MARKERS
        .iter()
        .any(|marker| label.contains(marker))
}
