//! Platform traits for device enumeration and capture streams.
//!
//! These traits are the only way the resolver talks to the camera stack,
//! so any platform (browser bridge, V4L2, AVFoundation, a replay fixture)
//! can be plugged in.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use anchorcam_models::{CaptureRequest, DeviceInfo};

use crate::error::CaptureResult;

/// Live settings reported by a capture stream.
///
/// Every field is optional because platforms expose different subsets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackSettings {
    /// Current focus distance
    #[serde(default)]
    pub focus_distance: Option<f64>,

    /// Current zoom factor (1.0 on the default sensor)
    #[serde(default)]
    pub zoom: Option<f64>,
}

/// Numeric capability range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

/// Capabilities reported by a capture stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackCapabilities {
    /// Supported capture widths
    #[serde(default)]
    pub width: Option<ValueRange>,
}

impl TrackCapabilities {
    /// Maximum supported capture width, if reported.
    pub fn max_width(&self) -> Option<f64> {
        self.width.and_then(|range| range.max)
    }
}

/// A live capture stream.
///
/// Holding a stream holds the underlying device exclusively; `stop` must be
/// called to release it.
#[async_trait]
pub trait CaptureStream: Send {
    /// Current settings of the video track.
    fn settings(&self) -> CaptureResult<TrackSettings>;

    /// Capabilities of the video track.
    fn capabilities(&self) -> CaptureResult<TrackCapabilities>;

    /// Stop all tracks and release the device.
    async fn stop(self: Box<Self>);
}

/// Device enumeration and stream acquisition.
#[async_trait]
pub trait MediaDevices: Send + Sync {
    /// List all media devices in platform order.
    async fn enumerate_devices(&self) -> CaptureResult<Vec<DeviceInfo>>;

    /// Acquire a capture stream matching the request.
    async fn open_stream(&self, request: &CaptureRequest) -> CaptureResult<Box<dyn CaptureStream>>;

    /// Platform name for logging.
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_width() {
        let caps = TrackCapabilities {
            width: Some(ValueRange {
                min: Some(160.0),
                max: Some(4032.0),
            }),
        };
        assert_eq!(caps.max_width(), Some(4032.0));
        assert_eq!(TrackCapabilities::default().max_width(), None);
    }

    #[test]
    fn test_settings_json_shape() {
        let settings: TrackSettings =
            serde_json::from_str(r#"{"focusDistance":0.3,"zoom":1.0}"#).unwrap();
        assert_eq!(settings.focus_distance, Some(0.3));
        assert_eq!(settings.zoom, Some(1.0));

        let empty: TrackSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, TrackSettings::default());
    }
}
