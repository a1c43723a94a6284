//! Camera stack replayed from a JSON device manifest.
//!
//! ```json
//! {
//!   "permission": "granted",
//!   "devices": [
//!     { "deviceId": "cam0", "kind": "videoinput", "label": "Back Camera 0",
//!       "settings": { "zoom": 1.0 }, "capabilities": { "width": { "max": 4032 } } },
//!     { "deviceId": "cam1", "kind": "videoinput", "label": "Back Telephoto Camera",
//!       "failure": "busy" }
//!   ]
//! }
//! ```

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use anchorcam_capture::{
    CaptureError, CaptureResult, CaptureStream, MediaDevices, TrackCapabilities, TrackSettings,
};
use anchorcam_models::device::label_indicates_front;
use anchorcam_models::{CaptureRequest, DeviceId, DeviceInfo, DeviceKind, FacingMode};

use crate::error::{AppError, AppResult};

/// Outcome of the platform permission prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PermissionState {
    #[default]
    Granted,
    Denied,
}

/// Simulated failure when a device is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceFailure {
    Busy,
    NotFound,
    Overconstrained,
}

impl DeviceFailure {
    fn to_error(self, label: &str) -> CaptureError {
        match self {
            DeviceFailure::Busy => CaptureError::device_busy(label),
            DeviceFailure::NotFound => CaptureError::DeviceNotFound(label.to_string()),
            DeviceFailure::Overconstrained => CaptureError::Overconstrained(label.to_string()),
        }
    }
}

/// One device in the manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestDevice {
    pub device_id: DeviceId,
    pub kind: DeviceKind,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub settings: TrackSettings,
    #[serde(default)]
    pub capabilities: TrackCapabilities,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<DeviceFailure>,
}

impl ManifestDevice {
    fn info(&self, labels_visible: bool) -> DeviceInfo {
        let label = if labels_visible { self.label.as_str() } else { "" };
        DeviceInfo::new(self.device_id.clone(), self.kind, label)
    }

    fn is_video(&self) -> bool {
        self.kind == DeviceKind::VideoInput
    }
}

/// Full manifest file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceManifest {
    #[serde(default)]
    pub permission: PermissionState,
    #[serde(default)]
    pub devices: Vec<ManifestDevice>,
}

impl DeviceManifest {
    /// Read and parse a manifest file.
    pub async fn load(path: &Path) -> AppResult<Self> {
        let display = path.display().to_string();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AppError::manifest(&display, e.to_string()))?;
        Self::parse(&raw).map_err(|e| AppError::manifest(&display, e.to_string()))
    }

    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

/// [`MediaDevices`] backed by a [`DeviceManifest`].
///
/// Labels stay empty until a stream has been opened once, mirroring
/// platforms that hide them before permission is granted.
#[derive(Debug)]
pub struct ReplayDevices {
    manifest: DeviceManifest,
    labels_unlocked: AtomicBool,
}

impl ReplayDevices {
    pub fn new(manifest: DeviceManifest) -> Self {
        Self {
            manifest,
            labels_unlocked: AtomicBool::new(false),
        }
    }

    fn find(&self, request: &CaptureRequest) -> CaptureResult<&ManifestDevice> {
        match request {
            CaptureRequest::Device { device_id, .. } => self
                .manifest
                .devices
                .iter()
                .find(|d| d.is_video() && &d.device_id == device_id)
                .ok_or_else(|| CaptureError::DeviceNotFound(device_id.to_string())),
            CaptureRequest::Facing { mode, exact } => {
                let usable = || {
                    self.manifest
                        .devices
                        .iter()
                        .filter(|d| d.is_video() && d.failure.is_none())
                };
                let facing = |d: &&ManifestDevice| {
                    let front = label_indicates_front(&d.label);
                    match mode {
                        FacingMode::Environment => !front,
                        FacingMode::User => front,
                    }
                };
                let matched = usable().find(facing);
                let chosen = if *exact {
                    matched
                } else {
                    matched.or_else(|| usable().next())
                };
                chosen.ok_or_else(|| {
                    CaptureError::Overconstrained(format!("no usable camera facing {}", mode))
                })
            }
        }
    }
}

#[async_trait]
impl MediaDevices for ReplayDevices {
    async fn enumerate_devices(&self) -> CaptureResult<Vec<DeviceInfo>> {
        let visible = self.labels_unlocked.load(Ordering::SeqCst);
        Ok(self
            .manifest
            .devices
            .iter()
            .map(|d| d.info(visible))
            .collect())
    }

    async fn open_stream(&self, request: &CaptureRequest) -> CaptureResult<Box<dyn CaptureStream>> {
        if self.manifest.permission == PermissionState::Denied {
            return Err(CaptureError::permission_denied("camera access refused"));
        }

        let device = self.find(request)?;
        if let Some(failure) = device.failure {
            return Err(failure.to_error(&device.label));
        }

        self.labels_unlocked.store(true, Ordering::SeqCst);
        debug!(device = %device.device_id, request = %request, "Replay stream opened");

        Ok(Box::new(ReplayStream {
            device_id: device.device_id.clone(),
            settings: device.settings,
            capabilities: device.capabilities,
        }))
    }

    fn name(&self) -> &'static str {
        "replay"
    }
}

struct ReplayStream {
    device_id: DeviceId,
    settings: TrackSettings,
    capabilities: TrackCapabilities,
}

#[async_trait]
impl CaptureStream for ReplayStream {
    fn settings(&self) -> CaptureResult<TrackSettings> {
        Ok(self.settings)
    }

    fn capabilities(&self) -> CaptureResult<TrackCapabilities> {
        Ok(self.capabilities)
    }

    async fn stop(self: Box<Self>) {
        debug!(device = %self.device_id, "Replay stream stopped");
    }
}
