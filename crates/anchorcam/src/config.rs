//! Application configuration.

use std::path::PathBuf;

use anchorcam_capture::ResolverConfig;
use anchorcam_tracking::SmoothingConfig;

use crate::error::AppResult;

/// Settings handed to the tracking engine when it starts.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerSettings {
    /// Compiled image target the engine looks for
    pub image_target_src: String,
    /// Video played on the anchored plane
    pub video_src: String,
    /// One-euro filter minimum cutoff applied inside the engine
    pub filter_min_cf: f64,
    /// One-euro filter speed coefficient applied inside the engine
    pub filter_beta: f64,
    /// Maximum number of targets tracked at once
    pub max_track: u32,
    /// Frames a target may be missed before it is reported lost
    pub miss_tolerance: u32,
    /// Frames a target must be seen before it is reported found
    pub warmup_tolerance: u32,
    pub ui_loading: bool,
    pub ui_error: bool,
    pub ui_scanning: bool,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            image_target_src: "./assets/targets/pedar.mind".to_string(),
            video_src: "./assets/videos/notopia.mp4".to_string(),
            filter_min_cf: 0.002,
            filter_beta: 0.0005,
            max_track: 1,
            miss_tolerance: 10,
            warmup_tolerance: 10,
            ui_loading: true,
            ui_error: true,
            ui_scanning: false,
        }
    }
}

impl TrackerSettings {
    /// Create settings from environment variables.
    ///
    /// Only the asset paths are configurable; engine tuning stays fixed.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            image_target_src: std::env::var("ANCHORCAM_TARGET_SRC")
                .unwrap_or(defaults.image_target_src),
            video_src: std::env::var("ANCHORCAM_VIDEO_SRC").unwrap_or(defaults.video_src),
            ..defaults
        }
    }
}

/// Top-level configuration for the `anchorcam` binary.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// JSON manifest describing the replayed camera stack
    pub device_manifest: PathBuf,
    /// JSON-lines trace of tracking engine events
    pub trace: PathBuf,
    pub resolver: ResolverConfig,
    pub smoothing: SmoothingConfig,
    pub tracker: TrackerSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            device_manifest: PathBuf::from("./fixtures/devices.json"),
            trace: PathBuf::from("./fixtures/trace.jsonl"),
            resolver: ResolverConfig::default(),
            smoothing: SmoothingConfig::default(),
            tracker: TrackerSettings::default(),
        }
    }
}

impl AppConfig {
    /// Create config from environment variables.
    ///
    /// Fails only on an out-of-range smoothing factor.
    pub fn from_env() -> AppResult<Self> {
        let defaults = Self::default();
        Ok(Self {
            device_manifest: std::env::var("ANCHORCAM_DEVICE_MANIFEST")
                .map(PathBuf::from)
                .unwrap_or(defaults.device_manifest),
            trace: std::env::var("ANCHORCAM_TRACE")
                .map(PathBuf::from)
                .unwrap_or(defaults.trace),
            resolver: ResolverConfig::from_env(),
            smoothing: SmoothingConfig::from_env()?,
            tracker: TrackerSettings::from_env(),
        })
    }

    /// Set the device manifest path.
    pub fn with_device_manifest(mut self, path: impl Into<PathBuf>) -> Self {
        self.device_manifest = path.into();
        self
    }

    /// Set the tracking trace path.
    pub fn with_trace(mut self, path: impl Into<PathBuf>) -> Self {
        self.trace = path.into();
        self
    }
}
