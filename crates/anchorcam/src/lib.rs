//! anchorcam harness.
//!
//! Resolves the main rear camera against a replayed camera stack, then
//! replays a tracking trace through the pose smoother and writes one JSON
//! line per rendered frame.

pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod output;
pub mod picker;
pub mod replay;
pub mod startup;

pub use config::{AppConfig, TrackerSettings};
pub use engine::TrackingEngine;
pub use error::{AppError, AppResult};
pub use output::{JsonLinesSink, LoggedPlayback};
pub use picker::{LinePicker, StdinPicker};
pub use replay::{DeviceManifest, ReplayDevices, ReplayEngine};
pub use startup::{resolve_camera, run, run_session, RunSummary};
