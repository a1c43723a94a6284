//! File-backed stand-ins for the camera stack and the tracking engine.

pub mod devices;
pub mod trace;

pub use devices::{DeviceFailure, DeviceManifest, ManifestDevice, PermissionState, ReplayDevices};
pub use trace::ReplayEngine;
