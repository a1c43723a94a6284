//! Shared data models for anchorcam.
//!
//! This crate provides Serde-serializable types for:
//! - Capture devices as reported by the platform
//! - Candidate scores and the final camera selection
//! - Capture requests handed to the video-capture initializer
//! - Selection policies (automatic scoring vs. interactive choice)

pub mod device;
pub mod request;
pub mod selection;

// Re-export common types
pub use device::{CaptureDevice, DeviceId, DeviceInfo, DeviceKind};
pub use request::{CaptureRequest, FacingMode};
pub use selection::{CandidateScore, SelectionPolicy, SelectionPolicyParseError, SelectionResult};
