#![deny(unreachable_patterns)]
//! Pose smoothing for marker-anchored overlays.
//!
//! The tracking engine reports found/lost events and a raw pose per frame.
//! This crate turns that stream into a jitter-reduced pose:
//!
//! - `PoseSmoother` owns the `TrackingState` and the smoothed pose
//! - `OverlaySession` wires engine events to the smoother, video playback
//!   and the renderer

pub mod config;
pub mod error;
pub mod events;
pub mod pose;
pub mod session;
pub mod smoother;
pub mod state;

pub use config::SmoothingConfig;
pub use error::{TrackingError, TrackingResult};
pub use events::TrackingEvent;
pub use pose::Pose;
pub use session::{OverlaySession, PlaybackControl, PoseSink, SessionStats};
pub use smoother::PoseSmoother;
pub use state::TrackingState;
