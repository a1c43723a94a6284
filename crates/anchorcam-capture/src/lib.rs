#![deny(unreachable_patterns)]
//! Rear camera discovery and selection.
//!
//! This crate provides:
//! - Platform traits for device enumeration and capture streams
//! - Rear-facing candidate filtering from device labels
//! - Sequential reconnaissance probing with per-probe timeouts
//! - Table-driven heuristic scoring of probed candidates
//! - Automatic and interactive selection policies with an
//!   environment-facing fallback

pub mod config;
pub mod error;
pub mod heuristics;
pub mod metrics;
pub mod picker;
pub mod platform;
pub mod probe;
pub mod resolver;

pub use config::ResolverConfig;
pub use error::{CaptureError, CaptureResult};
pub use heuristics::{score_signals, Contribution, LabelRule, ProbeSignals, ScoreCard, LABEL_RULES};
pub use picker::CandidatePicker;
pub use platform::{CaptureStream, MediaDevices, TrackCapabilities, TrackSettings, ValueRange};
pub use probe::{probe_candidate, ProbeReport};
pub use resolver::{select_best, CandidateResolver};
