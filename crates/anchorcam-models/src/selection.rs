//! Camera selection models.
//!
//! A resolution run produces exactly one `SelectionResult`:
//!
//! - `Device`: a concrete camera chosen by scoring or by the user
//! - `PreferEnvironment`: no concrete choice could be made, ask the platform
//!   for any environment-facing camera instead

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::device::DeviceId;
use crate::request::CaptureRequest;

/// Heuristic score of one probed candidate.
///
/// Higher means more likely to be the primary rear sensor. Unbounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateScore {
    pub device_id: DeviceId,
    pub label: String,
    pub score: f64,
}

impl CandidateScore {
    pub fn new(device_id: impl Into<DeviceId>, label: impl Into<String>, score: f64) -> Self {
        Self {
            device_id: device_id.into(),
            label: label.into(),
            score,
        }
    }
}

/// Outcome of camera resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "device_id", rename_all = "snake_case")]
pub enum SelectionResult {
    /// A concrete device.
    Device(DeviceId),
    /// Generic environment-facing capture intent.
    PreferEnvironment,
}

impl SelectionResult {
    /// Returns true for the generic environment-facing fallback.
    pub fn is_fallback(&self) -> bool {
        matches!(self, SelectionResult::PreferEnvironment)
    }

    /// Capture request for the video-capture initializer.
    ///
    /// A concrete device is requested exactly, without resolution hints;
    /// the fallback only expresses a facing preference.
    pub fn to_capture_request(&self) -> CaptureRequest {
        match self {
            SelectionResult::Device(id) => CaptureRequest::device(id.clone()),
            SelectionResult::PreferEnvironment => CaptureRequest::prefer_environment(),
        }
    }
}

impl fmt::Display for SelectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionResult::Device(id) => write!(f, "device:{}", id),
            SelectionResult::PreferEnvironment => write!(f, "prefer_environment"),
        }
    }
}

/// How to choose among several rear-facing candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// Probe every candidate and pick the highest heuristic score.
    #[default]
    Automatic,
    /// Present the candidates to the user and use their pick.
    Interactive,
}

impl SelectionPolicy {
    pub const ALL: &'static [SelectionPolicy] =
        &[SelectionPolicy::Automatic, SelectionPolicy::Interactive];

    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionPolicy::Automatic => "automatic",
            SelectionPolicy::Interactive => "interactive",
        }
    }
}

impl fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SelectionPolicy {
    type Err = SelectionPolicyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "automatic" | "auto" => Ok(SelectionPolicy::Automatic),
            "interactive" | "prompt" => Ok(SelectionPolicy::Interactive),
            _ => Err(SelectionPolicyParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown selection policy: {0}")]
pub struct SelectionPolicyParseError(String);
