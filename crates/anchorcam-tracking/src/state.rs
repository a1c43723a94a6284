//! Tracking state driven by engine found/lost events.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the marker is currently being tracked.
///
/// Transitions happen only on engine events; there are no timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TrackingState {
    /// Target not visible; the smoothed pose is frozen.
    #[default]
    Idle,
    /// Target visible; the smoothed pose follows raw poses every frame.
    Tracking,
}

impl TrackingState {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackingState::Idle => "idle",
            TrackingState::Tracking => "tracking",
        }
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self, TrackingState::Tracking)
    }
}

impl fmt::Display for TrackingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
