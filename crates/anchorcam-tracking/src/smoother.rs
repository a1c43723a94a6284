//! Found/lost-gated exponential pose smoothing.
//!
//! While tracking, each frame moves the smoothed pose a fixed fraction `α`
//! of the way toward the raw pose: linear interpolation for position,
//! spherical interpolation for orientation. Acquisition re-seeds the
//! smoothed pose from the raw pose so a stale value from an earlier session
//! never shows. Loss freezes it.

use tracing::debug;

use crate::config::SmoothingConfig;
use crate::pose::Pose;
use crate::state::TrackingState;

/// Smoothing filter that owns its tracking state.
#[derive(Debug, Clone)]
pub struct PoseSmoother {
    config: SmoothingConfig,
    state: TrackingState,
    smoothed: Option<Pose>,
}

impl PoseSmoother {
    pub fn new(config: SmoothingConfig) -> Self {
        Self {
            config,
            state: TrackingState::Idle,
            smoothed: None,
        }
    }

    pub fn state(&self) -> TrackingState {
        self.state
    }

    pub fn alpha(&self) -> f64 {
        self.config.alpha()
    }

    /// Current smoothed pose.
    ///
    /// `None` until the target has been acquired once. After a loss this is
    /// the value frozen at the moment of loss.
    pub fn smoothed(&self) -> Option<Pose> {
        self.smoothed
    }

    /// Target acquired: enter `Tracking` and re-seed from `raw`.
    ///
    /// Also re-seeds when already tracking.
    pub fn on_target_found(&mut self, raw: &Pose) {
        debug!(
            previous = %self.state,
            "Target found, seeding smoothed pose"
        );
        self.state = TrackingState::Tracking;
        self.smoothed = Some(*raw);
    }

    /// Target lost: enter `Idle` and freeze the smoothed pose.
    pub fn on_target_lost(&mut self) {
        if !self.state.is_tracking() {
            return;
        }
        debug!("Target lost, freezing smoothed pose");
        self.state = TrackingState::Idle;
    }

    /// Per-frame update.
    ///
    /// While tracking, blends toward `raw` and returns the new smoothed pose.
    /// While idle, does nothing and returns the frozen value.
    pub fn update(&mut self, raw: &Pose) -> Option<Pose> {
        if !self.state.is_tracking() {
            return self.smoothed;
        }

        let next = match self.smoothed {
            Some(current) => current.blend(raw, self.config.alpha()),
            None => *raw,
        };
        self.smoothed = Some(next);
        self.smoothed
    }
}

impl Default for PoseSmoother {
    fn default() -> Self {
        Self::new(SmoothingConfig::default())
    }
}
