//! Overlay session: tracking events in, smoothed poses and playback out.

use tracing::{debug, info};

use crate::events::TrackingEvent;
use crate::pose::Pose;
use crate::smoother::PoseSmoother;
use crate::state::TrackingState;

/// Playback of the overlay video.
pub trait PlaybackControl {
    /// Rewind to the beginning and start playing.
    fn play_from_start(&mut self);

    fn pause(&mut self);
}

/// Consumer of the smoothed pose, once per rendered frame.
pub trait PoseSink {
    /// `None` while the target is not tracked; the overlay stays hidden.
    fn present(&mut self, pose: Option<&Pose>);
}

/// Counters for one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub frames: u64,
    pub acquisitions: u64,
    pub losses: u64,
}

/// Drives a [`PoseSmoother`] from engine events and forwards results.
pub struct OverlaySession<P, S> {
    smoother: PoseSmoother,
    playback: P,
    sink: S,
    stats: SessionStats,
}

impl<P: PlaybackControl, S: PoseSink> OverlaySession<P, S> {
    pub fn new(smoother: PoseSmoother, playback: P, sink: S) -> Self {
        Self {
            smoother,
            playback,
            sink,
            stats: SessionStats::default(),
        }
    }

    /// Dispatch one engine event.
    pub fn handle(&mut self, event: &TrackingEvent) {
        match event {
            TrackingEvent::TargetFound { pose } => self.target_found(pose),
            TrackingEvent::Frame { pose } => self.frame(pose),
            TrackingEvent::TargetLost => self.target_lost(),
        }
    }

    pub fn target_found(&mut self, pose: &Pose) {
        self.smoother.on_target_found(pose);
        self.playback.play_from_start();
        self.stats.acquisitions += 1;
        info!(acquisitions = self.stats.acquisitions, "Target found");
    }

    pub fn target_lost(&mut self) {
        if self.smoother.state() == TrackingState::Idle {
            debug!("Target lost while idle, ignoring");
            return;
        }
        self.smoother.on_target_lost();
        self.playback.pause();
        self.stats.losses += 1;
        info!(losses = self.stats.losses, "Target lost");
    }

    /// Render one frame with the engine's raw pose.
    pub fn frame(&mut self, raw: &Pose) {
        let presented = if self.smoother.state().is_tracking() {
            self.smoother.update(raw)
        } else {
            None
        };
        self.sink.present(presented.as_ref());
        self.stats.frames += 1;
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn smoother(&self) -> &PoseSmoother {
        &self.smoother
    }

    pub fn into_parts(self) -> (PoseSmoother, P, S) {
        (self.smoother, self.playback, self.sink)
    }
}
