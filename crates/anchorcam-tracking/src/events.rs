//! Events emitted by the tracking engine.

use serde::{Deserialize, Serialize};

use crate::pose::Pose;

/// One event from the tracking engine.
///
/// `Frame` is only delivered while the target is tracked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TrackingEvent {
    /// Target acquired at `pose`.
    TargetFound { pose: Pose },
    /// Raw pose for the current rendered frame.
    Frame { pose: Pose },
    /// Target lost.
    TargetLost,
}

impl TrackingEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackingEvent::TargetFound { .. } => "target_found",
            TrackingEvent::Frame { .. } => "frame",
            TrackingEvent::TargetLost => "target_lost",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_json_shape() {
        let found: TrackingEvent = serde_json::from_str(
            r#"{"event":"target_found","pose":{"position":[0,0,0],"orientation":[0,0,0,1]}}"#,
        )
        .unwrap();
        assert_eq!(found, TrackingEvent::TargetFound { pose: Pose::identity() });

        let lost: TrackingEvent = serde_json::from_str(r#"{"event":"target_lost"}"#).unwrap();
        assert_eq!(lost, TrackingEvent::TargetLost);
        assert_eq!(lost.as_str(), "target_lost");
    }
}
