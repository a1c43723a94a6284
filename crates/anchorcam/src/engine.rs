//! Tracking engine seam.

use async_trait::async_trait;

use anchorcam_models::CaptureRequest;
use anchorcam_tracking::TrackingEvent;

use crate::config::TrackerSettings;
use crate::error::AppResult;

/// Image-target tracking engine.
///
/// Started once with the resolved capture request, then polled for events
/// until it reports the end of the session.
#[async_trait]
pub trait TrackingEngine: Send {
    /// Start capturing with `request` and begin tracking.
    async fn start(&mut self, request: &CaptureRequest, settings: &TrackerSettings)
        -> AppResult<()>;

    /// Next event, or `None` when the session has ended.
    async fn next_event(&mut self) -> AppResult<Option<TrackingEvent>>;

    /// Engine name for logging.
    fn name(&self) -> &'static str;
}
