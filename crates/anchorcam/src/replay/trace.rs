//! Tracking engine replayed from a JSON-lines event trace.
//!
//! Each non-empty line is one [`TrackingEvent`]:
//!
//! ```text
//! {"event":"target_found","pose":{"position":[0,0,-1],"orientation":[0,0,0,1]}}
//! {"event":"frame","pose":{"position":[0.01,0,-1],"orientation":[0,0,0,1]}}
//! {"event":"target_lost"}
//! ```

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader, Lines};
use tracing::{debug, info};

use anchorcam_models::CaptureRequest;
use anchorcam_tracking::TrackingEvent;

use crate::config::TrackerSettings;
use crate::engine::TrackingEngine;
use crate::error::{AppError, AppResult};

pub struct ReplayEngine {
    path: PathBuf,
    lines: Option<Lines<BufReader<File>>>,
    line_no: usize,
}

impl ReplayEngine {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lines: None,
            line_no: 0,
        }
    }
}

#[async_trait]
impl TrackingEngine for ReplayEngine {
    async fn start(
        &mut self,
        request: &CaptureRequest,
        settings: &TrackerSettings,
    ) -> AppResult<()> {
        let file = File::open(&self.path).await?;
        self.lines = Some(BufReader::new(file).lines());
        self.line_no = 0;

        info!(
            capture = %request,
            target = %settings.image_target_src,
            trace = %self.path.display(),
            "Replay engine started"
        );
        Ok(())
    }

    async fn next_event(&mut self) -> AppResult<Option<TrackingEvent>> {
        let lines = self
            .lines
            .as_mut()
            .ok_or_else(|| AppError::engine("replay engine polled before start"))?;

        while let Some(line) = lines.next_line().await? {
            self.line_no += 1;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let event: TrackingEvent = serde_json::from_str(line)
                .map_err(|e| AppError::trace(self.line_no, e.to_string()))?;
            debug!(line = self.line_no, event = event.as_str(), "Replayed event");
            return Ok(Some(event));
        }

        Ok(None)
    }

    fn name(&self) -> &'static str {
        "replay"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tokio_test::assert_ok;

    fn trace_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_replays_events_in_order() {
        let file = trace_file(
            "{\"event\":\"target_found\",\"pose\":{\"position\":[0,0,0],\"orientation\":[0,0,0,1]}}\n\
             \n\
             {\"event\":\"target_lost\"}\n",
        );
        let mut engine = ReplayEngine::new(file.path());
        assert_ok!(
            engine
                .start(&CaptureRequest::prefer_environment(), &TrackerSettings::default())
                .await
        );

        let first = engine.next_event().await.unwrap();
        assert!(matches!(first, Some(TrackingEvent::TargetFound { .. })));
        let second = engine.next_event().await.unwrap();
        assert_eq!(second, Some(TrackingEvent::TargetLost));
        assert_eq!(engine.next_event().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_bad_line_reports_line_number() {
        let file = trace_file("{\"event\":\"target_lost\"}\n{\"event\":\"explode\"}\n");
        let mut engine = ReplayEngine::new(file.path());
        engine
            .start(&CaptureRequest::prefer_environment(), &TrackerSettings::default())
            .await
            .unwrap();

        engine.next_event().await.unwrap();
        let err = engine.next_event().await.unwrap_err();
        assert!(matches!(err, AppError::Trace { line: 2, .. }));
    }

    #[tokio::test]
    async fn test_poll_before_start_fails() {
        let mut engine = ReplayEngine::new("/nonexistent/trace.jsonl");
        let err = engine.next_event().await.unwrap_err();
        assert!(matches!(err, AppError::Engine(_)));
    }
}
