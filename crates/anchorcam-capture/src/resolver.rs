//! Camera candidate resolution.
//!
//! Runs once at startup and turns the platform's device list into a single
//! [`SelectionResult`]:
//!
//! 1. Request environment-facing capture once so the platform reveals labels
//! 2. Keep video inputs whose label does not name a front/user sensor
//! 3. Zero candidates: environment fallback. One: use it directly.
//! 4. Several: probe each one in order and pick the best score, or let the
//!    user pick when the interactive policy is active
//!
//! Probes never overlap: each stream is released before the next device is
//! opened, since most platforms hold camera devices exclusively.

use std::cmp::Ordering;
use std::sync::Arc;

use tokio::time::timeout;
use tracing::{debug, info, warn};

use anchorcam_models::{
    CandidateScore, CaptureDevice, CaptureRequest, DeviceKind, SelectionPolicy, SelectionResult,
};

use crate::config::ResolverConfig;
use crate::error::{CaptureError, CaptureResult};
use crate::metrics::{self, outcome};
use crate::picker::CandidatePicker;
use crate::platform::MediaDevices;
use crate::probe::probe_candidate;

/// Resolves which physical camera to hand to the capture pipeline.
pub struct CandidateResolver {
    devices: Arc<dyn MediaDevices>,
    picker: Option<Arc<dyn CandidatePicker>>,
    config: ResolverConfig,
}

impl CandidateResolver {
    /// Create a resolver over a platform.
    pub fn new(devices: Arc<dyn MediaDevices>, config: ResolverConfig) -> Self {
        Self {
            devices,
            picker: None,
            config,
        }
    }

    /// Attach a picker for the interactive policy.
    pub fn with_picker(mut self, picker: Arc<dyn CandidatePicker>) -> Self {
        self.picker = Some(picker);
        self
    }

    /// Resolve a single capture selection.
    ///
    /// Only a permission failure is returned as an error; every other
    /// problem degrades to [`SelectionResult::PreferEnvironment`].
    pub async fn resolve(&self) -> CaptureResult<SelectionResult> {
        let candidates = match self.enumerate_rear_candidates().await {
            Ok(candidates) => candidates,
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                warn!("Device enumeration failed, falling back to environment camera: {}", e);
                Vec::new()
            }
        };

        match candidates.as_slice() {
            [] => {
                info!("No rear cameras found, requesting any environment-facing camera");
                metrics::record_resolution(outcome::NO_CANDIDATES);
                Ok(SelectionResult::PreferEnvironment)
            }
            [only] => {
                info!(device = %only.display_name(), "Single rear camera, skipping probes");
                metrics::record_resolution(outcome::SINGLE);
                Ok(SelectionResult::Device(only.id.clone()))
            }
            _ => Ok(self.choose_among(&candidates).await),
        }
    }

    /// Enumerate rear-facing video inputs in platform order.
    ///
    /// Performs one throwaway environment-facing acquisition first, because
    /// platforms withhold device labels until capture permission is granted.
    pub async fn enumerate_rear_candidates(&self) -> CaptureResult<Vec<CaptureDevice>> {
        self.unlock_labels().await?;

        let devices = self.devices.enumerate_devices().await?;
        let candidates: Vec<CaptureDevice> = devices
            .iter()
            .filter(|d| d.kind == DeviceKind::VideoInput)
            .map(CaptureDevice::from)
            .filter(|d| d.is_rear_facing)
            .collect();

        info!(
            platform = self.devices.name(),
            total = devices.len(),
            rear = candidates.len(),
            "Back cameras found: {:?}",
            candidates.iter().map(|c| c.display_name()).collect::<Vec<_>>()
        );

        Ok(candidates)
    }

    /// Probe and score every candidate, strictly one after another.
    ///
    /// Candidates whose probe fails or times out are left out of the result.
    pub async fn score_candidates(&self, candidates: &[CaptureDevice]) -> Vec<CandidateScore> {
        let mut scores = Vec::with_capacity(candidates.len());

        for candidate in candidates {
            match probe_candidate(self.devices.as_ref(), candidate, &self.config).await {
                Ok(report) => {
                    info!(
                        device = %candidate.display_name(),
                        score = report.card.total,
                        "Camera scored: {}",
                        report.card.summary()
                    );
                    scores.push(report.score());
                }
                Err(e) => {
                    metrics::record_probe_failure(e.reason());
                    warn!(
                        device = %candidate.display_name(),
                        "Could not test camera, skipping: {}", e
                    );
                }
            }
        }

        scores
    }

    async fn choose_among(&self, candidates: &[CaptureDevice]) -> SelectionResult {
        if self.config.policy == SelectionPolicy::Interactive {
            match self.picker.as_ref() {
                Some(picker) => {
                    if let Some(selection) = self.pick_interactively(picker.as_ref(), candidates).await
                    {
                        metrics::record_resolution(outcome::INTERACTIVE);
                        return selection;
                    }
                    info!("No camera picked, scoring candidates instead");
                }
                None => warn!("Interactive policy without a picker, scoring candidates instead"),
            }
        }

        let scores = self.score_candidates(candidates).await;
        let selection = select_best(scores);
        metrics::record_resolution(if selection.is_fallback() {
            outcome::ENVIRONMENT_FALLBACK
        } else {
            outcome::SCORED
        });
        selection
    }

    async fn pick_interactively(
        &self,
        picker: &dyn CandidatePicker,
        candidates: &[CaptureDevice],
    ) -> Option<SelectionResult> {
        let index = picker.pick(candidates).await?;
        match candidates.get(index) {
            Some(device) => {
                info!(
                    picker = picker.name(),
                    device = %device.display_name(),
                    "Camera picked by user"
                );
                Some(SelectionResult::Device(device.id.clone()))
            }
            None => {
                warn!(index, count = candidates.len(), "Picked camera index out of range");
                None
            }
        }
    }

    async fn unlock_labels(&self) -> CaptureResult<()> {
        let request = CaptureRequest::prefer_environment();
        let wait = self.config.permission_timeout;

        match timeout(wait, self.devices.open_stream(&request)).await {
            Ok(Ok(stream)) => {
                stream.stop().await;
                debug!("Capture permission granted, labels unlocked");
                Ok(())
            }
            Ok(Err(e)) if e.is_fatal() => Err(e),
            Ok(Err(e)) => {
                warn!("Permission probe failed, labels may be missing: {}", e);
                Ok(())
            }
            Err(_) => Err(CaptureError::permission_denied(format!(
                "permission request did not complete within {:?}",
                wait
            ))),
        }
    }
}

/// Pick the highest-scoring candidate.
///
/// The sort is stable, so equal scores keep enumeration order. An empty
/// list yields the environment-facing fallback.
pub fn select_best(mut scores: Vec<CandidateScore>) -> SelectionResult {
    scores.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    match scores.into_iter().next() {
        Some(best) => {
            info!(device = %best.label, score = best.score, "Selected camera");
            SelectionResult::Device(best.device_id)
        }
        None => {
            info!("No camera could be scored, requesting any environment-facing camera");
            SelectionResult::PreferEnvironment
        }
    }
}
