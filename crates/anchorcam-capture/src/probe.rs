//! Reconnaissance probing of a single camera candidate.
//!
//! A probe opens a short-lived stream on exactly one device at a low
//! resolution, reads whatever the platform reports about it, and releases
//! the stream before returning. The whole probe is bounded by a timeout so
//! a hung device cannot stall startup.

use tokio::time::timeout;
use tracing::debug;

use anchorcam_models::{CandidateScore, CaptureDevice, CaptureRequest};

use crate::config::ResolverConfig;
use crate::error::{CaptureError, CaptureResult};
use crate::heuristics::{score_signals, ProbeSignals, ScoreCard};
use crate::metrics;
use crate::platform::{MediaDevices, TrackCapabilities};

/// What a successful probe learned about a candidate.
#[derive(Debug, Clone)]
pub struct ProbeReport {
    pub device: CaptureDevice,
    pub signals: ProbeSignals,
    pub card: ScoreCard,
}

impl ProbeReport {
    pub fn score(&self) -> CandidateScore {
        CandidateScore::new(
            self.device.id.clone(),
            self.device.label.clone(),
            self.card.total,
        )
    }
}

/// Probe one candidate and score it.
///
/// The stream is released before this returns, on success and on failure.
/// Exceeding `config.probe_timeout` yields [`CaptureError::Timeout`].
pub async fn probe_candidate(
    devices: &dyn MediaDevices,
    candidate: &CaptureDevice,
    config: &ResolverConfig,
) -> CaptureResult<ProbeReport> {
    metrics::record_probe();

    let request =
        CaptureRequest::device_at(candidate.id.clone(), config.probe_width, config.probe_height);

    let signals = match timeout(config.probe_timeout, observe(devices, &request, candidate)).await
    {
        Ok(result) => result?,
        Err(_) => return Err(CaptureError::Timeout(config.probe_timeout)),
    };

    let card = score_signals(&signals);
    Ok(ProbeReport {
        device: candidate.clone(),
        signals,
        card,
    })
}

async fn observe(
    devices: &dyn MediaDevices,
    request: &CaptureRequest,
    candidate: &CaptureDevice,
) -> CaptureResult<ProbeSignals> {
    let stream = devices.open_stream(request).await?;

    let settings = stream.settings();
    let capabilities = stream.capabilities();
    stream.stop().await;

    let settings = settings.map_err(|e| {
        CaptureError::probe_failed(candidate.display_name(), format!("settings: {}", e))
    })?;

    // Capability introspection is optional on many platforms.
    let capabilities = capabilities.unwrap_or_else(|e| {
        debug!(
            device = %candidate.display_name(),
            "Capabilities unavailable: {}", e
        );
        TrackCapabilities::default()
    });

    Ok(ProbeSignals::observed(
        candidate.label.clone(),
        &settings,
        &capabilities,
    ))
}
