//! Startup sequence: pick the camera, start tracking, drive the overlay.

use std::io::Write;
use std::sync::Arc;

use tracing::{info, warn};

use anchorcam_capture::{CandidatePicker, CandidateResolver, MediaDevices};
use anchorcam_models::{CaptureRequest, SelectionPolicy, SelectionResult};
use anchorcam_tracking::{OverlaySession, PoseSmoother, SessionStats};

use crate::config::AppConfig;
use crate::engine::TrackingEngine;
use crate::error::AppResult;
use crate::output::{JsonLinesSink, LoggedPlayback};
use crate::picker::StdinPicker;
use crate::replay::{DeviceManifest, ReplayDevices, ReplayEngine};

/// What one run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub selection: SelectionResult,
    pub stats: SessionStats,
}

/// Resolve the capture device.
///
/// Permission denial is returned as an error; every other outcome yields a
/// request the capture initializer can use.
pub async fn resolve_camera(
    devices: Arc<dyn MediaDevices>,
    config: &AppConfig,
    picker: Option<Arc<dyn CandidatePicker>>,
) -> AppResult<SelectionResult> {
    let mut resolver = CandidateResolver::new(devices, config.resolver.clone());
    if let Some(picker) = picker {
        resolver = resolver.with_picker(picker);
    }

    let selection = resolver.resolve().await?;
    info!(selection = %selection, "Main camera resolved");
    Ok(selection)
}

/// Start `engine` with `request` and feed its events through the overlay
/// session until the engine ends.
pub async fn run_session<E, W>(
    engine: &mut E,
    request: &CaptureRequest,
    config: &AppConfig,
    out: W,
) -> AppResult<SessionStats>
where
    E: TrackingEngine + ?Sized,
    W: Write,
{
    engine.start(request, &config.tracker).await?;
    info!(engine = engine.name(), alpha = config.smoothing.alpha(), "Tracking started");

    let mut session = OverlaySession::new(
        PoseSmoother::new(config.smoothing),
        LoggedPlayback::new(config.tracker.video_src.clone()),
        JsonLinesSink::new(out),
    );

    while let Some(event) = engine.next_event().await? {
        session.handle(&event);
    }

    let stats = session.stats();
    info!(
        frames = stats.frames,
        acquisitions = stats.acquisitions,
        losses = stats.losses,
        "Tracking session ended"
    );
    Ok(stats)
}

/// Run the replay harness end to end, writing frames to stdout.
pub async fn run(config: AppConfig) -> AppResult<RunSummary> {
    let manifest = DeviceManifest::load(&config.device_manifest).await?;
    info!(
        manifest = %config.device_manifest.display(),
        devices = manifest.devices.len(),
        "Loaded device manifest"
    );
    let devices: Arc<dyn MediaDevices> = Arc::new(ReplayDevices::new(manifest));

    let picker: Option<Arc<dyn CandidatePicker>> = match config.resolver.policy {
        SelectionPolicy::Interactive => Some(Arc::new(StdinPicker::stdin())),
        SelectionPolicy::Automatic => None,
    };

    let selection = resolve_camera(devices, &config, picker).await?;
    if selection.is_fallback() {
        warn!("No specific camera chosen, using environment-facing preference");
    }

    let mut engine = ReplayEngine::new(config.trace.clone());
    let stats = run_session(
        &mut engine,
        &selection.to_capture_request(),
        &config,
        std::io::stdout(),
    )
    .await?;

    Ok(RunSummary { selection, stats })
}
