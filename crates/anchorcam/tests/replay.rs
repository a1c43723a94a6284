//! End-to-end runs of the replay harness.

use std::io::Write;
use std::sync::Arc;

use anchorcam::{
    resolve_camera, run, run_session, AppConfig, AppError, DeviceManifest, ReplayDevices,
    ReplayEngine,
};
use anchorcam_capture::{CandidatePicker, MediaDevices};
use anchorcam_models::{CaptureDevice, DeviceId, SelectionPolicy, SelectionResult};
use async_trait::async_trait;
use tempfile::NamedTempFile;
use tokio_test::assert_ok;

const THREE_BACK_CAMERAS: &str = r#"{
    "permission": "granted",
    "devices": [
        {"deviceId": "front", "kind": "videoinput", "label": "Front Camera"},
        {"deviceId": "ultra", "kind": "videoinput", "label": "Back Ultra Wide Camera"},
        {"deviceId": "main", "kind": "videoinput", "label": "Back Camera 0"},
        {"deviceId": "tele", "kind": "videoinput", "label": "Back Telephoto Camera"}
    ]
}"#;

const TRACE: &str = r#"{"event":"frame","pose":{"position":[9,9,9],"orientation":[0,0,0,1]}}
{"event":"target_found","pose":{"position":[0,0,-1],"orientation":[0,0,0,1]}}
{"event":"frame","pose":{"position":[0,0,-1],"orientation":[0,0,0,1]}}
{"event":"frame","pose":{"position":[1,0,-1],"orientation":[0,0,0,1]}}
{"event":"target_lost"}
{"event":"frame","pose":{"position":[5,5,5],"orientation":[0,0,0,1]}}
"#;

fn temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn replay_devices(manifest: &str) -> Arc<dyn MediaDevices> {
    Arc::new(ReplayDevices::new(DeviceManifest::parse(manifest).unwrap()))
}

#[tokio::test]
async fn test_selects_back_camera_zero() {
    let selection = assert_ok!(
        resolve_camera(replay_devices(THREE_BACK_CAMERAS), &AppConfig::default(), None).await
    );
    assert_eq!(selection, SelectionResult::Device(DeviceId::from("main")));
}

#[tokio::test]
async fn test_denied_permission_is_fatal() {
    let manifest = THREE_BACK_CAMERAS.replace("\"granted\"", "\"denied\"");
    let err = resolve_camera(replay_devices(&manifest), &AppConfig::default(), None)
        .await
        .unwrap_err();
    assert!(err.is_permission_denied());
}

#[tokio::test]
async fn test_no_rear_cameras_prefers_environment() {
    let manifest = r#"{"devices": [
        {"deviceId": "front", "kind": "videoinput", "label": "Front Camera"}
    ]}"#;
    let selection = assert_ok!(
        resolve_camera(replay_devices(manifest), &AppConfig::default(), None).await
    );
    assert_eq!(selection, SelectionResult::PreferEnvironment);
}

struct FirstPicker;

#[async_trait]
impl CandidatePicker for FirstPicker {
    async fn pick(&self, _candidates: &[CaptureDevice]) -> Option<usize> {
        Some(0)
    }

    fn name(&self) -> &'static str {
        "first"
    }
}

#[tokio::test]
async fn test_interactive_policy_uses_picker() {
    let mut config = AppConfig::default();
    config.resolver = config.resolver.with_policy(SelectionPolicy::Interactive);

    let selection = assert_ok!(
        resolve_camera(
            replay_devices(THREE_BACK_CAMERAS),
            &config,
            Some(Arc::new(FirstPicker)),
        )
        .await
    );
    assert_eq!(selection, SelectionResult::Device(DeviceId::from("ultra")));
}

#[tokio::test]
async fn test_session_writes_smoothed_frames() {
    let trace = temp_file(TRACE);
    let config = AppConfig::default();
    let mut engine = ReplayEngine::new(trace.path());

    let mut out = Vec::new();
    let stats = assert_ok!(
        run_session(
            &mut engine,
            &SelectionResult::PreferEnvironment.to_capture_request(),
            &config,
            &mut out,
        )
        .await
    );
    assert_eq!(stats.frames, 4);
    assert_eq!(stats.acquisitions, 1);
    assert_eq!(stats.losses, 1);

    let frames: Vec<serde_json::Value> = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(frames.len(), 4);
    assert_eq!(frames[0]["visible"], false);
    assert_eq!(frames[1]["pose"]["position"][0], 0.0);
    // alpha 0.1 toward x = 1
    let x = frames[2]["pose"]["position"][0].as_f64().unwrap();
    assert!((x - 0.1).abs() < 1e-12);
    assert_eq!(frames[3]["visible"], false);
}

#[tokio::test]
async fn test_missing_manifest_is_reported() {
    let config = AppConfig::default().with_device_manifest("/nonexistent/devices.json");
    let err = run(config).await.unwrap_err();
    assert!(matches!(err, AppError::Manifest { .. }));
}

#[tokio::test]
async fn test_full_run_from_files() {
    let manifest = temp_file(THREE_BACK_CAMERAS);
    let trace = temp_file(TRACE);
    let config = AppConfig::default()
        .with_device_manifest(manifest.path())
        .with_trace(trace.path());

    let summary = assert_ok!(run(config).await);
    assert_eq!(summary.selection, SelectionResult::Device(DeviceId::from("main")));
    assert_eq!(summary.stats.frames, 4);
}
