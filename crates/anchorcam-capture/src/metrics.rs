//! Counters for camera resolution.
//!
//! Recorded through the `metrics` facade; without an installed recorder
//! they are no-ops.

use metrics::counter;

/// Metric names as constants for consistency.
pub mod names {
    pub const PROBES_TOTAL: &str = "anchorcam_camera_probes_total";
    pub const PROBES_FAILED_TOTAL: &str = "anchorcam_camera_probes_failed_total";
    pub const RESOLUTIONS_TOTAL: &str = "anchorcam_camera_resolutions_total";
}

/// Resolution outcome labels.
pub mod outcome {
    pub const NO_CANDIDATES: &str = "no_candidates";
    pub const SINGLE: &str = "single";
    pub const SCORED: &str = "scored";
    pub const INTERACTIVE: &str = "interactive";
    pub const ENVIRONMENT_FALLBACK: &str = "environment_fallback";
}

/// Record a probe attempt.
pub fn record_probe() {
    counter!(names::PROBES_TOTAL).increment(1);
}

/// Record a failed probe.
pub fn record_probe_failure(reason: &'static str) {
    counter!(names::PROBES_FAILED_TOTAL, "reason" => reason).increment(1);
}

/// Record how a resolution run ended.
pub fn record_resolution(outcome: &'static str) {
    counter!(names::RESOLUTIONS_TOTAL, "outcome" => outcome).increment(1);
}
