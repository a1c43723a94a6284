//! Interactive candidate selection.

use async_trait::async_trait;

use anchorcam_models::CaptureDevice;

/// Lets a user choose the camera when several rear candidates exist.
#[async_trait]
pub trait CandidatePicker: Send + Sync {
    /// Present `candidates` and return the index of the user's pick.
    ///
    /// `None` means the user declined to choose.
    async fn pick(&self, candidates: &[CaptureDevice]) -> Option<usize>;

    /// Picker name for logging.
    fn name(&self) -> &'static str;
}
