//! Line-based interactive camera picker.

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader, Stdin};
use tokio::sync::Mutex;
use tracing::warn;

use anchorcam_capture::CandidatePicker;
use anchorcam_models::CaptureDevice;

/// Lists candidates on stderr and reads a 1-based choice from a line.
///
/// An empty line, end of input or anything unparsable declines the choice.
pub struct LinePicker<R> {
    input: Mutex<BufReader<R>>,
}

/// Picker reading from the process stdin.
pub type StdinPicker = LinePicker<Stdin>;

impl StdinPicker {
    pub fn stdin() -> Self {
        Self::new(tokio::io::stdin())
    }
}

impl<R: AsyncRead + Unpin + Send> LinePicker<R> {
    pub fn new(input: R) -> Self {
        Self {
            input: Mutex::new(BufReader::new(input)),
        }
    }
}

#[async_trait]
impl<R: AsyncRead + Unpin + Send> CandidatePicker for LinePicker<R> {
    async fn pick(&self, candidates: &[CaptureDevice]) -> Option<usize> {
        eprintln!("Select a camera:");
        for (i, candidate) in candidates.iter().enumerate() {
            eprintln!("  {}) {}", i + 1, candidate.display_name());
        }
        eprint!("> ");

        let mut line = String::new();
        let mut input = self.input.lock().await;
        match input.read_line(&mut line).await {
            Ok(0) => None,
            Ok(_) => parse_choice(&line, candidates.len()),
            Err(e) => {
                warn!("Failed to read camera choice: {}", e);
                None
            }
        }
    }

    fn name(&self) -> &'static str {
        "line"
    }
}

fn parse_choice(line: &str, count: usize) -> Option<usize> {
    match line.trim().parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Some(n - 1),
        _ => None,
    }
}
