//! Frame output and overlay playback for the harness.

use std::io::Write;

use serde::Serialize;
use tracing::{info, warn};

use anchorcam_tracking::{PlaybackControl, Pose, PoseSink};

/// One presented frame as written to the output stream.
#[derive(Debug, Serialize)]
struct FrameRecord<'a> {
    frame: u64,
    visible: bool,
    pose: Option<&'a Pose>,
}

/// Writes one JSON line per presented frame.
pub struct JsonLinesSink<W> {
    writer: W,
    frames: u64,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, frames: 0 }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> PoseSink for JsonLinesSink<W> {
    fn present(&mut self, pose: Option<&Pose>) {
        let record = FrameRecord {
            frame: self.frames,
            visible: pose.is_some(),
            pose,
        };
        self.frames += 1;

        let written = serde_json::to_writer(&mut self.writer, &record)
            .map_err(std::io::Error::from)
            .and_then(|_| self.writer.write_all(b"\n"))
            .and_then(|_| self.writer.flush());
        if let Err(e) = written {
            warn!(frame = record.frame, "Failed to write frame: {}", e);
        }
    }
}

/// Stand-in for the overlay video element; logs transitions.
#[derive(Debug, Clone)]
pub struct LoggedPlayback {
    video_src: String,
    playing: bool,
    starts: u32,
}

impl LoggedPlayback {
    pub fn new(video_src: impl Into<String>) -> Self {
        Self {
            video_src: video_src.into(),
            playing: false,
            starts: 0,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Number of times playback restarted from the beginning.
    pub fn starts(&self) -> u32 {
        self.starts
    }
}

impl PlaybackControl for LoggedPlayback {
    fn play_from_start(&mut self) {
        self.playing = true;
        self.starts += 1;
        info!(video = %self.video_src, position_secs = 0, "Video playing");
    }

    fn pause(&mut self) {
        if self.playing {
            self.playing = false;
            info!(video = %self.video_src, "Video paused");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_writes_json_lines() {
        let mut sink = JsonLinesSink::new(Vec::new());
        sink.present(None);
        sink.present(Some(&Pose::identity()));

        let out = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<serde_json::Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["frame"], 0);
        assert_eq!(lines[0]["visible"], false);
        assert!(lines[0]["pose"].is_null());
        assert_eq!(lines[1]["visible"], true);
        assert_eq!(lines[1]["pose"]["orientation"][3], 1.0);
    }

    #[test]
    fn test_playback_counts_restarts() {
        let mut playback = LoggedPlayback::new("video.mp4");
        playback.play_from_start();
        playback.pause();
        playback.play_from_start();
        assert!(playback.is_playing());
        assert_eq!(playback.starts(), 2);
    }
}
