//! Recorded landmark streams.
//!
//! A recording is a YAML list of [`LandmarkFrame`]s. [`ReplaySource`]
//! feeds them to a [`Tracker`](crate::tracker::Tracker) either as fast as
//! they are consumed or paced to their recorded timestamps.

use crate::landmarks::LandmarkFrame;
use crate::tracker::LandmarkSource;
use crate::{Error, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::path::Path;
use std::time::{Duration, Instant};

/// Sequence of recorded detector outputs
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Recording {
    pub frames: Vec<LandmarkFrame>,
}

impl Recording {
    #[must_use]
    pub const fn new(frames: Vec<LandmarkFrame>) -> Self {
        Self { frames }
    }

    /// Load a recording from a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, does not parse, or
    /// contains a hand without exactly 21 landmarks
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::IoError(e.to_string()))?;
        let recording = Self::from_yaml(&content)?;
        info!("Loaded {} frames from {}", recording.frames.len(), path.display());
        Ok(recording)
    }

    /// Parse a recording from YAML text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid recording
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::InvalidInput(format!("Failed to parse recording: {e}")))
    }

    /// Save the recording to a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::InvalidInput(format!("Failed to serialize recording: {e}")))?;
        std::fs::write(path, content).map_err(|e| Error::IoError(e.to_string()))?;
        Ok(())
    }

    /// Recorded span in seconds
    #[must_use]
    pub fn duration(&self) -> f64 {
        match (self.frames.first(), self.frames.last()) {
            (Some(first), Some(last)) => last.timestamp - first.timestamp,
            _ => 0.0,
        }
    }
}

/// Landmark source replaying a [`Recording`]
pub struct ReplaySource {
    frames: VecDeque<LandmarkFrame>,
    realtime: bool,
    origin: Option<(Instant, f64)>,
}

impl ReplaySource {
    #[must_use]
    pub fn new(recording: Recording) -> Self {
        Self {
            frames: recording.frames.into(),
            realtime: false,
            origin: None,
        }
    }

    /// Sleep between frames to reproduce the recorded timing
    #[must_use]
    pub const fn realtime(mut self, realtime: bool) -> Self {
        self.realtime = realtime;
        self
    }

    /// Frames not yet delivered
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }

    fn pace(&mut self, timestamp: f64) {
        let (started, first) = *self.origin.get_or_insert((Instant::now(), timestamp));
        let offset = timestamp - first;
        if offset <= 0.0 || !offset.is_finite() {
            return;
        }
        let due = Duration::from_secs_f64(offset);
        let elapsed = started.elapsed();
        if due > elapsed {
            std::thread::sleep(due - elapsed);
        }
    }
}

impl LandmarkSource for ReplaySource {
    fn next_frame(&mut self) -> Result<Option<LandmarkFrame>> {
        let Some(frame) = self.frames.pop_front() else {
            return Ok(None);
        };
        if self.realtime {
            self.pace(frame.timestamp);
        }
        Ok(Some(frame))
    }

    fn release(&mut self) {
        self.frames.clear();
    }
}
