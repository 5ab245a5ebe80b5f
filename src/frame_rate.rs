//! Loop frequency measurement over a sliding window of frame durations.

use std::collections::VecDeque;

/// Moving-average frame rate meter
#[derive(Debug, Clone)]
pub struct FrameRateMeter {
    window_size: usize,
    durations: VecDeque<f64>,
    last_timestamp: Option<f64>,
}

impl FrameRateMeter {
    /// Create a meter averaging the last `window_size` frame durations
    #[must_use]
    pub fn new(window_size: usize) -> Self {
        let window_size = window_size.max(1);
        Self {
            window_size,
            durations: VecDeque::with_capacity(window_size),
            last_timestamp: None,
        }
    }

    /// Record a frame at `timestamp` and return the current rate in Hz
    pub fn record(&mut self, timestamp: f64) -> f64 {
        if let Some(last) = self.last_timestamp {
            let duration = timestamp - last;
            if duration > 0.0 {
                if self.durations.len() >= self.window_size {
                    self.durations.pop_front();
                }
                self.durations.push_back(duration);
            }
        }
        if self.last_timestamp.map_or(true, |last| timestamp > last) {
            self.last_timestamp = Some(timestamp);
        }
        self.fps()
    }

    /// Reciprocal of the mean duration, 0 until a duration is known
    #[must_use]
    pub fn fps(&self) -> f64 {
        if self.durations.is_empty() {
            return 0.0;
        }
        let mean = self.durations.iter().sum::<f64>() / self.durations.len() as f64;
        if mean > 0.0 {
            1.0 / mean
        } else {
            0.0
        }
    }

    pub fn reset(&mut self) {
        self.durations.clear();
        self.last_timestamp = None;
    }
}
