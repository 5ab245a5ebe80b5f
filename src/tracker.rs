//! Background producer loop.
//!
//! A [`Tracker`] owns a [`HandTrackingSession`] on a dedicated thread that
//! pulls frames from a [`LandmarkSource`], runs the pipeline and publishes
//! each snapshot. Consumers poll [`Tracker::snapshot`] at their own rate.

use crate::config::Config;
use crate::landmarks::LandmarkFrame;
use crate::session::HandTrackingSession;
use crate::snapshot::{SessionSnapshot, SnapshotReader};
use crate::{Error, Result};
use log::{error, info};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Provider of landmark frames (camera + detector, or a recording)
pub trait LandmarkSource: Send {
    /// Block until the next frame is available.
    ///
    /// Returns `Ok(None)` when the stream has ended.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying camera or detector fails
    fn next_frame(&mut self) -> Result<Option<LandmarkFrame>>;

    /// Release the underlying device
    fn release(&mut self) {}
}

/// Running producer thread
pub struct Tracker {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<Result<u64>>>,
    reader: SnapshotReader,
}

impl Tracker {
    /// Start tracking on a background thread
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the thread
    /// cannot be spawned
    pub fn start<S>(source: S, config: &Config) -> Result<Self>
    where
        S: LandmarkSource + 'static,
    {
        let session = HandTrackingSession::new(config)?;
        let reader = session.reader();
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);

        let handle = thread::Builder::new()
            .name("hand-tracker".to_string())
            .spawn(move || run_loop(source, session, &stop_flag))
            .map_err(|e| Error::TrackerError(format!("Failed to spawn tracker thread: {e}")))?;

        info!("Hand tracker started");
        Ok(Self {
            stop,
            handle: Some(handle),
            reader,
        })
    }

    /// Latest published snapshot
    #[must_use]
    pub fn snapshot(&self) -> Arc<SessionSnapshot> {
        self.reader.load()
    }

    /// Cloneable read handle for other consumer threads
    #[must_use]
    pub fn reader(&self) -> SnapshotReader {
        self.reader.clone()
    }

    /// Whether the producer thread is still running
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Signal the producer to stop, wait for it and return the number of
    /// frames it processed
    ///
    /// # Errors
    ///
    /// Returns the source error that ended the loop, or a tracker error if
    /// the thread panicked
    pub fn stop(mut self) -> Result<u64> {
        self.stop.store(true, Ordering::Relaxed);
        self.join()
    }

    /// Wait for the producer to finish on its own (end of stream)
    ///
    /// # Errors
    ///
    /// Same as [`Tracker::stop`]
    pub fn wait(mut self) -> Result<u64> {
        self.join()
    }

    fn join(&mut self) -> Result<u64> {
        let Some(handle) = self.handle.take() else {
            return Ok(0);
        };
        let outcome = handle
            .join()
            .map_err(|_| Error::TrackerError("Tracker thread panicked".to_string()))?;
        info!("Hand tracker stopped");
        outcome
    }
}

impl Drop for Tracker {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn run_loop<S: LandmarkSource>(mut source: S, mut session: HandTrackingSession, stop: &AtomicBool) -> Result<u64> {
    let outcome = loop {
        if stop.load(Ordering::Relaxed) {
            break Ok(());
        }
        match source.next_frame() {
            Ok(Some(frame)) => {
                session.process(&frame);
            }
            Ok(None) => {
                info!("Landmark source exhausted");
                break Ok(());
            }
            Err(e) => {
                error!("Landmark source failed: {e}");
                break Err(e);
            }
        }
    };
    source.release();
    outcome.map(|()| session.frames_processed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    struct ScriptedSource {
        frames: VecDeque<Result<Option<LandmarkFrame>>>,
    }

    impl LandmarkSource for ScriptedSource {
        fn next_frame(&mut self) -> Result<Option<LandmarkFrame>> {
            self.frames.pop_front().unwrap_or(Ok(None))
        }
    }

    #[test]
    fn test_finite_source_runs_to_completion() {
        let frames = (0..5)
            .map(|i| Ok(Some(LandmarkFrame::new(f64::from(i) / 30.0, Vec::new()))))
            .collect();
        let tracker = Tracker::start(ScriptedSource { frames }, &Config::default()).unwrap();
        let reader = tracker.reader();
        assert_eq!(tracker.wait().unwrap(), 5);
        assert_eq!(reader.load().frame, 5);
    }

    #[test]
    fn test_source_error_surfaces() {
        let frames = VecDeque::from(vec![
            Ok(Some(LandmarkFrame::new(0.0, Vec::new()))),
            Err(Error::SourceError("camera unplugged".to_string())),
        ]);
        let tracker = Tracker::start(ScriptedSource { frames }, &Config::default()).unwrap();
        let result = tracker.wait();
        assert!(matches!(result, Err(Error::SourceError(_))));
    }
}
