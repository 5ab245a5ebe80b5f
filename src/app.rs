//! Replay application: drives the tracker from a recording and maps the
//! published gestures to pointer actions.

use crate::{
    actions::{ActionFrame, ActionMapper, LogSink, PointerAction, PointerSink},
    config::Config,
    error::Result,
    replay::{Recording, ReplaySource},
    session::HandTrackingSession,
    snapshot::SessionSnapshot,
    tracker::Tracker,
};
use log::info;
use std::path::PathBuf;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Recorded landmark stream
    pub recording: PathBuf,
    /// Replay mode
    pub mode: ReplayMode,
    /// Consumer polling rate in Hz (threaded mode)
    pub poll_hz: u32,
}

/// How the recording is driven through the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayMode {
    /// Background tracker paced to recorded timestamps, polled by the
    /// foreground loop
    Realtime,
    /// Every frame processed synchronously, as fast as possible
    Fast,
}

/// Counters reported at the end of a run
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunSummary {
    /// Frames processed by the pipeline
    pub frames: u64,
    /// Snapshots handed to the action mapper
    pub snapshots_seen: u64,
    pub left_clicks: u64,
    pub right_clicks: u64,
    /// Loop frequency of the last snapshot
    pub fps: f64,
}

impl RunSummary {
    fn record(&mut self, frame: &ActionFrame) {
        self.snapshots_seen += 1;
        for action in &frame.actions {
            match action {
                PointerAction::LeftClick => self.left_clicks += 1,
                PointerAction::RightClick => self.right_clicks += 1,
                _ => {}
            }
        }
    }
}

/// Replay application
pub struct GestureApp<S: PointerSink = LogSink> {
    config: AppConfig,
    pipeline: Config,
    mapper: ActionMapper,
    sink: S,
}

impl GestureApp<LogSink> {
    /// Create an application that logs pointer actions
    ///
    /// # Errors
    ///
    /// Returns an error if the pipeline configuration is invalid
    pub fn new(config: AppConfig, pipeline: Config) -> Result<Self> {
        Self::with_sink(config, pipeline, LogSink::default())
    }
}

impl<S: PointerSink> GestureApp<S> {
    /// Create an application delivering actions to `sink`
    ///
    /// # Errors
    ///
    /// Returns an error if the pipeline configuration is invalid
    pub fn with_sink(config: AppConfig, pipeline: Config, sink: S) -> Result<Self> {
        pipeline.validate()?;
        info!("Initializing gesture replay for {}", config.recording.display());
        let mapper = ActionMapper::new(pipeline.actions);
        Ok(Self {
            config,
            pipeline,
            mapper,
            sink,
        })
    }

    /// Run the recording to completion
    ///
    /// # Errors
    ///
    /// Returns an error if the recording cannot be loaded, the tracker
    /// fails, or the sink rejects an action
    pub fn run(&mut self) -> Result<RunSummary> {
        let recording = Recording::from_file(&self.config.recording)?;
        info!(
            "Replaying {} frames ({:.2}s) in {:?} mode",
            recording.frames.len(),
            recording.duration(),
            self.config.mode
        );

        let summary = match self.config.mode {
            ReplayMode::Fast => self.run_fast(&recording)?,
            ReplayMode::Realtime => self.run_realtime(recording)?,
        };

        for action in self.mapper.release() {
            self.sink.dispatch(&action)?;
        }

        info!(
            "Replay finished: {} frames, {} snapshots, {} left / {} right clicks, {:.1} fps",
            summary.frames, summary.snapshots_seen, summary.left_clicks, summary.right_clicks, summary.fps
        );
        Ok(summary)
    }

    fn run_fast(&mut self, recording: &Recording) -> Result<RunSummary> {
        let mut session = HandTrackingSession::new(&self.pipeline)?;
        let mut summary = RunSummary::default();
        for frame in &recording.frames {
            let snapshot = session.process(frame);
            self.consume(&snapshot, &mut summary)?;
        }
        summary.frames = session.frames_processed();
        Ok(summary)
    }

    fn run_realtime(&mut self, recording: Recording) -> Result<RunSummary> {
        let source = ReplaySource::new(recording).realtime(true);
        let tracker = Tracker::start(source, &self.pipeline)?;
        let period = Duration::from_secs_f64(1.0 / f64::from(self.config.poll_hz.max(1)));

        let mut summary = RunSummary::default();
        let mut last_frame = 0;
        loop {
            let running = tracker.is_running();
            let snapshot = tracker.snapshot();
            // Edge-triggered clicks must be seen once, so repeated reads of
            // the same frame are skipped
            if snapshot.frame != last_frame {
                last_frame = snapshot.frame;
                self.consume(&snapshot, &mut summary)?;
            }
            if !running {
                break;
            }
            std::thread::sleep(period);
        }

        summary.frames = tracker.wait()?;
        Ok(summary)
    }

    fn consume(&mut self, snapshot: &SessionSnapshot, summary: &mut RunSummary) -> Result<()> {
        let frame = self.mapper.update(snapshot, snapshot.timestamp);
        for action in &frame.actions {
            self.sink.dispatch(action)?;
        }
        summary.record(&frame);
        summary.fps = snapshot.fps;
        Ok(())
    }

    /// Pointer sink receiving the actions
    pub fn sink(&self) -> &S {
        &self.sink
    }
}
