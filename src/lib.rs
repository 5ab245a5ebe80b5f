//! Hand gesture recognition and signal conditioning for webcam pointer control.
//!
//! This library turns noisy per-frame hand landmarks (21 normalized points
//! per hand, as produced by a landmark detector) into a clean stream of
//! cursor positions and gesture events:
//! - Speed-adaptive low-pass filtering of cursor and pinch signals
//! - Finger extension and sustained pose classification (fist, peace, open palm)
//! - Debounced, edge-triggered pinch clicks with hysteresis and cooldown
//! - A background producer loop publishing immutable snapshots
//!
//! The camera, the landmark detector, rendering and OS input injection are
//! outside this crate; landmarks arrive through [`tracker::LandmarkSource`]
//! and pointer actions leave through [`actions::PointerSink`].
//!
//! # Examples
//!
//! ## Processing frames directly
//!
//! ```no_run
//! use hand_gesture_control::{config::Config, landmarks::{HandObservation, Landmark}, session::HandTrackingSession};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = HandTrackingSession::new(&Config::default())?;
//! let hand = HandObservation::new(vec![Landmark::new(0.5, 0.5, 0.0); 21])?;
//!
//! let snapshot = session.process_frame(&[hand], 0.0);
//! if snapshot.primary.click_left {
//!     println!("click at ({:.2}, {:.2})", snapshot.primary.x, snapshot.primary.y);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Background tracking
//!
//! ```no_run
//! use hand_gesture_control::{config::Config, replay::{Recording, ReplaySource}, tracker::Tracker};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let recording = Recording::from_file("session.yaml")?;
//! let tracker = Tracker::start(ReplaySource::new(recording).realtime(true), &Config::default())?;
//!
//! while tracker.is_running() {
//!     let state = tracker.snapshot();
//!     println!("{} hands at {:.1} fps", state.num_hands, state.fps);
//!     std::thread::sleep(std::time::Duration::from_millis(16));
//! }
//! tracker.stop()?;
//! # Ok(())
//! # }
//! ```

/// Hand landmark input types
pub mod landmarks;

/// Scalar signal filters
pub mod filters;

/// Per-frame hand geometry and pose classification
pub mod classifier;

/// Pinch click state machines
pub mod pinch;

/// Published per-frame results
pub mod snapshot;

/// Loop frequency measurement
pub mod frame_rate;

/// Two-hand gesture pipeline
pub mod session;

/// Background producer loop
pub mod tracker;

/// Recorded landmark streams
pub mod replay;

/// Gesture-to-pointer action mapping
pub mod actions;

/// Replay application
pub mod app;

/// Error types and result handling
pub mod error;

/// Constants used throughout the library
pub mod constants;

/// Configuration management
pub mod config;

pub use error::{Error, Result};
