//! Per-frame gesture pipeline for up to two hands.
//!
//! The session owns every filter and state machine for both hand slots and
//! runs classifier → filters → pinch machines → result assembly for each
//! observation. Slots follow detector report order: the first observation
//! is always slot 0 (primary), the second slot 1 (secondary).
//!
//! A frame without a hand leaves that slot's filters, pinch machines and
//! fist counter untouched, so reacquiring the hand after a short dropout
//! does not restart smoothing. Call [`HandTrackingSession::reset`] to clear
//! them explicitly.

use crate::classifier::{FistDetector, GestureClassifier};
use crate::config::Config;
use crate::constants::MAX_HANDS;
use crate::filters::{create_filter, SignalFilter};
use crate::frame_rate::FrameRateMeter;
use crate::landmarks::{HandObservation, LandmarkFrame, INDEX_TIP};
use crate::pinch::PinchPair;
use crate::snapshot::{HandResult, SessionSnapshot, SnapshotCell, SnapshotReader};
use crate::Result;
use log::{debug, warn};
use std::sync::Arc;

/// Filters and state machines for one hand slot
struct HandSlot {
    cursor_x: Box<dyn SignalFilter>,
    cursor_y: Box<dyn SignalFilter>,
    index_distance: Box<dyn SignalFilter>,
    middle_distance: Box<dyn SignalFilter>,
    /// Last reported cursor (x, y, t)
    previous: Option<(f64, f64, f64)>,
    pinches: PinchPair,
    fist: FistDetector,
}

impl HandSlot {
    fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            cursor_x: create_filter(&config.filters.cursor)?,
            cursor_y: create_filter(&config.filters.cursor)?,
            index_distance: create_filter(&config.filters.pinch)?,
            middle_distance: create_filter(&config.filters.pinch)?,
            previous: None,
            pinches: PinchPair::new(config.pinch),
            fist: FistDetector::new(config.pose.fist_sustain_frames, config.pose.fist_counter_cap),
        })
    }

    fn process(&mut self, classifier: &GestureClassifier, hand: &HandObservation, now: f64) -> HandResult {
        let tip = hand.point(INDEX_TIP);
        let x = self.cursor_x.apply(tip.x, now).clamp(0.0, 1.0);
        let y = self.cursor_y.apply(tip.y, now).clamp(0.0, 1.0);

        let velocity = match self.previous {
            Some((px, py, pt)) if now > pt => (x - px).hypot(y - py) / (now - pt),
            _ => 0.0,
        };
        self.previous = Some((x, y, now));

        let geometry = classifier.classify(hand);
        let index_distance = self.index_distance.apply(geometry.index_pinch, now);
        let middle_distance = self.middle_distance.apply(geometry.middle_pinch, now);
        let clicks = self
            .pinches
            .update(index_distance, middle_distance, geometry.pinch_eligible(), now);

        let was_fist = self.fist.is_fist();
        let is_fist = self.fist.update(geometry.extension.all_curled());
        if is_fist && !was_fist {
            debug!("Fist sustained at {now:.3}");
        }

        HandResult {
            detected: true,
            x,
            y,
            velocity,
            click_left: clicks.left,
            click_right: clicks.right,
            is_fist,
            is_peace: geometry.extension.is_peace(),
            is_open_palm: geometry.extension.is_open_palm(),
            landmarks: hand.points().to_vec(),
        }
    }

    fn reset(&mut self) {
        self.cursor_x.reset();
        self.cursor_y.reset();
        self.index_distance.reset();
        self.middle_distance.reset();
        self.previous = None;
        self.pinches.index.reset();
        self.pinches.middle.reset();
        self.fist.reset();
    }
}

/// Two-hand gesture pipeline with snapshot publication
pub struct HandTrackingSession {
    classifier: GestureClassifier,
    slots: [HandSlot; MAX_HANDS],
    frame_rate: FrameRateMeter,
    cell: Arc<SnapshotCell>,
    frame: u64,
}

impl HandTrackingSession {
    /// Create a session from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            classifier: GestureClassifier::new(config.pose),
            slots: [HandSlot::new(config)?, HandSlot::new(config)?],
            frame_rate: FrameRateMeter::new(config.tracker.fps_window),
            cell: Arc::new(SnapshotCell::new()),
            frame: 0,
        })
    }

    /// Handle for reading published snapshots from other threads
    #[must_use]
    pub fn reader(&self) -> SnapshotReader {
        SnapshotReader::new(Arc::clone(&self.cell))
    }

    /// Latest published snapshot
    #[must_use]
    pub fn latest(&self) -> Arc<SessionSnapshot> {
        self.cell.load()
    }

    /// Run the pipeline on one detector output and publish the result
    pub fn process(&mut self, frame: &LandmarkFrame) -> Arc<SessionSnapshot> {
        self.process_frame(&frame.hands, frame.timestamp)
    }

    /// Run the pipeline on up to two observations taken at `timestamp`
    /// and publish the resulting snapshot.
    ///
    /// Observations beyond the second are ignored.
    pub fn process_frame(&mut self, hands: &[HandObservation], timestamp: f64) -> Arc<SessionSnapshot> {
        if hands.len() > MAX_HANDS {
            warn!("Detector reported {} hands, tracking the first {MAX_HANDS}", hands.len());
        }

        let mut results = [HandResult::not_detected(), HandResult::not_detected()];
        let tracked = hands.len().min(MAX_HANDS);
        for (slot, hand) in hands.iter().take(MAX_HANDS).enumerate() {
            results[slot] = self.slots[slot].process(&self.classifier, hand, timestamp);
        }

        self.frame += 1;
        let fps = self.frame_rate.record(timestamp);
        let [primary, secondary] = results;
        let snapshot = Arc::new(SessionSnapshot {
            primary,
            secondary,
            num_hands: tracked,
            fps,
            timestamp,
            frame: self.frame,
        });
        self.cell.publish(Arc::clone(&snapshot));
        snapshot
    }

    /// Clear all filters, pinch machines, fist counters and the frame-rate
    /// window
    pub fn reset(&mut self) {
        for slot in &mut self.slots {
            slot.reset();
        }
        self.frame_rate.reset();
    }

    /// Pinch machines for a hand slot
    #[must_use]
    pub fn pinches(&self, slot: usize) -> Option<&PinchPair> {
        self.slots.get(slot).map(|s| &s.pinches)
    }

    /// Current fist counter for a hand slot
    #[must_use]
    pub fn fist_count(&self, slot: usize) -> Option<u32> {
        self.slots.get(slot).map(|s| s.fist.count())
    }

    /// Number of frames processed so far
    #[must_use]
    pub const fn frames_processed(&self) -> u64 {
        self.frame
    }
}
