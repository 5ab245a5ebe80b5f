//! Immutable per-frame results and their publication cell.
//!
//! The producer builds a fresh [`SessionSnapshot`] every frame and swaps
//! it into a [`SnapshotCell`] as one `Arc`. Readers clone that `Arc`, so a
//! read always yields one whole snapshot from one completed frame.

use crate::landmarks::Landmark;
use std::sync::{Arc, PoisonError, RwLock};

/// Result for one hand in one frame
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HandResult {
    pub detected: bool,

    /// Filtered cursor position, clamped to [0, 1]
    pub x: f64,
    pub y: f64,

    /// Cursor speed in normalized units per second
    pub velocity: f64,

    /// True only on the frame the index pinch fires
    pub click_left: bool,

    /// True only on the frame the middle pinch fires
    pub click_right: bool,

    pub is_fist: bool,
    pub is_peace: bool,
    pub is_open_palm: bool,

    /// Pass-through landmarks for rendering (empty when not detected)
    pub landmarks: Vec<Landmark>,
}

impl HandResult {
    /// Placeholder for an empty hand slot
    #[must_use]
    pub fn not_detected() -> Self {
        Self::default()
    }
}

/// Everything published for one frame
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionSnapshot {
    pub primary: HandResult,
    pub secondary: HandResult,
    pub num_hands: usize,

    /// Loop frequency in Hz
    pub fps: f64,

    /// Timestamp of the frame this snapshot was built from
    pub timestamp: f64,

    /// Sequence number of the producing frame, 0 before the first frame
    pub frame: u64,
}

/// Single-slot cell holding the latest snapshot
#[derive(Debug, Default)]
pub struct SnapshotCell {
    latest: RwLock<Arc<SessionSnapshot>>,
}

impl SnapshotCell {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the published snapshot
    pub fn publish(&self, snapshot: Arc<SessionSnapshot>) {
        let mut slot = self.latest.write().unwrap_or_else(PoisonError::into_inner);
        *slot = snapshot;
    }

    /// Latest published snapshot
    #[must_use]
    pub fn load(&self) -> Arc<SessionSnapshot> {
        let slot = self.latest.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*slot)
    }
}

/// Cloneable read-only handle to a [`SnapshotCell`]
#[derive(Debug, Clone)]
pub struct SnapshotReader {
    cell: Arc<SnapshotCell>,
}

impl SnapshotReader {
    #[must_use]
    pub const fn new(cell: Arc<SnapshotCell>) -> Self {
        Self { cell }
    }

    #[must_use]
    pub fn load(&self) -> Arc<SessionSnapshot> {
        self.cell.load()
    }
}
