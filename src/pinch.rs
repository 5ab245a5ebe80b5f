//! Pinch click detection.
//!
//! One state machine runs per hand slot and finger pair. It turns a
//! filtered, scale-normalized thumb-to-finger distance into a single
//! edge-triggered click using hysteresis (separate enter and exit
//! thresholds), a consecutive-frame debounce and a per-pair cooldown.

use crate::config::PinchConfig;
use log::debug;

/// Finger paired with the thumb
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FingerPair {
    /// Thumb to index: left click
    Index,
    /// Thumb to middle: right click
    Middle,
}

impl FingerPair {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Middle => "middle",
        }
    }
}

/// Pinch state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PinchState {
    #[default]
    Open,
    Pinched,
}

/// Hysteresis + debounce state machine for one finger pair
#[derive(Debug, Clone)]
pub struct PinchStateMachine {
    config: PinchConfig,
    state: PinchState,
    qualifying_frames: u32,
    exit_frames: u32,
    last_click: Option<f64>,
}

impl PinchStateMachine {
    #[must_use]
    pub const fn new(config: PinchConfig) -> Self {
        Self {
            config,
            state: PinchState::Open,
            qualifying_frames: 0,
            exit_frames: 0,
            last_click: None,
        }
    }

    /// Feed one frame.
    ///
    /// Returns `true` only on the frame the machine moves from `Open` to
    /// `Pinched`.
    pub fn update(&mut self, distance: f64, eligible: bool, now: f64) -> bool {
        match self.state {
            PinchState::Open => {
                if distance < self.config.enter_threshold && eligible && self.cooldown_elapsed(now) {
                    self.qualifying_frames += 1;
                } else {
                    self.qualifying_frames = 0;
                }

                if self.qualifying_frames >= self.config.debounce_frames {
                    self.state = PinchState::Pinched;
                    self.qualifying_frames = 0;
                    self.exit_frames = 0;
                    self.last_click = Some(now);
                    return true;
                }
                false
            }
            PinchState::Pinched => {
                if distance > self.config.exit_threshold {
                    self.exit_frames += 1;
                } else {
                    self.exit_frames = 0;
                }

                if self.exit_frames >= self.config.exit_frames {
                    self.state = PinchState::Open;
                    self.exit_frames = 0;
                }
                false
            }
        }
    }

    fn cooldown_elapsed(&self, now: f64) -> bool {
        self.last_click
            .map_or(true, |last| now - last >= self.config.cooldown)
    }

    #[must_use]
    pub const fn state(&self) -> PinchState {
        self.state
    }

    #[must_use]
    pub const fn qualifying_frames(&self) -> u32 {
        self.qualifying_frames
    }

    #[must_use]
    pub const fn exit_frames(&self) -> u32 {
        self.exit_frames
    }

    #[must_use]
    pub const fn last_click(&self) -> Option<f64> {
        self.last_click
    }

    /// Return to `Open` and forget the cooldown
    pub fn reset(&mut self) {
        *self = Self::new(self.config);
    }
}

impl Default for PinchStateMachine {
    fn default() -> Self {
        Self::new(PinchConfig::default())
    }
}

/// Index and middle pinch machines for one hand slot
#[derive(Debug, Clone, Default)]
pub struct PinchPair {
    pub index: PinchStateMachine,
    pub middle: PinchStateMachine,
}

/// Click edges produced for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PinchClicks {
    pub left: bool,
    pub right: bool,
}

impl PinchPair {
    #[must_use]
    pub const fn new(config: PinchConfig) -> Self {
        Self {
            index: PinchStateMachine::new(config),
            middle: PinchStateMachine::new(config),
        }
    }

    /// Advance both machines with this frame's filtered distances
    pub fn update(&mut self, index_distance: f64, middle_distance: f64, eligible: bool, now: f64) -> PinchClicks {
        let (was_index, was_middle) = (self.index.state(), self.middle.state());
        let clicks = PinchClicks {
            left: self.index.update(index_distance, eligible, now),
            right: self.middle.update(middle_distance, eligible, now),
        };
        for (pair, fired, was) in [
            (FingerPair::Index, clicks.left, was_index),
            (FingerPair::Middle, clicks.right, was_middle),
        ] {
            if fired {
                debug!("Pinch fired: {} at {now:.3}", pair.as_str());
            } else if was == PinchState::Pinched && self.machine(pair).state() == PinchState::Open {
                debug!("Pinch released: {} at {now:.3}", pair.as_str());
            }
        }
        clicks
    }

    #[must_use]
    pub const fn machine(&self, pair: FingerPair) -> &PinchStateMachine {
        match pair {
            FingerPair::Index => &self.index,
            FingerPair::Middle => &self.middle,
        }
    }
}
