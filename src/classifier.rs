//! Per-frame hand geometry: finger extension, hand scale, normalized pinch
//! distances and sustained poses.

use crate::config::PoseConfig;
use crate::landmarks::{HandObservation, FINGER_TIP_PIP, INDEX_MCP, INDEX_TIP, MIDDLE_TIP, THUMB_TIP, WRIST};

/// Extension flags for the four non-thumb fingers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FingerExtension {
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

impl FingerExtension {
    /// Index and middle up, ring and pinky down
    #[must_use]
    pub const fn is_peace(&self) -> bool {
        self.index && self.middle && !self.ring && !self.pinky
    }

    /// All four fingers up
    #[must_use]
    pub const fn is_open_palm(&self) -> bool {
        self.index && self.middle && self.ring && self.pinky
    }

    /// No finger up
    #[must_use]
    pub const fn all_curled(&self) -> bool {
        !(self.index || self.middle || self.ring || self.pinky)
    }

    /// Pinches are only honored while ring or pinky is extended, which
    /// separates a pinch from a curling fist
    #[must_use]
    pub const fn pinch_eligible(&self) -> bool {
        self.ring || self.pinky
    }
}

/// Geometric features of one hand in one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandGeometry {
    pub extension: FingerExtension,

    /// Weighted wrist to index-MCP distance, after the degenerate-scale fallback
    pub hand_scale: f64,

    /// Thumb tip to index tip, divided by hand scale
    pub index_pinch: f64,

    /// Thumb tip to middle tip, divided by hand scale
    pub middle_pinch: f64,
}

impl HandGeometry {
    #[must_use]
    pub const fn pinch_eligible(&self) -> bool {
        self.extension.pinch_eligible()
    }
}

/// Stateless geometry classifier
#[derive(Debug, Clone, Copy)]
pub struct GestureClassifier {
    config: PoseConfig,
}

impl GestureClassifier {
    #[must_use]
    pub const fn new(config: PoseConfig) -> Self {
        Self { config }
    }

    /// Classify one observation
    #[must_use]
    pub fn classify(&self, hand: &HandObservation) -> HandGeometry {
        let extension = self.finger_extension(hand);
        let hand_scale = self.hand_scale(hand);

        let thumb = hand.point(THUMB_TIP);
        let weight = self.config.depth_weight;
        let index_pinch = hand.point(INDEX_TIP).weighted_distance(thumb, weight) / hand_scale;
        let middle_pinch = hand.point(MIDDLE_TIP).weighted_distance(thumb, weight) / hand_scale;

        HandGeometry {
            extension,
            hand_scale,
            index_pinch,
            middle_pinch,
        }
    }

    /// A finger is extended when its tip is farther from the wrist than its
    /// PIP joint by the configured margin (planar distance)
    #[must_use]
    pub fn finger_extension(&self, hand: &HandObservation) -> FingerExtension {
        let wrist = hand.point(WRIST);
        let [index, middle, ring, pinky] = FINGER_TIP_PIP.map(|(tip, pip)| {
            let tip_dist = hand.point(tip).planar_distance(wrist);
            let pip_dist = hand.point(pip).planar_distance(wrist);
            tip_dist > pip_dist * self.config.extension_margin
        });
        FingerExtension {
            index,
            middle,
            ring,
            pinky,
        }
    }

    /// Weighted wrist to index-MCP distance, replaced by the fallback scale
    /// when the hand is edge-on or the landmarks collapse
    #[must_use]
    pub fn hand_scale(&self, hand: &HandObservation) -> f64 {
        let scale = hand
            .point(WRIST)
            .weighted_distance(hand.point(INDEX_MCP), self.config.depth_weight);
        if scale < self.config.min_hand_scale || !scale.is_finite() {
            self.config.fallback_hand_scale
        } else {
            scale
        }
    }
}

impl Default for GestureClassifier {
    fn default() -> Self {
        Self::new(PoseConfig::default())
    }
}

/// Sustain counter for the fist pose
///
/// Counts consecutive all-curled frames, saturating at the cap, and
/// resets to zero on any other frame.
#[derive(Debug, Clone, Copy)]
pub struct FistDetector {
    count: u32,
    sustain_frames: u32,
    cap: u32,
}

impl FistDetector {
    #[must_use]
    pub const fn new(sustain_frames: u32, cap: u32) -> Self {
        Self {
            count: 0,
            sustain_frames,
            cap,
        }
    }

    /// Feed one frame; returns whether the fist is sustained
    pub fn update(&mut self, all_curled: bool) -> bool {
        self.count = if all_curled {
            (self.count + 1).min(self.cap)
        } else {
            0
        };
        self.is_fist()
    }

    #[must_use]
    pub const fn is_fist(&self) -> bool {
        self.count >= self.sustain_frames
    }

    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }
}

impl Default for FistDetector {
    fn default() -> Self {
        let config = PoseConfig::default();
        Self::new(config.fist_sustain_frames, config.fist_counter_cap)
    }
}
