//! Hand landmark input types.
//!
//! A hand observation is the 21-point skeleton reported by the landmark
//! detector for one hand in one frame. Coordinates are normalized: `x` and
//! `y` roughly in [0, 1], `z` a detector-defined relative depth.

use crate::constants::NUM_HAND_LANDMARKS;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Wrist landmark index
pub const WRIST: usize = 0;

/// Fingertip indices
pub const THUMB_TIP: usize = 4;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_TIP: usize = 12;
pub const RING_TIP: usize = 16;
pub const PINKY_TIP: usize = 20;

/// PIP joint indices
pub const INDEX_PIP: usize = 6;
pub const MIDDLE_PIP: usize = 10;
pub const RING_PIP: usize = 14;
pub const PINKY_PIP: usize = 18;

/// MCP joint indices
pub const INDEX_MCP: usize = 5;
pub const MIDDLE_MCP: usize = 9;
pub const RING_MCP: usize = 13;
pub const PINKY_MCP: usize = 17;

/// (tip, pip) pairs for index, middle, ring and pinky
pub const FINGER_TIP_PIP: [(usize, usize); 4] = [
    (INDEX_TIP, INDEX_PIP),
    (MIDDLE_TIP, MIDDLE_PIP),
    (RING_TIP, RING_PIP),
    (PINKY_TIP, PINKY_PIP),
];

/// A single tracked point
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

impl Landmark {
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Planar distance, ignoring depth
    #[must_use]
    pub fn planar_distance(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// 3D distance with the depth axis scaled by `depth_weight`
    #[must_use]
    pub fn weighted_distance(&self, other: &Self, depth_weight: f64) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = (self.z - other.z) * depth_weight;
        dz.mul_add(dz, dx.mul_add(dx, dy * dy)).sqrt()
    }
}

/// Full 21-landmark snapshot of one hand, in anatomical index order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Landmark>", into = "Vec<Landmark>")]
pub struct HandObservation {
    points: [Landmark; NUM_HAND_LANDMARKS],
}

impl HandObservation {
    /// Build an observation from detector output
    ///
    /// # Errors
    ///
    /// Returns an error unless exactly 21 landmarks are supplied
    pub fn new(points: Vec<Landmark>) -> Result<Self> {
        let count = points.len();
        let points: [Landmark; NUM_HAND_LANDMARKS] = points.try_into().map_err(|_| {
            Error::InvalidInput(format!(
                "Hand observation needs {NUM_HAND_LANDMARKS} landmarks, got {count}"
            ))
        })?;
        Ok(Self { points })
    }

    #[must_use]
    pub const fn from_array(points: [Landmark; NUM_HAND_LANDMARKS]) -> Self {
        Self { points }
    }

    /// Landmark at an anatomical index
    ///
    /// # Panics
    ///
    /// Panics if `index >= 21`
    #[must_use]
    pub fn point(&self, index: usize) -> &Landmark {
        &self.points[index]
    }

    #[must_use]
    pub fn points(&self) -> &[Landmark] {
        &self.points
    }
}

impl TryFrom<Vec<Landmark>> for HandObservation {
    type Error = Error;

    fn try_from(points: Vec<Landmark>) -> Result<Self> {
        Self::new(points)
    }
}

impl From<HandObservation> for Vec<Landmark> {
    fn from(observation: HandObservation) -> Self {
        observation.points.to_vec()
    }
}

/// One detector output: up to two hands, in detector-reported order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandmarkFrame {
    /// Monotonic capture time in seconds
    pub timestamp: f64,
    #[serde(default)]
    pub hands: Vec<HandObservation>,
}

impl LandmarkFrame {
    #[must_use]
    pub const fn new(timestamp: f64, hands: Vec<HandObservation>) -> Self {
        Self { timestamp, hands }
    }
}
