//! Configuration management for the gesture pipeline

use crate::constants::{
    DEFAULT_CLICK_COOLDOWN, DEFAULT_CURSOR_BETA, DEFAULT_CURSOR_MIN_CUTOFF, DEFAULT_DEPTH_WEIGHT,
    DEFAULT_DERIVATIVE_CUTOFF, DEFAULT_EXTENSION_MARGIN, DEFAULT_FALLBACK_HAND_SCALE,
    DEFAULT_FIST_COUNTER_CAP, DEFAULT_FIST_SUSTAIN_FRAMES, DEFAULT_FPS_WINDOW,
    DEFAULT_HUD_TOGGLE_COOLDOWN, DEFAULT_MIN_HAND_SCALE, DEFAULT_PINCH_BETA, DEFAULT_PINCH_COOLDOWN,
    DEFAULT_PINCH_DEBOUNCE_FRAMES, DEFAULT_PINCH_ENTER, DEFAULT_PINCH_EXIT, DEFAULT_PINCH_EXIT_FRAMES,
    DEFAULT_PINCH_MIN_CUTOFF, DEFAULT_SCREEN_HEIGHT, DEFAULT_SCREEN_WIDTH, DEFAULT_SCROLL_DEADZONE,
    DEFAULT_SCROLL_SENSITIVITY,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Pipeline configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Signal filter tuning
    pub filters: FilterConfig,

    /// Pinch hysteresis and debounce
    pub pinch: PinchConfig,

    /// Hand geometry and pose classification
    pub pose: PoseConfig,

    /// Producer loop settings
    pub tracker: TrackerConfig,

    /// Gesture-to-pointer mapping
    pub actions: ActionConfig,
}

/// Filter implementation selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    /// Speed-adaptive low-pass
    Adaptive,
    /// No smoothing
    None,
}

/// Parameters for one group of scalar signal filters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Filter implementation
    pub kind: FilterKind,

    /// Cutoff frequency at rest (Hz)
    pub min_cutoff: f64,

    /// Cutoff increase per unit of speed
    pub beta: f64,

    /// Cutoff for the derivative estimate (Hz)
    pub d_cutoff: f64,
}

impl FilterSpec {
    /// Responsive tuning used for cursor coordinates
    #[must_use]
    pub const fn cursor() -> Self {
        Self {
            kind: FilterKind::Adaptive,
            min_cutoff: DEFAULT_CURSOR_MIN_CUTOFF,
            beta: DEFAULT_CURSOR_BETA,
            d_cutoff: DEFAULT_DERIVATIVE_CUTOFF,
        }
    }

    /// Aggressive tuning used for pinch distances
    #[must_use]
    pub const fn pinch() -> Self {
        Self {
            kind: FilterKind::Adaptive,
            min_cutoff: DEFAULT_PINCH_MIN_CUTOFF,
            beta: DEFAULT_PINCH_BETA,
            d_cutoff: DEFAULT_DERIVATIVE_CUTOFF,
        }
    }

    /// Smoothing disabled
    #[must_use]
    pub const fn none() -> Self {
        Self {
            kind: FilterKind::None,
            min_cutoff: 1.0,
            beta: 0.0,
            d_cutoff: 1.0,
        }
    }
}

/// Filter configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Cursor x and y
    pub cursor: FilterSpec,

    /// Thumb-to-index and thumb-to-middle distances
    pub pinch: FilterSpec,
}

/// Pinch state machine thresholds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PinchConfig {
    /// Normalized distance below which a frame qualifies
    pub enter_threshold: f64,

    /// Normalized distance above which a frame counts toward release
    pub exit_threshold: f64,

    /// Consecutive qualifying frames before a click fires
    pub debounce_frames: u32,

    /// Consecutive frames past exit before release
    pub exit_frames: u32,

    /// Seconds between clicks on the same finger pair
    pub cooldown: f64,
}

/// Hand geometry parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoseConfig {
    /// Tip must be this much farther from the wrist than its PIP joint
    pub extension_margin: f64,

    /// Weight of the depth axis in 3D distances
    pub depth_weight: f64,

    /// Hand scale below this is treated as degenerate
    pub min_hand_scale: f64,

    /// Substitute scale for a degenerate hand
    pub fallback_hand_scale: f64,

    /// Consecutive all-curled frames before a fist is reported
    pub fist_sustain_frames: u32,

    /// Upper bound of the fist counter
    pub fist_counter_cap: u32,
}

/// Producer loop configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Frame durations averaged for the loop frequency
    pub fps_window: usize,
}

/// Pointer action configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionConfig {
    /// Screen width in pixels
    pub screen_width: u32,

    /// Screen height in pixels
    pub screen_height: u32,

    /// Seconds between two delivered clicks of the same button
    pub click_cooldown: f64,

    /// Scroll gain applied to vertical hand motion
    pub scroll_sensitivity: f64,

    /// Scroll deltas at or below this magnitude are dropped
    pub scroll_deadzone: f64,

    /// Seconds between two HUD toggles
    pub hud_toggle_cooldown: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            cursor: FilterSpec::cursor(),
            pinch: FilterSpec::pinch(),
        }
    }
}

impl Default for PinchConfig {
    fn default() -> Self {
        Self {
            enter_threshold: DEFAULT_PINCH_ENTER,
            exit_threshold: DEFAULT_PINCH_EXIT,
            debounce_frames: DEFAULT_PINCH_DEBOUNCE_FRAMES,
            exit_frames: DEFAULT_PINCH_EXIT_FRAMES,
            cooldown: DEFAULT_PINCH_COOLDOWN,
        }
    }
}

impl Default for PoseConfig {
    fn default() -> Self {
        Self {
            extension_margin: DEFAULT_EXTENSION_MARGIN,
            depth_weight: DEFAULT_DEPTH_WEIGHT,
            min_hand_scale: DEFAULT_MIN_HAND_SCALE,
            fallback_hand_scale: DEFAULT_FALLBACK_HAND_SCALE,
            fist_sustain_frames: DEFAULT_FIST_SUSTAIN_FRAMES,
            fist_counter_cap: DEFAULT_FIST_COUNTER_CAP,
        }
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            fps_window: DEFAULT_FPS_WINDOW,
        }
    }
}

impl Default for ActionConfig {
    fn default() -> Self {
        Self {
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            click_cooldown: DEFAULT_CLICK_COOLDOWN,
            scroll_sensitivity: DEFAULT_SCROLL_SENSITIVITY,
            scroll_deadzone: DEFAULT_SCROLL_DEADZONE,
            hud_toggle_cooldown: DEFAULT_HUD_TOGGLE_COOLDOWN,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::IoError(e.to_string()))?;

        serde_yaml::from_str(&content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content).map_err(|e| Error::IoError(e.to_string()))?;

        Ok(())
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint as a configuration error
    pub fn validate(&self) -> Result<()> {
        for (name, spec) in [("cursor", &self.filters.cursor), ("pinch", &self.filters.pinch)] {
            if spec.kind == FilterKind::Adaptive {
                if !(spec.min_cutoff > 0.0 && spec.d_cutoff > 0.0) {
                    return Err(Error::ConfigError(format!(
                        "{name} filter cutoffs must be positive"
                    )));
                }
                if spec.beta < 0.0 {
                    return Err(Error::ConfigError(format!(
                        "{name} filter beta must be non-negative"
                    )));
                }
            }
        }

        let pinch = &self.pinch;
        if pinch.enter_threshold <= 0.0 {
            return Err(Error::ConfigError("Pinch enter threshold must be positive".to_string()));
        }
        if pinch.exit_threshold <= pinch.enter_threshold {
            return Err(Error::ConfigError(
                "Pinch exit threshold must be greater than the enter threshold".to_string(),
            ));
        }
        if pinch.debounce_frames == 0 || pinch.exit_frames == 0 {
            return Err(Error::ConfigError(
                "Pinch debounce and exit frame counts must be at least 1".to_string(),
            ));
        }
        if pinch.cooldown < 0.0 {
            return Err(Error::ConfigError("Pinch cooldown must be non-negative".to_string()));
        }

        let pose = &self.pose;
        if pose.extension_margin < 1.0 {
            return Err(Error::ConfigError("Extension margin must be at least 1.0".to_string()));
        }
        if pose.depth_weight < 0.0 {
            return Err(Error::ConfigError("Depth weight must be non-negative".to_string()));
        }
        if pose.fallback_hand_scale <= 0.0 || pose.min_hand_scale < 0.0 {
            return Err(Error::ConfigError(
                "Hand scale floor and fallback must be positive".to_string(),
            ));
        }
        if pose.fist_sustain_frames == 0 || pose.fist_counter_cap < pose.fist_sustain_frames {
            return Err(Error::ConfigError(
                "Fist counter cap must be at least the sustain frame count".to_string(),
            ));
        }

        if self.tracker.fps_window == 0 {
            return Err(Error::ConfigError("FPS window must be greater than 0".to_string()));
        }

        let actions = &self.actions;
        if actions.screen_width == 0 || actions.screen_height == 0 {
            return Err(Error::ConfigError("Screen dimensions must be non-zero".to_string()));
        }
        if actions.click_cooldown < 0.0 || actions.hud_toggle_cooldown < 0.0 {
            return Err(Error::ConfigError("Action cooldowns must be non-negative".to_string()));
        }
        if actions.scroll_deadzone < 0.0 {
            return Err(Error::ConfigError("Scroll dead-zone must be non-negative".to_string()));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Hand Gesture Control Configuration

# Adaptive filter tuning per signal group
filters:
  cursor:
    kind: adaptive
    min_cutoff: 1.5
    beta: 0.01
    d_cutoff: 1.0
  pinch:
    kind: adaptive
    min_cutoff: 0.5
    beta: 0.003
    d_cutoff: 1.0

# Pinch click detection
pinch:
  enter_threshold: 0.28
  exit_threshold: 0.5
  debounce_frames: 4
  exit_frames: 3
  cooldown: 0.45

# Hand geometry and sustained poses
pose:
  extension_margin: 1.05
  depth_weight: 0.5
  min_hand_scale: 0.01
  fallback_hand_scale: 0.1
  fist_sustain_frames: 8
  fist_counter_cap: 20

# Producer loop
tracker:
  fps_window: 30

# Pointer actions
actions:
  screen_width: 1920
  screen_height: 1080
  click_cooldown: 0.4
  scroll_sensitivity: 15.0
  scroll_deadzone: 0.3
  hud_toggle_cooldown: 1.0
"#;
