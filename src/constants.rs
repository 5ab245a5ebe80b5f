//! Constants used throughout the library

/// Number of landmarks in one hand observation
pub const NUM_HAND_LANDMARKS: usize = 21;

/// Maximum number of hands tracked per frame
pub const MAX_HANDS: usize = 2;

/// Default cursor filter parameters (responsive)
pub const DEFAULT_CURSOR_MIN_CUTOFF: f64 = 1.5;
pub const DEFAULT_CURSOR_BETA: f64 = 0.01;

/// Default pinch-distance filter parameters (aggressive smoothing)
pub const DEFAULT_PINCH_MIN_CUTOFF: f64 = 0.5;
pub const DEFAULT_PINCH_BETA: f64 = 0.003;

/// Default cutoff for the derivative estimate
pub const DEFAULT_DERIVATIVE_CUTOFF: f64 = 1.0;

/// Pinch hysteresis thresholds (normalized by hand scale)
pub const DEFAULT_PINCH_ENTER: f64 = 0.28;
pub const DEFAULT_PINCH_EXIT: f64 = 0.50;

/// Consecutive qualifying frames before a click fires
pub const DEFAULT_PINCH_DEBOUNCE_FRAMES: u32 = 4;

/// Consecutive frames past the exit threshold before release
pub const DEFAULT_PINCH_EXIT_FRAMES: u32 = 3;

/// Minimum seconds between two clicks on the same finger pair
pub const DEFAULT_PINCH_COOLDOWN: f64 = 0.45;

/// Fingertip must be this much farther from the wrist than its PIP joint
pub const DEFAULT_EXTENSION_MARGIN: f64 = 1.05;

/// Weight of the depth axis in 3D landmark distances
pub const DEFAULT_DEPTH_WEIGHT: f64 = 0.5;

/// Hand scale below this is treated as degenerate
pub const DEFAULT_MIN_HAND_SCALE: f64 = 0.01;

/// Hand scale substituted for a degenerate measurement
pub const DEFAULT_FALLBACK_HAND_SCALE: f64 = 0.1;

/// Consecutive all-curled frames before a fist is reported
pub const DEFAULT_FIST_SUSTAIN_FRAMES: u32 = 8;

/// Upper bound of the fist frame counter
pub const DEFAULT_FIST_COUNTER_CAP: u32 = 20;

/// Number of frame durations in the loop-frequency moving average
pub const DEFAULT_FPS_WINDOW: usize = 30;

/// Pointer action defaults
pub const DEFAULT_SCREEN_WIDTH: u32 = 1920;
pub const DEFAULT_SCREEN_HEIGHT: u32 = 1080;
pub const DEFAULT_CLICK_COOLDOWN: f64 = 0.4;
pub const DEFAULT_SCROLL_SENSITIVITY: f64 = 15.0;
pub const DEFAULT_SCROLL_DEADZONE: f64 = 0.3;
pub const DEFAULT_HUD_TOGGLE_COOLDOWN: f64 = 1.0;

/// Wheel units per notch
pub const WHEEL_DELTA: f64 = 120.0;

/// Default consumer polling rate in Hz
pub const DEFAULT_POLL_HZ: u32 = 60;
