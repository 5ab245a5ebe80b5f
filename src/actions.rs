//! Gesture-to-pointer action mapping.
//!
//! This module turns published snapshots into abstract pointer actions
//! (move, click, scroll, drag). Delivering them to the operating system is
//! left to a [`PointerSink`] implementation.

use crate::config::ActionConfig;
use crate::constants::WHEEL_DELTA;
use crate::snapshot::{HandResult, SessionSnapshot};
use crate::Result;
use log::{debug, info};

/// High-level interaction mode for the current frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureMode {
    #[default]
    Idle,
    Move,
    Click,
    Scroll,
    Drag,
}

impl GestureMode {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::Move => "MOVE",
            Self::Click => "CLICK",
            Self::Scroll => "SCROLL",
            Self::Drag => "DRAG",
        }
    }
}

/// Pointer command produced by the mapper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    /// Absolute move in screen pixels
    MoveTo { x: u32, y: u32 },
    LeftClick,
    RightClick,
    /// Wheel movement, positive scrolls up
    Scroll { delta: i32 },
    /// Press and hold the left button
    DragStart,
    /// Release a held left button
    DragEnd,
    /// Show or hide the overlay
    ToggleHud,
}

/// Mapper output for one snapshot
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActionFrame {
    pub mode: GestureMode,
    /// Short gesture label for display ("L-CLICK", "SCROLL", ...)
    pub label: &'static str,
    pub actions: Vec<PointerAction>,
}

/// Receiver of pointer actions
pub trait PointerSink {
    /// Deliver one action
    ///
    /// # Errors
    ///
    /// Returns an error if the action cannot be delivered
    fn dispatch(&mut self, action: &PointerAction) -> Result<()>;
}

/// Sink that only logs actions
#[derive(Debug, Default)]
pub struct LogSink {
    dispatched: u64,
}

impl LogSink {
    #[must_use]
    pub const fn dispatched(&self) -> u64 {
        self.dispatched
    }
}

impl PointerSink for LogSink {
    fn dispatch(&mut self, action: &PointerAction) -> Result<()> {
        self.dispatched += 1;
        match action {
            PointerAction::MoveTo { x, y } => debug!("Pointer move to ({x}, {y})"),
            other => info!("Pointer action: {other:?}"),
        }
        Ok(())
    }
}

/// Stateful snapshot-to-action translator for the primary hand, with the
/// secondary hand reserved for the HUD toggle
#[derive(Debug, Clone)]
pub struct ActionMapper {
    config: ActionConfig,
    dragging: bool,
    scroll_anchor: Option<f64>,
    last_left: Option<f64>,
    last_right: Option<f64>,
    last_hud_toggle: Option<f64>,
    hud_visible: bool,
}

impl ActionMapper {
    #[must_use]
    pub const fn new(config: ActionConfig) -> Self {
        Self {
            config,
            dragging: false,
            scroll_anchor: None,
            last_left: None,
            last_right: None,
            last_hud_toggle: None,
            hud_visible: true,
        }
    }

    /// Translate one snapshot observed at `now` seconds
    pub fn update(&mut self, snapshot: &SessionSnapshot, now: f64) -> ActionFrame {
        let mut frame = ActionFrame::default();
        let primary = &snapshot.primary;

        if primary.detected {
            let (x, y) = self.map_to_screen(primary.x, primary.y);
            frame.actions.push(PointerAction::MoveTo { x, y });
            self.classify_primary(primary, now, &mut frame);

            let secondary = &snapshot.secondary;
            if secondary.detected
                && secondary.click_left
                && Self::elapsed(self.last_hud_toggle, now, self.config.hud_toggle_cooldown)
            {
                self.last_hud_toggle = Some(now);
                self.hud_visible = !self.hud_visible;
                frame.actions.push(PointerAction::ToggleHud);
            }
        } else {
            self.stop_drag(&mut frame);
            self.scroll_anchor = None;
        }

        if frame.mode != GestureMode::Scroll {
            self.scroll_anchor = None;
        }
        frame
    }

    fn classify_primary(&mut self, hand: &HandResult, now: f64, frame: &mut ActionFrame) {
        if hand.click_left {
            if Self::elapsed(self.last_left, now, self.config.click_cooldown) {
                self.last_left = Some(now);
                frame.actions.push(PointerAction::LeftClick);
            }
            frame.mode = GestureMode::Click;
            frame.label = "L-CLICK";
        } else if hand.click_right {
            if Self::elapsed(self.last_right, now, self.config.click_cooldown) {
                self.last_right = Some(now);
                frame.actions.push(PointerAction::RightClick);
            }
            frame.mode = GestureMode::Click;
            frame.label = "R-CLICK";
        } else if hand.is_peace {
            if let Some(delta) = self.scroll(hand.y) {
                frame.actions.push(PointerAction::Scroll { delta });
            }
            frame.mode = GestureMode::Scroll;
            frame.label = "SCROLL";
        } else if hand.is_fist {
            if !self.dragging {
                self.dragging = true;
                frame.actions.push(PointerAction::DragStart);
            }
            frame.mode = GestureMode::Drag;
            frame.label = "DRAG";
        } else if hand.is_open_palm {
            self.stop_drag(frame);
            self.scroll_anchor = None;
            frame.mode = GestureMode::Idle;
            frame.label = "OPEN";
        } else {
            self.stop_drag(frame);
            frame.mode = GestureMode::Move;
        }
    }

    /// Wheel delta for vertical motion since the last scroll frame.
    /// The first frame of a scroll only sets the anchor.
    #[allow(clippy::cast_possible_truncation)] // bounded by sensitivity * WHEEL_DELTA
    fn scroll(&mut self, y: f64) -> Option<i32> {
        let anchor = self.scroll_anchor.replace(y)?;
        let delta = (anchor - y) * self.config.scroll_sensitivity;
        if delta.abs() > self.config.scroll_deadzone {
            Some((delta * WHEEL_DELTA).round() as i32)
        } else {
            None
        }
    }

    fn stop_drag(&mut self, frame: &mut ActionFrame) {
        if self.dragging {
            self.dragging = false;
            frame.actions.push(PointerAction::DragEnd);
        }
    }

    fn elapsed(last: Option<f64>, now: f64, cooldown: f64) -> bool {
        last.map_or(true, |t| now - t > cooldown)
    }

    /// Map normalized coordinates to screen pixels, clamped to the screen
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // clamped to [0, dim - 1]
    pub fn map_to_screen(&self, normalized_x: f64, normalized_y: f64) -> (u32, u32) {
        let scale = |n: f64, dim: u32| -> u32 {
            let max = f64::from(dim.saturating_sub(1));
            let pixel = (n * f64::from(dim)).floor();
            if pixel.is_nan() {
                0
            } else {
                pixel.clamp(0.0, max) as u32
            }
        };
        (
            scale(normalized_x, self.config.screen_width),
            scale(normalized_y, self.config.screen_height),
        )
    }

    /// Whether a left-button drag is held
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    #[must_use]
    pub const fn hud_visible(&self) -> bool {
        self.hud_visible
    }

    /// Release anything held; returns the actions needed to do so
    pub fn release(&mut self) -> Vec<PointerAction> {
        let mut frame = ActionFrame::default();
        self.stop_drag(&mut frame);
        self.scroll_anchor = None;
        frame.actions
    }
}

impl Default for ActionMapper {
    fn default() -> Self {
        Self::new(ActionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(x: f64, y: f64) -> HandResult {
        HandResult {
            detected: true,
            x,
            y,
            ..HandResult::default()
        }
    }

    fn snapshot(primary: HandResult) -> SessionSnapshot {
        SessionSnapshot {
            num_hands: usize::from(primary.detected),
            primary,
            ..SessionSnapshot::default()
        }
    }

    #[test]
    fn test_map_to_screen_clamps() {
        let mapper = ActionMapper::default();
        assert_eq!(mapper.map_to_screen(0.5, 0.5), (960, 540));
        assert_eq!(mapper.map_to_screen(1.0, 1.0), (1919, 1079));
        assert_eq!(mapper.map_to_screen(-0.2, f64::NAN), (0, 0));
    }

    #[test]
    fn test_scroll_first_frame_arms_only() {
        let mut mapper = ActionMapper::default();
        let peace = |y| HandResult {
            is_peace: true,
            ..hand(0.5, y)
        };
        let first = mapper.update(&snapshot(peace(0.5)), 0.0);
        assert_eq!(first.mode, GestureMode::Scroll);
        assert_eq!(first.actions.len(), 1);

        // 0.1 * 15 = 1.5 > dead-zone, 1.5 * 120 = 180
        let second = mapper.update(&snapshot(peace(0.4)), 0.1);
        assert_eq!(second.actions[1], PointerAction::Scroll { delta: 180 });

        // 0.01 * 15 = 0.15 inside the dead-zone
        let third = mapper.update(&snapshot(peace(0.39)), 0.2);
        assert_eq!(third.actions.len(), 1);
    }

    #[test]
    fn test_fist_drags_until_released() {
        let mut mapper = ActionMapper::default();
        let fist = HandResult {
            is_fist: true,
            ..hand(0.5, 0.5)
        };
        let start = mapper.update(&snapshot(fist.clone()), 0.0);
        assert!(start.actions.contains(&PointerAction::DragStart));
        let held = mapper.update(&snapshot(fist), 0.1);
        assert!(!held.actions.contains(&PointerAction::DragStart));
        assert!(mapper.is_dragging());

        let lost = mapper.update(&SessionSnapshot::default(), 0.2);
        assert_eq!(lost.actions, vec![PointerAction::DragEnd]);
        assert!(!mapper.is_dragging());
    }

    #[test]
    fn test_click_cooldown() {
        let mut mapper = ActionMapper::default();
        let click = HandResult {
            click_left: true,
            ..hand(0.5, 0.5)
        };
        let a = mapper.update(&snapshot(click.clone()), 0.0);
        let b = mapper.update(&snapshot(click.clone()), 0.2);
        let c = mapper.update(&snapshot(click), 0.5);
        assert!(a.actions.contains(&PointerAction::LeftClick));
        assert!(!b.actions.contains(&PointerAction::LeftClick));
        assert_eq!(b.mode, GestureMode::Click);
        assert!(c.actions.contains(&PointerAction::LeftClick));
    }
}
