//! Tests for gesture-to-pointer action mapping

use hand_gesture_control::{
    actions::{ActionMapper, GestureMode, PointerAction},
    snapshot::{HandResult, SessionSnapshot},
};

fn detected(x: f64, y: f64) -> HandResult {
    HandResult {
        detected: true,
        x,
        y,
        ..HandResult::default()
    }
}

fn snapshot(primary: HandResult, secondary: HandResult) -> SessionSnapshot {
    let num_hands = usize::from(primary.detected) + usize::from(secondary.detected);
    SessionSnapshot {
        primary,
        secondary,
        num_hands,
        ..SessionSnapshot::default()
    }
}

fn primary_only(hand: HandResult) -> SessionSnapshot {
    snapshot(hand, HandResult::not_detected())
}

#[test]
fn test_plain_hand_moves_pointer() {
    let mut mapper = ActionMapper::default();
    let frame = mapper.update(&primary_only(detected(0.5, 0.25)), 0.0);
    assert_eq!(frame.mode, GestureMode::Move);
    assert_eq!(frame.actions, vec![PointerAction::MoveTo { x: 960, y: 270 }]);
}

#[test]
fn test_no_hand_no_actions() {
    let mut mapper = ActionMapper::default();
    let frame = mapper.update(&SessionSnapshot::default(), 0.0);
    assert_eq!(frame.mode, GestureMode::Idle);
    assert!(frame.actions.is_empty());
}

#[test]
fn test_click_takes_priority_over_poses() {
    let mut mapper = ActionMapper::default();
    let hand = HandResult {
        click_left: true,
        is_peace: true,
        is_fist: true,
        ..detected(0.1, 0.1)
    };
    let frame = mapper.update(&primary_only(hand), 0.0);
    assert_eq!(frame.mode, GestureMode::Click);
    assert_eq!(frame.label, "L-CLICK");
    assert!(frame.actions.contains(&PointerAction::LeftClick));
    assert!(!frame.actions.contains(&PointerAction::DragStart));
    assert!(!mapper.is_dragging());
}

#[test]
fn test_click_cooldown_is_per_button() {
    let mut mapper = ActionMapper::default();
    let left = HandResult {
        click_left: true,
        ..detected(0.5, 0.5)
    };
    let right = HandResult {
        click_right: true,
        ..detected(0.5, 0.5)
    };

    assert!(mapper.update(&primary_only(left.clone()), 1.0).actions.contains(&PointerAction::LeftClick));
    assert!(!mapper.update(&primary_only(left.clone()), 1.3).actions.contains(&PointerAction::LeftClick));
    assert!(mapper.update(&primary_only(right), 1.3).actions.contains(&PointerAction::RightClick));
    assert!(mapper.update(&primary_only(left), 1.5).actions.contains(&PointerAction::LeftClick));
}

#[test]
fn test_peace_scrolls_with_vertical_motion() {
    let mut mapper = ActionMapper::default();
    let peace = |y: f64| {
        primary_only(HandResult {
            is_peace: true,
            ..detected(0.5, y)
        })
    };

    // First frame only arms the anchor
    let frame = mapper.update(&peace(0.5), 0.0);
    assert_eq!(frame.mode, GestureMode::Scroll);
    assert!(!frame.actions.iter().any(|a| matches!(a, PointerAction::Scroll { .. })));

    // Upward motion scrolls up
    let frame = mapper.update(&peace(0.4), 0.033);
    assert!(frame.actions.contains(&PointerAction::Scroll { delta: 180 }));

    // Small motion stays inside the dead-zone
    let frame = mapper.update(&peace(0.39), 0.066);
    assert!(!frame.actions.iter().any(|a| matches!(a, PointerAction::Scroll { .. })));

    // Downward motion scrolls down
    let frame = mapper.update(&peace(0.49), 0.1);
    assert!(frame.actions.contains(&PointerAction::Scroll { delta: -180 }));
}

#[test]
fn test_leaving_scroll_disarms_anchor() {
    let mut mapper = ActionMapper::default();
    let peace = |y: f64| {
        primary_only(HandResult {
            is_peace: true,
            ..detected(0.5, y)
        })
    };
    mapper.update(&peace(0.8), 0.0);
    mapper.update(&primary_only(detected(0.5, 0.5)), 0.033);

    // Re-entering scroll arms again instead of jumping
    let frame = mapper.update(&peace(0.2), 0.066);
    assert!(!frame.actions.iter().any(|a| matches!(a, PointerAction::Scroll { .. })));
}

#[test]
fn test_fist_drags_until_released() {
    let mut mapper = ActionMapper::default();
    let fist = primary_only(HandResult {
        is_fist: true,
        ..detected(0.3, 0.3)
    });

    let frame = mapper.update(&fist, 0.0);
    assert_eq!(frame.mode, GestureMode::Drag);
    assert!(frame.actions.contains(&PointerAction::DragStart));
    assert!(!mapper.update(&fist, 0.033).actions.contains(&PointerAction::DragStart));
    assert!(mapper.is_dragging());

    let open = primary_only(HandResult {
        is_open_palm: true,
        ..detected(0.3, 0.3)
    });
    let frame = mapper.update(&open, 0.066);
    assert_eq!(frame.mode, GestureMode::Idle);
    assert!(frame.actions.contains(&PointerAction::DragEnd));
    assert!(!mapper.is_dragging());
}

#[test]
fn test_lost_hand_ends_drag() {
    let mut mapper = ActionMapper::default();
    mapper.update(
        &primary_only(HandResult {
            is_fist: true,
            ..detected(0.3, 0.3)
        }),
        0.0,
    );
    let frame = mapper.update(&SessionSnapshot::default(), 0.033);
    assert_eq!(frame.actions, vec![PointerAction::DragEnd]);
    assert!(mapper.release().is_empty());
}

#[test]
fn test_release_ends_drag() {
    let mut mapper = ActionMapper::default();
    mapper.update(
        &primary_only(HandResult {
            is_fist: true,
            ..detected(0.3, 0.3)
        }),
        0.0,
    );
    assert_eq!(mapper.release(), vec![PointerAction::DragEnd]);
    assert!(!mapper.is_dragging());
}

#[test]
fn test_secondary_pinch_toggles_hud() {
    let mut mapper = ActionMapper::default();
    let toggle = snapshot(
        detected(0.5, 0.5),
        HandResult {
            click_left: true,
            ..detected(0.2, 0.2)
        },
    );
    assert!(mapper.hud_visible());

    let frame = mapper.update(&toggle, 0.0);
    assert!(frame.actions.contains(&PointerAction::ToggleHud));
    assert!(!frame.actions.contains(&PointerAction::LeftClick));
    assert!(!mapper.hud_visible());

    // Inside the toggle cooldown
    assert!(!mapper.update(&toggle, 0.5).actions.contains(&PointerAction::ToggleHud));
    assert!(!mapper.hud_visible());

    assert!(mapper.update(&toggle, 1.2).actions.contains(&PointerAction::ToggleHud));
    assert!(mapper.hud_visible());
}

#[test]
fn test_screen_mapping_clamps() {
    let mapper = ActionMapper::default();
    assert_eq!(mapper.map_to_screen(0.0, 0.0), (0, 0));
    assert_eq!(mapper.map_to_screen(1.0, 1.0), (1919, 1079));
    assert_eq!(mapper.map_to_screen(-0.5, 2.0), (0, 1079));
    assert_eq!(mapper.map_to_screen(f64::NAN, 0.5), (0, 540));
}
