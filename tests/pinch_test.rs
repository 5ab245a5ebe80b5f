//! Tests for pinch click detection

use hand_gesture_control::{
    config::PinchConfig,
    pinch::{FingerPair, PinchPair, PinchState, PinchStateMachine},
};

const DT: f64 = 1.0 / 30.0;

fn run(machine: &mut PinchStateMachine, distances: &[f64], start_frame: usize) -> Vec<bool> {
    distances
        .iter()
        .enumerate()
        .map(|(i, &d)| machine.update(d, true, (start_frame + i) as f64 * DT))
        .collect()
}

#[test]
fn test_approach_sequence_needs_four_sub_threshold_frames() {
    // Only three of these are below the enter threshold
    let mut machine = PinchStateMachine::default();
    let fired = run(&mut machine, &[0.5, 0.4, 0.2, 0.15, 0.1], 0);
    assert!(fired.iter().all(|f| !f));
    assert_eq!(machine.qualifying_frames(), 3);

    // The fourth sub-threshold frame fires
    assert!(machine.update(0.1, true, 5.0 * DT));
    assert_eq!(machine.state(), PinchState::Pinched);
}

#[test]
fn test_click_fires_on_fifth_frame() {
    let mut machine = PinchStateMachine::default();
    let fired = run(&mut machine, &[0.5, 0.2, 0.15, 0.1, 0.05], 0);
    assert_eq!(fired, vec![false, false, false, false, true]);
    assert_eq!(machine.last_click(), Some(4.0 * DT));
}

#[test]
fn test_single_click_while_held() {
    let mut machine = PinchStateMachine::default();
    let fired = run(&mut machine, &[0.1; 90], 0);
    assert_eq!(fired.iter().filter(|f| **f).count(), 1);
}

#[test]
fn test_hysteresis_band_keeps_pinch() {
    let mut machine = PinchStateMachine::default();
    run(&mut machine, &[0.1; 4], 0);

    // Values between enter and exit never release
    let fired = run(&mut machine, &[0.3, 0.4, 0.49, 0.5, 0.45, 0.35], 4);
    assert!(fired.iter().all(|f| !f));
    assert_eq!(machine.state(), PinchState::Pinched);
    assert_eq!(machine.exit_frames(), 0);
}

#[test]
fn test_release_needs_consecutive_exit_frames() {
    let mut machine = PinchStateMachine::default();
    run(&mut machine, &[0.1; 4], 0);

    run(&mut machine, &[0.6, 0.6, 0.4], 4);
    assert_eq!(machine.state(), PinchState::Pinched);

    run(&mut machine, &[0.6, 0.6, 0.6], 7);
    assert_eq!(machine.state(), PinchState::Open);
}

#[test]
fn test_cooldown_blocks_quick_second_click() {
    let mut machine = PinchStateMachine::default();
    // Click at frame 3 (t = 0.1)
    run(&mut machine, &[0.1; 4], 0);
    // Release over frames 4..=6
    run(&mut machine, &[0.9; 3], 4);
    assert_eq!(machine.state(), PinchState::Open);

    // Pinch again immediately: frames 7..=10 are inside the cooldown
    let fired = run(&mut machine, &[0.1; 4], 7);
    assert!(fired.iter().all(|f| !f));
    assert_eq!(machine.qualifying_frames(), 0);

    // Keep pinching until the cooldown ends; four frames later it fires
    let fired = run(&mut machine, &[0.1; 16], 11);
    let first = fired.iter().position(|f| *f).unwrap();
    let fired_at = (11 + first) as f64 * DT;
    let cooldown_over = 0.1 + PinchConfig::default().cooldown;
    assert!(fired_at >= cooldown_over);
    assert!(fired_at < cooldown_over + 4.0 * DT + 1e-9);
}

#[test]
fn test_ineligible_frame_resets_debounce() {
    let mut machine = PinchStateMachine::default();
    for i in 0..3 {
        assert!(!machine.update(0.1, true, f64::from(i) * DT));
    }
    assert!(!machine.update(0.1, false, 3.0 * DT));
    assert_eq!(machine.qualifying_frames(), 0);

    for i in 4..7 {
        assert!(!machine.update(0.1, true, f64::from(i) * DT));
    }
    assert!(machine.update(0.1, true, 7.0 * DT));
}

#[test]
fn test_custom_thresholds() {
    let config = PinchConfig {
        enter_threshold: 0.1,
        exit_threshold: 0.2,
        debounce_frames: 1,
        exit_frames: 1,
        cooldown: 0.0,
    };
    let mut machine = PinchStateMachine::new(config);
    let fired = run(&mut machine, &[0.15, 0.05, 0.15, 0.25, 0.05], 0);
    assert_eq!(fired, vec![false, true, false, false, true]);
}

#[test]
fn test_pairs_are_independent() {
    let mut pair = PinchPair::default();
    let mut left = 0;
    let mut right = 0;
    for i in 0..8 {
        let t = f64::from(i) * DT;
        let (index, middle) = if i < 4 { (0.1, 0.9) } else { (0.9, 0.1) };
        let clicks = pair.update(index, middle, true, t);
        left += usize::from(clicks.left);
        right += usize::from(clicks.right);
    }
    assert_eq!((left, right), (1, 1));
    // Index released after three frames past the exit threshold
    assert_eq!(pair.machine(FingerPair::Index).state(), PinchState::Open);
    assert_eq!(pair.machine(FingerPair::Middle).state(), PinchState::Pinched);
    assert_eq!(pair.machine(FingerPair::Middle).last_click(), Some(7.0 * DT));
}
