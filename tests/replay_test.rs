//! Tests for recorded landmark streams


use hand_gesture_control::{
    config::Config,
    error::Error,
    landmarks::LandmarkFrame,
    replay::{Recording, ReplaySource},
    tracker::{LandmarkSource, Tracker},
};
use std::path::PathBuf;
use test_helpers::{hand, index_pinch, DT, OPEN};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("hand_gesture_{}_{name}", std::process::id()))
}

fn pinch_recording(frames: u32) -> Recording {
    Recording::new(
        (0..frames)
            .map(|i| {
                let hands = if i % 10 == 5 {
                    Vec::new()
                } else {
                    vec![index_pinch(0.1, OPEN), hand(OPEN)]
                };
                LandmarkFrame::new(f64::from(i) * DT, hands)
            })
            .collect(),
    )
}

#[test]
fn test_recording_file_roundtrip() {
    let recording = pinch_recording(12);
    let path = temp_path("roundtrip.yaml");
    recording.to_file(&path).unwrap();

    let loaded = Recording::from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.frames.len(), 12);
    assert_eq!(loaded.frames[5].hands.len(), 0);
    assert_eq!(loaded.frames[0].hands.len(), 2);
    assert!((loaded.duration() - 11.0 * DT).abs() < 1e-9);
    assert_eq!(loaded, recording);
}

#[test]
fn test_depth_defaults_to_zero() {
    let mut yaml = String::from("frames:\n  - timestamp: 0.5\n    hands:\n      -\n");
    for i in 0..21 {
        yaml.push_str(&format!("        - {{x: 0.{i:02}, y: 0.5}}\n"));
    }
    let recording = Recording::from_yaml(&yaml).unwrap();
    let hand = &recording.frames[0].hands[0];
    assert!(hand.points().iter().all(|p| p.z == 0.0));
    assert_eq!(hand.point(20).x, 0.20);
}

#[test]
fn test_missing_file_is_io_error() {
    let result = Recording::from_file(temp_path("does_not_exist.yaml"));
    assert!(matches!(result, Err(Error::IoError(_))));
}

#[test]
fn test_malformed_yaml_is_invalid_input() {
    let result = Recording::from_yaml("frames: [not a frame");
    assert!(matches!(result, Err(Error::InvalidInput(_))));
}

#[test]
fn test_replay_drains_source() {
    let mut source = ReplaySource::new(pinch_recording(4));
    assert_eq!(source.remaining(), 4);
    let mut seen = 0;
    while let Some(frame) = source.next_frame().unwrap() {
        assert_eq!(frame.timestamp, f64::from(seen) * DT);
        seen += 1;
    }
    assert_eq!(seen, 4);
    assert_eq!(source.remaining(), 0);
}

#[test]
fn test_tracker_replays_recording() {
    let source = ReplaySource::new(pinch_recording(30));
    let tracker = Tracker::start(source, &Config::default()).unwrap();
    let reader = tracker.reader();

    assert_eq!(tracker.wait().unwrap(), 30);
    let last = reader.load();
    assert_eq!(last.frame, 30);
    assert_eq!(last.timestamp, 29.0 * DT);
    assert_eq!(last.num_hands, 2);
}
