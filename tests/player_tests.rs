// Host-side tests for the floating audio player state.

#![allow(dead_code)]
mod player {
    include!("../src/player.rs");
}

use player::*;

#[test]
fn format_time_examples() {
    assert_eq!(format_time(0.0), "0:00");
    assert_eq!(format_time(65.0), "1:05");
    assert_eq!(format_time(59.99), "0:59");
    assert_eq!(format_time(600.0), "10:00");
    assert_eq!(format_time(f64::NAN), "0:00");
    assert_eq!(format_time(f64::INFINITY), "0:00");
    assert_eq!(format_time(-3.0), "0:00");
}

#[test]
fn repeat_cycles_off_all_one() {
    let mut state = PlayerState::default();
    assert_eq!(state.repeat, RepeatMode::Off);
    assert_eq!(state.cycle_repeat(), RepeatMode::All);
    assert_eq!(state.cycle_repeat(), RepeatMode::One);
    assert_eq!(state.cycle_repeat(), RepeatMode::Off);
    assert_eq!(RepeatMode::All.title(), "Repeat: All");
}

#[test]
fn end_of_track_policy() {
    let mut state = PlayerState {
        playing: true,
        ..Default::default()
    };
    assert_eq!(state.track_ended(), EndAction::Stop);
    assert!(!state.playing);

    state.cycle_repeat();
    state.playing = true;
    assert_eq!(state.track_ended(), EndAction::Restart);
    assert!(state.playing);

    assert_eq!(on_ended(RepeatMode::One), EndAction::Restart);
}

#[test]
fn seek_maps_fraction_to_duration() {
    assert_eq!(seek_time(50.0, 200.0, 120.0), Some(30.0));
    assert_eq!(seek_time(-5.0, 200.0, 120.0), Some(0.0));
    assert_eq!(seek_time(250.0, 200.0, 120.0), Some(120.0));
    assert_eq!(seek_time(50.0, 0.0, 120.0), None);
    assert_eq!(seek_time(50.0, 200.0, f64::NAN), None);
}

#[test]
fn progress_percent_needs_duration() {
    assert_eq!(progress_percent(30.0, 120.0), Some(25.0));
    assert_eq!(progress_percent(1.0, f64::NAN), None);
    assert_eq!(progress_percent(1.0, 0.0), None);
}

#[test]
fn drag_tracks_grab_offset() {
    let mut drag = DragState::default();
    assert_eq!(drag.position(10.0, 10.0), None);
    drag.begin(110.0, 220.0, 100.0, 200.0);
    assert_eq!(drag.position(300.0, 400.0), Some((290.0, 380.0)));
    drag.end();
    assert_eq!(drag.position(300.0, 400.0), None);
}

#[test]
fn resize_respects_minimum_width() {
    let mut resize = ResizeState::default();
    assert_eq!(resize.step(0.0, 0.0, 280.0), None);
    resize.begin(500.0, 500.0, 320.0, 200.0);

    let grow = resize.step(540.0, 520.0, 280.0).expect("active");
    assert_eq!(grow.width, Some(360.0));
    assert_eq!(grow.height, 220.0);

    let shrink = resize.step(400.0, 450.0, 280.0).expect("active");
    assert_eq!(shrink.width, None);
    assert_eq!(shrink.height, 150.0);

    resize.end();
    assert_eq!(resize.step(600.0, 600.0, 280.0), None);
}
