// Host-side tests for background video latches and the profile image chain.

#![allow(dead_code)]
mod video {
    include!("../src/video.rs");
}
mod profile {
    include!("../src/profile.rs");
}

use profile::{FallbackChain, FallbackStep};
use video::*;

#[test]
fn audio_is_enabled_once() {
    let mut state = VideoState::default();
    assert!(!state.audio_enabled());
    assert!(state.enable_audio());
    assert!(!state.enable_audio());
    assert!(state.audio_enabled());
}

#[test]
fn volume_is_set_once() {
    let mut state = VideoState::default();
    assert!(state.take_volume());
    assert!(!state.take_volume());
}

#[test]
fn only_user_gestures_unlock_audio() {
    for event in ["click", "touchstart", "keydown"] {
        assert!(unlocks_audio(event), "{event}");
    }
    for event in ["play", "playing", "loadedmetadata", "timeupdate"] {
        assert!(!unlocks_audio(event), "{event}");
    }
}

#[test]
fn toggle_labels_follow_paused_flag() {
    assert_eq!(toggle_labels(true), ("Play Video", "Play background video"));
    assert_eq!(toggle_labels(false), ("Pause Video", "Pause background video"));
}

#[test]
fn one_retry_then_alert() {
    assert_eq!(on_play_rejected(PlayAttempt::First), PlayFailure::RetryUnmuted);
    assert_eq!(on_play_rejected(PlayAttempt::RetryUnmuted), PlayFailure::Alert);
}

#[test]
fn fallback_chain_retries_then_gives_up() {
    let mut chain = FallbackChain::new(["https://photos.example/p.jpg", "assets/images/Consistency.jpg"]);
    assert_eq!(chain.attempt(), 0);
    assert_eq!(
        chain.on_error(),
        FallbackStep::Retry("assets/images/Consistency.jpg".into())
    );
    assert_eq!(chain.on_error(), FallbackStep::GiveUp);
    assert_eq!(chain.on_error(), FallbackStep::GiveUp);
}

#[test]
fn placeholder_is_taken_once() {
    let mut chain = FallbackChain::new(["a.jpg"]);
    assert_eq!(chain.on_error(), FallbackStep::GiveUp);
    assert!(chain.take_placeholder());
    assert!(!chain.take_placeholder());
}

#[test]
fn empty_initial_source_still_falls_back() {
    let mut chain = FallbackChain::new(["", "assets/images/Consistency.jpg"]);
    assert_eq!(
        chain.on_error(),
        FallbackStep::Retry("assets/images/Consistency.jpg".into())
    );
    assert_eq!(chain.on_error(), FallbackStep::GiveUp);
}
