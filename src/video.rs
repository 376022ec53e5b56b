// Background video latches. The element's own `paused` flag is the source of
// truth for playback; this only tracks what has been done once.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VideoState {
    audio_enabled: bool,
    volume_set: bool,
}

impl VideoState {
    /// First call returns `true` (caller unmutes); later calls are no-ops.
    pub fn enable_audio(&mut self) -> bool {
        if self.audio_enabled {
            return false;
        }
        self.audio_enabled = true;
        true
    }

    /// First call returns `true` (caller sets the default volume).
    pub fn take_volume(&mut self) -> bool {
        if self.volume_set {
            return false;
        }
        self.volume_set = true;
        true
    }

    pub fn audio_enabled(&self) -> bool {
        self.audio_enabled
    }
}

/// Document events that count as the first user interaction and may unmute
/// the video. Playback events never do.
pub const AUDIO_UNLOCK_EVENTS: [&str; 3] = ["click", "touchstart", "keydown"];

#[inline]
pub fn unlocks_audio(event: &str) -> bool {
    AUDIO_UNLOCK_EVENTS.contains(&event)
}

/// `(text, aria-label)` for the toggle button given the paused flag.
#[inline]
pub fn toggle_labels(paused: bool) -> (&'static str, &'static str) {
    if paused {
        ("Play Video", "Play background video")
    } else {
        ("Pause Video", "Pause background video")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayAttempt {
    First,
    RetryUnmuted,
}

/// What to do after a rejected `play()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayFailure {
    RetryUnmuted,
    Alert,
}

#[inline]
pub fn on_play_rejected(attempt: PlayAttempt) -> PlayFailure {
    match attempt {
        PlayAttempt::First => PlayFailure::RetryUnmuted,
        PlayAttempt::RetryUnmuted => PlayFailure::Alert,
    }
}
