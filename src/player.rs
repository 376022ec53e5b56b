// Floating audio player state, kept free of DOM types so it can be driven by
// plain numbers from event handlers.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RepeatMode {
    #[default]
    Off,
    All,
    One,
}

impl RepeatMode {
    /// off → all → one → off
    pub fn next(self) -> Self {
        match self {
            RepeatMode::Off => RepeatMode::All,
            RepeatMode::All => RepeatMode::One,
            RepeatMode::One => RepeatMode::Off,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            RepeatMode::Off => "Repeat: Off",
            RepeatMode::All => "Repeat: All",
            RepeatMode::One => "Repeat: One",
        }
    }

    /// `(color, background)` for the repeat button.
    pub fn button_colors(self) -> (&'static str, &'static str) {
        match self {
            RepeatMode::Off => ("rgba(0, 217, 255, 0.6)", "rgba(0, 217, 255, 0.2)"),
            RepeatMode::All => ("#00D9FF", "rgba(0, 217, 255, 0.4)"),
            RepeatMode::One => ("#FF1744", "rgba(255, 23, 68, 0.3)"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndAction {
    Restart,
    Stop,
}

#[inline]
pub fn on_ended(mode: RepeatMode) -> EndAction {
    match mode {
        RepeatMode::All | RepeatMode::One => EndAction::Restart,
        RepeatMode::Off => EndAction::Stop,
    }
}

/// `m:ss`; non-finite or negative input renders as `0:00`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }
    let mins = (seconds / 60.0).floor() as u64;
    let secs = (seconds % 60.0).floor() as u64;
    format!("{mins}:{secs:02}")
}

/// Map a click at `click_x` (relative to the bar's left edge) to a time.
/// Returns `None` when the bar has no width or the duration is unknown.
pub fn seek_time(click_x: f64, bar_width: f64, duration: f64) -> Option<f64> {
    if bar_width <= 0.0 || !duration.is_finite() || duration <= 0.0 {
        return None;
    }
    let fraction = (click_x / bar_width).clamp(0.0, 1.0);
    Some(fraction * duration)
}

/// Progress bar width in percent, `None` until the duration is known.
pub fn progress_percent(current: f64, duration: f64) -> Option<f64> {
    if !duration.is_finite() || duration <= 0.0 {
        return None;
    }
    Some((current / duration * 100.0).clamp(0.0, 100.0))
}

/// Header-handle drag. Offsets are the grab point inside the panel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    pub active: bool,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl DragState {
    pub fn begin(&mut self, client_x: f64, client_y: f64, panel_left: f64, panel_top: f64) {
        self.active = true;
        self.offset_x = client_x - panel_left;
        self.offset_y = client_y - panel_top;
    }

    /// New `(left, top)` for the panel, `None` when not dragging.
    pub fn position(&self, client_x: f64, client_y: f64) -> Option<(f64, f64)> {
        self.active
            .then(|| (client_x - self.offset_x, client_y - self.offset_y))
    }

    pub fn end(&mut self) {
        self.active = false;
    }
}

/// Corner-handle resize.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ResizeState {
    pub active: bool,
    pub start_x: f64,
    pub start_y: f64,
    pub start_width: f64,
    pub start_height: f64,
}

/// Result of a resize step. `width` is `None` when it would fall below the
/// minimum, in which case the current width is kept.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeStep {
    pub width: Option<f64>,
    pub height: f64,
}

impl ResizeState {
    pub fn begin(&mut self, client_x: f64, client_y: f64, width: f64, height: f64) {
        self.active = true;
        self.start_x = client_x;
        self.start_y = client_y;
        self.start_width = width;
        self.start_height = height;
    }

    pub fn step(&self, client_x: f64, client_y: f64, min_width: f64) -> Option<ResizeStep> {
        if !self.active {
            return None;
        }
        let width = self.start_width + (client_x - self.start_x);
        let height = self.start_height + (client_y - self.start_y);
        Some(ResizeStep {
            width: (width >= min_width).then_some(width),
            height,
        })
    }

    pub fn end(&mut self) {
        self.active = false;
    }
}

/// All mutable state of one player panel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlayerState {
    pub playing: bool,
    pub repeat: RepeatMode,
    pub drag: DragState,
    pub resize: ResizeState,
}

impl PlayerState {
    pub fn cycle_repeat(&mut self) -> RepeatMode {
        self.repeat = self.repeat.next();
        self.repeat
    }

    /// Apply the end-of-track policy, updating `playing`.
    pub fn track_ended(&mut self) -> EndAction {
        let action = on_ended(self.repeat);
        self.playing = action == EndAction::Restart;
        action
    }
}
