use crate::constants::{
    DECO_CIRCLE_COUNT, DECO_LINE_COUNT, DECO_SQUARE_COUNT, HERO_SLIDE_INTERVAL_MS,
    PLAYER_MIN_WIDTH_PX, TRAIL_MIN_VIEWPORT_WIDTH, TRAIL_SKIP_PROBABILITY, VIDEO_DEFAULT_VOLUME,
    WORD_CYCLE_INTERVAL_MS,
};

// Upper bound for generated decorative shapes of a single kind
const MAX_SHAPES_PER_KIND: usize = 64;

/// Runtime-tunable page parameters.
///
/// Defaults come from `constants.rs`; a page may override any of them with
/// `data-*` attributes on `<body>`.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub trail_skip_probability: f64,
    pub trail_min_viewport_width: f64,
    pub circle_count: usize,
    pub square_count: usize,
    pub line_count: usize,
    pub carousel_interval_ms: i32,
    pub word_cycle_interval_ms: i32,
    pub video_volume: f64,
    pub player_min_width: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            trail_skip_probability: TRAIL_SKIP_PROBABILITY,
            trail_min_viewport_width: TRAIL_MIN_VIEWPORT_WIDTH,
            circle_count: DECO_CIRCLE_COUNT,
            square_count: DECO_SQUARE_COUNT,
            line_count: DECO_LINE_COUNT,
            carousel_interval_ms: HERO_SLIDE_INTERVAL_MS,
            word_cycle_interval_ms: WORD_CYCLE_INTERVAL_MS,
            video_volume: VIDEO_DEFAULT_VOLUME,
            player_min_width: PLAYER_MIN_WIDTH_PX,
        }
    }
}

/// Attribute names read by [`SiteConfig::from_lookup`].
pub const CONFIG_ATTRS: [&str; 9] = [
    "data-trail-skip",
    "data-trail-min-width",
    "data-circles",
    "data-squares",
    "data-lines",
    "data-carousel-ms",
    "data-word-ms",
    "data-video-volume",
    "data-player-min-width",
];

impl SiteConfig {
    /// Build a config from defaults, overriding each field whose attribute
    /// `lookup` returns a valid value for. Invalid values are skipped and
    /// reported back by name.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<&'static str>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        let mut rejected = Vec::new();

        let unit = |v: f64| (0.0..=1.0).contains(&v);
        let positive = |v: f64| v.is_finite() && v > 0.0;

        for attr in CONFIG_ATTRS {
            let Some(raw) = lookup(attr) else {
                continue;
            };
            let raw = raw.trim();
            let ok = match attr {
                "data-trail-skip" => set_f64(raw, unit, &mut cfg.trail_skip_probability),
                "data-trail-min-width" => {
                    set_f64(raw, |v| v >= 0.0, &mut cfg.trail_min_viewport_width)
                }
                "data-circles" => set_count(raw, &mut cfg.circle_count),
                "data-squares" => set_count(raw, &mut cfg.square_count),
                "data-lines" => set_count(raw, &mut cfg.line_count),
                "data-carousel-ms" => set_ms(raw, &mut cfg.carousel_interval_ms),
                "data-word-ms" => set_ms(raw, &mut cfg.word_cycle_interval_ms),
                "data-video-volume" => set_f64(raw, unit, &mut cfg.video_volume),
                "data-player-min-width" => set_f64(raw, positive, &mut cfg.player_min_width),
                _ => true,
            };
            if !ok {
                rejected.push(attr);
            }
        }
        (cfg, rejected)
    }
}

fn set_f64(raw: &str, valid: impl Fn(f64) -> bool, slot: &mut f64) -> bool {
    match raw.parse::<f64>() {
        Ok(v) if valid(v) => {
            *slot = v;
            true
        }
        _ => false,
    }
}

fn set_count(raw: &str, slot: &mut usize) -> bool {
    match raw.parse::<usize>() {
        Ok(v) if v <= MAX_SHAPES_PER_KIND => {
            *slot = v;
            true
        }
        _ => false,
    }
}

fn set_ms(raw: &str, slot: &mut i32) -> bool {
    match raw.parse::<i32>() {
        Ok(v) if v > 0 => {
            *slot = v;
            true
        }
        _ => false,
    }
}
