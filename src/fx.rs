use crate::constants::{
    DECO_CIRCLE_DELAY_STEP_SEC, DECO_CIRCLE_SIZE, DECO_COLOR_CYAN, DECO_COLOR_RED,
    DECO_LINE_LENGTH, DECO_SQUARE_DELAY_STEP_SEC, DECO_SQUARE_SIZE,
};
use rand::Rng;
use smallvec::SmallVec;

// ---------------- Mouse trail ----------------

/// The trail is a wide-viewport feature only.
#[inline]
pub fn trail_enabled(viewport_width: f64, min_width: f64) -> bool {
    viewport_width >= min_width
}

/// `sample` is uniform in [0, 1); a dot is spawned when it exceeds the skip
/// probability.
#[inline]
pub fn should_spawn_dot(sample: f64, skip_probability: f64) -> bool {
    sample > skip_probability
}

// ---------------- Decorative shapes ----------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Square,
    HorizontalLine,
    VerticalLine,
}

impl ShapeKind {
    pub fn class_name(self) -> &'static str {
        match self {
            ShapeKind::Circle => "deco-shape deco-circle",
            ShapeKind::Square => "deco-shape deco-square",
            ShapeKind::HorizontalLine => "deco-shape deco-line-dotted deco-line-h",
            ShapeKind::VerticalLine => "deco-shape deco-line-dotted deco-line-v",
        }
    }

    pub fn is_line(self) -> bool {
        matches!(self, ShapeKind::HorizontalLine | ShapeKind::VerticalLine)
    }
}

/// One generated background element. Sizes are px for circles/squares and
/// percent of the container for lines; positions are percent.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeSpec {
    pub kind: ShapeKind,
    pub size: f64,
    pub left_pct: f64,
    pub top_pct: f64,
    pub color: &'static str,
    pub animation_delay_sec: Option<f64>,
}

impl ShapeSpec {
    /// Inline style declarations as `(property, value)` pairs.
    pub fn style_pairs(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::with_capacity(6);
        match self.kind {
            ShapeKind::Circle | ShapeKind::Square => {
                out.push(("width", format!("{}px", self.size)));
                out.push(("height", format!("{}px", self.size)));
                out.push(("border-color", self.color.to_string()));
            }
            ShapeKind::HorizontalLine => {
                out.push(("width", format!("{}%", self.size)));
                out.push(("border-top-color", self.color.to_string()));
            }
            ShapeKind::VerticalLine => {
                out.push(("height", format!("{}%", self.size)));
                out.push(("border-top-color", self.color.to_string()));
            }
        }
        out.push(("left", format!("{}%", self.left_pct)));
        out.push(("top", format!("{}%", self.top_pct)));
        if let Some(d) = self.animation_delay_sec {
            out.push(("animation-delay", format!("{d}s")));
        }
        out
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShapeCounts {
    pub circles: usize,
    pub squares: usize,
    pub lines: usize,
}

fn pick_color<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    if rng.gen::<f64>() > 0.5 {
        DECO_COLOR_CYAN
    } else {
        DECO_COLOR_RED
    }
}

/// Circles first, then squares, then dashed lines.
pub fn generate_shapes<R: Rng + ?Sized>(rng: &mut R, counts: ShapeCounts) -> Vec<ShapeSpec> {
    let mut shapes = Vec::with_capacity(counts.circles + counts.squares + counts.lines);

    for i in 0..counts.circles {
        let size = rng.gen::<f64>() * DECO_CIRCLE_SIZE.1 + DECO_CIRCLE_SIZE.0;
        shapes.push(ShapeSpec {
            kind: ShapeKind::Circle,
            size,
            left_pct: rng.gen::<f64>() * 100.0,
            top_pct: rng.gen::<f64>() * 100.0,
            color: pick_color(rng),
            animation_delay_sec: Some(i as f64 * DECO_CIRCLE_DELAY_STEP_SEC),
        });
    }
    for i in 0..counts.squares {
        let size = rng.gen::<f64>() * DECO_SQUARE_SIZE.1 + DECO_SQUARE_SIZE.0;
        shapes.push(ShapeSpec {
            kind: ShapeKind::Square,
            size,
            left_pct: rng.gen::<f64>() * 100.0,
            top_pct: rng.gen::<f64>() * 100.0,
            color: pick_color(rng),
            animation_delay_sec: Some(i as f64 * DECO_SQUARE_DELAY_STEP_SEC),
        });
    }
    for _ in 0..counts.lines {
        let kind = if rng.gen::<f64>() > 0.5 {
            ShapeKind::HorizontalLine
        } else {
            ShapeKind::VerticalLine
        };
        let size = rng.gen::<f64>() * DECO_LINE_LENGTH.1 + DECO_LINE_LENGTH.0;
        shapes.push(ShapeSpec {
            kind,
            size,
            left_pct: rng.gen::<f64>() * 80.0,
            top_pct: rng.gen::<f64>() * 80.0,
            color: pick_color(rng),
            animation_delay_sec: None,
        });
    }
    shapes
}

// ---------------- Hero carousel ----------------

/// Index of the visible slide in a fixed, wrapping sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    current: usize,
}

impl Carousel {
    /// `None` for an empty slide set.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { len, current: 0 })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Advance one slide; returns `(previous, next)`.
    pub fn advance(&mut self) -> (usize, usize) {
        let prev = self.current;
        self.current = (self.current + 1) % self.len;
        (prev, self.current)
    }
}

// ---------------- Headline word cycle ----------------

/// Words parsed from `data-animated-words`, cycled in order.
#[derive(Clone, Debug, PartialEq)]
pub struct WordCycle {
    words: SmallVec<[String; 4]>,
    index: usize,
}

impl WordCycle {
    /// `None` when the list contains no non-blank word.
    pub fn parse(raw: &str) -> Option<Self> {
        let words: SmallVec<[String; 4]> = raw
            .split(',')
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect();
        (!words.is_empty()).then_some(Self { words, index: 0 })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn next_word(&mut self) -> &str {
        self.index = (self.index + 1) % self.words.len();
        &self.words[self.index]
    }
}
