use crate::constants::{
    DEFAULT_REVEAL_THRESHOLD, DEFAULT_ROOT_MARGIN, HEADING_THRESHOLD, LETTER_STAGGER_MS,
    VISIBLE_REVEAL_CLASS,
};

/// Extra work done on an element right after its reveal class is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealHook {
    None,
    /// Set an inline `transition` on the revealed element.
    Transition(&'static str),
    /// Slide the header's `h2` in and expand its `.line` shortly after.
    SectionHeader,
}

/// Observation parameters for one reveal group.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
    pub delay_ms: i32,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_REVEAL_THRESHOLD,
            root_margin: DEFAULT_ROOT_MARGIN,
            delay_ms: 0,
        }
    }
}

/// One row of the page's reveal table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealSpec {
    pub selector: &'static str,
    pub class: &'static str,
    pub options: RevealOptions,
    pub hook: RevealHook,
}

const fn spec(selector: &'static str, delay_ms: i32) -> RevealSpec {
    RevealSpec {
        selector,
        class: VISIBLE_REVEAL_CLASS,
        options: RevealOptions {
            threshold: DEFAULT_REVEAL_THRESHOLD,
            root_margin: DEFAULT_ROOT_MARGIN,
            delay_ms,
        },
        hook: RevealHook::None,
    }
}

const fn with_hook(mut s: RevealSpec, hook: RevealHook) -> RevealSpec {
    s.hook = hook;
    s
}

const fn with_threshold(mut s: RevealSpec, threshold: f64) -> RevealSpec {
    s.options.threshold = threshold;
    s
}

/// Staggered entrance of cards, headers, about text and contact sections.
pub const REVEAL_PLAN: [RevealSpec; 14] = [
    spec(".work-card:nth-child(1)", 0),
    spec(".work-card:nth-child(2)", 150),
    spec(".work-card:nth-child(3)", 300),
    spec(".work-card:nth-child(4)", 450),
    spec(".work-card:nth-child(5)", 600),
    with_hook(
        spec(".process-steps li", 100),
        RevealHook::Transition("all 0.5s ease-out"),
    ),
    with_hook(
        with_threshold(spec(".section-header", 0), HEADING_THRESHOLD),
        RevealHook::SectionHeader,
    ),
    spec(".about-text h2", 0),
    spec(".about-text .lead", 200),
    spec(".about-text p", 400),
    with_hook(
        spec(".social-links a", 600),
        RevealHook::Transition("all 0.3s ease"),
    ),
    spec(".contact-methods", 0),
    spec(".contact-form", 300),
    spec("#instagram-showcase", 0),
];

/// One-way "has fired" flag for an observed element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    fired: bool,
}

impl RevealLatch {
    /// Feed one visibility report. Returns `true` exactly once: on the first
    /// report that is intersecting.
    pub fn trigger(&mut self, intersecting: bool) -> bool {
        if self.fired || !intersecting {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn fired(&self) -> bool {
        self.fired
    }
}

/// Split heading text into per-character cells. Spaces become non-breaking so
/// inline-block spans keep their width.
pub fn split_letters(text: &str) -> Vec<String> {
    text.trim()
        .chars()
        .map(|c| {
            if c == ' ' {
                '\u{00A0}'.to_string()
            } else {
                c.to_string()
            }
        })
        .collect()
}

#[inline]
pub fn letter_delay_ms(index: usize) -> i32 {
    (index as i32).saturating_mul(LETTER_STAGGER_MS)
}
