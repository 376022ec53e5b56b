// Host-side tests for the scroll reveal model.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod reveal {
    include!("../src/reveal.rs");
}

use reveal::*;

#[test]
fn latch_fires_once_on_first_intersection() {
    let mut latch = RevealLatch::default();
    assert!(!latch.trigger(false));
    assert!(!latch.fired());
    assert!(latch.trigger(true));
    assert!(latch.fired());
    // scrolling away and back never re-fires
    for visible in [false, true, true, false, true] {
        assert!(!latch.trigger(visible));
    }
    assert!(latch.fired());
}

#[test]
fn default_options() {
    let opts = RevealOptions::default();
    assert_eq!(opts.threshold, 0.2);
    assert_eq!(opts.root_margin, "0px");
    assert_eq!(opts.delay_ms, 0);
}

#[test]
fn work_cards_are_staggered_by_150ms() {
    let delays: Vec<i32> = REVEAL_PLAN
        .iter()
        .filter(|s| s.selector.starts_with(".work-card"))
        .map(|s| s.options.delay_ms)
        .collect();
    assert_eq!(delays, vec![0, 150, 300, 450, 600]);
}

#[test]
fn section_headers_use_the_heading_threshold_and_hook() {
    let header = REVEAL_PLAN
        .iter()
        .find(|s| s.selector == ".section-header")
        .expect("section header row");
    assert_eq!(header.options.threshold, 0.3);
    assert_eq!(header.hook, RevealHook::SectionHeader);
}

#[test]
fn plan_rows_reveal_with_the_visible_class() {
    for row in REVEAL_PLAN {
        assert_eq!(row.class, "visible-reveal");
        assert!(row.options.delay_ms >= 0);
        assert!(!row.selector.is_empty());
    }
    let social = REVEAL_PLAN
        .iter()
        .find(|s| s.selector == ".social-links a")
        .expect("social row");
    assert_eq!(social.options.delay_ms, 600);
    assert_eq!(social.hook, RevealHook::Transition("all 0.3s ease"));
}

#[test]
fn letters_keep_spaces_as_nbsp() {
    let cells = split_letters("  My Work ");
    assert_eq!(cells.len(), 7);
    assert_eq!(cells[2], "\u{00A0}");
    assert_eq!(cells.concat(), "My\u{00A0}Work");
    assert!(split_letters("   ").is_empty());
}

#[test]
fn letter_delays_step_by_50ms() {
    assert_eq!(letter_delay_ms(0), 0);
    assert_eq!(letter_delay_ms(1), 50);
    assert_eq!(letter_delay_ms(10), 500);
}
