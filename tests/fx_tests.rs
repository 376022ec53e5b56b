// Host-side tests for the decorative effect models.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod fx {
    include!("../src/fx.rs");
}

use fx::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const COUNTS: ShapeCounts = ShapeCounts {
    circles: 6,
    squares: 4,
    lines: 5,
};

#[test]
fn trail_breakpoint_and_sampling() {
    assert!(!trail_enabled(767.0, 768.0));
    assert!(trail_enabled(768.0, 768.0));
    assert!(!should_spawn_dot(0.6, 0.6));
    assert!(should_spawn_dot(0.61, 0.6));
    assert!(!should_spawn_dot(0.1, 0.6));
}

#[test]
fn shapes_come_in_requested_counts_and_order() {
    let mut rng = StdRng::seed_from_u64(7);
    let shapes = generate_shapes(&mut rng, COUNTS);
    assert_eq!(shapes.len(), 15);
    assert!(shapes[..6].iter().all(|s| s.kind == ShapeKind::Circle));
    assert!(shapes[6..10].iter().all(|s| s.kind == ShapeKind::Square));
    assert!(shapes[10..].iter().all(|s| s.kind.is_line()));
}

#[test]
fn shape_parameters_stay_in_range() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        for shape in generate_shapes(&mut rng, COUNTS) {
            assert!(shape.color == "#00FFFF" || shape.color == "#FF1744");
            match shape.kind {
                ShapeKind::Circle => {
                    assert!((40.0..120.0).contains(&shape.size));
                    assert!((0.0..100.0).contains(&shape.left_pct));
                }
                ShapeKind::Square => {
                    assert!((30.0..90.0).contains(&shape.size));
                    assert!((0.0..100.0).contains(&shape.top_pct));
                }
                ShapeKind::HorizontalLine | ShapeKind::VerticalLine => {
                    assert!((20.0..60.0).contains(&shape.size));
                    assert!((0.0..80.0).contains(&shape.left_pct));
                    assert!((0.0..80.0).contains(&shape.top_pct));
                    assert_eq!(shape.animation_delay_sec, None);
                }
            }
        }
    }
}

#[test]
fn animation_delays_step_per_kind() {
    let mut rng = StdRng::seed_from_u64(1);
    let shapes = generate_shapes(&mut rng, COUNTS);
    assert_eq!(shapes[0].animation_delay_sec, Some(0.0));
    assert_eq!(shapes[2].animation_delay_sec, Some(1.0));
    assert_eq!(shapes[7].animation_delay_sec, Some(0.7));
}

#[test]
fn style_pairs_by_kind() {
    let line = ShapeSpec {
        kind: ShapeKind::VerticalLine,
        size: 30.0,
        left_pct: 10.0,
        top_pct: 20.0,
        color: "#FF1744",
        animation_delay_sec: None,
    };
    let styles = line.style_pairs();
    assert!(styles.contains(&("height", "30%".to_string())));
    assert!(styles.contains(&("border-top-color", "#FF1744".to_string())));
    assert!(!styles.iter().any(|(k, _)| *k == "animation-delay"));

    let circle = ShapeSpec {
        kind: ShapeKind::Circle,
        animation_delay_sec: Some(1.5),
        ..line
    };
    let styles = circle.style_pairs();
    assert!(styles.contains(&("width", "30px".to_string())));
    assert!(styles.contains(&("animation-delay", "1.5s".to_string())));
}

#[test]
fn carousel_wraps_around() {
    assert!(Carousel::new(0).is_none());
    let mut c = Carousel::new(3).expect("non-empty");
    assert_eq!(c.current(), 0);
    assert_eq!(c.advance(), (0, 1));
    assert_eq!(c.advance(), (1, 2));
    assert_eq!(c.advance(), (2, 0));

    let mut single = Carousel::new(1).expect("non-empty");
    assert_eq!(single.advance(), (0, 0));
}

#[test]
fn word_cycle_trims_and_wraps() {
    let mut words = WordCycle::parse(" Designer, Artist ,, Editor").expect("words");
    assert_eq!(words.len(), 3);
    assert_eq!(words.next_word(), "Artist");
    assert_eq!(words.next_word(), "Editor");
    assert_eq!(words.next_word(), "Designer");
    assert!(WordCycle::parse(" , ,").is_none());
    assert!(WordCycle::parse("").is_none());
}
