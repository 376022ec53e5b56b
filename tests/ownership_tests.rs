// Host-side tests for element ownership between effects.

#![allow(dead_code)]
mod ownership {
    include!("../src/ownership.rs");
}

use ownership::*;

#[test]
fn first_claimer_keeps_the_element() {
    let mut map = OwnershipMap::new();
    let key = map.allocate_key();
    assert!(map.claim(key, Effect::LetterHeading));
    assert!(!map.claim(key, Effect::HeaderSlide));
    assert!(map.claim(key, Effect::LetterHeading));
    assert_eq!(map.owner(key), Some(Effect::LetterHeading));
    assert_eq!(map.len(), 1);
}

#[test]
fn keys_are_unique() {
    let mut map = OwnershipMap::new();
    let a = map.allocate_key();
    let b = map.allocate_key();
    assert_ne!(a, b);
    assert!(map.is_empty());
    assert!(map.claim(a, Effect::Reveal));
    assert!(map.claim(b, Effect::Carousel));
    assert_eq!(map.owner(b), Some(Effect::Carousel));
}
