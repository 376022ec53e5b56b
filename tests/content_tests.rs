// Host-side tests for the project content registry.

#![allow(dead_code)]
mod content {
    include!("../src/content.rs");
}

use content::*;

#[test]
fn every_project_round_trips_through_its_id() {
    for p in Project::ALL {
        assert_eq!(Project::from_id(p.id()), Some(p));
        assert!(!p.html().trim().is_empty());
        assert_ne!(p.html(), NOT_FOUND_HTML);
    }
}

#[test]
fn unknown_ids_get_not_found() {
    assert_eq!(subpage_content("sculpture"), NOT_FOUND_HTML);
    assert_eq!(subpage_content(""), NOT_FOUND_HTML);
    assert_eq!(subpage_content("Fine-Arts"), NOT_FOUND_HTML);
}

#[test]
fn known_ids_get_their_fragment() {
    assert!(subpage_content("fine-arts").contains("Hyperrealism"));
    assert!(subpage_content("video-editing").contains("iframe"));
}
