// Host-side tests for the view router's pure model.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod route {
    include!("../src/route.rs");
}

use route::*;

fn site() -> ViewModel {
    ViewModel::new(["fine-arts", "video-editing", "colored-works"])
}

fn assert_exclusive(model: &ViewModel) {
    let shown = model.pages().iter().filter(|p| model.is_visible(p)).count();
    assert!(shown <= 1, "more than one detail page visible");
    assert_eq!(model.main_visible(), shown == 0);
    assert_eq!(model.visible_count(), shown);
}

#[test]
fn starts_on_main() {
    let model = site();
    assert!(model.main_visible());
    assert_eq!(model.route(), Route::Main);
    assert_exclusive(&model);
}

#[test]
fn navigate_shows_exactly_one_page() {
    let mut model = site();
    let route = model.navigate("video-editing");
    assert_eq!(route, Some(Route::Detail("video-editing".into())));
    assert!(model.is_visible("video-editing"));
    assert!(!model.main_visible());
    assert_exclusive(&model);

    model.navigate("fine-arts");
    assert!(model.is_visible("fine-arts"));
    assert!(!model.is_visible("video-editing"));
    assert_exclusive(&model);
}

#[test]
fn unknown_id_changes_nothing() {
    let mut model = site();
    model.navigate("colored-works");
    assert_eq!(model.navigate("nope"), None);
    assert!(model.is_visible("colored-works"));
    assert_exclusive(&model);
}

#[test]
fn back_to_main_hides_all_pages() {
    let mut model = site();
    model.navigate("fine-arts");
    assert_eq!(model.navigate_to_main(), Route::Main);
    assert!(model.main_visible());
    assert_exclusive(&model);
}

#[test]
fn any_sequence_keeps_views_exclusive() {
    let mut model = site();
    let steps = [
        "fine-arts", "", "missing", "video-editing", "video-editing", "colored-works",
    ];
    for (i, id) in steps.iter().enumerate() {
        if i % 3 == 2 {
            model.navigate_to_main();
        } else {
            model.navigate(id);
        }
        assert_exclusive(&model);
    }
}

#[test]
fn follow_hash_resolves_known_and_falls_back() {
    let mut model = site();
    assert_eq!(
        model.follow_hash("#colored-works"),
        Route::Detail("colored-works".into())
    );
    assert_eq!(model.follow_hash("#unknown"), Route::Main);
    assert!(model.main_visible());
    model.navigate("fine-arts");
    assert_eq!(model.follow_hash(""), Route::Main);
}

#[test]
fn hash_parsing() {
    assert_eq!(detail_id_from_hash("#fine-arts"), Some("fine-arts"));
    assert_eq!(detail_id_from_hash("fine-arts"), Some("fine-arts"));
    assert_eq!(detail_id_from_hash("#"), None);
    assert_eq!(detail_id_from_hash(""), None);
    assert_eq!(detail_id_from_hash("#  "), None);
}

#[test]
fn element_ids_map_both_ways() {
    assert_eq!(detail_element_id("fine-arts"), "detail-fine-arts");
    assert_eq!(detail_id_from_element_id("detail-fine-arts"), Some("fine-arts"));
    assert_eq!(detail_id_from_element_id("detail-"), None);
    assert_eq!(detail_id_from_element_id("fine-arts"), None);
}

#[test]
fn history_entries() {
    let push = history_push(&Route::Detail("fine-arts".into()), "/index.html");
    assert_eq!(push.page, "fine-arts");
    assert_eq!(push.url, "#fine-arts");

    let push = history_push(&Route::Main, "/index.html");
    assert_eq!(push.page, "main");
    assert_eq!(push.url, "/index.html");
}

#[test]
fn duplicate_and_empty_page_ids_are_dropped() {
    let model = ViewModel::new(["a", "", "a", "b"]);
    assert_eq!(model.pages(), &["a".to_string(), "b".to_string()]);
}
