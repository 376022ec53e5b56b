#![cfg(target_arch = "wasm32")]

use portfolio_web::dom;
use portfolio_web::ownership::Effect;
use portfolio_web::router;
use std::sync::Once;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys as web;

wasm_bindgen_test_configure!(run_in_browser);

const FIXTURE: &str = r#"
<div id="detail-pages">
  <section class="detail-page" id="detail-fine-arts"><div class="detail-content"></div></section>
  <section class="detail-page" id="detail-video-editing"><div class="detail-content"></div></section>
  <section class="detail-page" id="detail-unlisted"><div class="detail-content"></div></section>
</div>
"#;

fn document() -> web::Document {
    web::window().unwrap().document().unwrap()
}

fn mount() -> web::Element {
    let doc = document();
    if let Some(old) = doc.get_element_by_id("fixture") {
        old.remove();
    }
    let root = doc.create_element("div").unwrap();
    root.set_id("fixture");
    root.set_inner_html(FIXTURE);
    doc.body().unwrap().append_child(&root).unwrap();
    root
}

fn has_class(id: &str, class: &str) -> bool {
    document()
        .get_element_by_id(id)
        .map(|el| el.class_list().contains(class))
        .unwrap_or(false)
}

fn active_pages() -> Vec<String> {
    let list = document().query_selector_all(".detail-page.active").unwrap();
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .map(|el| el.id())
        .collect()
}

static ROUTER_WIRED: Once = Once::new();

fn wire_router() {
    ROUTER_WIRED.call_once(|| router::setup(&document()).unwrap());
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test(async)]
async fn navigate_shows_one_page_and_fills_content() {
    let root = mount();
    assert!(router::navigate("fine-arts"));
    sleep(120).await;

    assert_eq!(active_pages(), vec!["detail-fine-arts".to_string()]);
    assert!(has_class("detail-pages", "active"));
    let body = document().body().unwrap();
    assert!(body.class_list().contains("detail-page-active"));
    let content = root
        .query_selector("#detail-fine-arts .detail-content")
        .unwrap()
        .unwrap();
    assert!(content.inner_html().contains("Hyperrealism"));

    assert!(router::navigate("video-editing"));
    sleep(120).await;
    assert_eq!(active_pages(), vec!["detail-video-editing".to_string()]);

    router::navigate_to_main();
    root.remove();
}

#[wasm_bindgen_test(async)]
async fn unregistered_project_gets_not_found_fragment() {
    let root = mount();
    assert!(router::navigate("unlisted"));
    sleep(120).await;
    let content = root
        .query_selector("#detail-unlisted .detail-content")
        .unwrap()
        .unwrap();
    assert!(content.inner_html().contains("Content not found"));
    router::navigate_to_main();
    root.remove();
}

#[wasm_bindgen_test(async)]
async fn unknown_id_is_a_no_op() {
    let root = mount();
    assert!(router::navigate("fine-arts"));
    sleep(120).await;

    assert!(!router::navigate("does-not-exist"));
    sleep(120).await;
    assert_eq!(active_pages(), vec!["detail-fine-arts".to_string()]);

    router::navigate_to_main();
    root.remove();
}

#[wasm_bindgen_test(async)]
async fn back_to_main_hides_every_page() {
    let root = mount();
    assert!(router::navigate("video-editing"));
    sleep(120).await;

    router::navigate_to_main();
    assert!(active_pages().is_empty());
    assert!(!has_class("detail-pages", "active"));
    assert!(!document().body().unwrap().class_list().contains("detail-page-active"));
    root.remove();
}

#[wasm_bindgen_test(async)]
async fn deep_link_opens_its_page_after_load() {
    let root = mount();
    let history = web::window().unwrap().history().unwrap();
    history
        .replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some("#fine-arts"))
        .unwrap();

    router::follow_initial_hash(&document());
    sleep(250).await;
    assert_eq!(active_pages(), vec!["detail-fine-arts".to_string()]);
    assert!(document().body().unwrap().class_list().contains("detail-page-active"));

    router::navigate_to_main();
    let path = web::window().unwrap().location().pathname().unwrap();
    history
        .replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path))
        .unwrap();
    root.remove();
}

#[wasm_bindgen_test(async)]
async fn popstate_to_bare_path_shows_main() {
    let root = mount();
    wire_router();
    assert!(router::navigate("fine-arts"));
    sleep(120).await;
    assert_eq!(active_pages(), vec!["detail-fine-arts".to_string()]);

    let window = web::window().unwrap();
    let path = window.location().pathname().unwrap();
    window
        .history()
        .unwrap()
        .replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path))
        .unwrap();
    let event = web::PopStateEvent::new("popstate").unwrap();
    window.dispatch_event(&event).unwrap();

    assert!(active_pages().is_empty());
    assert!(!has_class("detail-pages", "active"));
    assert!(!document().body().unwrap().class_list().contains("detail-page-active"));
    root.remove();
}

#[wasm_bindgen_test]
fn an_element_has_one_owning_effect() {
    let el = document().create_element("h2").unwrap();
    assert!(dom::claim(&el, Effect::LetterHeading));
    assert!(!dom::claim(&el, Effect::HeaderSlide));
    assert!(dom::claim(&el, Effect::LetterHeading));
    assert!(el.has_attribute("data-fx-key"));
}
