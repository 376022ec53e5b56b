#![cfg(target_arch = "wasm32")]

use portfolio_web::{dom, viewer};
use wasm_bindgen_test::*;
use web_sys as web;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn missing_container_shows_fallback() {
    let doc = web::window().unwrap().document().unwrap();
    let fallback = doc.create_element("div").unwrap();
    fallback.set_id("canvas-fallback");
    fallback.set_attribute("style", "display: none").unwrap();
    doc.body().unwrap().append_child(&fallback).unwrap();
    assert!(doc.get_element_by_id("canvas-container").is_none());

    viewer::init_once(&doc);

    assert_eq!(dom::style_value(&fallback, "display"), "block");
    fallback.remove();
}
