use crate::ownership::{Effect, OwnershipMap};
use std::cell::RefCell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

const OWNER_KEY_ATTR: &str = "data-fx-key";

thread_local! {
    static OWNERS: RefCell<OwnershipMap> = RefCell::new(OwnershipMap::new());
}

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) -> bool {
    match document.get_element_by_id(element_id) {
        Some(el) => {
            listen(&el, "click", move |_: web::Event| handler());
            true
        }
        None => false,
    }
}

/// Attach `handler` for `event` on `target` for the page's lifetime.
pub fn listen<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Like [`listen`], but the browser drops the listener after its first call.
pub fn listen_once<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_once(true);
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

pub fn set_timeout(delay_ms: i32, handler: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let callback = Closure::once_into_js(handler);
    _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        delay_ms.max(0),
    );
}

pub fn set_interval(period_ms: i32, handler: impl FnMut() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    _ = window.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        period_ms.max(1),
    );
    closure.forget();
}

fn collect_elements(list: Result<web::NodeList, wasm_bindgen::JsValue>) -> Vec<web::Element> {
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

/// All elements matching `selector`; an invalid selector yields none.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    collect_elements(document.query_selector_all(selector))
}

pub fn query_all_in(root: &web::Element, selector: &str) -> Vec<web::Element> {
    collect_elements(root.query_selector_all(selector))
}

#[inline]
pub fn query(root: &web::Element, selector: &str) -> Option<web::Element> {
    root.query_selector(selector).ok().flatten()
}

#[inline]
pub fn set_style(el: &web::Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property(property, value);
    }
}

#[inline]
pub fn style_value(el: &web::Element, property: &str) -> String {
    el.dyn_ref::<web::HtmlElement>()
        .and_then(|html| html.style().get_property_value(property).ok())
        .unwrap_or_default()
}

#[inline]
pub fn add_class(el: &web::Element, class: &str) {
    _ = el.class_list().add_1(class);
}

#[inline]
pub fn remove_class(el: &web::Element, class: &str) {
    _ = el.class_list().remove_1(class);
}

pub fn scroll_to_top() {
    if let Some(window) = web::window() {
        let opts = web::ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(web::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&opts);
    }
}

/// Stable per-element key, stamped on first use.
pub fn element_key(el: &web::Element) -> u32 {
    if let Some(key) = el
        .get_attribute(OWNER_KEY_ATTR)
        .and_then(|raw| raw.parse::<u32>().ok())
    {
        return key;
    }
    let key = OWNERS.with(|o| o.borrow_mut().allocate_key());
    _ = el.set_attribute(OWNER_KEY_ATTR, &key.to_string());
    key
}

/// Claim mutation rights over `el` for `effect`. Returns `false` when another
/// effect already owns it; the caller must then leave the element alone.
pub fn claim(el: &web::Element, effect: Effect) -> bool {
    let key = element_key(el);
    let granted = OWNERS.with(|o| o.borrow_mut().claim(key, effect));
    if !granted {
        let owner = OWNERS.with(|o| o.borrow().owner(key));
        log::debug!("[fx] {:?} denied on element {} (owned by {:?})", effect, key, owner);
    }
    granted
}
