use crate::constants::{
    ACTIVE_CLASS, BODY_DETAIL_CLASS, DEEP_LINK_DELAY_MS, DETAIL_CONTAINER_ID,
    DETAIL_CONTENT_SELECTOR, DETAIL_PAGE_SELECTOR, DETAIL_SHOW_DELAY_MS, VIEW_BUTTON_SELECTOR,
    WORK_CARD_SELECTOR,
};
use crate::content;
use crate::dom;
use crate::route::{self, detail_id_from_element_id, Route, ViewModel};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone, Copy, PartialEq, Eq)]
enum History {
    Push,
    Keep,
}

/// Detail pages currently in the document, paired with their detail ids.
fn scan_pages(document: &web::Document) -> (ViewModel, Vec<(String, web::Element)>) {
    let pages: Vec<(String, web::Element)> = dom::query_all(document, DETAIL_PAGE_SELECTOR)
        .into_iter()
        .filter_map(|el| {
            let id = detail_id_from_element_id(&el.id())?.to_string();
            Some((id, el))
        })
        .collect();
    let model = ViewModel::new(pages.iter().map(|(id, _)| id.clone()));
    (model, pages)
}

fn push_history(route: &Route) {
    let Some(window) = web::window() else {
        return;
    };
    let Ok(history) = window.history() else {
        return;
    };
    let path = window.location().pathname().unwrap_or_default();
    let entry = route::history_push(route, &path);
    let state = js_sys::Object::new();
    if let Err(e) = js_sys::Reflect::set(&state, &"page".into(), &entry.page.as_str().into()) {
        log::warn!("[router] history state write failed: {:?}", e);
    }
    if let Err(e) = history.push_state_with_url(&state, "", Some(&entry.url)) {
        log::warn!("[router] pushState failed: {:?}", e);
    }
}

fn fill_detail_content(page: &web::Element, detail_id: &str) {
    if let Some(slot) = dom::query(page, DETAIL_CONTENT_SELECTOR) {
        if slot.inner_html().trim().is_empty() {
            slot.set_inner_html(content::subpage_content(detail_id));
        }
    }
}

fn apply(document: &web::Document, route: &Route, pages: &[(String, web::Element)]) {
    for (_, el) in pages {
        dom::remove_class(el, ACTIVE_CLASS);
    }
    let container = document.get_element_by_id(DETAIL_CONTAINER_ID);
    let body = document.body();

    match route {
        Route::Main => {
            if let Some(c) = &container {
                dom::remove_class(c, ACTIVE_CLASS);
            }
            if let Some(b) = &body {
                dom::remove_class(b, BODY_DETAIL_CLASS);
            }
            dom::scroll_to_top();
        }
        Route::Detail(id) => {
            if let Some(b) = &body {
                dom::add_class(b, BODY_DETAIL_CLASS);
            }
            if let Some(c) = &container {
                dom::add_class(c, ACTIVE_CLASS);
            }
            if let Some((_, target)) = pages.iter().find(|(pid, _)| pid == id) {
                fill_detail_content(target, id);
                let target = target.clone();
                dom::set_timeout(DETAIL_SHOW_DELAY_MS, move || {
                    dom::add_class(&target, ACTIVE_CLASS);
                    dom::scroll_to_top();
                });
            }
        }
    }
}

fn go_detail(detail_id: &str, history: History) -> bool {
    let Some(document) = dom::window_document() else {
        return false;
    };
    let (mut model, pages) = scan_pages(&document);
    let Some(route) = model.navigate(detail_id) else {
        log::warn!("[router] no detail page for '{}'", detail_id);
        return false;
    };
    apply(&document, &route, &pages);
    if history == History::Push {
        push_history(&route);
    }
    log::info!("[router] showing {}", detail_id);
    true
}

fn go_main(history: History) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let (mut model, pages) = scan_pages(&document);
    let route = model.navigate_to_main();
    apply(&document, &route, &pages);
    if history == History::Push {
        push_history(&route);
    }
}

/// Show the detail page `detail-<target_id>`, hiding the main view and every
/// other detail page, and push `#<target_id>` onto the history. Returns
/// `false` (and changes nothing) when no such page exists.
#[wasm_bindgen]
pub fn navigate(target_id: &str) -> bool {
    go_detail(target_id, History::Push)
}

/// Return to the main view and push the bare path onto the history.
#[wasm_bindgen(js_name = navigateToMain)]
pub fn navigate_to_main() {
    go_main(History::Push);
}

fn on_popstate() {
    let Some(window) = web::window() else {
        return;
    };
    let hash = window.location().hash().unwrap_or_default();
    let Some(document) = window.document() else {
        return;
    };
    let (mut model, pages) = scan_pages(&document);
    let route = model.follow_hash(&hash);
    apply(&document, &route, &pages);
}

fn card_id(card: &web::Element) -> Option<String> {
    card.get_attribute("data-card-id")
        .filter(|id| !id.trim().is_empty())
}

/// True when the click landed on a link inside `card`.
fn is_link_click(ev: &web::MouseEvent, card: &web::Element) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .and_then(|el| el.closest("a").ok().flatten())
        .map(|link| {
            let node: &web::Node = &link;
            card.contains(Some(node))
        })
        .unwrap_or(false)
}

pub fn setup(document: &web::Document) -> anyhow::Result<()> {
    let cards = dom::query_all(document, WORK_CARD_SELECTOR);
    for card in &cards {
        dom::set_style(card, "cursor", "pointer");
        let card_for_click = card.clone();
        dom::listen(card, "click", move |ev: web::MouseEvent| {
            if is_link_click(&ev, &card_for_click) {
                return;
            }
            if let Some(id) = card_id(&card_for_click) {
                navigate(&id);
            }
        });
    }

    for button in dom::query_all(document, VIEW_BUTTON_SELECTOR) {
        let button_for_click = button.clone();
        dom::listen(&button, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            // the enclosing card would otherwise navigate a second time
            ev.stop_propagation();
            let card = button_for_click
                .closest(WORK_CARD_SELECTOR)
                .ok()
                .flatten();
            if let Some(id) = card.as_ref().and_then(card_id) {
                navigate(&id);
            }
        });
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    dom::listen(&window, "popstate", move |_: web::PopStateEvent| on_popstate());

    log::info!("[router] wired {} cards", cards.len());
    Ok(())
}

/// Apply a `#<detailId>` present at load once layout has settled.
pub fn follow_initial_hash(document: &web::Document) {
    let Some(window) = web::window() else {
        return;
    };
    let hash = window.location().hash().unwrap_or_default();
    let Some(id) = route::detail_id_from_hash(&hash).map(str::to_string) else {
        return;
    };
    let (model, _) = scan_pages(document);
    if !model.knows(&id) {
        log::warn!("[router] ignoring unknown deep link #{}", id);
        return;
    }
    dom::set_timeout(DEEP_LINK_DELAY_MS, move || {
        go_detail(&id, History::Keep);
    });
}
