use crate::constants::{ACTIVE_CLASS, TAB_BUTTON_SELECTOR, TAB_CONTENT_SELECTOR, VIEWER_TAB_ID};
use crate::dom;
use crate::viewer;
use web_sys as web;

fn tab_id(button: &web::Element) -> Option<String> {
    button.get_attribute("data-tab").filter(|t| !t.is_empty())
}

fn activate(document: &web::Document, buttons: &[web::Element], button: &web::Element) {
    let contents = dom::query_all(document, TAB_CONTENT_SELECTOR);
    for b in buttons {
        dom::remove_class(b, ACTIVE_CLASS);
    }
    for c in &contents {
        dom::remove_class(c, ACTIVE_CLASS);
    }
    dom::add_class(button, ACTIVE_CLASS);

    let Some(id) = tab_id(button) else {
        return;
    };
    match document.get_element_by_id(&id) {
        Some(content) => dom::add_class(&content, ACTIVE_CLASS),
        None => log::warn!("[tabs] no content for tab '{}'", id),
    }
    if id == VIEWER_TAB_ID {
        viewer::init_once(document);
    }
}

pub fn setup(document: &web::Document) -> anyhow::Result<()> {
    let buttons = dom::query_all(document, TAB_BUTTON_SELECTOR);
    if buttons.is_empty() {
        return Ok(());
    }
    for button in &buttons {
        let (doc, all, button_c) = (document.clone(), buttons.clone(), button.clone());
        dom::listen(button, "click", move |_: web::MouseEvent| {
            activate(&doc, &all, &button_c);
        });
    }

    let initially_active = document
        .query_selector(&format!("{TAB_BUTTON_SELECTOR}.{ACTIVE_CLASS}"))
        .ok()
        .flatten()
        .and_then(|b| tab_id(&b));
    if initially_active.as_deref() == Some(VIEWER_TAB_ID) {
        viewer::init_once(document);
    }
    Ok(())
}
