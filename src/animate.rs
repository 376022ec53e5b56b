use crate::config::SiteConfig;
use crate::constants::{
    ANIMATED_ATTR, ANIMATE_CLASS, HEADING_THRESHOLD, HEADLINE_SELECTOR, HIDDEN_REVEAL_CLASS,
    LETTER_HIDDEN_TRANSFORM, LETTER_SHOWN_TRANSFORM, LETTER_TRANSITION, LINE_EXPAND_DELAY_MS,
    SECTION_HEADING_SELECTOR, SIGNATURE_SECTION_ID, SIGNATURE_SVG_ID, SIGNATURE_THRESHOLD,
    SIGNATURE_UNDERLINE_DELAY_MS, SIGNATURE_UNDERLINE_SELECTOR, WORD_CYCLE_START_DELAY_MS,
    WORD_SWAP_FADE_MS, WORD_SWITCHER_SELECTOR,
};
use crate::dom;
use crate::fx::WordCycle;
use crate::ownership::Effect;
use crate::reveal::{self, RevealHook, RevealLatch, RevealOptions, RevealSpec, REVEAL_PLAN};
use fnv::FnvHashMap;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Watch `elements` and call `on_visible` once per element, `delay_ms` after
/// it first crosses the visibility threshold. The element is unobserved at
/// that point, so later intersections never fire again.
///
/// Browsers without `IntersectionObserver` get every element revealed
/// straight away.
pub fn observe_once(
    elements: Vec<web::Element>,
    options: RevealOptions,
    on_visible: impl Fn(&web::Element) + 'static,
) {
    if elements.is_empty() {
        return;
    }
    let on_visible = Rc::new(on_visible);
    let latches: Rc<RefCell<FnvHashMap<u32, RevealLatch>>> =
        Rc::new(RefCell::new(FnvHashMap::default()));
    let delay_ms = options.delay_ms;

    let latches_cb = latches.clone();
    let on_visible_cb = on_visible.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let key = dom::element_key(&target);
                let fire = latches_cb
                    .borrow_mut()
                    .entry(key)
                    .or_default()
                    .trigger(entry.is_intersecting());
                if !fire {
                    continue;
                }
                observer.unobserve(&target);
                let f = on_visible_cb.clone();
                dom::set_timeout(delay_ms, move || (*f)(&target));
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);

    match web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            for el in &elements {
                observer.observe(el);
            }
            callback.forget();
        }
        Err(e) => {
            log::warn!("[reveal] IntersectionObserver unavailable ({:?}); revealing now", e);
            for el in elements {
                let key = dom::element_key(&el);
                if latches.borrow_mut().entry(key).or_default().trigger(true) {
                    let f = on_visible.clone();
                    dom::set_timeout(delay_ms, move || (*f)(&el));
                }
            }
        }
    }
}

fn run_hook(el: &web::Element, hook: RevealHook) {
    match hook {
        RevealHook::None => {}
        RevealHook::Transition(value) => dom::set_style(el, "transition", value),
        RevealHook::SectionHeader => {
            if let Some(h2) = dom::query(el, "h2") {
                if dom::claim(&h2, Effect::HeaderSlide) {
                    dom::set_style(&h2, "animation", "slideInFromLeft 0.8s ease-out forwards");
                }
            }
            if let Some(line) = dom::query(el, ".line") {
                dom::set_timeout(LINE_EXPAND_DELAY_MS, move || {
                    dom::set_style(&line, "animation", "lineExpand 1s ease-out forwards");
                });
            }
        }
    }
}

/// Hide every match of `spec.selector` now and reveal each as it scrolls in.
pub fn reveal_on_scroll(document: &web::Document, spec: RevealSpec) -> usize {
    let elements: Vec<web::Element> = dom::query_all(document, spec.selector)
        .into_iter()
        .filter(|el| dom::claim(el, Effect::Reveal))
        .collect();
    for el in &elements {
        dom::add_class(el, HIDDEN_REVEAL_CLASS);
    }
    let count = elements.len();
    let class = spec.class;
    let hook = spec.hook;
    observe_once(elements, spec.options, move |el| {
        dom::add_class(el, class);
        run_hook(el, hook);
    });
    count
}

pub fn setup_scroll_reveal(document: &web::Document) -> anyhow::Result<()> {
    let total: usize = REVEAL_PLAN
        .iter()
        .map(|spec| reveal_on_scroll(document, *spec))
        .sum();
    log::info!("[reveal] observing {} elements", total);
    Ok(())
}

/// Rebuild `header` as one inline span per character and fade them in with a
/// per-character stagger.
pub fn animate_header_letters(header: &web::Element) {
    let Some(document) = header.owner_document() else {
        return;
    };
    let text = header.text_content().unwrap_or_default();
    header.set_text_content(Some(""));
    dom::set_style(header, "opacity", "1");
    dom::set_style(header, "transform", "none");

    for (index, letter) in reveal::split_letters(&text).into_iter().enumerate() {
        let Ok(span) = document.create_element("span") else {
            continue;
        };
        span.set_text_content(Some(&letter));
        dom::set_style(&span, "display", "inline-block");
        dom::set_style(&span, "opacity", "0");
        dom::set_style(&span, "transform", LETTER_HIDDEN_TRANSFORM);
        _ = header.append_child(&span);

        dom::set_timeout(reveal::letter_delay_ms(index), move || {
            dom::set_style(&span, "transition", LETTER_TRANSITION);
            dom::set_style(&span, "opacity", "1");
            dom::set_style(&span, "transform", LETTER_SHOWN_TRANSFORM);
        });
    }
}

pub fn animate_section_headers(document: &web::Document) -> anyhow::Result<()> {
    let headers: Vec<web::Element> = dom::query_all(document, SECTION_HEADING_SELECTOR)
        .into_iter()
        .filter(|h| dom::claim(h, Effect::LetterHeading))
        .collect();
    let options = RevealOptions {
        threshold: HEADING_THRESHOLD,
        ..RevealOptions::default()
    };
    observe_once(headers, options, |header| {
        if header.has_attribute(ANIMATED_ATTR) {
            return;
        }
        _ = header.set_attribute(ANIMATED_ATTR, "true");
        animate_header_letters(header);
    });
    Ok(())
}

/// Cycle the last `.word-switcher` of the headline through
/// `data-animated-words`, then wire the letter-by-letter section headers.
pub fn setup_text_animation(document: &web::Document, config: &SiteConfig) -> anyhow::Result<()> {
    if let Some(headline) = document.query_selector(HEADLINE_SELECTOR).ok().flatten() {
        let raw = headline
            .get_attribute("data-animated-words")
            .unwrap_or_default();
        let target = dom::query_all_in(&headline, WORD_SWITCHER_SELECTOR).pop();
        match (WordCycle::parse(&raw), target) {
            (Some(mut cycle), Some(target)) if dom::claim(&target, Effect::WordCycle) => {
                let period = config.word_cycle_interval_ms;
                dom::set_timeout(WORD_CYCLE_START_DELAY_MS, move || {
                    dom::set_interval(period, move || {
                        let next = cycle.next_word().to_string();
                        dom::set_style(&target, "opacity", "0");
                        dom::set_style(&target, "transform", "translateY(10px)");
                        let target = target.clone();
                        dom::set_timeout(WORD_SWAP_FADE_MS, move || {
                            target.set_text_content(Some(&next));
                            dom::set_style(&target, "opacity", "1");
                            dom::set_style(&target, "transform", "translateY(0)");
                        });
                    });
                });
            }
            _ => log::warn!("[fx] headline has no words or switcher; not cycling"),
        }
    }

    animate_section_headers(document)
}

/// Draw the signature path when its section scrolls in, then the underline.
pub fn setup_signature(document: &web::Document) -> anyhow::Result<()> {
    let (Some(section), Some(svg)) = (
        document.get_element_by_id(SIGNATURE_SECTION_ID),
        document.get_element_by_id(SIGNATURE_SVG_ID),
    ) else {
        log::warn!("[fx] signature section missing");
        return Ok(());
    };
    if !dom::claim(&svg, Effect::Signature) {
        return Ok(());
    }
    let underline = document
        .query_selector(SIGNATURE_UNDERLINE_SELECTOR)
        .ok()
        .flatten();
    let options = RevealOptions {
        threshold: SIGNATURE_THRESHOLD,
        ..RevealOptions::default()
    };
    observe_once(vec![section], options, move |section| {
        if section.has_attribute(ANIMATED_ATTR) {
            return;
        }
        _ = section.set_attribute(ANIMATED_ATTR, "true");
        dom::add_class(&svg, ANIMATE_CLASS);
        if let Some(line) = underline.clone() {
            dom::set_timeout(SIGNATURE_UNDERLINE_DELAY_MS, move || {
                dom::add_class(&line, ANIMATE_CLASS);
            });
        }
    });
    Ok(())
}
