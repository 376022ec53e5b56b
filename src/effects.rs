use crate::config::SiteConfig;
use crate::constants::{
    ACTIVE_CLASS, DECO_CONTAINER_ID, HERO_SLIDE_SELECTOR, TRAIL_CONTAINER_ID, TRAIL_DOT_CLASS,
    TRAIL_FADE_DELAY_MS, TRAIL_REMOVE_DELAY_MS,
};
use crate::dom;
use crate::fx::{self, Carousel, ShapeCounts};
use crate::ownership::Effect;
use web_sys as web;

fn spawn_dot(document: &web::Document, container: &web::Element, x: i32, y: i32) {
    let Ok(dot) = document.create_element("div") else {
        return;
    };
    dot.set_class_name(TRAIL_DOT_CLASS);
    dom::set_style(&dot, "left", &format!("{x}px"));
    dom::set_style(&dot, "top", &format!("{y}px"));
    _ = container.append_child(&dot);

    dom::set_timeout(TRAIL_FADE_DELAY_MS, move || {
        dom::set_style(&dot, "opacity", "0");
        dom::set_style(&dot, "transform", "scale(0.5)");
        dom::set_timeout(TRAIL_REMOVE_DELAY_MS, move || dot.remove());
    });
}

pub fn setup_mouse_trail(document: &web::Document, config: &SiteConfig) -> anyhow::Result<()> {
    let Some(container) = document.get_element_by_id(TRAIL_CONTAINER_ID) else {
        return Ok(());
    };
    let width = web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    if !fx::trail_enabled(width, config.trail_min_viewport_width) {
        log::info!("[fx] mouse trail off at {}px", width);
        return Ok(());
    }

    let skip = config.trail_skip_probability;
    let doc = document.clone();
    dom::listen(document, "mousemove", move |ev: web::MouseEvent| {
        if fx::should_spawn_dot(js_sys::Math::random(), skip) {
            spawn_dot(&doc, &container, ev.client_x(), ev.client_y());
        }
    });
    Ok(())
}

pub fn setup_deco_shapes(document: &web::Document, config: &SiteConfig) -> anyhow::Result<()> {
    let Some(container) = document.get_element_by_id(DECO_CONTAINER_ID) else {
        return Ok(());
    };
    let counts = ShapeCounts {
        circles: config.circle_count,
        squares: config.square_count,
        lines: config.line_count,
    };
    let shapes = fx::generate_shapes(&mut rand::thread_rng(), counts);
    for shape in &shapes {
        let el = document
            .create_element("div")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        el.set_class_name(shape.kind.class_name());
        for (prop, value) in shape.style_pairs() {
            dom::set_style(&el, prop, &value);
        }
        container
            .append_child(&el)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }
    log::info!("[fx] generated {} decorative shapes", shapes.len());
    Ok(())
}

pub fn setup_hero_carousel(document: &web::Document, config: &SiteConfig) -> anyhow::Result<()> {
    let slides: Vec<web::Element> = dom::query_all(document, HERO_SLIDE_SELECTOR)
        .into_iter()
        .filter(|s| dom::claim(s, Effect::Carousel))
        .collect();
    let Some(mut carousel) = Carousel::new(slides.len()) else {
        return Ok(());
    };
    dom::set_interval(config.carousel_interval_ms, move || {
        let (prev, next) = carousel.advance();
        dom::remove_class(&slides[prev], ACTIVE_CLASS);
        dom::add_class(&slides[next], ACTIVE_CLASS);
    });
    Ok(())
}
