#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use web_sys as web;

pub mod animate;
pub mod config;
pub mod constants;
pub mod content;
pub mod dom;
pub mod effects;
pub mod fx;
pub mod media;
pub mod ownership;
pub mod player;
pub mod profile;
pub mod profile_image;
pub mod reveal;
pub mod route;
pub mod router;
pub mod tabs;
pub mod video;
pub mod viewer;

use config::SiteConfig;

fn read_config(document: &web::Document) -> SiteConfig {
    let Some(body) = document.body() else {
        return SiteConfig::default();
    };
    let (config, rejected) = SiteConfig::from_lookup(|attr| body.get_attribute(attr));
    for attr in rejected {
        log::warn!(
            "[config] ignoring invalid {}={:?}",
            attr,
            body.get_attribute(attr).unwrap_or_default()
        );
    }
    log::debug!("[config] {:?}", config);
    config
}

fn run_step(name: &str, result: anyhow::Result<()>) {
    if let Err(e) = result {
        log::error!("[init] {} failed: {:?}", name, e);
    }
}

/// Wire every page behavior. Each step is independent; a failing one is
/// logged and the rest still run.
fn init(document: &web::Document) {
    let config = read_config(document);

    run_step("router", router::setup(document));
    run_step("tabs", tabs::setup(document));
    run_step("text animation", animate::setup_text_animation(document, &config));
    run_step("scroll reveal", animate::setup_scroll_reveal(document));
    run_step("video", media::setup_video_control(document, &config));
    run_step("mouse trail", effects::setup_mouse_trail(document, &config));
    run_step("signature", animate::setup_signature(document));
    run_step("profile image", profile_image::setup(document));
    run_step("hero carousel", effects::setup_hero_carousel(document, &config));
    run_step("audio player", media::setup_audio_player(document, &config));
    run_step("deco shapes", effects::setup_deco_shapes(document, &config));

    router::follow_initial_hash(document);
    log::info!("[init] page ready");
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        let doc = document.clone();
        dom::listen_once(&document, "DOMContentLoaded", move |_: web::Event| init(&doc));
    } else {
        init(&document);
    }
    Ok(())
}
