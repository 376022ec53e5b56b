use crate::constants::{
    PLACEHOLDER_AVATAR_CLASS, PLACEHOLDER_AVATAR_TEXT, PROFILE_IMAGE_ID, PROFILE_LOCAL_FALLBACK,
};
use crate::dom;
use crate::profile::{FallbackChain, FallbackStep};
use wasm_bindgen::JsCast;
use web_sys as web;

fn show_placeholder(document: &web::Document, img: &web::HtmlImageElement) {
    let Some(parent) = img.parent_element() else {
        return;
    };
    let Ok(placeholder) = document.create_element("div") else {
        return;
    };
    placeholder.set_class_name(PLACEHOLDER_AVATAR_CLASS);
    placeholder.set_text_content(Some(PLACEHOLDER_AVATAR_TEXT));
    _ = parent.append_child(&placeholder);
}

/// Walk the profile picture through its fallback sources on load errors and
/// swap in a text avatar when they are exhausted.
pub fn setup(document: &web::Document) -> anyhow::Result<()> {
    let Some(img) = document
        .get_element_by_id(PROFILE_IMAGE_ID)
        .and_then(|el| el.dyn_into::<web::HtmlImageElement>().ok())
    else {
        log::warn!("[profile] #{} not found", PROFILE_IMAGE_ID);
        return Ok(());
    };
    img.set_cross_origin(Some("anonymous"));

    let mut chain = FallbackChain::new([img.src(), PROFILE_LOCAL_FALLBACK.to_string()]);
    let (doc, img_c) = (document.clone(), img.clone());
    dom::listen(&img, "error", move |_: web::Event| match chain.on_error() {
        FallbackStep::Retry(src) => {
            log::warn!("[profile] image failed, trying {}", src);
            img_c.set_src(&src);
        }
        FallbackStep::GiveUp => {
            dom::set_style(&img_c, "display", "none");
            if chain.take_placeholder() {
                log::error!("[profile] all image sources failed");
                show_placeholder(&doc, &img_c);
            }
        }
    });
    Ok(())
}
