use crate::config::SiteConfig;
use crate::constants::{AUDIO_SOURCE, VIDEO_ID, VIDEO_PLAY_FAILED_ALERT, VIDEO_TOGGLE_ID};
use crate::dom;
use crate::player::{self, EndAction, PlayerState, RepeatMode};
use crate::video::{self, PlayAttempt, PlayFailure, VideoState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

// ---------------- Background video ----------------

fn update_video_label(video: &web::HtmlMediaElement, button: &web::Element) {
    let (text, aria) = video::toggle_labels(video.paused());
    button.set_text_content(Some(text));
    _ = button.set_attribute("aria-label", aria);
}

fn enable_video_audio(video: &web::HtmlMediaElement, state: &Rc<RefCell<VideoState>>, volume: f64) {
    if state.borrow_mut().enable_audio() {
        video.set_muted(false);
        if state.borrow_mut().take_volume() {
            video.set_volume(volume);
        }
        log::info!("[video] audio enabled");
    }
}

async fn try_play(video: &web::HtmlMediaElement) -> Result<(), wasm_bindgen::JsValue> {
    let promise = video.play()?;
    JsFuture::from(promise).await.map(|_| ())
}

/// Start playback; a rejection is retried once with muting forced off, and a
/// second rejection is reported to the user.
async fn play_with_retry(video: web::HtmlMediaElement, button: web::Element) {
    let mut attempt = PlayAttempt::First;
    loop {
        match try_play(&video).await {
            Ok(()) => {
                log::info!("[video] playing");
                update_video_label(&video, &button);
                return;
            }
            Err(e) => {
                log::error!("[video] play rejected ({:?}): {:?}", attempt, e);
                match video::on_play_rejected(attempt) {
                    PlayFailure::RetryUnmuted => {
                        video.set_muted(false);
                        attempt = PlayAttempt::RetryUnmuted;
                    }
                    PlayFailure::Alert => {
                        if let Some(w) = web::window() {
                            _ = w.alert_with_message(VIDEO_PLAY_FAILED_ALERT);
                        }
                        return;
                    }
                }
            }
        }
    }
}

pub fn setup_video_control(document: &web::Document, config: &SiteConfig) -> anyhow::Result<()> {
    let video = document
        .get_element_by_id(VIDEO_ID)
        .and_then(|el| el.dyn_into::<web::HtmlMediaElement>().ok());
    let button = document.get_element_by_id(VIDEO_TOGGLE_ID);
    let (Some(video), Some(button)) = (video, button) else {
        log::warn!("[video] video or toggle button not found");
        return Ok(());
    };
    let state = Rc::new(RefCell::new(VideoState::default()));
    let volume = config.video_volume;

    update_video_label(&video, &button);

    {
        let (video, button_c, state) = (video.clone(), button.clone(), state.clone());
        dom::listen(&button, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            ev.stop_propagation();
            enable_video_audio(&video, &state, volume);
            if video.paused() {
                spawn_local(play_with_retry(video.clone(), button_c.clone()));
            } else {
                _ = video.pause();
                log::info!("[video] paused");
                update_video_label(&video, &button_c);
            }
        });
    }

    // Autoplay policy: audio may only start after a user gesture.
    for event in video::AUDIO_UNLOCK_EVENTS {
        let (video, state) = (video.clone(), state.clone());
        dom::listen_once(document, event, move |_: web::Event| {
            enable_video_audio(&video, &state, volume);
        });
    }

    {
        let (video_c, button_c) = (video.clone(), button.clone());
        dom::listen(&video, "play", move |_: web::Event| {
            update_video_label(&video_c, &button_c);
        });
    }
    for event in ["pause", "ended"] {
        let (video_c, button_c) = (video.clone(), button.clone());
        dom::listen(&video, event, move |_: web::Event| {
            update_video_label(&video_c, &button_c);
        });
    }
    {
        let (video_c, state) = (video.clone(), state.clone());
        dom::listen(&video, "loadedmetadata", move |_: web::Event| {
            if state.borrow_mut().take_volume() {
                video_c.set_volume(volume);
            }
        });
    }

    log::info!("[video] controls wired");
    Ok(())
}

// ---------------- Floating audio player ----------------

struct PlayerDom {
    panel: web::Element,
    audio: web::HtmlMediaElement,
    play_btn: web::Element,
    pause_btn: web::Element,
    repeat_btn: web::Element,
    progress_bar: web::Element,
    current_time: web::Element,
    duration: web::Element,
}

impl PlayerDom {
    fn show_playing(&self, playing: bool) {
        let (play, pause) = if playing {
            ("none", "flex")
        } else {
            ("flex", "none")
        };
        dom::set_style(&self.play_btn, "display", play);
        dom::set_style(&self.pause_btn, "display", pause);
    }

    fn show_repeat(&self, mode: RepeatMode) {
        let (color, background) = mode.button_colors();
        dom::set_style(&self.repeat_btn, "color", color);
        dom::set_style(&self.repeat_btn, "background", background);
        _ = self.repeat_btn.set_attribute("title", mode.title());
    }

    fn play(&self) {
        let Ok(promise) = self.audio.play() else {
            return;
        };
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::error!("[player] play rejected: {:?}", e);
            }
        });
    }
}

fn required(document: &web::Document, id: &str) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))
}

fn lookup_player(document: &web::Document) -> anyhow::Result<PlayerDom> {
    let audio = required(document, "audio-element")?
        .dyn_into::<web::HtmlMediaElement>()
        .map_err(|e| anyhow::anyhow!("#audio-element is not a media element: {:?}", e))?;
    Ok(PlayerDom {
        panel: required(document, "audio-player")?,
        audio,
        play_btn: required(document, "play-btn")?,
        pause_btn: required(document, "pause-btn")?,
        repeat_btn: required(document, "repeat-btn")?,
        progress_bar: required(document, "progress-bar")?,
        current_time: required(document, "current-time")?,
        duration: required(document, "duration")?,
    })
}

fn wire_panel_controls(document: &web::Document, ui: &Rc<PlayerDom>, state: &Rc<RefCell<PlayerState>>) {
    {
        let ui = ui.clone();
        dom::add_click_listener(document, "music-toggle", move || {
            let hidden = dom::style_value(&ui.panel, "display") == "none";
            dom::set_style(&ui.panel, "display", if hidden { "block" } else { "none" });
        });
    }
    {
        let ui = ui.clone();
        dom::add_click_listener(document, "close-player", move || {
            dom::set_style(&ui.panel, "display", "none");
        });
    }
    {
        let (ui_c, state) = (ui.clone(), state.clone());
        dom::listen(&ui.play_btn, "click", move |_: web::Event| {
            ui_c.play();
            state.borrow_mut().playing = true;
            ui_c.show_playing(true);
        });
    }
    {
        let (ui_c, state) = (ui.clone(), state.clone());
        dom::listen(&ui.pause_btn, "click", move |_: web::Event| {
            _ = ui_c.audio.pause();
            state.borrow_mut().playing = false;
            ui_c.show_playing(false);
        });
    }
    {
        let (ui_c, state) = (ui.clone(), state.clone());
        dom::listen(&ui.repeat_btn, "click", move |_: web::Event| {
            let mode = state.borrow_mut().cycle_repeat();
            ui_c.show_repeat(mode);
            log::info!("[player] {}", mode.title());
        });
    }
}

fn wire_playback_events(ui: &Rc<PlayerDom>, state: &Rc<RefCell<PlayerState>>) {
    {
        let (ui_c, state) = (ui.clone(), state.clone());
        dom::listen(&ui.audio, "ended", move |_: web::Event| {
            let action = state.borrow_mut().track_ended();
            match action {
                EndAction::Restart => {
                    ui_c.audio.set_current_time(0.0);
                    ui_c.play();
                }
                EndAction::Stop => ui_c.show_playing(false),
            }
        });
    }
    {
        let ui_c = ui.clone();
        dom::listen(&ui.audio, "timeupdate", move |_: web::Event| {
            let current = ui_c.audio.current_time();
            if let Some(pct) = player::progress_percent(current, ui_c.audio.duration()) {
                dom::set_style(&ui_c.progress_bar, "width", &format!("{pct}%"));
                ui_c
                    .current_time
                    .set_text_content(Some(&player::format_time(current)));
            }
        });
    }
    {
        let ui_c = ui.clone();
        dom::listen(&ui.audio, "loadedmetadata", move |_: web::Event| {
            let text = player::format_time(ui_c.audio.duration());
            ui_c.duration.set_text_content(Some(&text));
        });
    }
}

fn wire_seek(document: &web::Document, ui: &Rc<PlayerDom>) {
    let Some(bar) = document.query_selector(".audio-progress").ok().flatten() else {
        return;
    };
    let (ui_c, bar_c) = (ui.clone(), bar.clone());
    dom::listen(&bar, "click", move |ev: web::MouseEvent| {
        let rect = bar_c.get_bounding_client_rect();
        let click_x = ev.client_x() as f64 - rect.left();
        if let Some(t) = player::seek_time(click_x, rect.width(), ui_c.audio.duration()) {
            ui_c.audio.set_current_time(t);
        }
    });
}

fn wire_drag_and_resize(
    document: &web::Document,
    ui: &Rc<PlayerDom>,
    state: &Rc<RefCell<PlayerState>>,
    min_width: f64,
) {
    if let Some(handle) = document.query_selector(".audio-player-header").ok().flatten() {
        let (ui_c, state) = (ui.clone(), state.clone());
        dom::listen(&handle, "mousedown", move |ev: web::MouseEvent| {
            let rect = ui_c.panel.get_bounding_client_rect();
            state.borrow_mut().drag.begin(
                ev.client_x() as f64,
                ev.client_y() as f64,
                rect.left(),
                rect.top(),
            );
        });
    }

    if let Some(handle) = document.get_element_by_id("resize-handle") {
        let (ui_c, state) = (ui.clone(), state.clone());
        dom::listen(&handle, "mousedown", move |ev: web::MouseEvent| {
            let (w, h) = ui_c
                .panel
                .dyn_ref::<web::HtmlElement>()
                .map(|p| (p.offset_width() as f64, p.offset_height() as f64))
                .unwrap_or((0.0, 0.0));
            state
                .borrow_mut()
                .resize
                .begin(ev.client_x() as f64, ev.client_y() as f64, w, h);
            ev.prevent_default();
        });
    }

    {
        let (ui_c, state) = (ui.clone(), state.clone());
        dom::listen(document, "mousemove", move |ev: web::MouseEvent| {
            let (x, y) = (ev.client_x() as f64, ev.client_y() as f64);
            let st = state.borrow();
            if let Some((left, top)) = st.drag.position(x, y) {
                dom::set_style(&ui_c.panel, "left", &format!("{left}px"));
                dom::set_style(&ui_c.panel, "top", &format!("{top}px"));
                dom::set_style(&ui_c.panel, "right", "auto");
                dom::set_style(&ui_c.panel, "bottom", "auto");
            }
            if let Some(step) = st.resize.step(x, y, min_width) {
                if let Some(w) = step.width {
                    dom::set_style(&ui_c.panel, "width", &format!("{w}px"));
                }
                dom::set_style(&ui_c.panel, "height", &format!("{}px", step.height));
            }
        });
    }
    {
        let state = state.clone();
        dom::listen(document, "mouseup", move |_: web::MouseEvent| {
            let mut st = state.borrow_mut();
            st.drag.end();
            st.resize.end();
        });
    }
}

pub fn setup_audio_player(document: &web::Document, config: &SiteConfig) -> anyhow::Result<()> {
    let ui = match lookup_player(document) {
        Ok(ui) => Rc::new(ui),
        Err(e) => {
            log::warn!("[player] not wired: {}", e);
            return Ok(());
        }
    };
    ui.audio.set_src(AUDIO_SOURCE);
    let state = Rc::new(RefCell::new(PlayerState::default()));

    wire_panel_controls(document, &ui, &state);
    wire_playback_events(&ui, &state);
    wire_seek(document, &ui);
    wire_drag_and_resize(document, &ui, &state, config.player_min_width);

    log::info!("[player] ready");
    Ok(())
}
