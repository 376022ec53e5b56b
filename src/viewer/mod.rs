pub mod mesh;
pub mod orbit;
mod render;
pub mod state;

use crate::constants::{
    ACCENT_COLOR_1, ACCENT_COLOR_2, AMBIENT_INTENSITY, CAMERA_DISTANCE, KEY_LIGHT_INTENSITY,
    KEY_LIGHT_POSITION, KNOT_P, KNOT_Q, KNOT_RADIAL_SEGMENTS, KNOT_RADIUS, KNOT_TUBE,
    KNOT_TUBULAR_SEGMENTS, MESH_METALNESS, MESH_ROUGHNESS, RIM_LIGHT_INTENSITY,
    RIM_LIGHT_POSITION, VIEWER_CONTAINER_ID, VIEWER_FALLBACK_ID,
};
use crate::dom;
use glam::Vec3;
use instant::Instant;
use orbit::OrbitControl;
use render::{ViewerGpu, ViewerUniforms};
use state::ViewerState;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

static INITIALIZED: AtomicBool = AtomicBool::new(false);

#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    #[error("WebGPU is not available in this browser")]
    Unsupported,
    #[error("canvas setup failed: {0}")]
    Canvas(String),
    #[error("surface creation failed: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),
    #[error("no suitable GPU adapter")]
    NoAdapter,
    #[error("surface reports no usable format")]
    NoSurfaceFormat,
    #[error("device request failed: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
}

struct Viewer {
    gpu: ViewerGpu,
    canvas: web::HtmlCanvasElement,
    container: web::Element,
    orbit: OrbitControl,
    state: ViewerState,
    aspect: f32,
}

impl Viewer {
    fn frame(&mut self) {
        self.state.advance();
        let eye = self.orbit.update();
        let uniforms = scene_uniforms(&self.state, eye, self.orbit.target, self.aspect);
        if let Err(e) = self.gpu.render(&uniforms) {
            log::error!("[viewer] render error: {:?}", e);
        }
    }

    fn resize(&mut self) {
        let (w, h) = fit_canvas(&self.canvas, &self.container);
        self.gpu.resize(w, h);
        self.aspect = state::aspect(
            self.container.client_width() as f64,
            self.container.client_height() as f64,
        );
    }
}

fn light(hex: u32, intensity: f32) -> [f32; 4] {
    let [r, g, b] = state::hex_to_linear(hex);
    [r, g, b, intensity]
}

fn scene_uniforms(state: &ViewerState, eye: Vec3, target: Vec3, aspect: f32) -> ViewerUniforms {
    let [r, g, b] = state::hex_to_linear(state.color.hex());
    let [kx, ky, kz] = KEY_LIGHT_POSITION;
    let [rx, ry, rz] = RIM_LIGHT_POSITION;
    ViewerUniforms {
        view_proj: state::view_projection(eye, target, aspect).to_cols_array_2d(),
        model: state.model_matrix().to_cols_array_2d(),
        camera_pos: [eye.x, eye.y, eye.z, 1.0],
        base_color: [r, g, b, 1.0],
        material: [MESH_ROUGHNESS, MESH_METALNESS, 0.0, 0.0],
        ambient: [1.0, 1.0, 1.0, AMBIENT_INTENSITY],
        key_pos: [kx, ky, kz, 1.0],
        key_color: light(ACCENT_COLOR_1, KEY_LIGHT_INTENSITY),
        rim_pos: [rx, ry, rz, 1.0],
        rim_color: light(ACCENT_COLOR_2, RIM_LIGHT_INTENSITY),
    }
}

/// Size the canvas backing store to its container and return it.
fn fit_canvas(canvas: &web::HtmlCanvasElement, container: &web::Element) -> (u32, u32) {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let (w, h) = state::backing_size(
        container.client_width() as f64,
        container.client_height() as f64,
        dpr,
    );
    canvas.set_width(w);
    canvas.set_height(h);
    (w, h)
}

fn gpu_available() -> bool {
    web::window()
        .map(|w| js_sys::Reflect::has(&w.navigator(), &"gpu".into()).unwrap_or(false))
        .unwrap_or(false)
}

fn show_fallback(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(VIEWER_FALLBACK_ID) {
        dom::set_style(&el, "display", "block");
    }
}

fn start_loop(viewer: Rc<RefCell<Viewer>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        viewer.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    };
}

fn wire_input(viewer: &Rc<RefCell<Viewer>>) {
    let canvas = viewer.borrow().canvas.clone();
    {
        let viewer = viewer.clone();
        dom::listen(&canvas, "click", move |_: web::MouseEvent| {
            let color = viewer.borrow_mut().state.toggle_color();
            log::info!("[viewer] mesh color #{:06X}", color.hex());
        });
    }
    {
        let viewer = viewer.clone();
        dom::listen(&canvas, "pointerdown", move |ev: web::PointerEvent| {
            viewer
                .borrow_mut()
                .orbit
                .pointer_down(ev.offset_x() as f32, ev.offset_y() as f32);
        });
    }
    {
        let viewer = viewer.clone();
        let canvas_c = canvas.clone();
        dom::listen(&canvas, "pointermove", move |ev: web::PointerEvent| {
            let h = canvas_c.client_height() as f32;
            viewer
                .borrow_mut()
                .orbit
                .pointer_move(ev.offset_x() as f32, ev.offset_y() as f32, h);
        });
    }
    for event in ["pointerup", "pointerleave", "pointercancel"] {
        let viewer = viewer.clone();
        dom::listen(&canvas, event, move |_: web::PointerEvent| {
            viewer.borrow_mut().orbit.pointer_up();
        });
    }
    {
        let viewer = viewer.clone();
        dom::listen(&canvas, "wheel", move |ev: web::WheelEvent| {
            viewer.borrow_mut().orbit.wheel(ev.delta_y() as f32);
        });
    }
    if let Some(window) = web::window() {
        let viewer = viewer.clone();
        dom::listen(&window, "resize", move |_: web::Event| {
            viewer.borrow_mut().resize();
        });
    }
}

fn build(document: &web::Document) -> Result<(), ViewerError> {
    let Some(container) = document.get_element_by_id(VIEWER_CONTAINER_ID) else {
        log::warn!("[viewer] #{} not found", VIEWER_CONTAINER_ID);
        show_fallback(document);
        return Ok(());
    };
    if !gpu_available() {
        return Err(ViewerError::Unsupported);
    }

    let canvas = document
        .create_element("canvas")
        .map_err(|e| ViewerError::Canvas(format!("{:?}", e)))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| ViewerError::Canvas(format!("{:?}", e)))?;
    dom::set_style(&canvas, "display", "block");
    dom::set_style(&canvas, "width", "100%");
    dom::set_style(&canvas, "height", "100%");
    container
        .append_child(&canvas)
        .map_err(|e| ViewerError::Canvas(format!("{:?}", e)))?;
    fit_canvas(&canvas, &container);

    let mesh = mesh::torus_knot(
        KNOT_RADIUS,
        KNOT_TUBE,
        KNOT_TUBULAR_SEGMENTS,
        KNOT_RADIAL_SEGMENTS,
        KNOT_P,
        KNOT_Q,
    );
    let document = document.clone();
    let started = Instant::now();
    spawn_local(async move {
        let gpu = match ViewerGpu::new(canvas.clone(), &mesh).await {
            Ok(gpu) => gpu,
            Err(e) => {
                log::error!("[viewer] {}", e);
                canvas.remove();
                show_fallback(&document);
                return;
            }
        };
        let aspect = state::aspect(
            container.client_width() as f64,
            container.client_height() as f64,
        );
        let viewer = Rc::new(RefCell::new(Viewer {
            gpu,
            canvas,
            container,
            orbit: OrbitControl::new(Vec3::new(0.0, 0.0, CAMERA_DISTANCE), Vec3::ZERO),
            state: ViewerState::default(),
            aspect,
        }));
        wire_input(&viewer);
        start_loop(viewer);
        log::info!(
            "[viewer] running ({} triangles, ready in {} ms)",
            mesh.triangle_count(),
            started.elapsed().as_millis()
        );
    });
    Ok(())
}

/// Build the showcase viewer the first time this is called; later calls are
/// no-ops. Without WebGPU the static fallback message is shown instead.
pub fn init_once(document: &web::Document) {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return;
    }
    match build(document) {
        Ok(()) => {}
        Err(ViewerError::Unsupported) => {
            log::warn!("[viewer] {}", ViewerError::Unsupported);
            show_fallback(document);
        }
        Err(e) => {
            log::error!("[viewer] {}", e);
            show_fallback(document);
        }
    }
}
