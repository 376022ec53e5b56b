use crate::constants::{
    ACCENT_COLOR_1, CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, MAX_PIXEL_RATIO, MESH_BASE_COLOR,
    MESH_ROTATION_STEP_RAD,
};
use glam::{Mat4, Vec3};

/// The two surface colors the mesh toggles between on click.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MeshColor {
    #[default]
    Base,
    Accent,
}

impl MeshColor {
    pub fn toggled(self) -> Self {
        match self {
            MeshColor::Base => MeshColor::Accent,
            MeshColor::Accent => MeshColor::Base,
        }
    }

    pub fn hex(self) -> u32 {
        match self {
            MeshColor::Base => MESH_BASE_COLOR,
            MeshColor::Accent => ACCENT_COLOR_1,
        }
    }
}

/// Per-frame viewer state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewerState {
    pub rotation_y: f32,
    pub color: MeshColor,
}

impl ViewerState {
    pub fn advance(&mut self) {
        self.rotation_y = (self.rotation_y + MESH_ROTATION_STEP_RAD) % std::f32::consts::TAU;
    }

    pub fn toggle_color(&mut self) -> MeshColor {
        self.color = self.color.toggled();
        self.color
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_y(self.rotation_y)
    }
}

#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// `0xRRGGBB` (sRGB) to linear RGB.
pub fn hex_to_linear(hex: u32) -> [f32; 3] {
    let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
    let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
    let b = (hex & 0xFF) as f32 / 255.0;
    [srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b)]
}

#[inline]
pub fn aspect(width: f64, height: f64) -> f32 {
    if height <= 0.0 {
        1.0
    } else {
        (width / height) as f32
    }
}

pub fn view_projection(eye: Vec3, target: Vec3, aspect: f32) -> Mat4 {
    let proj = Mat4::perspective_rh(CAMERA_FOV_DEG.to_radians(), aspect, CAMERA_NEAR, CAMERA_FAR);
    let view = Mat4::look_at_rh(eye, target, Vec3::Y);
    proj * view
}

/// Backing-store size for a CSS box, with the device pixel ratio capped.
pub fn backing_size(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> (u32, u32) {
    let dpr = if device_pixel_ratio > 0.0 {
        device_pixel_ratio.min(MAX_PIXEL_RATIO)
    } else {
        1.0
    };
    let w = (css_width.max(0.0) * dpr) as u32;
    let h = (css_height.max(0.0) * dpr) as u32;
    (w.max(1), h.max(1))
}
