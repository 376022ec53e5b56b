use crate::constants::{ORBIT_DAMPING_FACTOR, ORBIT_MIN_POLAR, ORBIT_ROTATE_SPEED};
use glam::Vec3;

/// Orbit-style camera control around a fixed target.
///
/// Pointer drags accumulate a spherical delta; `update` applies a damped
/// fraction of it each frame, so the camera keeps gliding briefly after the
/// pointer is released. Zoom is disabled: the radius never changes.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitControl {
    pub target: Vec3,
    radius: f32,
    theta: f32,
    phi: f32,
    delta_theta: f32,
    delta_phi: f32,
    pub damping_factor: f32,
    pub rotate_speed: f32,
    pub enable_damping: bool,
    pub enable_zoom: bool,
    dragging: bool,
    last_pointer: [f32; 2],
}

impl OrbitControl {
    /// Start from a camera position looking at `target`.
    pub fn new(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let radius = offset.length().max(f32::EPSILON);
        let theta = offset.x.atan2(offset.z);
        let phi = (offset.y / radius).clamp(-1.0, 1.0).acos();
        Self {
            target,
            radius,
            theta,
            phi,
            delta_theta: 0.0,
            delta_phi: 0.0,
            damping_factor: ORBIT_DAMPING_FACTOR,
            rotate_speed: ORBIT_ROTATE_SPEED,
            enable_damping: true,
            enable_zoom: false,
            dragging: false,
            last_pointer: [0.0, 0.0],
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.dragging = true;
        self.last_pointer = [x, y];
    }

    /// Feed a pointer position; `viewport_height` scales a full-height drag to
    /// one full turn.
    pub fn pointer_move(&mut self, x: f32, y: f32, viewport_height: f32) {
        if !self.dragging {
            return;
        }
        let h = viewport_height.max(1.0);
        let dx = x - self.last_pointer[0];
        let dy = y - self.last_pointer[1];
        self.last_pointer = [x, y];
        let turn = std::f32::consts::TAU * self.rotate_speed;
        self.delta_theta -= turn * dx / h;
        self.delta_phi -= turn * dy / h;
    }

    pub fn pointer_up(&mut self) {
        self.dragging = false;
    }

    /// Zoom input is ignored while zoom is disabled.
    pub fn wheel(&mut self, delta_y: f32) {
        if self.enable_zoom && delta_y != 0.0 {
            let scale = if delta_y > 0.0 { 1.05 } else { 1.0 / 1.05 };
            self.radius *= scale;
        }
    }

    /// Advance one frame and return the camera position.
    pub fn update(&mut self) -> Vec3 {
        if self.enable_damping {
            self.theta += self.delta_theta * self.damping_factor;
            self.phi += self.delta_phi * self.damping_factor;
            self.delta_theta *= 1.0 - self.damping_factor;
            self.delta_phi *= 1.0 - self.damping_factor;
        } else {
            self.theta += self.delta_theta;
            self.phi += self.delta_phi;
            self.delta_theta = 0.0;
            self.delta_phi = 0.0;
        }
        let max_phi = std::f32::consts::PI - ORBIT_MIN_POLAR;
        self.phi = self.phi.clamp(ORBIT_MIN_POLAR, max_phi);
        self.eye()
    }

    pub fn eye(&self) -> Vec3 {
        let sin_phi = self.phi.sin();
        self.target
            + Vec3::new(
                self.radius * sin_phi * self.theta.sin(),
                self.radius * self.phi.cos(),
                self.radius * sin_phi * self.theta.cos(),
            )
    }
}
