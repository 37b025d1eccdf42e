//! First-person camera.
//!
//! The orthonormal basis is derived from yaw/pitch whenever the pose changes
//! and is read-only while a frame is being rendered.

use std::f32::consts::PI;

use glam::Vec3;

use crate::ray::Ray;
use crate::types::{MoveIntent, Settings, PITCH_LIMIT};

/// Position and orientation, without the derived basis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

impl CameraPose {
    pub const fn new(position: Vec3, yaw: f32, pitch: f32) -> Self {
        Self {
            position,
            yaw,
            pitch,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Camera {
    pose: CameraPose,
    initial: CameraPose,
    /// Vertical field of view in degrees.
    fov: f32,
    forward: Vec3,
    right: Vec3,
    up: Vec3,
}

impl Camera {
    pub fn new(position: Vec3, yaw: f32, pitch: f32) -> Self {
        let pose = CameraPose::new(position, yaw, pitch);
        let mut camera = Self {
            pose,
            initial: pose,
            fov: 60.0,
            forward: Vec3::Z,
            right: Vec3::X,
            up: Vec3::Y,
        };
        camera.update_basis();
        camera
    }

    pub fn with_fov(mut self, degrees: f32) -> Self {
        self.fov = degrees;
        self
    }

    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    pub fn position(&self) -> Vec3 {
        self.pose.position
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn set_fov(&mut self, degrees: f32) {
        self.fov = degrees;
    }

    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn set_pose(&mut self, pose: CameraPose) {
        self.pose = CameraPose {
            position: pose.position,
            yaw: wrap_angle(pose.yaw),
            pitch: pose.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
        };
        self.update_basis();
    }

    /// Restores the pose the camera was created with.
    pub fn reset(&mut self) {
        self.set_pose(self.initial);
    }

    /// Applies one frame of look and movement intent.
    pub fn update(&mut self, dt: f32, intent: &MoveIntent, settings: &Settings) {
        let look = settings.mouse_sensitivity * dt;
        self.pose.yaw = wrap_angle(self.pose.yaw + intent.yaw * look);
        self.pose.pitch = (self.pose.pitch + intent.pitch * look).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.fov = settings.field_of_view;
        self.update_basis();

        let mut speed = settings.move_speed * dt;
        if intent.sprint {
            speed *= 2.0;
        }

        let p = &mut self.pose.position;
        if intent.forward != 0.0 {
            *p += self.forward * (intent.forward * speed);
        }
        if intent.right != 0.0 {
            *p += self.right * (intent.right * speed);
        }
        if intent.up != 0.0 {
            *p += Vec3::Y * (intent.up * speed);
        }
    }

    fn update_basis(&mut self) {
        let (sy, cy) = self.pose.yaw.sin_cos();
        let (sp, cp) = self.pose.pitch.sin_cos();
        self.forward = Vec3::new(cp * sy, sp, cp * cy).normalize_or_zero();
        // Looking straight up/down leaves forward x up undefined; keep +X.
        self.right = self.forward.cross(Vec3::Y).try_normalize().unwrap_or(Vec3::X);
        self.up = self.right.cross(self.forward);
    }

    /// Primary ray through pixel `(x, y)` of a `width x height` sample grid.
    pub fn ray(&self, x: u32, y: u32, width: u32, height: u32) -> Ray {
        let w = width.max(1) as f32;
        let h = height.max(1) as f32;
        let ndc_x = 2.0 * x as f32 / w - 1.0;
        let ndc_y = 1.0 - 2.0 * y as f32 / h;
        let aspect = w / h;
        let scale = (self.fov.to_radians() * 0.5).tan();

        let dir = self.right * (ndc_x * aspect * scale) + self.up * (ndc_y * scale) + self.forward;
        Ray::new(self.pose.position, dir)
    }
}

/// Wraps an angle into `[-PI, PI]`.
fn wrap_angle(a: f32) -> f32 {
    let two_pi = PI * 2.0;
    let mut a = a % two_pi;
    if a > PI {
        a -= two_pi;
    }
    if a < -PI {
        a += two_pi;
    }
    a
}
