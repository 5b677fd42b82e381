//! Chase camera that trails the ship's orientation

use glam::{Mat4, Quat, Vec3};

use crate::tuning::Tuning;

/// Lagged follow camera
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub view: Mat4,
    pub projection: Mat4,
    /// Smoothed orientation chasing the ship
    rotation: Quat,
    position: Vec3,
    aspect_ratio: f32,
    lag: f32,
    offset: Vec3,
    up: Vec3,
    fov: f32,
    near: f32,
    far: f32,
}

impl Camera {
    pub fn new(tuning: &Tuning, aspect_ratio: f32) -> Self {
        let mut camera = Self {
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
            rotation: Quat::IDENTITY,
            position: Vec3::ZERO,
            aspect_ratio,
            lag: tuning.camera_lag,
            offset: tuning.camera_offset,
            up: tuning.camera_up,
            fov: tuning.camera_fov,
            near: tuning.camera_near,
            far: tuning.camera_far,
        };
        camera.rebuild_projection();
        camera
    }

    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        if aspect_ratio > 0.0 && aspect_ratio.is_finite() {
            self.aspect_ratio = aspect_ratio;
            self.rebuild_projection();
        }
    }

    /// Jump straight to the ship's orientation (used on reset)
    pub fn snap_to(&mut self, target_position: Vec3, target_rotation: Quat) {
        self.rotation = target_rotation;
        self.rebuild_view(target_position);
    }

    /// Blend toward the ship's orientation and rebuild the matrices
    pub fn update(&mut self, target_position: Vec3, target_rotation: Quat) {
        self.rotation = self.rotation.lerp(target_rotation, self.lag);
        self.rebuild_view(target_position);
        self.rebuild_projection();
    }

    fn rebuild_view(&mut self, target_position: Vec3) {
        self.position = target_position + self.rotation * self.offset;
        let up = self.rotation * self.up;
        self.view = Mat4::look_at_rh(self.position, target_position, up);
    }

    fn rebuild_projection(&mut self) {
        self.projection = Mat4::perspective_rh(self.fov, self.aspect_ratio, self.near, self.far);
    }
}
