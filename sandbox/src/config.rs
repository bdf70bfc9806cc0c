use math::types::{Matrix4, Vector3};

use crate::log::Severity;

#[derive(Debug, Clone, Copy)]
pub struct SceneConfig {
    pub width: u32,
    pub height: u32,
    pub camera_position: Vector3,
    pub camera_target: Vector3,
    pub up: Vector3,
    /// Vertical field of view in degrees.
    pub fov_y: f32,
    pub z_near: f32,
    pub z_far: f32,
    /// Camera orbit around `up`, degrees per second.
    pub orbit_speed: f32,
    pub cube_size: f32,
    pub rotation_axis: Vector3,
    /// Cube spin, degrees per second.
    pub rotation_speed: f32,
    pub frame_count: u32,
    pub frame_time: f32,
    pub log_level: Severity,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            camera_position: Vector3::new(2.0, 2.0, 2.0),
            camera_target: Vector3::null(),
            up: Vector3::z(),
            fov_y: 45.0,
            z_near: 0.1,
            z_far: 10.0,
            orbit_speed: 15.0,
            cube_size: 1.0,
            rotation_axis: Vector3::z(),
            rotation_speed: 90.0,
            frame_count: 240,
            frame_time: 1.0 / 60.0,
            log_level: Severity::Info,
        }
    }
}

impl SceneConfig {
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    pub fn projection(&self) -> Matrix4 {
        Matrix4::perspective(self.fov_y, self.aspect_ratio(), self.z_near, self.z_far)
    }
}
