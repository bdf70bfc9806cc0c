use bytemuck::{Pod, Zeroable};
use math::types::{Matrix4, Vector3, Vector4};

use crate::config::SceneConfig;

/// Layout of the per-frame camera uniform block.
#[repr(C)]
#[derive(Debug, Clone, Copy, Zeroable, Pod)]
pub struct CameraMatrices {
    pub view: Matrix4,
    pub proj: Matrix4,
}

pub trait Camera {
    fn get_position(&self) -> Vector3;
    fn get_matrices(&self) -> CameraMatrices;
    fn update(&mut self, elapsed_time: f32);
}

/// Circles `target` around the `up` axis at a constant angular speed.
#[derive(Debug, Clone, Copy)]
pub struct OrbitCamera {
    proj: Matrix4,
    target: Vector3,
    offset: Vector3,
    up: Vector3,
    angle: f32,
    speed: f32,
}

impl OrbitCamera {
    pub fn new(config: &SceneConfig) -> Self {
        Self {
            proj: config.projection(),
            target: config.camera_target,
            offset: config.camera_position - config.camera_target,
            up: config.up,
            angle: 0.0,
            speed: config.orbit_speed,
        }
    }
}

impl Camera for OrbitCamera {
    fn get_position(&self) -> Vector3 {
        let mut axis = self.up;
        let orbit = Matrix4::rotation(self.angle, &mut axis);
        self.target + Vector3::from(orbit * Vector4::point(self.offset))
    }

    fn get_matrices(&self) -> CameraMatrices {
        CameraMatrices {
            view: Matrix4::look_at(self.get_position(), self.target, self.up),
            proj: self.proj,
        }
    }

    fn update(&mut self, elapsed_time: f32) {
        self.angle = (self.angle + elapsed_time * self.speed) % 360.0;
    }
}

#[cfg(test)]
mod test_orbit_camera {
    use approx::assert_abs_diff_eq;
    use math::types::{Matrix4, Vector3};

    use super::{Camera, OrbitCamera};
    use crate::config::SceneConfig;

    fn get_config() -> SceneConfig {
        SceneConfig {
            camera_position: Vector3::new(2.0, 0.0, 1.0),
            camera_target: Vector3::null(),
            up: Vector3::z(),
            orbit_speed: 90.0,
            ..Default::default()
        }
    }

    #[test]
    fn initial_matrices() {
        let config = get_config();
        let camera = OrbitCamera::new(&config);
        let matrices = camera.get_matrices();
        assert_abs_diff_eq!(camera.get_position(), config.camera_position, epsilon = 1e-6);
        assert_abs_diff_eq!(
            matrices.view,
            Matrix4::look_at(config.camera_position, config.camera_target, config.up),
            epsilon = 1e-6
        );
        assert_eq!(matrices.proj, config.projection());
    }

    #[test]
    fn orbit() {
        let mut camera = OrbitCamera::new(&get_config());
        camera.update(1.0);
        assert_abs_diff_eq!(
            camera.get_position(),
            Vector3::new(0.0, 2.0, 1.0),
            epsilon = 1e-5
        );
        camera.update(2.0);
        assert_abs_diff_eq!(
            camera.get_position(),
            Vector3::new(0.0, -2.0, 1.0),
            epsilon = 1e-5
        );
    }

    #[test]
    fn uniform_layout() {
        let matrices = OrbitCamera::new(&get_config()).get_matrices();
        let bytes = bytemuck::bytes_of(&matrices);
        assert_eq!(bytes.len(), 128);
        assert_eq!(&bytes[..64], matrices.view.as_bytes());
        assert_eq!(&bytes[64..], matrices.proj.as_bytes());
    }
}
