use super::radians;
use crate::types::Matrix4;

#[cfg(test)]
mod test_perspective {
    use approx::assert_abs_diff_eq;

    use crate::types::{Matrix4, Vector3, Vector4};

    fn depth(proj: Matrix4, z: f32) -> f32 {
        let clip = proj.transpose() * Vector4::point(Vector3::new(0.0, 0.0, z));
        clip.z / clip.w
    }

    #[test]
    fn layout() {
        let m = Matrix4::perspective(90.0, 2.0, 1.0, 11.0);
        let expected = Matrix4::new([
            [0.5, 0.0, 0.0, 0.0],
            [0.0, -1.0, 0.0, 0.0],
            [0.0, 0.0, 0.1, -1.0],
            [0.0, 0.0, 1.1, 0.0],
        ]);
        assert_abs_diff_eq!(m, expected, epsilon = 1e-6);
    }

    #[test]
    fn reversed_depth() {
        let m = Matrix4::perspective(60.0, 4.0 / 3.0, 0.1, 100.0);
        assert_abs_diff_eq!(depth(m, -0.1), 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(depth(m, -100.0), 0.0, epsilon = 1e-5);
        let middle = depth(m, -10.0);
        assert!(middle > 0.0 && middle < 1.0);
        assert!(depth(m, -1.0) > middle);
    }

    #[test]
    fn flipped_y() {
        let m = Matrix4::perspective(90.0, 1.0, 1.0, 10.0).transpose();
        let clip = m * Vector4::point(Vector3::new(1.0, 1.0, -2.0));
        assert!(clip.y < 0.0);
        assert!(clip.x > 0.0);
        assert_abs_diff_eq!(clip.w, 2.0);
        assert_abs_diff_eq!(clip.y / clip.w, -0.5, epsilon = 1e-6);
    }

    #[test]
    fn field_of_view() {
        let narrow = Matrix4::perspective(30.0, 1.0, 0.1, 10.0);
        let wide = Matrix4::perspective(120.0, 1.0, 0.1, 10.0);
        assert!(narrow[0][0] > wide[0][0]);
        assert_abs_diff_eq!(
            wide[1][1],
            -(std::f32::consts::FRAC_PI_3.tan().recip()),
            epsilon = 1e-6
        );
    }
}

impl Matrix4 {
    /// Perspective projection onto a zero-to-one clip volume with reversed
    /// depth: the near plane maps to 1 and the far plane to 0. The Y axis is
    /// flipped for a top-left framebuffer origin.
    ///
    /// `fov_y` is the vertical field of view in degrees.
    #[inline]
    pub fn perspective(fov_y: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Matrix4 {
        let focal_length = (radians(fov_y) * 0.5).tan().recip();
        let depth_range = z_far - z_near;
        Matrix4::new([
            [focal_length / aspect_ratio, 0.0, 0.0, 0.0],
            [0.0, -focal_length, 0.0, 0.0],
            [0.0, 0.0, z_near / depth_range, -1.0],
            [0.0, 0.0, (z_far * z_near) / depth_range, 0.0],
        ])
    }
}
