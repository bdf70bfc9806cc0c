pub mod projection;

use super::types::{Matrix2, Matrix3, Matrix4, Quat, Vector3};


#[cfg(test)]
mod test_look_at {
    use approx::assert_abs_diff_eq;

    use crate::types::{Matrix3, Matrix4, Vector3, Vector4};

    #[test]
    fn layout() {
        let m = Matrix4::look_at(Vector3::new(0.0, 0.0, 5.0), Vector3::null(), Vector3::y());
        let expected = Matrix4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, -5.0, 1.0],
        ]);
        assert_eq!(m, expected);
    }

    #[test]
    fn camera_to_origin() {
        let eye = Vector3::new(2.0, 3.0, 4.0);
        let target = Vector3::new(1.0, 1.0, 1.0);
        let m = Matrix4::look_at(eye, target, Vector3::z()).transpose();
        let p_eye = m * Vector4::point(eye);
        let p_target = m * Vector4::point(target);
        let distance = (target - eye).length();
        assert_abs_diff_eq!(p_eye, Vector4::point(Vector3::null()), epsilon = 1e-5);
        assert_abs_diff_eq!(
            p_target,
            Vector4::point(Vector3::new(0.0, 0.0, -distance)),
            epsilon = 1e-5
        );
    }

    #[test]
    fn orthonormal_basis() {
        let m = Matrix4::look_at(
            Vector3::new(0.0, -10.0, 10.0),
            Vector3::new(0.5, 0.0, 0.0),
            Vector3::z(),
        );
        let r = Matrix3::from(m);
        assert_abs_diff_eq!(r * r.transpose(), Matrix3::identity(), epsilon = 1e-6);
        assert_eq!(m[0][3], 0.0);
        assert_eq!(m[3][3], 1.0);
    }
}

/// Converts degrees to radians.
#[inline]
pub fn radians(degrees: f32) -> f32 {
    degrees.to_radians()
}

/// Converts radians to degrees.
#[inline]
pub fn degrees(radians: f32) -> f32 {
    radians.to_degrees()
}

impl Matrix4 {
    /// Rotation by `angle` degrees around `axis` (Rodrigues' formula).
    ///
    /// `axis` is normalized in place before the matrix is built.
    #[inline]
    pub fn rotation(angle: f32, axis: &mut Vector3) -> Matrix4 {
        axis.normalize();
        let (sin, cos) = radians(angle).sin_cos();
        let t = 1.0 - cos;
        let (x, y, z) = (axis.x, axis.y, axis.z);
        Matrix3::new([
            [cos + x * x * t, x * y * t - z * sin, x * z * t + y * sin],
            [y * x * t + z * sin, cos + y * y * t, y * z * t - x * sin],
            [z * x * t - y * sin, z * y * t + x * sin, cos + z * z * t],
        ])
        .into()
    }

    /// Rotation described by `q`, which is normalized in place first.
    #[inline]
    pub fn from_quat(q: &mut Quat) -> Matrix4 {
        q.normalize();
        let Quat { x, y, z, w } = *q;
        Matrix3::new([
            [
                1.0 - 2.0 * (y * y + z * z),
                2.0 * (x * y - z * w),
                2.0 * (x * z + y * w),
            ],
            [
                2.0 * (x * y + z * w),
                1.0 - 2.0 * (x * x + z * z),
                2.0 * (y * z - x * w),
            ],
            [
                2.0 * (x * z - y * w),
                2.0 * (y * z + x * w),
                1.0 - 2.0 * (x * x + y * y),
            ],
        ])
        .into()
    }

    /// Right-handed view matrix looking from `camera` towards `target`.
    ///
    /// Right, up and negated forward end up as the columns of the stored
    /// rows, translation in the last row, so the uploaded matrix is read by
    /// column-major shaders as a regular view transform looking down -Z.
    #[inline]
    pub fn look_at(camera: Vector3, target: Vector3, up: Vector3) -> Matrix4 {
        let f = (target - camera).normalized();
        let r = f.cross(up).normalized();
        let u = r.cross(f);
        Matrix4::new([
            [r.x, u.x, -f.x, 0.0],
            [r.y, u.y, -f.y, 0.0],
            [r.z, u.z, -f.z, 0.0],
            [-r.dot(camera), -u.dot(camera), f.dot(camera), 1.0],
        ])
    }
}

impl Matrix2 {
    /// Rotation by `angle` degrees.
    #[inline]
    pub fn rotation(angle: f32) -> Matrix2 {
        let (sin, cos) = radians(angle).sin_cos();
        Matrix2::new([[cos, -sin], [sin, cos]])
    }
}
