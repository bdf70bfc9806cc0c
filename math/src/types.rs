mod matrix;
mod quat;
mod vector;

pub use matrix::{Matrix, Matrix2, Matrix3, Matrix4};
pub use quat::Quat;
pub use vector::{Vector, Vector2, Vector3, Vector4, Xy, Xyz, Xyzw};

/// Tolerance used by every approximate comparison in this crate.
pub const EPS: f32 = f32::EPSILON;

/// Approximate scalar equality, `|a - b| < EPS`.
///
/// Vectors, matrices and quaternions compare equal when all of their
/// components do, so `==` on those types is not transitive.
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPS
}
