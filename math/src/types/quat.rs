use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use std::ops::{Add, Div, Mul, Sub};

use super::{approx_eq, Vector3, EPS};


#[cfg(all(test, feature = "serde"))]
mod test_quat_serde {
    use crate::types::Quat;

    #[test]
    fn struct_round_trip() {
        let q = Quat::new(1.0, -2.0, 0.5, 4.0);
        let json = serde_json::to_string(&q).unwrap();
        assert_eq!(json, r#"{"x":1.0,"y":-2.0,"z":0.5,"w":4.0}"#);
        assert_eq!(serde_json::from_str::<Quat>(&json).unwrap(), q);
        assert!(serde_json::from_str::<Quat>(r#"{"x":1.0,"y":2.0,"z":3.0}"#).is_err());
    }
}

/// Quaternion with vector part `(x, y, z)` and scalar part `w`.
///
/// The default value is the zero quaternion, not the identity rotation; use
/// [`Quat::unit`] for the latter.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Zeroable, Pod)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl PartialEq for Quat {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.x, other.x)
            && approx_eq(self.y, other.y)
            && approx_eq(self.z, other.z)
            && approx_eq(self.w, other.w)
    }
}

impl AbsDiffEq for Quat {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        EPS
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
            && self.w.abs_diff_eq(&other.w, epsilon)
    }
}

impl RelativeEq for Quat {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
            && self.w.relative_eq(&other.w, epsilon, max_relative)
    }
}

impl Add for Quat {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
            w: self.w + rhs.w,
        }
    }
}

impl Sub for Quat {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
            w: self.w - rhs.w,
        }
    }
}

impl Mul<f32> for Quat {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
            w: self.w * rhs,
        }
    }
}

impl Mul<Quat> for f32 {
    type Output = Quat;
    #[inline]
    fn mul(self, rhs: Quat) -> Self::Output {
        rhs * self
    }
}

impl Div<f32> for Quat {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self::Output {
        Self {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
            w: self.w / rhs,
        }
    }
}

/// Hamilton product, `self` applied after `rhs` when both are rotations.
impl Mul<Quat> for Quat {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Quat) -> Self::Output {
        Self {
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        }
    }
}

/// Right division, `self * rhs⁻¹`. Dividing by the zero quaternion yields the
/// zero quaternion.
impl Div<Quat> for Quat {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Quat) -> Self::Output {
        let norm_square = rhs.norm_square();
        if norm_square == 0.0 {
            return Self::default();
        }
        self * rhs.conjugate() / norm_square
    }
}

impl Mul<Vector3> for Quat {
    type Output = Vector3;
    #[inline]
    fn mul(self, rhs: Vector3) -> Self::Output {
        let q = self * Quat::pure(rhs.x, rhs.y, rhs.z) * self.inv();
        Vector3::new(q.x, q.y, q.z)
    }
}

impl Quat {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub const fn unit() -> Self {
        Self::real(1.0)
    }

    #[inline]
    pub const fn real(w: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            w,
        }
    }

    #[inline]
    pub const fn pure(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z, w: 0.0 }
    }

    #[inline]
    pub fn axis_angle(axis: Vector3, rad: f32) -> Self {
        let rad = 0.5 * rad;
        let axis = rad.sin() * axis.normalized();
        Self {
            x: axis.x,
            y: axis.y,
            z: axis.z,
            w: rad.cos(),
        }
    }

    #[inline]
    pub fn conjugate(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: self.w,
        }
    }

    #[inline]
    pub fn norm_square(self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    #[inline]
    pub fn norm(self) -> f32 {
        self.norm_square().sqrt()
    }

    /// Divides every component by [`Quat::norm`] in place.
    ///
    /// Unlike [`crate::types::Vector::normalize`] there is no zero guard: the
    /// zero quaternion turns into NaN components.
    #[inline]
    pub fn normalize(&mut self) {
        *self = *self / self.norm();
    }

    #[inline]
    pub fn inv(self) -> Self {
        self.conjugate() / self.norm_square()
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }
}
