use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use std::ops::{Add, Deref, DerefMut, Div, Index, IndexMut, Mul, Neg, Sub};

use super::{approx_eq, EPS};
use crate::error::{fill_from_le_bytes, MathResult};

#[cfg(test)]
mod test_vector {
    use super::{Vector2, Vector3, Vector4};
    use crate::{error::MathError, types::EPS};
    use approx::assert_abs_diff_eq;

    fn get_vectors() -> (Vector3, Vector3) {
        (Vector3::new(1.0, -2.0, 3.5), Vector3::new(0.25, 4.0, -1.0))
    }

    #[test]
    fn add_negated_is_null() {
        let (a, b) = get_vectors();
        assert!((a + (-a)).is_null());
        assert!((b + (-b)).is_null());
        let v = Vector4::new(1.0, 2.0, 3.0, 4.0);
        assert!((v + (-v)).is_null());
    }

    #[test]
    fn scalar_mul() {
        let (a, _) = get_vectors();
        assert_eq!(a * 1.0, a);
        assert_eq!(1.0 * a, a);
        assert!((a * 0.0).is_null());
        assert_eq!(2.0 * a, Vector3::new(2.0, -4.0, 7.0));
        assert_eq!(a * 2.0, 2.0 * a);
    }

    #[test]
    fn div() {
        let v = Vector2::new(3.0, -6.0);
        assert_eq!(v / 3.0, Vector2::new(1.0, -2.0));
    }

    #[test]
    fn commutative() {
        let (a, b) = get_vectors();
        assert_eq!(a + b, b + a);
        assert_eq!(a.dot(b), b.dot(a));
        assert_eq!(a - b, -(b - a));
    }

    #[test]
    fn dot_is_length_square() {
        let (a, b) = get_vectors();
        assert_abs_diff_eq!(a.dot(a), a.length() * a.length(), epsilon = 1e-5);
        assert_abs_diff_eq!(b.dot(b), b.length() * b.length(), epsilon = 1e-5);
        assert_eq!(a.dot(b), 0.25 - 8.0 - 3.5);
    }

    #[test]
    fn length() {
        assert_eq!(Vector2::new(3.0, 4.0).length(), 5.0);
        assert_eq!(Vector4::new(1.0, 1.0, 1.0, 1.0).length(), 2.0);
        assert_eq!(Vector3::new(0.0, 3.0, 4.0).length_square(), 25.0);
    }

    #[test]
    fn normalize() {
        let mut v = Vector2::new(3.0, 4.0);
        assert!(!v.is_unit());
        v.normalize();
        assert!(v.is_unit());
        assert_eq!(v, Vector2::new(0.6, 0.8));

        let mut v = Vector3::new(0.0, 0.0, -5.0);
        v.normalize();
        assert!(v.is_unit());
        assert_eq!(v, -Vector3::z());
    }

    #[test]
    fn normalize_null() {
        let mut v = Vector3::null();
        v.normalize();
        assert!(v.is_null());
        assert!(!v.is_unit());
        assert_eq!(Vector4::null().normalized(), Vector4::null());
    }

    #[test]
    fn normalized_leaves_source() {
        let v = Vector2::new(0.0, 2.0);
        let n = v.normalized();
        assert_eq!(v, Vector2::new(0.0, 2.0));
        assert_eq!(n, Vector2::y());
    }

    #[test]
    fn approx_equal() {
        let v = Vector2::new(1.0, 2.0);
        assert_eq!(v, Vector2::new(1.0 + 0.5 * EPS, 2.0));
        assert_ne!(v, Vector2::new(1.0, 2.001));
        assert_ne!(Vector2::new(f32::NAN, 0.0), Vector2::new(f32::NAN, 0.0));
    }

    #[test]
    fn coordinates() {
        let mut v = Vector4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!((v.x, v.y, v.z, v.w), (1.0, 2.0, 3.0, 4.0));
        v.y = 7.0;
        v[3] = 8.0;
        assert_eq!(v, Vector4::new(1.0, 7.0, 3.0, 8.0));
        assert_eq!(v[1], 7.0);
        assert_eq!(v.as_array(), &[1.0, 7.0, 3.0, 8.0]);
    }

    #[test]
    #[should_panic]
    fn index_out_of_range() {
        let v = Vector2::new(1.0, 2.0);
        let _ = v[2];
    }

    #[test]
    fn validity() {
        assert!(Vector3::new(1.0, 2.0, 3.0).is_valid());
        assert!(!Vector3::new(1.0, f32::INFINITY, 3.0).is_valid());
        assert!(!Vector2::new(f32::NAN, 0.0).is_valid());
    }

    #[test]
    fn conversions() {
        let v2 = Vector2::new(1.0, 2.0);
        let v3: Vector3 = v2.into();
        let v4: Vector4 = v3.into();
        assert_eq!(v3, Vector3::new(1.0, 2.0, 0.0));
        assert_eq!(v4, Vector4::new(1.0, 2.0, 0.0, 0.0));
        assert_eq!(Vector2::from(Vector3::new(5.0, 6.0, 7.0)), Vector2::new(5.0, 6.0));
        assert_eq!(Vector3::from([1.0, 2.0, 3.0]), Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn from_le_bytes() {
        let v = Vector3::new(1.5, -2.0, 1e3);
        let decoded = Vector3::try_from_le_bytes(bytemuck::bytes_of(&v)).unwrap();
        assert_eq!(decoded.as_array(), v.as_array());
        assert_eq!(
            Vector4::try_from_le_bytes(&[0u8; 12]),
            Err(MathError::InvalidLength {
                expected: 16,
                found: 12
            })
        );
    }
}

#[cfg(test)]
mod test_vector_2 {
    use super::Vector2;

    #[test]
    fn skew_product() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(3.0, 4.0);
        assert_eq!(a.skew_product(b), 1.0 * 4.0 - 3.0 * 2.0);
        assert_eq!(b.skew_product(a), -a.skew_product(b));
        assert_eq!(Vector2::x().skew_product(Vector2::y()), 1.0);
    }

    #[test]
    fn perpendicular() {
        let v = Vector2::new(2.0, 1.0);
        assert_eq!(v.perpendicular_x(), Vector2::new(-1.0, 2.0));
        assert_eq!(v.perpendicular_y(), Vector2::new(1.0, -2.0));
        assert!(v.is_perpendicular_to(v.perpendicular_x()));
        assert!(v.is_perpendicular_to(v.perpendicular_y()));
        assert!(!v.is_perpendicular_to(v));
        assert_eq!(Vector2::x().perpendicular_x(), Vector2::y());
    }
}

#[cfg(test)]
mod test_vector_3 {
    use super::Vector3;

    #[test]
    fn cross() {
        assert_eq!(Vector3::x().cross(Vector3::y()), Vector3::z());
        assert_eq!(Vector3::y().cross(Vector3::x()), -Vector3::z());
        assert_eq!(Vector3::y().cross(Vector3::z()), Vector3::x());
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(a.cross(b), Vector3::new(-3.0, 6.0, -3.0));
        assert_eq!(a.cross(b).dot(a), 0.0);
        assert!(a.cross(a).is_null());
    }

    #[test]
    fn colors() {
        let c = Vector3::new(0.1, 0.2, 0.3);
        assert_eq!((c.r(), c.g(), c.b()), (0.1, 0.2, 0.3));
    }
}

#[cfg(test)]
mod test_vector_4 {
    use super::{Vector3, Vector4};

    #[test]
    fn homogeneous() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(Vector4::point(v), Vector4::new(1.0, 2.0, 3.0, 1.0));
        assert_eq!(Vector4::vector(v), Vector4::new(1.0, 2.0, 3.0, 0.0));
        assert_eq!(Vector3::from(Vector4::point(v)), v);
    }

    #[test]
    fn colors() {
        let c = Vector4::new(1.0, 0.5, 0.25, 0.0);
        assert_eq!((c.r(), c.g(), c.b(), c.a()), (1.0, 0.5, 0.25, 0.0));
    }
}


/// Fixed-size `f32` vector.
///
/// Components are stored contiguously so a vector can be copied straight
/// into GPU memory. There is no `Default`: every component has to be given
/// explicitly, or [`Vector::null`] used.
#[repr(transparent)]
#[derive(Debug, Clone, Copy)]
pub struct Vector<const N: usize>([f32; N]);

pub type Vector2 = Vector<2>;
pub type Vector3 = Vector<3>;
pub type Vector4 = Vector<4>;

// SAFETY: `repr(transparent)` over `[f32; N]`, which has no padding and
// accepts any bit pattern.
unsafe impl<const N: usize> Zeroable for Vector<N> {}
unsafe impl<const N: usize> Pod for Vector<N> {}

#[repr(C)]
#[derive(Debug, Clone, Copy, Zeroable, Pod)]
pub struct Xy {
    pub x: f32,
    pub y: f32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Zeroable, Pod)]
pub struct Xyz {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Zeroable, Pod)]
pub struct Xyzw {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

macro_rules! impl_coordinates {
    ($n:literal, $coords:ty) => {
        impl Deref for Vector<$n> {
            type Target = $coords;
            #[inline]
            fn deref(&self) -> &Self::Target {
                bytemuck::cast_ref(&self.0)
            }
        }

        impl DerefMut for Vector<$n> {
            #[inline]
            fn deref_mut(&mut self) -> &mut Self::Target {
                bytemuck::cast_mut(&mut self.0)
            }
        }
    };
}

impl_coordinates!(2, Xy);
impl_coordinates!(3, Xyz);
impl_coordinates!(4, Xyzw);

impl<const N: usize> PartialEq for Vector<N> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(&a, &b)| approx_eq(a, b))
    }
}

impl<const N: usize> AbsDiffEq for Vector<N> {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        EPS
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<const N: usize> RelativeEq for Vector<N> {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<const N: usize> Neg for Vector<N> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self(self.0.map(|c| -c))
    }
}

impl<const N: usize> Add for Vector<N> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self(std::array::from_fn(|i| self.0[i] + rhs.0[i]))
    }
}

impl<const N: usize> Sub for Vector<N> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self(std::array::from_fn(|i| self.0[i] - rhs.0[i]))
    }
}

impl<const N: usize> Mul<f32> for Vector<N> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        Self(self.0.map(|c| c * rhs))
    }
}

impl<const N: usize> Mul<Vector<N>> for f32 {
    type Output = Vector<N>;
    #[inline]
    fn mul(self, rhs: Vector<N>) -> Self::Output {
        rhs * self
    }
}

impl<const N: usize> Div<f32> for Vector<N> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self::Output {
        Self(self.0.map(|c| c / rhs))
    }
}

impl<const N: usize> Index<usize> for Vector<N> {
    type Output = f32;
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<const N: usize> IndexMut<usize> for Vector<N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl<const N: usize> From<[f32; N]> for Vector<N> {
    #[inline]
    fn from(value: [f32; N]) -> Self {
        Self(value)
    }
}

impl<const N: usize> From<Vector<N>> for [f32; N] {
    #[inline]
    fn from(value: Vector<N>) -> Self {
        value.0
    }
}

impl From<Vector2> for Vector3 {
    #[inline]
    fn from(value: Vector2) -> Self {
        Self([value.x, value.y, 0.0])
    }
}

impl From<Vector3> for Vector4 {
    #[inline]
    fn from(value: Vector3) -> Self {
        Self([value.x, value.y, value.z, 0.0])
    }
}

impl From<Vector3> for Vector2 {
    #[inline]
    fn from(value: Vector3) -> Self {
        Self([value.x, value.y])
    }
}

impl From<Vector4> for Vector3 {
    #[inline]
    fn from(value: Vector4) -> Self {
        Self([value.x, value.y, value.z])
    }
}

impl<const N: usize> Vector<N> {
    #[inline]
    pub const fn from_array(values: [f32; N]) -> Self {
        Self(values)
    }

    #[inline]
    pub const fn null() -> Self {
        Self([0.0; N])
    }

    #[inline]
    pub fn as_array(&self) -> &[f32; N] {
        &self.0
    }

    #[inline]
    pub fn try_from_le_bytes(bytes: &[u8]) -> MathResult<Self> {
        let mut values = [0.0; N];
        fill_from_le_bytes(&mut values, bytes)?;
        Ok(Self(values))
    }

    #[inline]
    pub fn is_null(self) -> bool {
        self.0.iter().all(|&c| approx_eq(c, 0.0))
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> f32 {
        self.0.iter().zip(rhs.0.iter()).map(|(a, b)| a * b).sum()
    }

    #[inline]
    pub fn length_square(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_square().sqrt()
    }

    #[inline]
    pub fn is_unit(self) -> bool {
        approx_eq(self.length(), 1.0)
    }

    /// Scales the vector to unit length in place.
    ///
    /// A vector of exactly zero length is left untouched.
    #[inline]
    pub fn normalize(&mut self) {
        let length = self.length();
        if length == 0.0 {
            return;
        }
        for c in self.0.iter_mut() {
            *c /= length;
        }
    }

    #[inline]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.0.iter().all(|c| c.is_finite())
    }
}

impl Vector2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self([x, y])
    }

    #[inline]
    pub const fn x() -> Self {
        Self([1.0, 0.0])
    }

    #[inline]
    pub const fn y() -> Self {
        Self([0.0, 1.0])
    }

    /// Signed area of the parallelogram spanned by `self` and `rhs`.
    #[inline]
    pub fn skew_product(self, rhs: Self) -> f32 {
        self.x * rhs.y - rhs.x * self.y
    }

    /// Rotated by 90 degrees counter-clockwise.
    #[inline]
    pub fn perpendicular_x(self) -> Self {
        Self([-self.y, self.x])
    }

    /// Rotated by 90 degrees clockwise.
    #[inline]
    pub fn perpendicular_y(self) -> Self {
        Self([self.y, -self.x])
    }

    #[inline]
    pub fn is_perpendicular_to(self, rhs: Self) -> bool {
        approx_eq(self.dot(rhs), 0.0)
    }
}

impl Vector3 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self([x, y, z])
    }

    #[inline]
    pub const fn x() -> Self {
        Self([1.0, 0.0, 0.0])
    }

    #[inline]
    pub const fn y() -> Self {
        Self([0.0, 1.0, 0.0])
    }

    #[inline]
    pub const fn z() -> Self {
        Self([0.0, 0.0, 1.0])
    }

    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self([
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        ])
    }

    #[inline]
    pub fn r(self) -> f32 {
        self.0[0]
    }

    #[inline]
    pub fn g(self) -> f32 {
        self.0[1]
    }

    #[inline]
    pub fn b(self) -> f32 {
        self.0[2]
    }
}

impl Vector4 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self([x, y, z, w])
    }

    #[inline]
    pub fn point(p: Vector3) -> Self {
        Self([p.x, p.y, p.z, 1.0])
    }

    #[inline]
    pub fn vector(v: Vector3) -> Self {
        Self([v.x, v.y, v.z, 0.0])
    }

    #[inline]
    pub const fn x() -> Self {
        Self([1.0, 0.0, 0.0, 0.0])
    }

    #[inline]
    pub const fn y() -> Self {
        Self([0.0, 1.0, 0.0, 0.0])
    }

    #[inline]
    pub const fn z() -> Self {
        Self([0.0, 0.0, 1.0, 0.0])
    }

    #[inline]
    pub const fn w() -> Self {
        Self([0.0, 0.0, 0.0, 1.0])
    }

    #[inline]
    pub fn r(self) -> f32 {
        self.0[0]
    }

    #[inline]
    pub fn g(self) -> f32 {
        self.0[1]
    }

    #[inline]
    pub fn b(self) -> f32 {
        self.0[2]
    }

    #[inline]
    pub fn a(self) -> f32 {
        self.0[3]
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};

    use super::Vector;

    impl<const N: usize> Serialize for Vector<N> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(self.0.iter())
        }
    }

    impl<'de, const N: usize> Deserialize<'de> for Vector<N> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let values = Vec::<f32>::deserialize(deserializer)?;
            let found = values.len();
            let values: [f32; N] = values
                .try_into()
                .map_err(|_| D::Error::invalid_length(found, &"a vector component per axis"))?;
            Ok(Self(values))
        }
    }
}
