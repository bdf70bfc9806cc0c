use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

use super::{approx_eq, Vector, EPS};
use crate::error::{fill_from_le_bytes, MathResult};




/// `M` rows of `N` contiguous `f32`, row-major with no padding.
///
/// The default value is the null matrix; identity is only reachable through
/// [`Matrix::identity`].
#[repr(transparent)]
#[derive(Debug, Clone, Copy)]
pub struct Matrix<const M: usize, const N: usize>([[f32; N]; M]);

pub type Matrix2 = Matrix<2, 2>;
pub type Matrix3 = Matrix<3, 3>;
pub type Matrix4 = Matrix<4, 4>;

// SAFETY: `repr(transparent)` over `[[f32; N]; M]`, which has no padding and
// accepts any bit pattern.
unsafe impl<const M: usize, const N: usize> Zeroable for Matrix<M, N> {}
unsafe impl<const M: usize, const N: usize> Pod for Matrix<M, N> {}

impl<const M: usize, const N: usize> Default for Matrix<M, N> {
    #[inline]
    fn default() -> Self {
        Self::null()
    }
}

impl<const M: usize, const N: usize> PartialEq for Matrix<M, N> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice().iter())
            .all(|(&a, &b)| approx_eq(a, b))
    }
}

impl<const M: usize, const N: usize> AbsDiffEq for Matrix<M, N> {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        EPS
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice().iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<const M: usize, const N: usize> RelativeEq for Matrix<M, N> {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice().iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<const M: usize, const N: usize> Neg for Matrix<M, N> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self(self.0.map(|row| row.map(|value| -value)))
    }
}

impl<const M: usize, const N: usize> Add for Matrix<M, N> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self(std::array::from_fn(|i| {
            std::array::from_fn(|j| self.0[i][j] + rhs.0[i][j])
        }))
    }
}

impl<const M: usize, const N: usize> Sub for Matrix<M, N> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self(std::array::from_fn(|i| {
            std::array::from_fn(|j| self.0[i][j] - rhs.0[i][j])
        }))
    }
}

impl<const M: usize, const N: usize> Mul<f32> for Matrix<M, N> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        Self(self.0.map(|row| row.map(|value| value * rhs)))
    }
}

impl<const M: usize, const N: usize> Mul<Matrix<M, N>> for f32 {
    type Output = Matrix<M, N>;
    #[inline]
    fn mul(self, rhs: Matrix<M, N>) -> Self::Output {
        rhs * self
    }
}

impl<const M: usize, const N: usize, const K: usize> Mul<Matrix<N, K>> for Matrix<M, N> {
    type Output = Matrix<M, K>;
    #[inline]
    fn mul(self, rhs: Matrix<N, K>) -> Self::Output {
        Matrix(std::array::from_fn(|i| {
            std::array::from_fn(|j| (0..N).map(|k| self.0[i][k] * rhs.0[k][j]).sum::<f32>())
        }))
    }
}

impl<const M: usize, const N: usize> Mul<Vector<N>> for Matrix<M, N> {
    type Output = Vector<M>;
    #[inline]
    fn mul(self, rhs: Vector<N>) -> Self::Output {
        Vector::from_array(self.0.map(|row| {
            row.iter()
                .zip(rhs.as_array().iter())
                .map(|(a, b)| a * b)
                .sum::<f32>()
        }))
    }
}

/// Same as `matrix * vector`; the vector is not treated as a row vector.
impl<const N: usize> Mul<Matrix<N, N>> for Vector<N> {
    type Output = Vector<N>;
    #[inline]
    fn mul(self, rhs: Matrix<N, N>) -> Self::Output {
        rhs * self
    }
}

impl<const M: usize, const N: usize> Index<usize> for Matrix<M, N> {
    type Output = [f32; N];
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<const M: usize, const N: usize> IndexMut<usize> for Matrix<M, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl From<Matrix2> for Matrix4 {
    #[inline]
    fn from(value: Matrix2) -> Self {
        let mut m = Self::identity();
        for (row, source) in m.0.iter_mut().zip(value.0.iter()) {
            row[..2].copy_from_slice(source);
        }
        m
    }
}

impl From<Matrix3> for Matrix4 {
    #[inline]
    fn from(value: Matrix3) -> Self {
        let mut m = Self::identity();
        for (row, source) in m.0.iter_mut().zip(value.0.iter()) {
            row[..3].copy_from_slice(source);
        }
        m
    }
}

impl From<Matrix4> for Matrix3 {
    #[inline]
    fn from(value: Matrix4) -> Self {
        Self(std::array::from_fn(|i| {
            std::array::from_fn(|j| value.0[i][j])
        }))
    }
}

impl<const M: usize, const N: usize> Matrix<M, N> {
    #[inline]
    pub const fn new(rows: [[f32; N]; M]) -> Self {
        Self(rows)
    }

    #[inline]
    pub const fn null() -> Self {
        Self([[0.0; N]; M])
    }

    #[inline]
    pub fn try_from_le_bytes(bytes: &[u8]) -> MathResult<Self> {
        let mut m = Self::null();
        fill_from_le_bytes(bytemuck::cast_slice_mut(std::slice::from_mut(&mut m)), bytes)?;
        Ok(m)
    }

    #[inline]
    pub fn row(&self, index: usize) -> &[f32; N] {
        &self.0[index]
    }

    #[inline]
    pub fn rows(&self) -> &[[f32; N]; M] {
        &self.0
    }

    /// Entries in row-major order, `M * N` floats.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        bytemuck::cast_slice(std::slice::from_ref(self))
    }

    /// Raw bytes in the layout uploaded to uniform buffers.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    #[inline]
    pub const fn is_square(&self) -> bool {
        M == N
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        self.is_square()
            && self.0.iter().enumerate().all(|(i, row)| {
                row.iter()
                    .enumerate()
                    .all(|(j, &value)| approx_eq(value, if i == j { 1.0 } else { 0.0 }))
            })
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.as_slice().iter().all(|&value| approx_eq(value, 0.0))
    }

    #[inline]
    pub fn transpose(self) -> Matrix<N, M> {
        Matrix(std::array::from_fn(|i| {
            std::array::from_fn(|j| self.0[j][i])
        }))
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.as_slice().iter().all(|value| value.is_finite())
    }
}

impl<const N: usize> Matrix<N, N> {
    #[inline]
    pub fn identity() -> Self {
        let mut m = Self::null();
        for (i, row) in m.0.iter_mut().enumerate() {
            row[i] = 1.0;
        }
        m
    }

    #[inline]
    pub fn trace(&self) -> f32 {
        (0..N).map(|i| self.0[i][i]).sum()
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};

    use super::Matrix;

    impl<const M: usize, const N: usize> Serialize for Matrix<M, N> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(self.0.iter().map(|row| row.as_slice()))
        }
    }

    impl<'de, const M: usize, const N: usize> Deserialize<'de> for Matrix<M, N> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let rows = Vec::<Vec<f32>>::deserialize(deserializer)?;
            if rows.len() != M {
                return Err(D::Error::invalid_length(rows.len(), &"one entry per row"));
            }
            let mut m = Self::null();
            for (row, values) in m.0.iter_mut().zip(rows) {
                if values.len() != N {
                    return Err(D::Error::invalid_length(
                        values.len(),
                        &"one entry per column",
                    ));
                }
                row.copy_from_slice(&values);
            }
            Ok(m)
        }
    }
}
