//! Small linear algebra core for building the transforms a rasterizer
//! consumes: vectors, matrices, quaternions, and the rotation, view and
//! projection constructors built on top of them.

pub mod error;
pub mod transform;
pub mod types;

pub use error::{MathError, MathResult};
