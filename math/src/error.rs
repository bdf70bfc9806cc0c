use std::{
    error::Error,
    fmt::{Display, Formatter},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    InvalidLength { expected: usize, found: usize },
}

impl Display for MathError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            MathError::InvalidLength { expected, found } => write!(
                f,
                "Invalid byte length: expected {} bytes, found {}",
                expected, found
            ),
        }
    }
}

impl Error for MathError {}

pub type MathResult<T> = Result<T, MathError>;

/// Fills `values` from little-endian `f32` bytes, rejecting any length other
/// than exactly one `f32` per value.
pub(crate) fn fill_from_le_bytes(values: &mut [f32], bytes: &[u8]) -> MathResult<()> {
    let expected = std::mem::size_of_val(values);
    if bytes.len() != expected {
        return Err(MathError::InvalidLength {
            expected,
            found: bytes.len(),
        });
    }
    for (value, chunk) in values.iter_mut().zip(bytes.chunks_exact(4)) {
        *value = f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    Ok(())
}
