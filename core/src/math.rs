//! Linear algebra and other math tools.
//!
//! All types here commit to a single set of conventions, chosen once and
//! documented on the item that embodies them:
//!
//! * Vectors are homogeneous (x, y, z, h) columns; h tags a value as a point
//!   (h = 1) or a direction (h = 0) and never takes part in Euclidean metric
//!   operations (dot product, length, normalization, angles).
//! * Matrices are row-major; a matrix is applied to a vector on the left,
//!   `result[i] = row_i · v`.
//! * Rotations are right-handed: a positive angle turns counter-clockwise
//!   when viewed from the positive end of the axis toward the origin.

use core::fmt::{self, Display, Formatter};

#[macro_use]
pub mod approx;

pub mod angle;
pub mod color;
pub mod mat;
pub mod vec;

pub use angle::{degs, rads, turns, Angle};
pub use color::{gray, rgb, rgba, Color3, Color4};
pub use mat::Matrix4;
pub use vec::{dir3, pt3, vec4, Vector4};

//
// Types
//

/// Error type of all fallible math operations.
///
/// Every variant represents a contract violation surfaced synchronously to
/// the caller of the offending operation. Nothing is retried or recovered
/// internally; the caller is expected to avoid these conditions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Component access beyond the valid bounds of a vector or matrix.
    IndexOutOfRange(usize),
    /// Attempt to invert a matrix whose determinant is (nearly) zero.
    SingularMatrix,
    /// Construction of a matrix or polygon from malformed input.
    DimensionMismatch { expected: usize, actual: usize },
    /// Normalizing a zero-length vector, or a perspective divide at the
    /// viewer plane.
    DivisionByZero,
}

/// Result of a fallible math operation.
pub type Result<T> = core::result::Result<T, Error>;

//
// Impls
//

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Self::IndexOutOfRange(i) => {
                write!(f, "component index {i} out of range")
            }
            Self::SingularMatrix => {
                write!(f, "singular matrix has no inverse")
            }
            Self::DimensionMismatch { expected, actual } => {
                write!(f, "expected {expected} elements, got {actual}")
            }
            Self::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for Error {}
