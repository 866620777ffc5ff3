//! Matrices and affine transforms.

use core::fmt::{self, Debug, Formatter};
use core::ops::{Add, Div, Mul};

use crate::math::angle::Angle;
use crate::math::approx::ApproxEq;
use crate::math::vec::{vec4, Vector4};
use crate::math::{Error, Result};

/// Determinants smaller than this in magnitude are treated as zero.
/// An exact zero check would let numerically singular matrices through.
const DET_EPS: f32 = 1e-6;

//
// Types
//

/// A 4×4 matrix representing an affine transform of homogeneous vectors.
///
/// The storage is row-major: `rows[i][j]` is the entry on row i, column j.
/// Vectors are columns and are applied on the right, so
/// [`mul_vec`][Self::mul_vec] computes `result[i] = row_i · v`, and the
/// composition `a.compose(&b)` is the matrix product A·B, the transform
/// that applies B first and A second.
#[derive(Copy, Clone, PartialEq)]
pub struct Matrix4([[f32; 4]; 4]);

//
// Inherent impls
//

impl Matrix4 {
    /// The identity transform.
    pub const IDENTITY: Self = Self([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    /// Creates a matrix from its rows.
    pub const fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        Self(rows)
    }

    /// Creates a matrix from its columns.
    pub fn from_cols(cols: [Vector4; 4]) -> Self {
        let mut m = [[0.0; 4]; 4];
        for (j, col) in cols.iter().enumerate() {
            let [x, y, z, h] = [col.x, col.y, col.z, col.h];
            m[0][j] = x;
            m[1][j] = y;
            m[2][j] = z;
            m[3][j] = h;
        }
        Self(m)
    }

    /// Creates a matrix from 16 elements in row-major order.
    ///
    /// # Errors
    /// Returns [`Error::DimensionMismatch`] unless `els.len() == 16`.
    pub fn from_flat(els: &[f32]) -> Result<Self> {
        if els.len() != 16 {
            return Err(Error::DimensionMismatch {
                expected: 16,
                actual: els.len(),
            });
        }
        let mut m = [[0.0; 4]; 4];
        for (i, row) in m.iter_mut().enumerate() {
            row.copy_from_slice(&els[4 * i..4 * i + 4]);
        }
        Ok(Self(m))
    }

    /// Returns the rows of `self`.
    pub const fn rows(&self) -> &[[f32; 4]; 4] {
        &self.0
    }

    /// Returns row `i` of `self` as a vector.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if `i` > 3.
    pub fn row(&self, i: usize) -> Result<Vector4> {
        match self.0.get(i) {
            Some(&[x, y, z, h]) => Ok(vec4(x, y, z, h)),
            None => Err(Error::IndexOutOfRange(i)),
        }
    }

    /// Returns column `j` of `self` as a vector.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if `j` > 3.
    pub fn col(&self, j: usize) -> Result<Vector4> {
        if j > 3 {
            return Err(Error::IndexOutOfRange(j));
        }
        Ok(vec4(self.0[0][j], self.0[1][j], self.0[2][j], self.0[3][j]))
    }

    /// Applies `self` to the vector `v`.
    ///
    /// Each result component is the full four-term product of a row with
    /// `v`, h included; this is what makes translations act on points
    /// (h = 1) but not directions (h = 0).
    pub fn mul_vec(&self, v: Vector4) -> Vector4 {
        let dot4 = |r: &[f32; 4]| r[0] * v.x + r[1] * v.y + r[2] * v.z + r[3] * v.h;
        vec4(
            dot4(&self.0[0]),
            dot4(&self.0[1]),
            dot4(&self.0[2]),
            dot4(&self.0[3]),
        )
    }

    /// Returns the matrix product `self` · `other`.
    ///
    /// Matrix composition is associative but not commutative; the product
    /// is the transform that applies `other` first and `self` second.
    pub fn compose(&self, other: &Self) -> Self {
        let mut m = [[0.0; 4]; 4];
        for i in 0..4 {
            for j in 0..4 {
                m[i][j] = (0..4).map(|k| self.0[i][k] * other.0[k][j]).sum();
            }
        }
        Self(m)
    }

    /// Returns the determinant of `self`.
    ///
    /// Computed by cofactor (Laplace) expansion along the first row with
    /// alternating signs.
    pub fn determinant(&self) -> f32 {
        let [a, b, c, d] = self.0[0];

        a * self.minor(0, 0) - b * self.minor(0, 1) + c * self.minor(0, 2)
            - d * self.minor(0, 3)
    }

    /// Returns the inverse of `self`, computed as adjugate / determinant.
    ///
    /// # Errors
    /// Returns [`Error::SingularMatrix`] if the determinant is within
    /// epsilon of zero.
    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if det.abs() < DET_EPS {
            return Err(Error::SingularMatrix);
        }
        let mut adj = [[0.0; 4]; 4];
        for i in 0..4 {
            for j in 0..4 {
                let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
                // Transposed: the adjugate is the transpose of the cofactors
                adj[j][i] = sign * self.minor(i, j);
            }
        }
        Ok(Self(adj) / det)
    }

    /// Returns the 3×3 minor of `self` with row `row` and column `col`
    /// removed.
    fn minor(&self, row: usize, col: usize) -> f32 {
        let mut rs = [0, 1, 2, 3].into_iter().filter(|&r| r != row);
        let mut cs = [0usize; 3];
        for (k, c) in (0..4).filter(|&c| c != col).enumerate() {
            cs[k] = c;
        }
        let (r0, r1, r2) = (
            &self.0[rs.next().unwrap()],
            &self.0[rs.next().unwrap()],
            &self.0[rs.next().unwrap()],
        );
        let [a, b, c] = cs.map(|j| r0[j]);
        let [d, e, f] = cs.map(|j| r1[j]);
        let [g, h, i] = cs.map(|j| r2[j]);

        a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
    }
}

//
// Transform factories
//

/// Returns a rotation about the x axis by `a`.
///
/// Rotations are right-handed: a positive angle turns counter-clockwise
/// when viewed from the positive end of the axis toward the origin.
pub fn rotate_x(a: Angle) -> Matrix4 {
    let (sin, cos) = a.sin_cos();
    Matrix4::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, cos, -sin, 0.0],
        [0.0, sin, cos, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Returns a rotation about the y axis by `a`.
///
/// See [`rotate_x`] for the handedness convention.
pub fn rotate_y(a: Angle) -> Matrix4 {
    let (sin, cos) = a.sin_cos();
    Matrix4::from_rows([
        [cos, 0.0, sin, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [-sin, 0.0, cos, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Returns a rotation about the z axis by `a`.
///
/// See [`rotate_x`] for the handedness convention.
///
/// # Examples
/// ```
/// # use flatshade_core::assert_approx_eq;
/// # use flatshade_core::math::{degs, pt3, mat::rotate_z};
/// let m = rotate_z(degs(180.0));
/// assert_approx_eq!(m.mul_vec(pt3(1.0, 0.0, 0.0)), pt3(-1.0, 0.0, 0.0));
/// ```
pub fn rotate_z(a: Angle) -> Matrix4 {
    let (sin, cos) = a.sin_cos();
    Matrix4::from_rows([
        [cos, -sin, 0.0, 0.0],
        [sin, cos, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Returns a scale by `sx`, `sy`, and `sz` along the respective axes.
pub fn scale(sx: f32, sy: f32, sz: f32) -> Matrix4 {
    Matrix4::from_rows([
        [sx, 0.0, 0.0, 0.0],
        [0.0, sy, 0.0, 0.0],
        [0.0, 0.0, sz, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Returns a translation by `dx`, `dy`, and `dz`.
///
/// Translations act on points (h = 1) and leave directions (h = 0) alone.
pub fn translate(dx: f32, dy: f32, dz: f32) -> Matrix4 {
    Matrix4::from_rows([
        [1.0, 0.0, 0.0, dx],
        [0.0, 1.0, 0.0, dy],
        [0.0, 0.0, 1.0, dz],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Returns a basis-correction transform for a viewport with the given
/// aspect ratio, rescaling the y axis by `aspect_w / aspect_h`.
///
/// On a viewport wider than tall, one unit of y spans fewer pixels than one
/// unit of x; composing this matrix into a mesh's static transform counters
/// the distortion so that squares stay square.
pub fn viewport_aspect(aspect_w: f32, aspect_h: f32) -> Matrix4 {
    scale(1.0, aspect_w / aspect_h, 1.0)
}

//
// Foreign trait impls
//

impl Debug for Matrix4 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix4[")?;
        for row in &self.0 {
            writeln!(f, "    {row:6.2?}")?;
        }
        write!(f, "]")
    }
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[[f32; 4]; 4]> for Matrix4 {
    fn from(rows: [[f32; 4]; 4]) -> Self {
        Self(rows)
    }
}

/// Matrix product; shorthand for [`Matrix4::compose`].
impl Mul for Matrix4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.compose(&rhs)
    }
}

/// Elementwise scalar multiplication.
impl Mul<f32> for Matrix4 {
    type Output = Self;
    fn mul(mut self, rhs: f32) -> Self {
        for row in &mut self.0 {
            for el in row {
                *el *= rhs;
            }
        }
        self
    }
}

/// Elementwise scalar division.
impl Div<f32> for Matrix4 {
    type Output = Self;
    fn div(mut self, rhs: f32) -> Self {
        for row in &mut self.0 {
            for el in row {
                *el /= rhs;
            }
        }
        self
    }
}

/// Elementwise matrix addition.
impl Add for Matrix4 {
    type Output = Self;
    fn add(mut self, rhs: Self) -> Self {
        for (row, rhs_row) in self.0.iter_mut().zip(&rhs.0) {
            for (el, r) in row.iter_mut().zip(rhs_row) {
                *el += r;
            }
        }
        self
    }
}

impl ApproxEq for Matrix4 {
    fn approx_eq_eps(&self, other: &Self, rel_eps: f32) -> bool {
        self.0.approx_eq_eps(&other.0, rel_eps)
    }
}
