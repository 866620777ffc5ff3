//! Homogeneous vectors.

use core::fmt::{self, Debug, Formatter};
use core::ops::{Add, Div, Index, Mul, Neg, Sub};

use crate::math::angle::{acos, Angle};
use crate::math::approx::ApproxEq;
use crate::math::{Error, Result};

//
// Types
//

/// A homogeneous 3D point or direction.
///
/// The fourth component, h, tags the value as a point (h = 1) or a direction
/// (h = 0) so that affine transforms treat both uniformly: translations move
/// points but leave directions alone. The tag is carried through arithmetic
/// from the left operand and is excluded from every Euclidean metric
/// operation: [`dot`][Self::dot], [`len`][Self::len],
/// [`normalize`][Self::normalize], and [`angle_to`][Self::angle_to] act on
/// (x, y, z) only.
#[derive(Copy, Clone, Default, PartialEq)]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub h: f32,
}

//
// Free fns and consts
//

/// Returns a new vector with components `x`, `y`, `z`, and `h`.
pub const fn vec4(x: f32, y: f32, z: f32, h: f32) -> Vector4 {
    Vector4 { x, y, z, h }
}

/// Returns a new point (h = 1) with components `x`, `y`, and `z`.
pub const fn pt3(x: f32, y: f32, z: f32) -> Vector4 {
    vec4(x, y, z, 1.0)
}

/// Returns a new direction (h = 0) with components `x`, `y`, and `z`.
pub const fn dir3(x: f32, y: f32, z: f32) -> Vector4 {
    vec4(x, y, z, 0.0)
}

//
// Inherent impls
//

impl Vector4 {
    /// The zero vector, with h = 0.
    pub const ZERO: Self = vec4(0.0, 0.0, 0.0, 0.0);

    /// Returns the spatial dot product of `self` and `other`.
    ///
    /// Only (x, y, z) take part; h is an affine tag, not a coordinate.
    ///
    /// # Examples
    /// ```
    /// # use flatshade_core::math::vec::pt3;
    /// assert_eq!(pt3(1.0, 2.0, 3.0).dot(&pt3(1.0, 2.0, 3.0)), 14.0);
    /// ```
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns the spatial cross product of `self` and `other`.
    ///
    /// The result's h component is copied from `self`.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        vec4(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
            self.h,
        )
    }

    /// Returns the length of the spatial part of `self`.
    #[inline]
    pub fn len(&self) -> f32 {
        self.len_sqr().sqrt()
    }

    /// Returns the squared length of the spatial part of `self`.
    ///
    /// Cheaper than [`len`][Self::len]; useful for comparisons.
    #[inline]
    pub fn len_sqr(&self) -> f32 {
        self.dot(self)
    }

    /// Returns `self` scaled to unit length.
    ///
    /// # Errors
    /// Returns [`Error::DivisionByZero`] if `self` has zero length.
    /// A zero vector has no direction; it is never silently passed through.
    pub fn normalize(&self) -> Result<Self> {
        let len = self.len();
        if len == 0.0 {
            return Err(Error::DivisionByZero);
        }
        Ok(*self / len)
    }

    /// Returns the angle between the spatial parts of `self` and `other`,
    /// in the range [0°, 180°].
    ///
    /// # Errors
    /// Returns [`Error::DivisionByZero`] if either vector has zero length.
    pub fn angle_to(&self, other: &Self) -> Result<Angle> {
        let lens = self.len() * other.len();
        if lens == 0.0 {
            return Err(Error::DivisionByZero);
        }
        // Clamp to counter rounding; acos panics outside [-1, 1]
        Ok(acos((self.dot(other) / lens).clamp(-1.0, 1.0)))
    }

    /// Returns component `i` of `self`, with x, y, z, h at indices 0 to 3.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if `i` > 3.
    pub fn get(&self, i: usize) -> Result<f32> {
        match i {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            3 => Ok(self.h),
            _ => Err(Error::IndexOutOfRange(i)),
        }
    }
}

//
// Foreign trait impls
//

impl Debug for Vector4 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Self { x, y, z, h } = self;
        write!(f, "Vector4[{x:?}, {y:?}, {z:?}; {h:?}]")
    }
}

impl From<[f32; 4]> for Vector4 {
    #[inline]
    fn from([x, y, z, h]: [f32; 4]) -> Self {
        vec4(x, y, z, h)
    }
}

impl Index<usize> for Vector4 {
    type Output = f32;

    /// The panicking counterpart of [`Vector4::get`].
    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.h,
            _ => panic!("component index {i} out of range"),
        }
    }
}

impl Add for Vector4 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        vec4(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.h)
    }
}

impl Sub for Vector4 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        vec4(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.h)
    }
}

impl Neg for Vector4 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        vec4(-self.x, -self.y, -self.z, self.h)
    }
}

/// Component-wise multiplication.
impl Mul for Vector4 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        vec4(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z, self.h)
    }
}

/// Component-wise division.
impl Div for Vector4 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        vec4(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z, self.h)
    }
}

impl Mul<f32> for Vector4 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        vec4(self.x * rhs, self.y * rhs, self.z * rhs, self.h)
    }
}

impl Div<f32> for Vector4 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self {
        vec4(self.x / rhs, self.y / rhs, self.z / rhs, self.h)
    }
}

impl ApproxEq for Vector4 {
    fn approx_eq_eps(&self, other: &Self, rel_eps: f32) -> bool {
        [self.x, self.y, self.z, self.h]
            .approx_eq_eps(&[other.x, other.y, other.z, other.h], rel_eps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_carries_h_from_left() {
        let v = pt3(1.0, 2.0, 3.0);
        let w = dir3(-2.0, 1.0, -1.0);

        assert_eq!(v + w, pt3(-1.0, 3.0, 2.0));
        assert_eq!(v - w, pt3(3.0, 1.0, 4.0));
        assert_eq!(w * 3.0, dir3(-6.0, 3.0, -3.0));
        assert_eq!(-v, pt3(-1.0, -2.0, -3.0));
    }

    #[test]
    fn componentwise_mul_div() {
        let v = pt3(1.0, -2.0, 3.0);
        let w = dir3(2.0, 4.0, 0.5);
        assert_eq!(v * w, pt3(2.0, -8.0, 1.5));
        assert_eq!(v / pt3(1.0, 2.0, 3.0), pt3(1.0, -1.0, 1.0));
    }

    #[test]
    fn scalar_mul_div_round_trip() {
        let v = pt3(1.0, -2.0, 3.0);
        assert_approx_eq!((v * 4.0) / 4.0, v);
        assert_approx_eq!((v / 8.0) * 8.0, v);
    }

    #[test]
    fn add_sub_round_trip() {
        let v = pt3(1.0, -2.0, 3.0);
        let w = dir3(0.5, 10.0, -7.0);
        assert_approx_eq!((v + w) - w, v);
    }

    #[test]
    fn dot_product_is_spatial() {
        // h must not contribute
        assert_eq!(pt3(1.0, 2.0, 3.0).dot(&pt3(1.0, 2.0, 3.0)), 14.0);
        assert_eq!(vec4(0.5, 0.5, 0.0, 9.0).dot(&vec4(-2.0, 2.0, 0.0, 9.0)), 0.0);
    }

    #[test]
    fn cross_product() {
        let x = pt3(1.0, 0.0, 0.0);
        let y = pt3(0.0, 1.0, 0.0);
        assert_eq!(x.cross(&y), pt3(0.0, 0.0, 1.0));
        assert_eq!(y.cross(&x), pt3(0.0, 0.0, -1.0));
    }

    #[test]
    fn cross_with_self_is_zero() {
        let v = pt3(1.3, -2.2, 0.7);
        assert_eq!(v.cross(&v), pt3(0.0, 0.0, 0.0));
    }

    #[test]
    fn length() {
        assert_eq!(pt3(3.0, 4.0, 0.0).len(), 5.0);
        assert_eq!(pt3(1.0, 1.0, 1.0).len_sqr(), 3.0);
        assert_eq!(pt3(0.0, 0.0, 0.0).len(), 0.0);
    }

    #[test]
    fn normalize_nonzero() {
        let v = pt3(5.0, 0.0, 0.0).normalize().unwrap();
        assert_eq!(v, pt3(1.0, 0.0, 0.0));
        assert_approx_eq!(pt3(1.0, 2.0, -2.0).normalize().unwrap().len(), 1.0);
    }

    #[test]
    fn normalize_zero_fails() {
        assert_eq!(pt3(0.0, 0.0, 0.0).normalize(), Err(Error::DivisionByZero));
    }

    #[test]
    fn angle_between_vectors() {
        use crate::math::angle::degs;
        let v = pt3(1.0, 0.0, 0.0);
        assert_approx_eq!(v.angle_to(&v).unwrap(), degs(0.0));
        assert_approx_eq!(
            v.angle_to(&pt3(0.0, 1.0, 0.0)).unwrap(),
            degs(90.0)
        );
        assert_approx_eq!(
            v.angle_to(&pt3(-1.0, 0.0, 0.0)).unwrap(),
            degs(180.0)
        );
        assert_eq!(
            v.angle_to(&Vector4::ZERO),
            Err(Error::DivisionByZero)
        );
    }

    #[test]
    fn indexed_access() {
        let v = vec4(1.0, 2.0, 3.0, 1.0);
        assert_eq!(v.get(0), Ok(1.0));
        assert_eq!(v.get(3), Ok(1.0));
        assert_eq!(v.get(4), Err(Error::IndexOutOfRange(4)));
        assert_eq!(v[2], 3.0);
    }

    #[test]
    fn debug_format() {
        assert_eq!(
            format!("{:?}", pt3(1.0, -2.0, 3.0)),
            "Vector4[1.0, -2.0, 3.0; 1.0]"
        );
    }
}
