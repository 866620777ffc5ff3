//! Angular quantities.

use core::f32::consts::{PI, TAU};
use core::fmt::{self, Debug, Display, Formatter};
use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::math::approx::ApproxEq;

//
// Types
//

/// A scalar angular quantity.
///
/// Prevents confusion between degrees and radians by requiring the use of
/// one of the named constructors to create an `Angle`, as well as one of
/// the named getters to obtain the angle as a raw `f32` value.
#[derive(Copy, Clone, Default, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Angle(f32);

//
// Free fns and consts
//

/// Returns an angle of `a` radians.
pub const fn rads(a: f32) -> Angle {
    Angle(a)
}

/// Returns an angle of `a` degrees.
pub fn degs(a: f32) -> Angle {
    Angle(a * RADS_PER_DEG)
}

/// Returns an angle of `a` turns (1 turn = 360° = 2π rad).
pub fn turns(a: f32) -> Angle {
    Angle(a * RADS_PER_TURN)
}

/// Returns the arccosine of `x` as an `Angle` in the range [0°, 180°].
///
/// # Examples
/// ```
/// # use flatshade_core::assert_approx_eq;
/// # use flatshade_core::math::angle::*;
/// assert_approx_eq!(acos(-1.0), degs(180.0));
/// ```
/// # Panics
/// If `x` is outside the range [-1.0, 1.0].
pub fn acos(x: f32) -> Angle {
    assert!((-1.0..=1.0).contains(&x), "acos argument {x} out of range");
    Angle(x.acos())
}

const RADS_PER_DEG: f32 = PI / 180.0;
const RADS_PER_TURN: f32 = TAU;

//
// Inherent impls
//

impl Angle {
    /// A zero degree angle.
    pub const ZERO: Self = Self(0.0);
    /// A 90 degree angle.
    pub const RIGHT: Self = Self(RADS_PER_TURN / 4.0);
    /// A 180 degree angle.
    pub const STRAIGHT: Self = Self(RADS_PER_TURN / 2.0);
    /// A 360 degree angle.
    pub const FULL: Self = Self(RADS_PER_TURN);

    /// Returns the value of `self` in radians.
    pub const fn to_rads(self) -> f32 {
        self.0
    }
    /// Returns the value of `self` in degrees.
    pub fn to_degs(self) -> f32 {
        self.0 / RADS_PER_DEG
    }
    /// Returns the value of `self` in turns.
    pub fn to_turns(self) -> f32 {
        self.0 / RADS_PER_TURN
    }

    /// Returns `self` clamped to the range `min..=max`.
    #[must_use]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self(self.0.clamp(min.0, max.0))
    }

    /// Returns the sine of `self`.
    pub fn sin(self) -> f32 {
        self.0.sin()
    }
    /// Returns the cosine of `self`.
    pub fn cos(self) -> f32 {
        self.0.cos()
    }
    /// Simultaneously computes the sine and cosine of `self`.
    pub fn sin_cos(self) -> (f32, f32) {
        self.0.sin_cos()
    }
}

//
// Foreign trait impls
//

impl Debug for Angle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Angle({}°)", self.to_degs())
    }
}

impl Display for Angle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.to_degs())
    }
}

impl Add for Angle {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}
impl AddAssign for Angle {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}
impl Sub for Angle {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}
impl SubAssign for Angle {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}
impl Neg for Angle {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.0)
    }
}
impl Mul<f32> for Angle {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self(self.0 * rhs)
    }
}
impl Div<f32> for Angle {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self(self.0 / rhs)
    }
}

impl ApproxEq for Angle {
    fn approx_eq_eps(&self, other: &Self, rel_eps: f32) -> bool {
        self.0.approx_eq_eps(&other.0, rel_eps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_conversions() {
        assert_approx_eq!(degs(90.0).to_rads(), PI / 2.0);
        assert_approx_eq!(turns(2.0).to_degs(), 720.0);
        assert_approx_eq!(degs(180.0).to_turns(), 0.5);
        assert_eq!(rads(PI), Angle::STRAIGHT);
    }

    #[test]
    fn trigonometry() {
        assert_approx_eq!(degs(30.0).sin(), 0.5);
        assert_approx_eq!(degs(60.0).cos(), 0.5);
        let (sin, cos) = degs(90.0).sin_cos();
        assert_approx_eq!(sin, 1.0);
        assert_approx_eq!(cos, 0.0);
    }

    #[test]
    fn arithmetic() {
        assert_approx_eq!(degs(45.0) + degs(45.0), degs(90.0));
        assert_approx_eq!(-degs(45.0), degs(-45.0));
        assert_approx_eq!(degs(90.0) * 2.0, Angle::STRAIGHT);
        assert_approx_eq!(Angle::FULL / 4.0, Angle::RIGHT);
    }

    #[test]
    fn clamping() {
        let (min, max) = (degs(0.0), degs(45.0));
        assert_eq!(degs(100.0).clamp(min, max), max);
        assert_eq!(degs(-10.0).clamp(min, max), min);
        assert_eq!(degs(30.0).clamp(min, max), degs(30.0));
    }
}
