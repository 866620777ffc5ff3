//! Testing and asserting approximate equality.

use core::iter::zip;

/// Trait for comparing values for approximate equality.
///
/// Due to rounding errors, two floating-point computations that would be
/// equal in ℝ rarely compare equal with `==`. Comparing against a small
/// relative tolerance, "epsilon", is more robust. The epsilon is scaled by
/// the magnitude of the left operand so that large values tolerate
/// proportionally larger absolute differences.
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// The default relative epsilon used by [`approx_eq`][Self::approx_eq].
    const REL_EPS: f32 = 1e-6;

    /// Returns whether `self` and `other` are approximately equal,
    /// using the default epsilon.
    fn approx_eq(&self, other: &Rhs) -> bool {
        self.approx_eq_eps(other, Self::REL_EPS)
    }

    /// Returns whether `self` and `other` are approximately equal,
    /// using the relative epsilon `rel_eps`.
    fn approx_eq_eps(&self, other: &Rhs, rel_eps: f32) -> bool;
}

impl ApproxEq for f32 {
    fn approx_eq_eps(&self, other: &Self, rel_eps: f32) -> bool {
        (self - other).abs() <= rel_eps * self.abs().max(1.0)
    }
}

impl<T: ApproxEq> ApproxEq for [T] {
    fn approx_eq_eps(&self, other: &Self, rel_eps: f32) -> bool {
        self.len() == other.len()
            && zip(self, other).all(|(s, o)| s.approx_eq_eps(o, rel_eps))
    }
}

impl<T: ApproxEq, const N: usize> ApproxEq for [T; N] {
    fn approx_eq_eps(&self, other: &Self, rel_eps: f32) -> bool {
        self.as_slice().approx_eq_eps(other.as_slice(), rel_eps)
    }
}

/// Asserts that two values are approximately equal.
///
/// The left operand must have an applicable [`ApproxEq`] impl, and both
/// operands must impl `Debug` unless a custom message is given. A custom
/// epsilon, if present, must come before the format string.
///
/// # Examples
/// ```
/// # use flatshade_core::assert_approx_eq;
/// assert_ne!(0.1 + 0.2, 0.3);
/// assert_approx_eq!(0.1 + 0.2, 0.3);
/// assert_approx_eq!(100.0, 101.0, eps = 0.011);
/// ```
/// # Panics
/// If the given values are not approximately equal.
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr) => {
        match (&$a, &$b) {
            (a, b) => $crate::assert_approx_eq!(
                *a, *b,
                "assertion failed: `{a:?} ≅ {b:?}`"
            )
        }
    };
    ($a:expr, $b:expr, eps = $eps:expr) => {
        match (&$a, &$b) {
            (a, b) => $crate::assert_approx_eq!(
                *a, *b, eps = $eps,
                "assertion failed: `{a:?} ≅ {b:?}`"
            )
        }
    };
    ($a:expr, $b:expr, $fmt:literal $(, $args:expr)*) => {{
        use $crate::math::approx::ApproxEq;
        match (&$a, &$b) {
            (a, b) => assert!(ApproxEq::approx_eq(a, b), $fmt $(, $args)*)
        }
    }};
    ($a:expr, $b:expr, eps = $eps:expr, $fmt:literal $(, $args:expr)*) => {{
        use $crate::math::approx::ApproxEq;
        match (&$a, &$b) {
            (a, b) => assert!(
                ApproxEq::approx_eq_eps(a, b, $eps),
                $fmt $(, $args)*
            )
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn approx_eq_near_zero() {
        assert_approx_eq!(0.0, 0.0);
        assert_approx_eq!(0.0, 0.0000001);
        assert_approx_eq!(-0.0000001, 0.0);
    }

    #[test]
    fn approx_eq_relative() {
        assert_approx_eq!(0.9999999, 1.0);
        assert_approx_eq!(-1.0, -1.0000001);
        assert_approx_eq!(1.0e10, 1.0000001e10);
    }

    #[test]
    fn approx_eq_custom_epsilon() {
        assert_approx_eq!(1.0, 0.999, eps = 0.01);
        assert_approx_eq!(100.0, 99.9, eps = 0.01);
    }

    #[test]
    fn approx_eq_slices() {
        assert_approx_eq!([0.1 + 0.2, 0.5], [0.3, 0.5]);
    }

    #[test]
    #[should_panic]
    fn zero_not_approx_eq_to_one() {
        assert_approx_eq!(0.0, 1.0);
    }

    #[test]
    #[should_panic]
    fn nan_not_approx_eq_to_nan() {
        assert_approx_eq!(f32::NAN, f32::NAN);
    }
}
