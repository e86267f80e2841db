// Copyright 2026 the Straightedge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Common mathematical operations

#![allow(missing_docs)]

use arrayvec::ArrayVec;

/// Defines a trait that chooses between libstd or libm implementations of float methods.
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident/$lfname:ident;
    )+) => {
        #[cfg(not(feature = "std"))]
        pub(crate) trait FloatFuncs : Sized {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f32 {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lfname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("straightedge requires either the `std` or `libm` feature")
            })+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f64 {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("straightedge requires either the `std` or `libm` feature")
            })+
        }
    }
}

define_float_funcs! {
    fn abs(self) -> Self => fabs/fabsf;
    fn acos(self) -> Self => acos/acosf;
    fn atan2(self, other: Self) -> Self => atan2/atan2f;
    fn hypot(self, other: Self) -> Self => hypot/hypotf;
    fn sin_cos(self) -> (Self, Self) => sincos/sincosf;
    fn sqrt(self) -> Self => sqrt/sqrtf;
}

/// The square of `x`.
#[inline]
pub fn square(x: f64) -> f64 {
    x * x
}

/// Find real roots of the quadratic equation a x² + b x + c = 0.
///
/// Returns no roots when the discriminant is negative, the single root
/// `-b / 2a` when it is exactly zero, and otherwise both roots with the
/// `+√Δ` root first. That order is stable and intersection routines rely
/// on it, so the roots are deliberately not sorted.
///
/// The leading coefficient `a` must be nonzero; with `a == 0` the results
/// are infinite or NaN.
///
/// ```
/// use straightedge::common::quadratic;
///
/// assert_eq!(quadratic(1.0, 0.0, -4.0).as_slice(), &[2.0, -2.0]);
/// assert_eq!(quadratic(1.0, -2.0, 1.0).as_slice(), &[1.0]);
/// assert!(quadratic(1.0, 0.0, 4.0).is_empty());
/// ```
pub fn quadratic(a: f64, b: f64, c: f64) -> ArrayVec<f64, 2> {
    let mut result = ArrayVec::new();
    let discriminant = square(b) - 4.0 * a * c;
    if discriminant < 0.0 {
        return result;
    }
    if discriminant == 0.0 {
        result.push(-b / (2.0 * a));
        return result;
    }
    let root = discriminant.sqrt();
    result.push((root - b) / (2.0 * a));
    result.push((-root - b) / (2.0 * a));
    result
}

#[cfg(test)]
mod tests {
    use crate::common::*;

    #[test]
    fn test_square() {
        assert_eq!(square(3.0), 9.0);
        assert_eq!(square(-1.5), 2.25);
    }

    #[test]
    fn test_quadratic_root_counts() {
        assert_eq!(quadratic(1.0, 0.0, -4.0).as_slice(), &[2.0, -2.0]);
        assert_eq!(quadratic(1.0, -2.0, 1.0).as_slice(), &[1.0]);
        assert!(quadratic(1.0, 0.0, 4.0).is_empty());
    }

    #[test]
    fn test_quadratic_positive_root_first() {
        // (x - 1)(x - 3) with a negative leading coefficient flips the order.
        assert_eq!(quadratic(1.0, -4.0, 3.0).as_slice(), &[3.0, 1.0]);
        assert_eq!(quadratic(-1.0, 4.0, -3.0).as_slice(), &[1.0, 3.0]);
    }

    #[test]
    fn test_quadratic_roots_satisfy_equation() {
        let (a, b, c) = (2.5, -1.25, -7.0);
        let roots = quadratic(a, b, c);
        assert_eq!(roots.len(), 2);
        for x in roots {
            assert!((a * x * x + b * x + c).abs() < 1e-12, "{x} is not a root");
        }
    }
}
