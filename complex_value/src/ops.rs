//! Arithmetic operators for `Complex`
//!
//! Every binary operator is pure and returns a new value. Mixed forms with a
//! real `f64` operand are provided on both sides. Scalar `+` and `-` act on
//! the real part only; scalar `*` and `/` scale both parts.
//!
//! Nothing here reports errors. Division by zero yields `Inf`/`NaN` exactly
//! as the underlying `f64` operations do; use [`Complex::checked_div`] to get
//! a `DomainError` for a zero complex divisor instead.

use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::debug::debug_log;
use crate::error::{ComplexError, ComplexResult};
use crate::value::Complex;

/// Implement `&T op U`, `T op &U` and `&T op &U` in terms of `T op U`.
macro_rules! forward_ref_binop {
    (impl $imp:ident, $method:ident for $t:ty, $u:ty) => {
        impl $imp<$u> for &$t {
            type Output = <$t as $imp<$u>>::Output;

            #[inline]
            fn $method(self, rhs: $u) -> Self::Output {
                $imp::$method(*self, rhs)
            }
        }

        impl $imp<&$u> for $t {
            type Output = <$t as $imp<$u>>::Output;

            #[inline]
            fn $method(self, rhs: &$u) -> Self::Output {
                $imp::$method(self, *rhs)
            }
        }

        impl $imp<&$u> for &$t {
            type Output = <$t as $imp<$u>>::Output;

            #[inline]
            fn $method(self, rhs: &$u) -> Self::Output {
                $imp::$method(*self, *rhs)
            }
        }
    };
}

/// Implement `T op= &U` in terms of `T op= U`.
macro_rules! forward_ref_op_assign {
    (impl $imp:ident, $method:ident for $t:ty, $u:ty) => {
        impl $imp<&$u> for $t {
            #[inline]
            fn $method(&mut self, rhs: &$u) {
                $imp::$method(self, *rhs);
            }
        }
    };
}

// ========== Complex op Complex ==========

impl Add for Complex {
    type Output = Complex;

    #[inline]
    fn add(self, rhs: Complex) -> Complex {
        Complex::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Complex {
    type Output = Complex;

    #[inline]
    fn sub(self, rhs: Complex) -> Complex {
        Complex::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complex {
    type Output = Complex;

    #[inline]
    fn mul(self, rhs: Complex) -> Complex {
        Complex::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

/// `a / b = (a * conj(b)) / |b|²`
///
/// A zero divisor gives `NaN` (or `Inf`) parts rather than an error.
impl Div for Complex {
    type Output = Complex;

    #[inline]
    fn div(self, rhs: Complex) -> Complex {
        (self * rhs.conj()) / rhs.norm_sqr()
    }
}

// ========== Complex op f64 ==========

impl Add<f64> for Complex {
    type Output = Complex;

    #[inline]
    fn add(self, rhs: f64) -> Complex {
        Complex::new(self.re + rhs, self.im)
    }
}

impl Sub<f64> for Complex {
    type Output = Complex;

    #[inline]
    fn sub(self, rhs: f64) -> Complex {
        Complex::new(self.re - rhs, self.im)
    }
}

impl Mul<f64> for Complex {
    type Output = Complex;

    #[inline]
    fn mul(self, rhs: f64) -> Complex {
        Complex::new(self.re * rhs, self.im * rhs)
    }
}

impl Div<f64> for Complex {
    type Output = Complex;

    #[inline]
    fn div(self, rhs: f64) -> Complex {
        Complex::new(self.re / rhs, self.im / rhs)
    }
}

// ========== f64 op Complex ==========

impl Add<Complex> for f64 {
    type Output = Complex;

    #[inline]
    fn add(self, rhs: Complex) -> Complex {
        Complex::new(self + rhs.re, rhs.im)
    }
}

impl Sub<Complex> for f64 {
    type Output = Complex;

    #[inline]
    fn sub(self, rhs: Complex) -> Complex {
        Complex::new(self - rhs.re, -rhs.im)
    }
}

impl Mul<Complex> for f64 {
    type Output = Complex;

    #[inline]
    fn mul(self, rhs: Complex) -> Complex {
        Complex::new(self * rhs.re, self * rhs.im)
    }
}

forward_ref_binop! { impl Add, add for Complex, Complex }
forward_ref_binop! { impl Sub, sub for Complex, Complex }
forward_ref_binop! { impl Mul, mul for Complex, Complex }
forward_ref_binop! { impl Div, div for Complex, Complex }
forward_ref_binop! { impl Add, add for Complex, f64 }
forward_ref_binop! { impl Sub, sub for Complex, f64 }
forward_ref_binop! { impl Mul, mul for Complex, f64 }
forward_ref_binop! { impl Div, div for Complex, f64 }
forward_ref_binop! { impl Add, add for f64, Complex }
forward_ref_binop! { impl Sub, sub for f64, Complex }
forward_ref_binop! { impl Mul, mul for f64, Complex }

impl Neg for Complex {
    type Output = Complex;

    #[inline]
    fn neg(self) -> Complex {
        Complex::new(-self.re, -self.im)
    }
}

impl Neg for &Complex {
    type Output = Complex;

    #[inline]
    fn neg(self) -> Complex {
        -*self
    }
}

// ========== Compound assignment ==========

impl AddAssign for Complex {
    #[inline]
    fn add_assign(&mut self, rhs: Complex) {
        self.re += rhs.re;
        self.im += rhs.im;
    }
}

impl SubAssign for Complex {
    #[inline]
    fn sub_assign(&mut self, rhs: Complex) {
        self.re -= rhs.re;
        self.im -= rhs.im;
    }
}

impl MulAssign for Complex {
    #[inline]
    fn mul_assign(&mut self, rhs: Complex) {
        // The imaginary update needs the real part from before this call.
        let re = self.re;
        self.re = re * rhs.re - self.im * rhs.im;
        self.im = re * rhs.im + self.im * rhs.re;
    }
}

impl DivAssign for Complex {
    #[inline]
    fn div_assign(&mut self, rhs: Complex) {
        *self = *self / rhs;
    }
}

impl AddAssign<f64> for Complex {
    #[inline]
    fn add_assign(&mut self, rhs: f64) {
        self.re += rhs;
    }
}

impl SubAssign<f64> for Complex {
    #[inline]
    fn sub_assign(&mut self, rhs: f64) {
        self.re -= rhs;
    }
}

impl MulAssign<f64> for Complex {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        self.re *= rhs;
        self.im *= rhs;
    }
}

impl DivAssign<f64> for Complex {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        self.re /= rhs;
        self.im /= rhs;
    }
}

forward_ref_op_assign! { impl AddAssign, add_assign for Complex, Complex }
forward_ref_op_assign! { impl SubAssign, sub_assign for Complex, Complex }
forward_ref_op_assign! { impl MulAssign, mul_assign for Complex, Complex }
forward_ref_op_assign! { impl DivAssign, div_assign for Complex, Complex }
forward_ref_op_assign! { impl AddAssign, add_assign for Complex, f64 }
forward_ref_op_assign! { impl SubAssign, sub_assign for Complex, f64 }
forward_ref_op_assign! { impl MulAssign, mul_assign for Complex, f64 }
forward_ref_op_assign! { impl DivAssign, div_assign for Complex, f64 }

// ========== Checked division ==========

impl Complex {
    /// Complex division that rejects a zero divisor
    ///
    /// Returns `DomainError` when `|rhs|² == 0`; otherwise the same result as
    /// `self / rhs`.
    pub fn checked_div(self, rhs: Complex) -> ComplexResult<Complex> {
        if rhs.norm_sqr() == 0.0 {
            debug_log(format_args!("checked_div: rejected divisor {}", rhs));
            return Err(ComplexError::domain_error(format!(
                "division of {} by zero complex value {}",
                self, rhs
            )));
        }
        Ok(self / rhs)
    }
}

// ========== Iterator folds ==========

impl Sum for Complex {
    fn sum<I: Iterator<Item = Complex>>(iter: I) -> Complex {
        iter.fold(Complex::ZERO, |acc, z| acc + z)
    }
}

impl<'a> Sum<&'a Complex> for Complex {
    fn sum<I: Iterator<Item = &'a Complex>>(iter: I) -> Complex {
        iter.fold(Complex::ZERO, |acc, z| acc + z)
    }
}

impl Product for Complex {
    fn product<I: Iterator<Item = Complex>>(iter: I) -> Complex {
        iter.fold(Complex::ONE, |acc, z| acc * z)
    }
}

impl<'a> Product<&'a Complex> for Complex {
    fn product<I: Iterator<Item = &'a Complex>>(iter: I) -> Complex {
        iter.fold(Complex::ONE, |acc, z| acc * z)
    }
}
