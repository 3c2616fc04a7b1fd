//! Complex value type
//!
//! A plain two-field value: real part `re` and imaginary part `im`, both
//! IEEE-754 doubles. There is no normalization and no NaN/Inf policy; every
//! operation follows native floating-point semantics.

use std::fmt;
use std::io::{self, Write};

use num_traits::{One, Zero};

/// Complex number `re + im·i`
///
/// `Copy` gives the value semantics of the type: assignment and argument
/// passing duplicate both fields, and no two bindings ever alias.
///
/// There is deliberately no conversion from `Complex` into `f64`. Code that
/// wants the modulus asks for it with [`Complex::magnitude`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex {
    /// Real part
    pub re: f64,
    /// Imaginary part
    pub im: f64,
}

impl Complex {
    /// `0+0i`
    pub const ZERO: Complex = Complex { re: 0.0, im: 0.0 };
    /// `1+0i`
    pub const ONE: Complex = Complex { re: 1.0, im: 0.0 };
    /// Imaginary unit `0+1i`
    pub const I: Complex = Complex { re: 0.0, im: 1.0 };

    /// Create a complex value from its real and imaginary parts
    #[inline]
    pub const fn new(re: f64, im: f64) -> Self {
        Complex { re, im }
    }

    /// Create a complex value with a zero imaginary part
    #[inline]
    pub const fn real(re: f64) -> Self {
        Complex { re, im: 0.0 }
    }

    /// Overwrite both parts
    #[inline]
    pub fn set(&mut self, re: f64, im: f64) {
        self.re = re;
        self.im = im;
    }

    /// Assign a real scalar: the real part takes `value` and any previous
    /// imaginary part is discarded.
    #[inline]
    pub fn assign_scalar(&mut self, value: f64) {
        self.re = value;
        self.im = 0.0;
    }

    /// Modulus `sqrt(re² + im²)`
    ///
    /// Computed directly, without `hypot` rescaling, so very large parts
    /// overflow to `+Inf`. `NaN` in either part yields `NaN`.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.norm_sqr().sqrt()
    }

    /// Squared modulus `re² + im²`
    #[inline]
    pub fn norm_sqr(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Complex conjugate `re - im·i`
    #[inline]
    pub fn conj(&self) -> Self {
        Complex::new(self.re, -self.im)
    }

    /// True when both parts are finite
    pub fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    /// True when either part is NaN
    pub fn is_nan(&self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }

    /// Write the textual form (see the `Display` impl) to an output stream.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self)
    }
}

// ========== From implementations ==========

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Complex::real(re)
    }
}

impl From<(f64, f64)> for Complex {
    fn from((re, im): (f64, f64)) -> Self {
        Complex::new(re, im)
    }
}

// ========== num-traits identities ==========

impl Zero for Complex {
    fn zero() -> Self {
        Complex::ZERO
    }

    fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }
}

impl One for Complex {
    fn one() -> Self {
        Complex::ONE
    }
}

// ========== Display implementation ==========

/// Formats as `<re><sign><im>i`, e.g. `3+4i` and `3-4i`.
///
/// A `+` is written whenever `im < 0.0` is false, which includes `-0.0`
/// (printed as `3+-0i`) and `NaN`. A negative imaginary part carries its own
/// `-`. A precision (`{:.2}`) applies to both parts.
impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.im < 0.0 { "" } else { "+" };
        match f.precision() {
            Some(prec) => write!(f, "{:.*}{}{:.*}i", prec, self.re, sign, prec, self.im),
            None => write!(f, "{}{}{}i", self.re, sign, self.im),
        }
    }
}
