//! Property-based tests for complex arithmetic
//!
//! Invariants that hold for all finite inputs:
//! - Real-axis addition matches real addition
//! - `1+0i` is a multiplicative identity
//! - `z - z` is zero
//! - Scalar addition commutes
//! - Compound operators agree with their pure counterparts

use complex_value::Complex;
use proptest::prelude::*;

fn finite() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6f64
}

fn complex() -> impl Strategy<Value = Complex> {
    (finite(), finite()).prop_map(|(re, im)| Complex::new(re, im))
}

proptest! {
    #[test]
    fn prop_real_axis_addition(a in finite(), b in finite()) {
        prop_assert_eq!(Complex::new(a, 0.0) + Complex::new(b, 0.0), Complex::new(a + b, 0.0));
    }

    #[test]
    fn prop_multiplicative_identity(z in complex()) {
        prop_assert_eq!(z * Complex::new(1.0, 0.0), z);
        prop_assert_eq!(z * Complex::ONE, z);
    }

    #[test]
    fn prop_additive_inverse(z in complex()) {
        prop_assert_eq!(z - z, Complex::new(0.0, 0.0));
        prop_assert_eq!(z + -z, Complex::ZERO);
    }

    #[test]
    fn prop_scalar_addition_commutes(z in complex(), s in finite()) {
        prop_assert_eq!(s + z, z + s);
        prop_assert_eq!(s * z, z * s);
    }

    #[test]
    fn prop_scalar_left_subtraction_negates_imaginary(z in complex(), s in finite()) {
        prop_assert_eq!(s - z, Complex::new(s - z.re, -z.im));
    }

    #[test]
    fn prop_compound_mul_matches_pure(a in complex(), b in complex()) {
        let mut c = a;
        c *= b;
        prop_assert_eq!(c, a * b);
    }

    #[test]
    fn prop_compound_ops_match_pure(a in complex(), b in complex(), s in finite()) {
        let mut c = a;
        c += b;
        prop_assert_eq!(c, a + b);

        let mut c = a;
        c -= b;
        prop_assert_eq!(c, a - b);

        let mut c = a;
        c += s;
        prop_assert_eq!(c, a + s);

        let mut c = a;
        c -= s;
        prop_assert_eq!(c, a - s);

        let mut c = a;
        c *= s;
        prop_assert_eq!(c, a * s);
    }

    #[test]
    fn prop_scalar_add_keeps_imaginary(z in complex(), s in finite()) {
        prop_assert_eq!((z + s).im, z.im);
        prop_assert_eq!((z - s).im, z.im);
    }

    #[test]
    fn prop_magnitude_matches_formula(z in complex()) {
        prop_assert_eq!(z.magnitude(), (z.re * z.re + z.im * z.im).sqrt());
        prop_assert!(z.magnitude() >= 0.0);
    }

    #[test]
    fn prop_display_round_trips_integers(re in -10_000i32..10_000, im in -10_000i32..10_000) {
        let z = Complex::new(f64::from(re), f64::from(im));
        let parsed: Complex = z.to_string().parse().unwrap();
        prop_assert_eq!(parsed, z);
    }
}
