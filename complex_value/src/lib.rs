//! Complex number value type
//!
//! This crate provides a single two-component complex value with:
//!
//! - `Complex` holding an `f64` real and imaginary part
//! - Arithmetic operators against `Complex` and against real `f64` scalars
//!   on either side, plus compound-assignment forms
//! - `magnitude()` as the only way to reduce a value to a real number
//! - Text output as `3+4i` and stream-style text input (`3 4 i`, `3+4i`)
//!
//! Arithmetic follows IEEE-754 throughout and never returns errors.
//!
//! # Example
//! ```
//! use complex_value::prelude::*;
//!
//! let mut z = Complex::new(3.0, 4.0);
//! assert_eq!(z.magnitude(), 5.0);
//!
//! z *= Complex::I;
//! assert_eq!(z.to_string(), "-4+3i");
//!
//! let w: Complex = "1 -2 i".parse().unwrap();
//! assert_eq!(5.0 - w, Complex::new(4.0, 2.0));
//! ```

mod debug;
pub mod error;
pub mod ops;
pub mod scan;
pub mod token;
pub mod value;

/// Prelude module for convenient imports
pub mod prelude {
    pub use super::error::{ComplexError, ComplexResult};
    pub use super::scan::{ComplexReader, MarkerPolicy, ScanConfig};
    pub use super::value::Complex;
}

pub use prelude::*;
