//! Single-indeterminate polynomials with `f64` coefficients.
//!
//! ```
//! use real_poly::Polynomial;
//!
//! let p = Polynomial::from_coeffs(vec![1.0, 3.0, 2.0, 6.0])?;
//! assert_eq!(p.degree(), 3);
//! assert_eq!(p.evaluate(2.0), 63.0);
//! assert_eq!(p.to_string(), "6.0x^3 + 2.0x^2 + 3.0x + 1.0");
//! # Ok::<(), real_poly::PolyError>(())
//! ```

pub mod poly;

#[cfg(test)]
mod proptests;

pub use poly::{EvalAt, PolyError, Polynomial};
