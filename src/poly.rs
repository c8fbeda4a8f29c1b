use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use log::debug;
use thiserror::Error;

pub mod arith;
pub mod display;
pub mod eval;

pub use eval::EvalAt;

/// A polynomial `cf[0] + cf[1]*x + ... + cf[d]*x^d` with `f64` coefficients.
///
/// Values are immutable: every operation returns a new polynomial. Only the
/// coefficients up to [`degree`](Self::degree) take part in arithmetic,
/// comparison, hashing and rendering; storage past the degree is ignored.
#[derive(Clone, Debug)]
pub struct Polynomial {
    coeffs: Vec<f64>,
    degree: usize,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PolyError {
    #[error("exponent {0} must be non-negative")]
    InvalidExponent(i64),
    #[error("coefficient sequence must not be empty")]
    EmptyCoefficients,
}

impl Polynomial {
    /// The constant polynomial `0`.
    pub fn zero() -> Self {
        Self {
            coeffs: vec![0.0],
            degree: 0,
        }
    }

    /// The constant polynomial `a`.
    pub fn constant(a: f64) -> Self {
        Self {
            coeffs: vec![a],
            degree: 0,
        }
    }

    /// Build the single term `a * x^i`.
    ///
    /// The degree is taken to be `i` even when `a` is zero, so `0 * x^5`
    /// reports degree 5.
    ///
    /// # Panics
    ///
    /// Storage is `i + 1` dense coefficients, so an exponent too large to
    /// allocate panics with a capacity overflow.
    pub fn from_term(a: f64, i: i64) -> Result<Self, PolyError> {
        let Ok(degree) = usize::try_from(i) else {
            debug!("rejecting term {a}*x^{i}: negative exponent");
            return Err(PolyError::InvalidExponent(i));
        };
        let mut coeffs = vec![0.0; degree + 1];
        coeffs[degree] = a;
        Ok(Self { coeffs, degree })
    }

    /// Build a polynomial from coefficients indexed by exponent.
    pub fn from_coeffs(coeffs: Vec<f64>) -> Result<Self, PolyError> {
        if coeffs.is_empty() {
            debug!("rejecting empty coefficient sequence");
            return Err(PolyError::EmptyCoefficients);
        }
        Ok(Self::normalized(coeffs))
    }

    /// Wrap non-empty storage and recompute the degree.
    pub(crate) fn normalized(coeffs: Vec<f64>) -> Self {
        debug_assert!(!coeffs.is_empty());
        let degree = find_degree(&coeffs);
        Self { coeffs, degree }
    }

    /// Wrap storage with a degree chosen by the caller.
    pub(crate) fn with_degree(coeffs: Vec<f64>, degree: usize) -> Self {
        debug_assert!(degree < coeffs.len());
        Self { coeffs, degree }
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// All stored coefficients, including any past the degree.
    #[inline]
    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    /// Coefficient of `x^i`, or `0.0` past the stored length.
    #[inline]
    pub fn coeff(&self, i: usize) -> f64 {
        self.coeffs.get(i).copied().unwrap_or(0.0)
    }

    pub fn is_zero(&self) -> bool {
        self.degree == 0 && self.coeffs[0] == 0.0
    }

    /// Coefficients `cf[0..=degree]`.
    #[inline]
    pub(crate) fn terms(&self) -> &[f64] {
        &self.coeffs[..=self.degree]
    }
}

/// Highest index holding a nonzero value, or 0 if there is none.
fn find_degree(coeffs: &[f64]) -> usize {
    coeffs.iter().rposition(|&c| c != 0.0).unwrap_or(0)
}

impl Default for Polynomial {
    fn default() -> Self {
        Self::zero()
    }
}

impl TryFrom<Vec<f64>> for Polynomial {
    type Error = PolyError;
    fn try_from(coeffs: Vec<f64>) -> Result<Self, PolyError> {
        Self::from_coeffs(coeffs)
    }
}

impl TryFrom<&[f64]> for Polynomial {
    type Error = PolyError;
    fn try_from(coeffs: &[f64]) -> Result<Self, PolyError> {
        Self::from_coeffs(coeffs.to_vec())
    }
}

// Equality is exact: the same degree and bit-identical coefficients.
impl PartialEq for Polynomial {
    fn eq(&self, other: &Self) -> bool {
        self.degree == other.degree
            && self
                .terms()
                .iter()
                .zip(other.terms())
                .all(|(a, b)| a.to_bits() == b.to_bits())
    }
}

impl Eq for Polynomial {}

impl Hash for Polynomial {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.degree.hash(state);
        for c in self.terms() {
            c.to_bits().hash(state);
        }
    }
}

/// Degree decides first; ties are broken by the coefficients from the
/// highest exponent down.
impl Ord for Polynomial {
    fn cmp(&self, other: &Self) -> Ordering {
        self.degree.cmp(&other.degree).then_with(|| {
            self.terms()
                .iter()
                .rev()
                .zip(other.terms().iter().rev())
                .map(|(a, b)| a.total_cmp(b))
                .find(|o| o.is_ne())
                .unwrap_or(Ordering::Equal)
        })
    }
}

impl PartialOrd for Polynomial {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
