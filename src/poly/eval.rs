use super::Polynomial;
use log::trace;

/// Evaluate a polynomial at a point of type `X`.
pub trait EvalAt<X> {
    type Output;
    fn eval_at(&self, x: &X) -> Self::Output;
}

impl Polynomial {
    /// `p(x)` by Horner's rule.
    pub fn evaluate(&self, x: f64) -> f64 {
        let terms = self.terms();
        let mut value = terms[self.degree];
        for &c in terms[..self.degree].iter().rev() {
            value = c + x * value;
        }
        value
    }

    /// `p(q(x))`, running Horner's rule with `q` in place of the scalar.
    pub fn compose(&self, q: &Polynomial) -> Polynomial {
        let mut acc = Polynomial::zero();
        for &c in self.terms().iter().rev() {
            acc = Polynomial::constant(c).plus(&q.times(&acc));
        }
        trace!(
            "composed degree {} with degree {} -> degree {}",
            self.degree,
            q.degree,
            acc.degree
        );
        acc
    }
}

impl EvalAt<f64> for Polynomial {
    type Output = f64;
    fn eval_at(&self, x: &f64) -> f64 {
        self.evaluate(*x)
    }
}

impl EvalAt<Polynomial> for Polynomial {
    type Output = Polynomial;
    fn eval_at(&self, x: &Polynomial) -> Polynomial {
        self.compose(x)
    }
}
