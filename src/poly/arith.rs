use super::Polynomial;
use std::ops::{Add, Mul, Sub};

impl Polynomial {
    /// `p(x) + q(x)`.
    pub fn plus(&self, q: &Polynomial) -> Polynomial {
        let deg = self.degree.max(q.degree);
        let mut coeffs = vec![0.0; deg + 1];
        for (c, &a) in coeffs.iter_mut().zip(self.terms()) {
            *c += a;
        }
        for (c, &b) in coeffs.iter_mut().zip(q.terms()) {
            *c += b;
        }
        Polynomial::normalized(coeffs)
    }

    /// `p(x) - q(x)`. Subtracting an equal polynomial yields exactly zero.
    pub fn minus(&self, q: &Polynomial) -> Polynomial {
        if self == q {
            return Polynomial::zero();
        }
        let deg = self.degree.max(q.degree);
        let mut coeffs = vec![0.0; deg + 1];
        for (c, &a) in coeffs.iter_mut().zip(self.terms()) {
            *c += a;
        }
        for (c, &b) in coeffs.iter_mut().zip(q.terms()) {
            *c -= b;
        }
        Polynomial::normalized(coeffs)
    }

    /// `p(x) * q(x)` by schoolbook convolution.
    pub fn times(&self, q: &Polynomial) -> Polynomial {
        let mut acc = vec![0.0; self.degree + q.degree + 1];
        for (i, &a) in self.terms().iter().enumerate() {
            for (j, &b) in q.terms().iter().enumerate() {
                acc[i + j] += a * b;
            }
        }
        Polynomial::normalized(acc)
    }

    /// The derivative `p'(x)`.
    pub fn derive(&self) -> Polynomial {
        if self.degree == 0 {
            return Polynomial::constant(0.0);
        }
        let coeffs = self.terms()[1..]
            .iter()
            .enumerate()
            .map(|(i, &c)| (i + 1) as f64 * c)
            .collect();
        // not recomputed: a `0 * x^n` term keeps its nominal degree
        Polynomial::with_degree(coeffs, self.degree - 1)
    }
}

impl<'a, 'b> Add<&'b Polynomial> for &'a Polynomial {
    type Output = Polynomial;
    fn add(self, rhs: &'b Polynomial) -> Polynomial {
        self.plus(rhs)
    }
}

impl Add<Polynomial> for Polynomial {
    type Output = Polynomial;
    fn add(self, rhs: Polynomial) -> Polynomial {
        self.plus(&rhs)
    }
}

impl Add<&Polynomial> for Polynomial {
    type Output = Polynomial;
    fn add(self, rhs: &Polynomial) -> Polynomial {
        self.plus(rhs)
    }
}

impl Add<Polynomial> for &Polynomial {
    type Output = Polynomial;
    fn add(self, rhs: Polynomial) -> Polynomial {
        self.plus(&rhs)
    }
}

impl<'a, 'b> Sub<&'b Polynomial> for &'a Polynomial {
    type Output = Polynomial;
    fn sub(self, rhs: &'b Polynomial) -> Polynomial {
        self.minus(rhs)
    }
}

impl Sub<Polynomial> for Polynomial {
    type Output = Polynomial;
    fn sub(self, rhs: Polynomial) -> Polynomial {
        self.minus(&rhs)
    }
}

impl Sub<&Polynomial> for Polynomial {
    type Output = Polynomial;
    fn sub(self, rhs: &Polynomial) -> Polynomial {
        self.minus(rhs)
    }
}

impl Sub<Polynomial> for &Polynomial {
    type Output = Polynomial;
    fn sub(self, rhs: Polynomial) -> Polynomial {
        self.minus(&rhs)
    }
}

impl<'a, 'b> Mul<&'b Polynomial> for &'a Polynomial {
    type Output = Polynomial;
    fn mul(self, rhs: &'b Polynomial) -> Polynomial {
        self.times(rhs)
    }
}

impl Mul<Polynomial> for Polynomial {
    type Output = Polynomial;
    fn mul(self, rhs: Polynomial) -> Polynomial {
        self.times(&rhs)
    }
}

impl Mul<&Polynomial> for Polynomial {
    type Output = Polynomial;
    fn mul(self, rhs: &Polynomial) -> Polynomial {
        self.times(rhs)
    }
}

impl Mul<Polynomial> for &Polynomial {
    type Output = Polynomial;
    fn mul(self, rhs: Polynomial) -> Polynomial {
        self.times(&rhs)
    }
}
