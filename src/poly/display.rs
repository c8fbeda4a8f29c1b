use super::Polynomial;
use std::fmt;

/// An `f64` rendered the classic way: at least one fractional digit, plain
/// decimal for magnitudes in `[1e-3, 1e7)`, `d.dddE<exp>` otherwise.
#[derive(Copy, Clone, Debug)]
pub struct Real(pub f64);

impl fmt::Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_nan() {
            return f.write_str("NaN");
        }
        if v.is_infinite() {
            return f.write_str(if v > 0.0 { "Infinity" } else { "-Infinity" });
        }
        let abs = v.abs();
        if abs == 0.0 || (1e-3..1e7).contains(&abs) {
            let s = format!("{v}");
            f.write_str(&s)?;
            if !s.contains('.') {
                f.write_str(".0")?;
            }
            return Ok(());
        }
        // `{:e}` yields the shortest round-trip digits, e.g. "1.213e-4" or "1e10"
        let s = format!("{v:e}");
        let (mantissa, exp) = s.split_once('e').unwrap_or((s.as_str(), "0"));
        if mantissa.contains('.') {
            write!(f, "{mantissa}E{exp}")
        } else {
            write!(f, "{mantissa}.0E{exp}")
        }
    }
}

fn write_power(f: &mut fmt::Formatter<'_>, i: usize) -> fmt::Result {
    match i {
        0 => Ok(()),
        1 => f.write_str("x"),
        _ => write!(f, "x^{i}"),
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cf = self.terms();
        match self.degree {
            0 => write!(f, "{}", Real(cf[0])),
            // the linear case keeps its historical spacing: "ax +b", "ax - b"
            1 => {
                write!(f, "{}x", Real(cf[1]))?;
                if cf[0] < 0.0 {
                    write!(f, " - {}", Real(-cf[0]))
                } else if cf[0] != 0.0 {
                    write!(f, " +{}", Real(cf[0]))
                } else {
                    Ok(())
                }
            }
            _ => {
                let mut first = true;
                for (i, &c) in cf.iter().enumerate().rev() {
                    if c == 0.0 {
                        continue;
                    }
                    match (first, c < 0.0) {
                        (true, _) => write!(f, "{}", Real(c))?,
                        (false, true) => write!(f, " - {}", Real(-c))?,
                        (false, false) => write!(f, " + {}", Real(c))?,
                    }
                    write_power(f, i)?;
                    first = false;
                }
                if first {
                    // only a `0 * x^n` term: nothing survived
                    write!(f, "{}", Real(cf[0]))?;
                }
                Ok(())
            }
        }
    }
}
