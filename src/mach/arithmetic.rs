use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

pub struct Arithmetic {}

impl Arithmetic {
    pub fn sum(lhs: f64, rhs: f64) -> f64 {
        lhs + rhs
    }

    pub fn subtract(lhs: f64, rhs: f64) -> f64 {
        lhs - rhs
    }

    pub fn multiply(lhs: f64, rhs: f64) -> f64 {
        lhs * rhs
    }

    pub fn divide(lhs: f64, rhs: f64) -> Result<f64> {
        if rhs != 0.0 {
            Ok(lhs / rhs)
        } else {
            Err(error!(DomainError; &format!("BAD RIGHT ARGUMENT FOR DIVISION: {}", rhs)))
        }
    }

    pub fn remainder(lhs: f64, rhs: f64) -> Result<f64> {
        if rhs != 0.0 {
            Ok(Arithmetic::ieee_remainder(lhs, rhs))
        } else {
            Err(error!(DomainError; &format!("BAD RIGHT ARGUMENT FOR REMAINDER: {}", rhs)))
        }
    }

    pub fn power(lhs: f64, rhs: f64) -> f64 {
        lhs.powf(rhs)
    }

    /// `x - n * y` where `n` is `x / y` rounded half to even, computed
    /// without rounding error.
    pub fn ieee_remainder(x: f64, y: f64) -> f64 {
        if x.is_nan() || y.is_nan() || x.is_infinite() || y == 0.0 {
            return f64::NAN;
        }
        if y.is_infinite() {
            return x;
        }
        let ay = y.abs();
        // Reduce by an even multiple so the quotient's parity survives.
        let t = if ay <= f64::MAX / 2.0 {
            (x % (2.0 * ay)).abs()
        } else {
            x.abs()
        };
        let (mut r, odd) = if t >= ay { (t - ay, true) } else { (t, false) };
        if 2.0 * r > ay || (2.0 * r == ay && odd) {
            r -= ay;
        }
        if x.is_sign_negative() {
            -r
        } else {
            r
        }
    }
}
