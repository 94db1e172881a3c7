use super::AngleMode;
use crate::error;
use crate::lang::Error;
use std::f64::consts::PI;

type Result<T> = std::result::Result<T, Error>;

/// Closer to zero than this, a cosine or sine is treated as zero.
pub const EPSILON: f64 = 1e-10;

/// What TAN gives where the cosine vanishes.
pub const TAN_SENTINEL: f64 = 16331239353195370.0;

pub struct Function {}

impl Function {
    fn bad_argument(name: &str, x: f64) -> Error {
        error!(DomainError; &format!("BAD ARGUMENT FOR {}: {}", name, x))
    }

    pub fn sqrt(x: f64) -> Result<f64> {
        if x > 0.0 {
            Ok(x.sqrt())
        } else {
            Err(Function::bad_argument("SQRT", x))
        }
    }

    pub fn sin(x: f64, mode: AngleMode) -> f64 {
        mode.to_radians(x).sin()
    }

    pub fn cos(x: f64, mode: AngleMode) -> f64 {
        mode.to_radians(x).cos()
    }

    pub fn tan(x: f64, mode: AngleMode) -> f64 {
        let angle = mode.to_radians(x);
        if angle.cos().abs() > EPSILON {
            angle.tan()
        } else {
            TAN_SENTINEL
        }
    }

    pub fn ctn(x: f64, mode: AngleMode) -> f64 {
        let angle = mode.to_radians(x);
        if angle.sin().abs() > EPSILON {
            1.0 / angle.tan()
        } else {
            f64::INFINITY
        }
    }

    pub fn asin(x: f64, mode: AngleMode) -> Result<f64> {
        if x.abs() <= 1.0 {
            Ok(mode.to_degrees(x.asin()))
        } else {
            Err(Function::bad_argument("ASIN", x))
        }
    }

    pub fn acos(x: f64, mode: AngleMode) -> Result<f64> {
        if x.abs() <= 1.0 {
            Ok(mode.to_degrees(x.acos()))
        } else {
            Err(Function::bad_argument("ACOS", x))
        }
    }

    pub fn atan(x: f64, mode: AngleMode) -> Result<f64> {
        if x.abs() < PI / 2.0 {
            Ok(mode.to_degrees(x.atan()))
        } else {
            Err(Function::bad_argument("ATAN", x))
        }
    }

    /// Arccotangent in (0, π), taken through atan of the reciprocal.
    pub fn actn(x: f64, mode: AngleMode) -> Result<f64> {
        if 0.0 < x.abs() && x.abs() < PI {
            let mut angle = (1.0 / x).atan();
            if angle < 0.0 {
                angle += PI;
            }
            Ok(mode.to_degrees(angle))
        } else {
            Err(Function::bad_argument("ACTN", x))
        }
    }
}
