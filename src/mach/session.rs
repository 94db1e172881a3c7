use super::{Arithmetic, Function};
use crate::lang::{Error, Operation};

type Result<T> = std::result::Result<T, Error>;

/// ## Angle unit for trigonometric operations
///
/// Only changes how trigonometric arguments and inverse trigonometric
/// results are read and written. The accumulator itself is never
/// converted and radians are used internally.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AngleMode {
    Radians,
    Degrees,
}

impl Default for AngleMode {
    fn default() -> Self {
        AngleMode::Degrees
    }
}

impl AngleMode {
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            AngleMode::Radians => angle,
            AngleMode::Degrees => angle / 180.0 * std::f64::consts::PI,
        }
    }

    pub fn to_degrees(self, angle: f64) -> f64 {
        match self {
            AngleMode::Radians => angle,
            AngleMode::Degrees => angle * 180.0 / std::f64::consts::PI,
        }
    }
}

impl std::fmt::Display for AngleMode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            AngleMode::Radians => write!(f, "RAD"),
            AngleMode::Degrees => write!(f, "DEG"),
        }
    }
}

/// ## Calculator state carried from line to line
///
/// Starts at zero in degrees. There is no reset; every line
/// goes through [`Session::apply`] exactly once.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Session {
    accumulator: f64,
    angle_mode: AngleMode,
}

impl Session {
    pub fn new() -> Session {
        Session::default()
    }

    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    pub fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    /// Applies one operation to the accumulator.
    ///
    /// An `Err` is a diagnostic only: the session has already taken
    /// the recovery value for that operation and stays usable.
    pub fn apply(&mut self, op: Operation, literal: Option<f64>) -> Result<()> {
        match op.arity() {
            0 => {
                self.nullary(op);
                Ok(())
            }
            1 => self.unary(op),
            _ => self.binary(op, literal.unwrap_or(0.0)),
        }
    }

    fn nullary(&mut self, op: Operation) {
        match op {
            Operation::RadiansMode => self.angle_mode = AngleMode::Radians,
            Operation::DegreesMode => self.angle_mode = AngleMode::Degrees,
            _ => return,
        }
        log::debug!("angle mode {}", self.angle_mode);
    }

    fn unary(&mut self, op: Operation) -> Result<()> {
        use Operation::*;
        let x = self.accumulator;
        let mode = self.angle_mode;
        if op.is_trigonometric() {
            log::debug!("{} of {} in {}", op, x, mode);
        }
        let result = match op {
            Negate => Ok(-x),
            SquareRoot => Function::sqrt(x),
            Sin => Ok(Function::sin(x, mode)),
            Cos => Ok(Function::cos(x, mode)),
            Tan => Ok(Function::tan(x, mode)),
            Cotan => Ok(Function::ctn(x, mode)),
            Arcsin => Function::asin(x, mode),
            Arccos => Function::acos(x, mode),
            Arctan => Function::atan(x, mode),
            Arccotan => Function::actn(x, mode),
            _ => Ok(x),
        };
        match result {
            Ok(value) => {
                self.accumulator = value;
                Ok(())
            }
            Err(error) => {
                self.accumulator = Session::unary_fallback(op, x);
                Err(error)
            }
        }
    }

    /// Arccos gives infinity for a bad argument where every
    /// other function leaves the accumulator alone.
    fn unary_fallback(op: Operation, x: f64) -> f64 {
        match op {
            Operation::Arccos => f64::INFINITY,
            _ => x,
        }
    }

    fn binary(&mut self, op: Operation, right: f64) -> Result<()> {
        use Operation::*;
        let left = self.accumulator;
        let result = match op {
            SetAccumulator => Ok(right),
            Add => Ok(Arithmetic::sum(left, right)),
            Subtract => Ok(Arithmetic::subtract(left, right)),
            Multiply => Ok(Arithmetic::multiply(left, right)),
            Divide => Arithmetic::divide(left, right),
            Remainder => Arithmetic::remainder(left, right),
            Power => Ok(Arithmetic::power(left, right)),
            _ => Ok(left),
        };
        self.accumulator = result?;
        Ok(())
    }
}
