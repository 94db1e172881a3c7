/// ## Operation vocabulary
///
/// Every command a line can name. The tag is produced only by the
/// mnemonic matcher; the number of operands it takes beyond the
/// accumulator is fixed per variant, see [`Operation::arity`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operation {
    Error,
    SetAccumulator,
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
    Negate,
    Power,
    SquareRoot,
    Sin,
    Cos,
    RadiansMode,
    DegreesMode,
    Tan,
    Cotan,
    Arcsin,
    Arccos,
    Arctan,
    Arccotan,
}

impl Operation {
    /// 0 for mode switches and the error no-op, 1 for functions of the
    /// accumulator, 2 for operations that also take a literal.
    pub fn arity(self) -> usize {
        use Operation::*;
        match self {
            Error | RadiansMode | DegreesMode => 0,
            Negate | SquareRoot | Sin | Cos | Tan | Cotan | Arcsin | Arccos | Arctan
            | Arccotan => 1,
            SetAccumulator | Add | Subtract | Multiply | Divide | Remainder | Power => 2,
        }
    }

    pub fn is_trigonometric(self) -> bool {
        use Operation::*;
        matches!(
            self,
            Sin | Cos | Tan | Cotan | Arcsin | Arccos | Arctan | Arccotan
        )
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operation::*;
        match self {
            Error => write!(f, "?"),
            SetAccumulator => write!(f, ""),
            Add => write!(f, "+"),
            Subtract => write!(f, "-"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Remainder => write!(f, "%"),
            Negate => write!(f, "_"),
            Power => write!(f, "^"),
            SquareRoot => write!(f, "SQRT"),
            Sin => write!(f, "SIN"),
            Cos => write!(f, "COS"),
            RadiansMode => write!(f, "RAD"),
            DegreesMode => write!(f, "DEG"),
            Tan => write!(f, "TAN"),
            Cotan => write!(f, "CTN"),
            Arcsin => write!(f, "ASIN"),
            Arccos => write!(f, "ACOS"),
            Arctan => write!(f, "ATAN"),
            Arccotan => write!(f, "ACTN"),
        }
    }
}
