use super::cursor::*;
use super::error::*;
use super::lex::*;
use super::literal::*;
use super::operation::*;

/// One input line, parsed.
///
/// Holds the matched operation, the literal when the operation takes
/// one, and every diagnostic raised while parsing.
#[derive(Debug, PartialEq)]
pub struct Line {
    operation: Operation,
    literal: Option<f64>,
    errors: Vec<Error>,
}

impl Line {
    pub fn new(s: &str) -> Line {
        let s = s.trim_end_matches(|c: char| c == '\n' || c == '\r');
        let mut cursor = Cursor::new(s);
        let mut errors = vec![];
        let operation = match lex(&mut cursor) {
            Ok(op) => op,
            Err(error) => {
                errors.push(error);
                Operation::Error
            }
        };
        let literal = if operation.arity() == 2 {
            cursor.skip_whitespace();
            let (value, error) = parse_literal(&mut cursor);
            errors.extend(error);
            Some(value)
        } else {
            None
        };
        Line {
            operation,
            literal,
            errors,
        }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn literal(&self) -> Option<f64> {
        self.literal
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn take_errors(&mut self) -> Vec<Error> {
        std::mem::take(&mut self.errors)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.literal {
            Some(literal) if self.operation == Operation::SetAccumulator => {
                write!(f, "{}", literal)
            }
            Some(literal) => write!(f, "{}{}", self.operation, literal),
            None => write!(f, "{}", self.operation),
        }
    }
}
