use super::{Cursor, Error, Operation};
use crate::error;

type Result<T> = std::result::Result<T, Error>;

/// Every mnemonic the matcher knows. None is a prefix of another,
/// so a walk that fully matches one entry has nothing left to choose.
const MNEMONICS: &[(&str, Operation)] = &[
    ("+", Operation::Add),
    ("-", Operation::Subtract),
    ("*", Operation::Multiply),
    ("/", Operation::Divide),
    ("%", Operation::Remainder),
    ("_", Operation::Negate),
    ("^", Operation::Power),
    ("ACOS", Operation::Arccos),
    ("ACTN", Operation::Arccotan),
    ("ASIN", Operation::Arcsin),
    ("ATAN", Operation::Arctan),
    ("SQRT", Operation::SquareRoot),
    ("SIN", Operation::Sin),
    ("COS", Operation::Cos),
    ("CTN", Operation::Cotan),
    ("RAD", Operation::RadiansMode),
    ("DEG", Operation::DegreesMode),
    ("TAN", Operation::Tan),
];

fn is_calc_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Matches the operation mnemonic at the cursor.
///
/// A leading digit means the line is a bare literal: the result is
/// [`Operation::SetAccumulator`] and the digit is left in place for the
/// literal parser. Otherwise characters are consumed one at a time while
/// any mnemonic still shares the consumed prefix. On failure the cursor
/// is put back where it started.
pub fn lex(cursor: &mut Cursor) -> Result<Operation> {
    let start = cursor.position();
    if let Some(ch) = cursor.peek() {
        if is_calc_digit(ch) {
            return Ok(Operation::SetAccumulator);
        }
    }
    let mut candidates: Vec<&(&str, Operation)> = MNEMONICS.iter().collect();
    let mut depth = 0;
    loop {
        let ch = match cursor.bump() {
            Some(ch) => ch,
            None => break,
        };
        candidates.retain(|(mnemonic, _)| {
            mnemonic.as_bytes().get(depth).map(|&b| b as char) == Some(ch)
        });
        depth += 1;
        if candidates.is_empty() {
            break;
        }
        if let Some((_, op)) = candidates.iter().find(|(m, _)| m.len() == depth) {
            log::debug!("matched {:?} in {:?}", op, cursor.line());
            return Ok(*op);
        }
    }
    let column = cursor.column_from(start);
    cursor.reset(start);
    Err(error!(UnrecognizedOperation, ..&column; cursor.line()))
}
