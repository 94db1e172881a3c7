use super::{Cursor, Error};
use crate::error;

/// Digits accepted in one literal, integer and fraction combined.
pub const MAX_LITERAL_DIGITS: usize = 10;

/// Parses the unsigned decimal literal at the cursor.
///
/// Stops at the first character that is not a digit or the first `.`,
/// or once [`MAX_LITERAL_DIGITS`] digits have been read. Anything left on
/// the line afterwards is reported, but the value read so far is still
/// returned. No digits at all reads as zero.
pub fn parse_literal(cursor: &mut Cursor) -> (f64, Option<Error>) {
    let mut value = 0.0;
    let mut digits = 0;
    let mut integer = true;
    let mut fraction = 1.0;
    while digits < MAX_LITERAL_DIGITS {
        match cursor.peek() {
            Some(ch) if ch.is_ascii_digit() => {
                let digit = f64::from(ch as u8 - b'0');
                if integer {
                    value = value * 10.0 + digit;
                } else {
                    fraction /= 10.0;
                    value += digit * fraction;
                }
                digits += 1;
            }
            Some('.') if integer => integer = false,
            _ => break,
        }
        cursor.bump();
    }
    log::trace!("literal {} from {:?}", value, cursor.line());
    if cursor.is_empty() {
        return (value, None);
    }
    let column = cursor.position()..cursor.line().len();
    let suffix = format!("SUFFIX LEFT '{}'", cursor.rest());
    (value, Some(error!(MalformedArgument, ..&column; &suffix)))
}
