/*!
# Rust Language Module

This Rust module turns one calculator input line into an operation
and its optional literal.

*/

/// Byte range within a single input line.
pub type Column = std::ops::Range<usize>;

#[macro_use]
mod error;
mod cursor;
mod lex;
mod line;
mod literal;
mod operation;

pub use cursor::Cursor;
pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use line::Line;
pub use literal::parse_literal;
pub use literal::MAX_LITERAL_DIGITS;
pub use operation::Operation;

#[cfg(test)]
mod tests;
