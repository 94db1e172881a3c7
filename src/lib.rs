//! # Accumulator Calculator
//!
//! A calculator that keeps one running value. Every input line names an
//! operation, with a number when the operation needs one, and the new
//! value is printed with 20 digits after the decimal point.
//!
//! ```text
//! 5
//! 5.00000000000000000000
//! +3
//! 8.00000000000000000000
//! *2
//! 16.00000000000000000000
//! ```
//!
//! Run the executable in a terminal for line editing and history, or pipe
//! a file of commands through it. Problems with a line are reported on
//! stderr and never stop the session.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/operations.rs"]
#[allow(non_snake_case)]
pub mod __Operations;

pub mod lang;
pub mod mach;
pub mod term;
