/*!
## Rust Machine Module

This Rust module evaluates parsed lines against the calculator session.

*/

mod arithmetic;
mod function;
mod runtime;
mod session;

pub use arithmetic::Arithmetic;
pub use function::Function;
pub use function::EPSILON;
pub use function::TAN_SENTINEL;
pub use runtime::format_value;
pub use runtime::Event;
pub use runtime::Runtime;
pub use runtime::PRECISION;
pub use session::AngleMode;
pub use session::Session;

#[cfg(test)]
mod tests;
