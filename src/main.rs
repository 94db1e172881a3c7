//! # Accumulator Calculator
//!
//! One operation per line, applied to a running value.
//!

fn main() {
    env_logger::init();
    calc::term::main();
}
