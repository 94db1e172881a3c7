use super::*;
use crate::lang::Operation;

mod session_test;

fn run(session: &mut Session, ops: &[(Operation, Option<f64>)]) -> usize {
    let mut errors = 0;
    for (op, literal) in ops {
        if session.apply(*op, *literal).is_err() {
            errors += 1;
        }
    }
    errors
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "{} is not close to {}",
        actual,
        expected
    );
}
