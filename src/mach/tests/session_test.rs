use super::*;
use crate::lang::ErrorCode;

#[test]
fn test_initial_state() {
    let session = Session::new();
    assert_eq!(session.accumulator(), 0.0);
    assert_eq!(session.angle_mode(), AngleMode::Degrees);
}

#[test]
fn test_arithmetic_chain() {
    let mut s = Session::new();
    let errors = run(
        &mut s,
        &[
            (Operation::SetAccumulator, Some(5.0)),
            (Operation::Add, Some(3.0)),
            (Operation::Multiply, Some(2.0)),
            (Operation::Negate, None),
        ],
    );
    assert_eq!(errors, 0);
    assert_eq!(s.accumulator(), -16.0);
}

#[test]
fn test_divide_by_zero_keeps_value() {
    let mut s = Session::new();
    run(&mut s, &[(Operation::SetAccumulator, Some(7.0))]);
    let error = s.apply(Operation::Divide, Some(0.0)).unwrap_err();
    assert!(error.is(ErrorCode::DomainError));
    assert_eq!(s.accumulator(), 7.0);
}

#[test]
fn test_remainder_by_zero_keeps_value() {
    let mut s = Session::new();
    run(&mut s, &[(Operation::SetAccumulator, Some(7.0))]);
    assert!(s.apply(Operation::Remainder, Some(0.0)).is_err());
    assert_eq!(s.accumulator(), 7.0);
}

#[test]
fn test_mode_switches() {
    let mut s = Session::new();
    run(&mut s, &[(Operation::SetAccumulator, Some(3.0))]);
    assert!(s.apply(Operation::RadiansMode, None).is_ok());
    assert_eq!(s.angle_mode(), AngleMode::Radians);
    assert_eq!(s.accumulator(), 3.0);
    assert!(s.apply(Operation::DegreesMode, None).is_ok());
    assert_eq!(s.angle_mode(), AngleMode::Degrees);
    assert_eq!(s.accumulator(), 3.0);
}

#[test]
fn test_deg_twice_is_deg_once() {
    let mut once = Session::new();
    run(&mut once, &[(Operation::SetAccumulator, Some(2.5))]);
    let mut twice = once.clone();
    run(&mut once, &[(Operation::DegreesMode, None)]);
    run(
        &mut twice,
        &[(Operation::DegreesMode, None), (Operation::DegreesMode, None)],
    );
    assert_eq!(once, twice);
}

#[test]
fn test_error_is_noop() {
    let mut s = Session::new();
    run(
        &mut s,
        &[(Operation::SetAccumulator, Some(4.0)), (Operation::RadiansMode, None)],
    );
    let before = s.clone();
    assert!(s.apply(Operation::Error, None).is_ok());
    assert_eq!(s, before);
}

#[test]
fn test_sin_degrees() {
    let mut s = Session::new();
    run(
        &mut s,
        &[(Operation::SetAccumulator, Some(90.0)), (Operation::Sin, None)],
    );
    assert_close(s.accumulator(), 1.0);
}

#[test]
fn test_sin_radians() {
    let mut s = Session::new();
    run(
        &mut s,
        &[
            (Operation::RadiansMode, None),
            (Operation::SetAccumulator, Some(std::f64::consts::FRAC_PI_2)),
            (Operation::Sin, None),
        ],
    );
    assert_close(s.accumulator(), 1.0);
}

#[test]
fn test_sqrt() {
    let mut s = Session::new();
    run(
        &mut s,
        &[(Operation::SetAccumulator, Some(2.0)), (Operation::SquareRoot, None)],
    );
    assert_close(s.accumulator(), std::f64::consts::SQRT_2);
    run(&mut s, &[(Operation::Negate, None)]);
    let negative = s.accumulator();
    assert!(s.apply(Operation::SquareRoot, None).is_err());
    assert_eq!(s.accumulator(), negative);
}

#[test]
fn test_sqrt_of_zero_is_rejected() {
    let mut s = Session::new();
    assert!(s.apply(Operation::SquareRoot, None).is_err());
    assert_eq!(s.accumulator(), 0.0);
}

#[test]
fn test_known_asymmetry_asin_acos_fallback() {
    let mut s = Session::new();
    run(&mut s, &[(Operation::SetAccumulator, Some(2.0))]);
    assert!(s.apply(Operation::Arcsin, None).is_err());
    assert_eq!(s.accumulator(), 2.0);
    assert!(s.apply(Operation::Arccos, None).is_err());
    assert_eq!(s.accumulator(), f64::INFINITY);
}

#[test]
fn test_inverse_fallbacks_keep_value() {
    let mut s = Session::new();
    run(&mut s, &[(Operation::SetAccumulator, Some(4.0))]);
    assert!(s.apply(Operation::Arctan, None).is_err());
    assert_eq!(s.accumulator(), 4.0);
    assert!(s.apply(Operation::Arccotan, None).is_err());
    assert_eq!(s.accumulator(), 4.0);
}

#[test]
fn test_inverse_in_degrees() {
    let mut s = Session::new();
    run(
        &mut s,
        &[(Operation::SetAccumulator, Some(0.5)), (Operation::Arcsin, None)],
    );
    assert_close(s.accumulator(), 30.0);
    run(
        &mut s,
        &[
            (Operation::SetAccumulator, Some(0.5)),
            (Operation::RadiansMode, None),
            (Operation::Arccos, None),
        ],
    );
    assert_close(s.accumulator(), std::f64::consts::FRAC_PI_3);
}

#[test]
fn test_set_discards_accumulator() {
    let mut s = Session::new();
    run(
        &mut s,
        &[(Operation::SetAccumulator, Some(9.0)), (Operation::SetAccumulator, Some(1.5))],
    );
    assert_eq!(s.accumulator(), 1.5);
}

#[test]
fn test_power_has_no_guard() {
    let mut s = Session::new();
    run(
        &mut s,
        &[
            (Operation::SetAccumulator, Some(2.0)),
            (Operation::Negate, None),
        ],
    );
    assert!(s.apply(Operation::Power, Some(0.5)).is_ok());
    assert!(s.accumulator().is_nan());
}

#[test]
fn test_mode_untouched_by_arithmetic() {
    let mut s = Session::new();
    run(
        &mut s,
        &[
            (Operation::RadiansMode, None),
            (Operation::SetAccumulator, Some(1.0)),
            (Operation::Add, Some(1.0)),
            (Operation::Sin, None),
            (Operation::Divide, Some(0.0)),
        ],
    );
    assert_eq!(s.angle_mode(), AngleMode::Radians);
}
