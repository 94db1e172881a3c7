#![allow(dead_code)]
use calc::mach::{Event, Runtime};

pub fn exec(runtime: &mut Runtime) -> String {
    let mut s = String::new();
    loop {
        match runtime.execute() {
            Event::Stopped => break,
            Event::Errors(errors) => {
                for error in errors.iter() {
                    s.push_str(&format!("?{}\n", error));
                }
            }
            Event::Print(ps) => {
                s.push_str(&ps);
                s.push('\n');
            }
        }
    }
    s
}

pub fn enter(runtime: &mut Runtime, line: &str) -> String {
    runtime.enter(line);
    exec(runtime)
}

pub fn eval(lines: &[&str]) -> f64 {
    let mut r = Runtime::new();
    for line in lines {
        r.enter(line);
        exec(&mut r);
    }
    r.accumulator()
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "{} is not close to {}",
        actual,
        expected
    );
}
