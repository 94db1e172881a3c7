use super::{AngleMode, Session};
use crate::lang::{Error, ErrorCode, Line};
use std::collections::VecDeque;
use std::rc::Rc;

/// Digits printed after the decimal point.
pub const PRECISION: usize = 20;

/// ## Calculator runtime
///
/// Lines go in through [`Runtime::enter`]. Call [`Runtime::execute`]
/// until it returns [`Event::Stopped`] to collect what the line
/// produced, in the order it should be written.
#[derive(Debug, Default)]
pub struct Runtime {
    session: Session,
    events: VecDeque<Event>,
}

#[derive(Debug, PartialEq)]
pub enum Event {
    Stopped,
    Errors(Rc<Vec<Error>>),
    Print(String),
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime::default()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn accumulator(&self) -> f64 {
        self.session.accumulator()
    }

    pub fn angle_mode(&self) -> AngleMode {
        self.session.angle_mode()
    }

    /// Processes one line. Returns false when the operation was not
    /// recognized, which callers use to keep it out of history.
    pub fn enter(&mut self, s: &str) -> bool {
        let mut line = Line::new(s);
        let mut errors = line.take_errors();
        let recognized = !errors
            .iter()
            .any(|e| e.is(ErrorCode::UnrecognizedOperation));
        if let Err(error) = self.session.apply(line.operation(), line.literal()) {
            errors.push(error);
        }
        if !errors.is_empty() {
            self.events.push_back(Event::Errors(Rc::new(errors)));
        }
        self.events
            .push_back(Event::Print(format_value(self.session.accumulator())));
        recognized
    }

    pub fn execute(&mut self) -> Event {
        match self.events.pop_front() {
            Some(event) => event,
            None => Event::Stopped,
        }
    }
}

pub fn format_value(value: f64) -> String {
    format!("{:.*}", PRECISION, value)
}
