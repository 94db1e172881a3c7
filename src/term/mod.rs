/*!
## Rust Terminal Module

Reads calculator lines from stdin and writes each result to stdout.
A terminal gets a line editor with history; anything else is read
line by line until end of input.

*/

extern crate atty;
extern crate ctrlc;
use crate::mach::{Event, Runtime};
use ansi_term::Style;
use std::io::Write;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

mod interactive;
mod piped;

pub use piped::piped_loop;

pub fn main() {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, std::sync::atomic::Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    let result = if atty::is(atty::Stream::Stdin) {
        interactive::main_loop(&interrupted)
    } else {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        let stderr = std::io::stderr();
        piped_loop(stdin.lock(), stdout.lock(), stderr.lock(), &interrupted)
    };
    if let Err(error) = result {
        eprintln!("{}", error);
    }
}

/// Writes everything the runtime queued for the last line.
pub fn write_events<W: Write, E: Write>(
    runtime: &mut Runtime,
    output: &mut W,
    errors: &mut E,
    style: Style,
) -> std::io::Result<()> {
    loop {
        match runtime.execute() {
            Event::Stopped => return output.flush(),
            Event::Errors(list) => {
                for error in list.iter() {
                    writeln!(errors, "{}", style.paint(error.to_string()))?;
                }
            }
            Event::Print(s) => {
                writeln!(output, "{}", s)?;
            }
        }
    }
}
