extern crate linefeed;
use super::write_events;
use crate::mach::Runtime;
use ansi_term::Style;
use linefeed::{Interface, ReadResult, Signal};
use std::sync::atomic::{AtomicBool, Ordering};

pub fn main_loop(interrupted: &AtomicBool) -> std::io::Result<()> {
    let interface = Interface::new("calc")?;
    interface.set_report_signal(Signal::Interrupt, true);
    let mut runtime = Runtime::new();

    loop {
        if interrupted.load(Ordering::SeqCst) {
            break;
        }
        let string = match interface.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(Signal::Interrupt) => {
                interface.set_buffer("")?;
                interface.lock_reader().cancel_read_line()?;
                continue;
            }
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        if runtime.enter(&string) {
            interface.add_history_unique(string);
        }
        let stdout = std::io::stdout();
        let stderr = std::io::stderr();
        write_events(
            &mut runtime,
            &mut stdout.lock(),
            &mut stderr.lock(),
            Style::new().bold(),
        )?;
    }
    Ok(())
}
