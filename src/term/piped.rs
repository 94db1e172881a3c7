use super::write_events;
use crate::mach::Runtime;
use ansi_term::Style;
use std::io::{BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};

/// Runs one session over `input` until end of input or an interrupt.
///
/// Every line yields exactly one line on `output`; diagnostics go to
/// `errors` unstyled. Bytes that are not UTF-8 are replaced rather than
/// ending the session.
pub fn piped_loop<R: BufRead, W: Write, E: Write>(
    mut input: R,
    mut output: W,
    mut errors: E,
    interrupted: &AtomicBool,
) -> std::io::Result<()> {
    let mut runtime = Runtime::new();
    let mut buf = Vec::new();
    loop {
        if interrupted.load(Ordering::SeqCst) {
            log::debug!("interrupted");
            break;
        }
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        runtime.enter(&line);
        write_events(&mut runtime, &mut output, &mut errors, Style::new())?;
    }
    Ok(())
}
