use std::io::{BufRead, Write};

use crate::cli::args::OutputFormat;
use crate::cli::commands::write_view;
use crate::dashboard::DashboardSession;
use crate::error::Result;
use crate::models::DateRange;

/// Read `START END` lines and re-render the view after each one.
///
/// Blank lines are skipped, unparseable lines are reported and ignored, and
/// `quit`/`exit` (or end of input) ends the loop. Returns the number of
/// ranges applied.
pub fn run_interactive<R: BufRead, W: Write>(
    session: &mut DashboardSession,
    input: R,
    mut output: W,
    format: OutputFormat,
) -> Result<usize> {
    writeln!(
        output,
        "Enter a date range as 'START END' (YYYY-MM-DD), or 'quit'. Data covers {}.",
        session.bounds()
    )?;
    output.flush()?;

    let mut applied = 0;
    for line in input.lines() {
        let line = line?;
        let command = line.trim();

        if command.is_empty() {
            continue;
        }
        if command.eq_ignore_ascii_case("quit") || command.eq_ignore_ascii_case("exit") {
            break;
        }

        match DateRange::parse(command) {
            Ok(range) => {
                let view = session.set_range(range);
                write_view(&mut output, view, format)?;
                applied += 1;
            }
            Err(e) => {
                tracing::debug!(input = command, "Rejected range input");
                writeln!(output, "Invalid range: {}", e)?;
                output.flush()?;
            }
        }
    }

    Ok(applied)
}
