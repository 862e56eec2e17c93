//! The interactive command loop: one line-oriented command per iteration,
//! prompted field values on the lines that follow.

mod delete;
mod insert;
mod print;
mod search;
mod update;

use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

use crate::catalog::Catalog;
use crate::error::AppError;

/// Run the loop until `exit` or end of input.
///
/// Command-time errors (unparseable values, unknown commands or fields) are
/// reported on `output` and the loop continues; only I/O failures escape.
pub fn run<R: BufRead, W: Write>(
    catalog: &mut Catalog,
    input: &mut R,
    output: &mut W,
) -> Result<(), AppError> {
    loop {
        writeln!(output)?;
        writeln!(output, "Enter a command (type help for commands):")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let outcome = match line.trim() {
            "help" => help(output),
            "insert" => insert::execute(catalog, input, output),
            "update" => update::execute(catalog, input, output),
            "delete" => delete::execute(catalog, input, output),
            "search" => search::execute(catalog, input, output),
            "print" => print::execute(catalog, output),
            "exit" => break,
            other => Err(AppError::InvalidCommand(other.to_string())),
        };

        match outcome {
            Ok(()) => {}
            Err(AppError::Io(err)) => return Err(AppError::Io(err)),
            Err(err) => writeln!(output, "{err}")?,
        }
    }
    Ok(())
}

fn help<W: Write>(output: &mut W) -> Result<(), AppError> {
    writeln!(output, "Commands:")?;
    writeln!(output, "help - Display help")?;
    writeln!(output, "insert - Add a new product")?;
    writeln!(output, "update - Modify existing product details")?;
    writeln!(output, "delete - Remove a product")?;
    writeln!(output, "search - Find product")?;
    writeln!(output, "print - Display all products")?;
    writeln!(output, "exit - Exit the program")?;
    Ok(())
}

/// Print `prompt` and read one line, without its trailing newline.
///
/// End of input mid-command is a truncated session and surfaces as an I/O
/// error rather than a silent half-applied command.
pub(crate) fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String, AppError> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input ended during a prompt",
        )));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Measure one operation's wall-clock duration; instrumentation stays in the
/// command layer, never inside sort or search.
pub(crate) fn timed<T>(op: impl FnOnce() -> T) -> (T, Duration) {
    let started = Instant::now();
    let value = op();
    (value, started.elapsed())
}

/// The reference diagnostic format: whole microseconds.
pub(crate) fn micros(elapsed: Duration) -> u128 {
    elapsed.as_micros()
}
