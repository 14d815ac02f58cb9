//! Input acquisition: command-line words, else one line from stdin.

use std::io::{self, BufRead, IsTerminal, Write};

const PROMPT: &str = "Enter text to inspect: ";

/// Returns the text to profile.
///
/// Non-empty `args` are joined with single spaces. Otherwise one line is read
/// from stdin, prompting on stderr when stdin is a terminal. End of input
/// yields an empty string.
///
/// # Errors
///
/// Returns an error if stdin cannot be read or the prompt cannot be written.
pub(crate) fn acquire(args: &[String]) -> io::Result<String> {
    if let Some(joined) = join_args(args) {
        return Ok(joined);
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        let mut stderr = io::stderr().lock();
        write!(stderr, "{PROMPT}")?;
        stderr.flush()?;
    } else {
        tracing::debug!("reading piped input");
    }
    read_line(stdin.lock())
}

pub(crate) fn join_args(args: &[String]) -> Option<String> {
    if args.is_empty() {
        None
    } else {
        Some(args.join(" "))
    }
}

/// Reads a single line, dropping its `\n` or `\r\n` terminator.
pub(crate) fn read_line<R: BufRead>(mut reader: R) -> io::Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}
