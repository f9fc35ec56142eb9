//! Line-oriented console dialogue: the startup window-count prompt and the
//! post-simulation query loop.
//!
//! Everything here reads from a `BufRead` and writes to a `Write` so the
//! dialogue runs unchanged against stdin/stdout or in-memory buffers.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use bank_core::WindowId;
use bank_core::config::MAX_WINDOWS;

/// One parsed answer of the query loop.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Query {
    Exit,
    Window(WindowId),
}

/// A window count in `1..=MAX_WINDOWS`, or `None`.
pub fn parse_window_count(line: &str) -> Option<usize> {
    line.trim()
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=MAX_WINDOWS).contains(n))
}

/// `0` exits; `1..=window_count` selects a window.
pub fn parse_query(line: &str, window_count: usize) -> Option<Query> {
    let n = line.trim().parse::<usize>().ok()?;
    if n == 0 {
        return Some(Query::Exit);
    }
    if n > window_count {
        return None;
    }
    WindowId::from_number(n).map(Query::Window)
}

/// Read one line.  `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Ask for the number of windows until a valid one is entered.
///
/// Returns `None` if the input ends first.
pub fn prompt_window_count<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Option<usize>> {
    loop {
        write!(out, "Number of service windows (1-{MAX_WINDOWS}): ")?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match parse_window_count(&line) {
            Some(n) => return Ok(Some(n)),
            None => writeln!(out, "Please enter a whole number between 1 and {MAX_WINDOWS}.")?,
        }
    }
}

/// Serve window queries until the user enters `0` or the input ends.
///
/// `render` produces the text shown for a selected window.
pub fn query_loop<R, W, F>(input: &mut R, out: &mut W, window_count: usize, mut render: F) -> Result<()>
where
    R: BufRead,
    W: Write,
    F: FnMut(WindowId) -> Result<String>,
{
    loop {
        write!(out, "Window to inspect (1-{window_count}, 0 to quit): ")?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            writeln!(out)?;
            return Ok(());
        };
        match parse_query(&line, window_count) {
            Some(Query::Exit) => return Ok(()),
            Some(Query::Window(window)) => {
                let text = render(window)?;
                writeln!(out, "{text}")?;
            }
            None => writeln!(
                out,
                "Invalid window {:?}: enter 1-{window_count}, or 0 to quit.",
                line.trim()
            )?,
        }
    }
}
