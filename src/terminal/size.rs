//! Window size detection.
//!
//! The ioctl query (through crossterm) is tried first. Some terminals report
//! zero columns or fail the ioctl entirely; for those the cursor is pushed
//! to the bottom-right corner and the terminal is asked where it ended up.

use crate::error::{EditorError, Result};
use crate::input::{read_failure, ByteSource};
use std::io::{self, Write};

use super::output::{CURSOR_BOTTOM_RIGHT, CURSOR_POSITION_REQUEST};

/// Longest cursor position report we are willing to buffer.
const REPORT_MAX: usize = 31;

/// Terminal dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
}

/// Query the terminal size, falling back to a cursor position probe.
pub fn window_size<S, W>(source: &mut S, out: &mut W) -> Result<WindowSize>
where
    S: ByteSource + ?Sized,
    W: Write,
{
    resolve_window_size(crossterm::terminal::size(), source, out)
}

/// Use an ioctl result `(cols, rows)` if it is usable, otherwise move the
/// cursor to the far corner and read its position back.
fn resolve_window_size<S, W>(
    ioctl: io::Result<(u16, u16)>,
    source: &mut S,
    out: &mut W,
) -> Result<WindowSize>
where
    S: ByteSource + ?Sized,
    W: Write,
{
    match ioctl {
        Ok((cols, rows)) if cols > 0 => Ok(WindowSize {
            rows: usize::from(rows),
            cols: usize::from(cols),
        }),
        other => {
            tracing::debug!(?other, "window size ioctl unusable, probing cursor");
            out.write_all(CURSOR_BOTTOM_RIGHT)
                .map_err(|_| EditorError::WindowSize)?;
            cursor_position(source, out)
        }
    }
}

/// Ask the terminal for the cursor position and parse its `ESC [ r ; c R` reply.
pub fn cursor_position<S, W>(source: &mut S, out: &mut W) -> Result<WindowSize>
where
    S: ByteSource + ?Sized,
    W: Write,
{
    out.write_all(CURSOR_POSITION_REQUEST)
        .and_then(|()| out.flush())
        .map_err(|_| EditorError::WindowSize)?;

    let mut reply = Vec::with_capacity(REPORT_MAX);
    while reply.len() < REPORT_MAX {
        match source.read_byte().map_err(read_failure)? {
            Some(b'R') | None => break,
            Some(byte) => reply.push(byte),
        }
    }

    parse_cursor_report(&reply).ok_or(EditorError::WindowSize)
}

/// Parse the body of a cursor position report (`ESC [ rows ; cols`, the
/// terminating `R` already stripped).
pub fn parse_cursor_report(reply: &[u8]) -> Option<WindowSize> {
    let body = reply.strip_prefix(b"\x1b[")?;
    let body = std::str::from_utf8(body).ok()?;
    let (rows, cols) = body.split_once(';')?;
    Some(WindowSize {
        rows: rows.trim().parse().ok()?,
        cols: cols.trim().parse().ok()?,
    })
}
