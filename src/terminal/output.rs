//! `AppendBuffer`: Single-syscall output buffer for one editor frame.

use std::io::Write;

/// Clear the entire screen.
pub const CLEAR_SCREEN: &[u8] = b"\x1b[2J";
/// Clear from the cursor to the end of the line.
pub const CLEAR_LINE: &[u8] = b"\x1b[K";
/// Move the cursor to the top-left corner.
pub const CURSOR_HOME: &[u8] = b"\x1b[H";
/// Push the cursor as far right and down as the terminal allows.
pub const CURSOR_BOTTOM_RIGHT: &[u8] = b"\x1b[999C\x1b[999B";
/// Ask the terminal to report the cursor position.
pub const CURSOR_POSITION_REQUEST: &[u8] = b"\x1b[6n";
/// Hide the cursor.
pub const CURSOR_HIDE: &[u8] = b"\x1b[?25l";
/// Show the cursor.
pub const CURSOR_SHOW: &[u8] = b"\x1b[?25h";
/// Switch to inverse video.
pub const INVERSE_VIDEO: &[u8] = b"\x1b[7m";
/// Reset graphic attributes.
pub const NORMAL_VIDEO: &[u8] = b"\x1b[m";

/// Growable buffer for building one frame of terminal output.
///
/// All output is accumulated here, then flushed in a single `write()` syscall
/// to prevent terminal flickering.
#[derive(Debug, Clone)]
pub struct AppendBuffer {
    data: Vec<u8>,
}

impl AppendBuffer {
    /// Create a new output buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a buffer sized for a typical terminal (4KB).
    pub fn new() -> Self {
        Self::with_capacity(4096)
    }

    /// Clear the buffer for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Get the buffer contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Get the buffer length.
    #[inline]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if buffer is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Append raw bytes.
    #[inline]
    pub fn append(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    /// Append `count` copies of a byte.
    #[inline]
    pub fn append_repeat(&mut self, byte: u8, count: usize) {
        self.data.resize(self.data.len() + count, byte);
    }

    /// Move cursor to (row, col), both 0-indexed (ANSI is 1-indexed).
    #[inline]
    pub fn cursor_move(&mut self, row: usize, col: usize) {
        // CSI row ; col H
        let _ = write!(self.data, "\x1b[{};{}H", row + 1, col + 1);
    }

    /// Hide cursor.
    #[inline]
    pub fn cursor_hide(&mut self) {
        self.append(CURSOR_HIDE);
    }

    /// Show cursor.
    #[inline]
    pub fn cursor_show(&mut self) {
        self.append(CURSOR_SHOW);
    }

    /// Move cursor to the top-left corner.
    #[inline]
    pub fn cursor_home(&mut self) {
        self.append(CURSOR_HOME);
    }

    /// Clear to end of line.
    #[inline]
    pub fn clear_line(&mut self) {
        self.append(CLEAR_LINE);
    }

    /// Clear the entire screen.
    #[inline]
    pub fn clear_screen(&mut self) {
        self.append(CLEAR_SCREEN);
    }

    /// Enable inverse video.
    #[inline]
    pub fn inverse(&mut self) {
        self.append(INVERSE_VIDEO);
    }

    /// Reset all attributes.
    #[inline]
    pub fn reset_attrs(&mut self) {
        self.append(NORMAL_VIDEO);
    }

    /// Line break (raw mode has no output post-processing).
    #[inline]
    pub fn newline(&mut self) {
        self.append(b"\r\n");
    }

    /// Flush to a writer in a single syscall.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }
}

impl Default for AppendBuffer {
    fn default() -> Self {
        Self::new()
    }
}
