//! Text buffer: the ordered rows of the open document.

use super::row::Row;
use crate::config::DEFAULT_TAB_STOP;
use std::path::{Path, PathBuf};

/// Cursor position in buffer coordinates.
///
/// `cy == numrows` is the virtual row just past the last line; `cx` is a
/// byte index into the row at `cy` (always 0 on the virtual row).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Byte index within the row.
    pub cx: usize,
    /// Row index.
    pub cy: usize,
}

impl Cursor {
    /// Create a cursor at the given position.
    pub const fn new(cx: usize, cy: usize) -> Self {
        Self { cx, cy }
    }
}

/// The document being edited.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    rows: Vec<Row>,
    /// Mutations since the last load or save.
    dirty: u64,
    filename: Option<PathBuf>,
    tab_stop: usize,
}

impl TextBuffer {
    /// Create an empty buffer.
    pub fn new(tab_stop: usize) -> Self {
        Self {
            rows: Vec::new(),
            dirty: 0,
            filename: None,
            tab_stop: tab_stop.max(1),
        }
    }

    /// Number of rows.
    #[inline]
    pub fn numrows(&self) -> usize {
        self.rows.len()
    }

    /// Check if the buffer has no rows at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get a row by index.
    #[inline]
    pub fn row(&self, at: usize) -> Option<&Row> {
        self.rows.get(at)
    }

    /// Iterate over all rows.
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    /// Length of the row at `at`, or 0 for the virtual row.
    #[inline]
    pub fn row_len(&self, at: usize) -> usize {
        self.rows.get(at).map_or(0, Row::size)
    }

    /// Raw mutation counter.
    #[inline]
    pub const fn dirty(&self) -> u64 {
        self.dirty
    }

    /// Check for unsaved changes.
    #[inline]
    pub const fn is_dirty(&self) -> bool {
        self.dirty != 0
    }

    /// Forget all recorded modifications.
    pub const fn mark_clean(&mut self) {
        self.dirty = 0;
    }

    /// Path associated with the buffer.
    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    /// Associate a path with the buffer.
    pub fn set_filename(&mut self, path: impl Into<PathBuf>) {
        self.filename = Some(path.into());
    }

    // =========================================================================
    // Row operations
    // =========================================================================

    /// Insert a new row at `at`. Positions past `numrows` are ignored.
    pub fn insert_row(&mut self, at: usize, text: &[u8]) {
        if at > self.rows.len() {
            return;
        }
        self.rows.insert(at, Row::new(text, self.tab_stop));
        self.dirty += 1;
    }

    /// Remove the row at `at`. Out-of-range positions are ignored.
    pub fn delete_row(&mut self, at: usize) {
        if at >= self.rows.len() {
            return;
        }
        self.rows.remove(at);
        self.dirty += 1;
    }

    /// Insert a byte into row `row` at `at` (clamped to the row end).
    pub fn row_insert_char(&mut self, row: usize, at: usize, ch: u8) {
        if let Some(row) = self.rows.get_mut(row) {
            row.insert_char(at, ch);
            self.dirty += 1;
        }
    }

    /// Delete the byte at `at` from row `row`.
    pub fn row_delete_char(&mut self, row: usize, at: usize) {
        if let Some(row) = self.rows.get_mut(row) {
            if row.delete_char(at) {
                self.dirty += 1;
            }
        }
    }

    /// Append bytes to the end of row `row`.
    pub fn row_append_string(&mut self, row: usize, bytes: &[u8]) {
        if let Some(row) = self.rows.get_mut(row) {
            row.append(bytes);
            self.dirty += 1;
        }
    }

    // =========================================================================
    // Cursor-level editing
    // =========================================================================

    /// Insert a byte at the cursor and advance it.
    pub fn insert_char(&mut self, cursor: &mut Cursor, ch: u8) {
        if cursor.cy == self.rows.len() {
            self.insert_row(self.rows.len(), b"");
        }
        self.row_insert_char(cursor.cy, cursor.cx, ch);
        cursor.cx += 1;
    }

    /// Break the line at the cursor.
    pub fn insert_newline(&mut self, cursor: &mut Cursor) {
        if cursor.cx == 0 {
            self.insert_row(cursor.cy, b"");
        } else if let Some(row) = self.rows.get_mut(cursor.cy) {
            let tail = row.split_off(cursor.cx);
            self.insert_row(cursor.cy + 1, &tail);
        }
        cursor.cy += 1;
        cursor.cx = 0;
    }

    /// Delete the byte before the cursor, joining lines at column 0.
    pub fn delete_char(&mut self, cursor: &mut Cursor) {
        if cursor.cy >= self.rows.len() {
            return;
        }
        if cursor.cx == 0 && cursor.cy == 0 {
            return;
        }

        if cursor.cx > 0 {
            self.row_delete_char(cursor.cy, cursor.cx - 1);
            cursor.cx -= 1;
        } else {
            let previous = cursor.cy - 1;
            let joined = self.rows[cursor.cy].chars().to_vec();
            cursor.cx = self.row_len(previous);
            self.row_append_string(previous, &joined);
            self.delete_row(cursor.cy);
            cursor.cy = previous;
        }
    }

    // =========================================================================
    // Serialization
    // =========================================================================

    /// All rows joined with `\n`, including one after the last row.
    pub fn rows_to_string(&self) -> Vec<u8> {
        let len = self.rows.iter().map(|row| row.size() + 1).sum();
        let mut out = Vec::with_capacity(len);
        for row in &self.rows {
            out.extend_from_slice(row.chars());
            out.push(b'\n');
        }
        out
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_TAB_STOP)
    }
}
