//! Viewport: cursor placement and scroll offsets.

use crate::buffer::{Cursor, TextBuffer};
use crate::terminal::WindowSize;

/// Screen lines reserved below the text area (status bar and message bar).
pub const RESERVED_ROWS: usize = 2;

/// Single-step cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One byte left, wrapping to the end of the previous row.
    Left,
    /// One byte right, wrapping to the start of the next row.
    Right,
}

/// The visible window onto the buffer.
#[derive(Debug, Clone)]
pub struct Viewport {
    /// Cursor in buffer coordinates.
    pub cursor: Cursor,
    /// Cursor column in render coordinates (set by [`Viewport::scroll`]).
    rx: usize,
    /// First buffer row on screen.
    rowoff: usize,
    /// First render column on screen.
    coloff: usize,
    /// Text rows on screen.
    screenrows: usize,
    /// Columns on screen.
    screencols: usize,
}

impl Viewport {
    /// Create a viewport with the given text area size.
    pub const fn new(screenrows: usize, screencols: usize) -> Self {
        Self {
            cursor: Cursor::new(0, 0),
            rx: 0,
            rowoff: 0,
            coloff: 0,
            screenrows,
            screencols,
        }
    }

    /// Create a viewport for a whole terminal, leaving room for the bars.
    pub const fn for_window(size: WindowSize) -> Self {
        Self::new(size.rows.saturating_sub(RESERVED_ROWS), size.cols)
    }

    /// Cursor column in render coordinates.
    #[inline]
    pub const fn rx(&self) -> usize {
        self.rx
    }

    /// First visible buffer row.
    #[inline]
    pub const fn rowoff(&self) -> usize {
        self.rowoff
    }

    /// First visible render column.
    #[inline]
    pub const fn coloff(&self) -> usize {
        self.coloff
    }

    /// Visible text rows.
    #[inline]
    pub const fn screenrows(&self) -> usize {
        self.screenrows
    }

    /// Visible columns.
    #[inline]
    pub const fn screencols(&self) -> usize {
        self.screencols
    }

    /// Cursor position relative to the top-left of the screen.
    pub const fn screen_cursor(&self) -> (usize, usize) {
        (
            self.cursor.cy.saturating_sub(self.rowoff),
            self.rx.saturating_sub(self.coloff),
        )
    }

    /// Recompute `rx` and bring the cursor back into view.
    pub fn scroll(&mut self, buffer: &TextBuffer) {
        self.rx = buffer
            .row(self.cursor.cy)
            .map_or(0, |row| row.cx_to_rx(self.cursor.cx));

        if self.cursor.cy < self.rowoff {
            self.rowoff = self.cursor.cy;
        }
        if self.cursor.cy >= self.rowoff + self.screenrows {
            self.rowoff = (self.cursor.cy + 1).saturating_sub(self.screenrows);
        }
        if self.rx < self.coloff {
            self.coloff = self.rx;
        }
        if self.rx >= self.coloff + self.screencols {
            self.coloff = (self.rx + 1).saturating_sub(self.screencols);
        }
    }

    /// Move the cursor one step.
    pub fn move_cursor(&mut self, direction: Direction, buffer: &TextBuffer) {
        let cursor = &mut self.cursor;
        match direction {
            Direction::Left => {
                if cursor.cx > 0 {
                    cursor.cx -= 1;
                } else if cursor.cy > 0 {
                    cursor.cy -= 1;
                    cursor.cx = buffer.row_len(cursor.cy);
                }
            }
            Direction::Right => {
                if let Some(row) = buffer.row(cursor.cy) {
                    if cursor.cx < row.size() {
                        cursor.cx += 1;
                    } else {
                        cursor.cy += 1;
                        cursor.cx = 0;
                    }
                }
            }
            Direction::Up => {
                cursor.cy = cursor.cy.saturating_sub(1);
            }
            Direction::Down => {
                if cursor.cy < buffer.numrows() {
                    cursor.cy += 1;
                }
            }
        }

        cursor.cx = cursor.cx.min(buffer.row_len(cursor.cy));
    }

    /// Jump to the top of the screen, then step up a screenful.
    pub fn page_up(&mut self, buffer: &TextBuffer) {
        self.cursor.cy = self.rowoff;
        for _ in 0..self.screenrows {
            self.move_cursor(Direction::Up, buffer);
        }
    }

    /// Jump to the bottom of the screen, then step down a screenful.
    pub fn page_down(&mut self, buffer: &TextBuffer) {
        let bottom = (self.rowoff + self.screenrows).saturating_sub(1);
        self.cursor.cy = bottom.min(buffer.numrows());
        for _ in 0..self.screenrows {
            self.move_cursor(Direction::Down, buffer);
        }
    }

    /// Move to the start of the line.
    pub const fn home(&mut self) {
        self.cursor.cx = 0;
    }

    /// Move to the end of the line.
    pub fn end(&mut self, buffer: &TextBuffer) {
        self.cursor.cx = buffer.row_len(self.cursor.cy);
    }
}
