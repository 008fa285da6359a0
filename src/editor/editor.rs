//! Editor: state plus the keypress dispatcher.

use crate::buffer::TextBuffer;
use crate::config::EditorConfig;
use crate::document;
use crate::input::{ctrl, Key};
use crate::terminal::WindowSize;
use crate::view::{Compositor, Direction, StatusMessage, Viewport};
use std::io::{self, Write};
use std::time::Instant;

const CTRL_H: u8 = ctrl(b'h');
const CTRL_L: u8 = ctrl(b'l');
const CTRL_Q: u8 = ctrl(b'q');
const CTRL_S: u8 = ctrl(b's');

/// Message shown when the editor starts.
pub const HELP_MESSAGE: &str = "HELP: Ctrl-S = save | Ctrl-Q = quit";

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Keep going.
    Continue,
    /// Leave the editor.
    Quit,
}

/// The whole editing session: document, view and transient state.
#[derive(Debug)]
pub struct Editor {
    buffer: TextBuffer,
    view: Viewport,
    status: StatusMessage,
    compositor: Compositor,
    config: EditorConfig,
    /// Consecutive quit commands seen while the buffer was dirty.
    quit_presses: usize,
}

impl Editor {
    /// Create an editor for `buffer` on a terminal of the given size.
    pub fn new(buffer: TextBuffer, size: WindowSize, config: EditorConfig) -> Self {
        let mut status = StatusMessage::new();
        status.set(HELP_MESSAGE);
        Self {
            buffer,
            view: Viewport::for_window(size),
            status,
            compositor: Compositor::new(),
            config,
            quit_presses: 0,
        }
    }

    /// The document.
    pub const fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// The viewport.
    pub const fn view(&self) -> &Viewport {
        &self.view
    }

    /// The status message.
    pub const fn status(&self) -> &StatusMessage {
        &self.status
    }

    /// Apply one key.
    pub fn process_key(&mut self, key: Key) -> Action {
        if key == Key::Byte(CTRL_Q) {
            return self.quit();
        }

        match key {
            Key::Enter => self.buffer.insert_newline(&mut self.view.cursor),
            Key::Byte(CTRL_S) => self.save(),
            Key::PageUp => self.view.page_up(&self.buffer),
            Key::PageDown => self.view.page_down(&self.buffer),
            Key::Home => self.view.home(),
            Key::End => self.view.end(&self.buffer),
            Key::Backspace | Key::Delete | Key::Byte(CTRL_H) => {
                if key == Key::Delete {
                    self.view.move_cursor(Direction::Right, &self.buffer);
                }
                self.buffer.delete_char(&mut self.view.cursor);
            }
            Key::Up => self.view.move_cursor(Direction::Up, &self.buffer),
            Key::Down => self.view.move_cursor(Direction::Down, &self.buffer),
            Key::Left => self.view.move_cursor(Direction::Left, &self.buffer),
            Key::Right => self.view.move_cursor(Direction::Right, &self.buffer),
            Key::Escape | Key::Insert | Key::Byte(CTRL_L) => {}
            Key::Byte(byte) => self.buffer.insert_char(&mut self.view.cursor, byte),
        }

        self.quit_presses = 0;
        Action::Continue
    }

    fn quit(&mut self) -> Action {
        if !self.buffer.is_dirty() {
            return Action::Quit;
        }

        self.quit_presses += 1;
        if self.quit_presses >= self.config.quit_times {
            tracing::info!("discarding unsaved changes");
            return Action::Quit;
        }

        let remaining = self.config.quit_times - self.quit_presses;
        self.status.set(format!(
            "WARNING!!! File has unsaved changes. Press Ctrl-Q {remaining} more times to quit."
        ));
        Action::Continue
    }

    fn save(&mut self) {
        match document::save(&self.buffer) {
            Ok(Some(bytes)) => {
                self.buffer.mark_clean();
                self.status.set(format!("{bytes} bytes written to disk"));
            }
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(error = %err, "save failed");
                self.status.set(format!("Can't save! I/O error: {err}"));
            }
        }
    }

    /// Build the frame for time `now` (which decides whether the message
    /// is still shown).
    pub fn compose(&mut self, now: Instant) -> &[u8] {
        let message = self.status.visible(now, self.config.message_timeout);
        self.compositor.compose(&mut self.view, &self.buffer, message)
    }

    /// Draw the current state to `out` with a single write.
    pub fn refresh<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let message = self.status.visible(Instant::now(), self.config.message_timeout);
        self.compositor
            .refresh(&mut self.view, &self.buffer, message, out)
    }
}
