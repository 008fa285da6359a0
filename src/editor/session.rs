//! Session: terminal setup and the event loop.
//!
//! One frame is drawn before every blocking read, and every key is fully
//! applied before the next frame. Raw mode is held by a guard for the whole
//! session, so every way out of [`run`] restores the terminal.

use super::editor::{Action, Editor};
use crate::buffer::TextBuffer;
use crate::config::EditorConfig;
use crate::document;
use crate::error::{EditorError, Result};
use crate::input::{ByteSource, KeyDecoder, StdinSource};
use crate::terminal::{clear_screen, window_size, RawModeGuard};
use std::io::{self, Write};
use std::path::Path;

/// Run the editor on the controlling terminal until the user quits.
pub fn run(config: EditorConfig, path: Option<&Path>) -> Result<()> {
    let guard = RawModeGuard::acquire()?;
    let mut stdout = io::stdout();

    let source = StdinSource::new(config.read_timeout).map_err(EditorError::Terminal)?;
    let mut decoder = KeyDecoder::new(source);
    let size = window_size(decoder.source_mut(), &mut stdout)?;
    tracing::debug!(rows = size.rows, cols = size.cols, "window size");

    let buffer = match path {
        Some(path) => document::open(path, config.tab_stop)?,
        None => TextBuffer::new(config.tab_stop),
    };

    let mut editor = Editor::new(buffer, size, config);
    event_loop(&mut editor, &mut decoder, &mut stdout)?;

    clear_screen(&mut stdout).map_err(EditorError::Output)?;
    guard.release()
}

/// Draw, read a key, apply it; until the editor asks to quit.
pub fn event_loop<S, W>(editor: &mut Editor, decoder: &mut KeyDecoder<S>, out: &mut W) -> Result<()>
where
    S: ByteSource,
    W: Write,
{
    loop {
        editor.refresh(out).map_err(EditorError::Output)?;
        let key = decoder.read_key()?;
        if editor.process_key(key) == Action::Quit {
            tracing::info!("quit requested");
            return Ok(());
        }
    }
}
