//! Scoped raw mode.
//!
//! [`RawModeGuard`] switches the terminal into raw mode when created and
//! restores the original attributes when dropped. A panic hook performs the
//! same restore so a crash never leaves the parent shell in raw mode.

use crate::error::{EditorError, Result};
use crossterm::terminal;
use std::io::{self, Write};
use std::sync::OnceLock;

use super::output::{AppendBuffer, CURSOR_SHOW};

/// Holds the terminal in raw mode for as long as it lives.
#[derive(Debug)]
pub struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    /// Enter raw mode.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Terminal`] if the terminal attributes cannot be
    /// read or changed (for example when stdin is not a tty).
    pub fn acquire() -> Result<Self> {
        install_panic_hook();
        terminal::enable_raw_mode().map_err(EditorError::Terminal)?;
        tracing::info!("terminal raw mode enabled");
        Ok(Self { active: true })
    }

    /// Leave raw mode now instead of waiting for drop.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Terminal`] if restoring the attributes fails.
    pub fn release(mut self) -> Result<()> {
        self.active = false;
        terminal::disable_raw_mode().map_err(EditorError::Terminal)?;
        tracing::info!("terminal raw mode disabled");
        Ok(())
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if self.active {
            let _ = terminal::disable_raw_mode();
            tracing::info!("terminal raw mode disabled");
        }
    }
}

/// Clear the screen and home the cursor.
///
/// Used on quit and before printing a fatal diagnostic.
pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    let mut frame = AppendBuffer::with_capacity(8);
    frame.clear_screen();
    frame.cursor_home();
    frame.flush_to(out)
}

fn install_panic_hook() {
    static HOOK: OnceLock<()> = OnceLock::new();
    HOOK.get_or_init(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            best_effort_cleanup();
            previous(info);
        }));
    });
}

/// Restore the terminal on paths that skip `Drop`.
pub fn best_effort_cleanup() {
    let mut stdout = io::stdout();
    let _ = clear_screen(&mut stdout);
    let _ = stdout.write_all(CURSOR_SHOW);
    let _ = terminal::disable_raw_mode();
    let _ = stdout.flush();
}
