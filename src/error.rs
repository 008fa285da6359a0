//! Fatal error conditions.
//!
//! Everything in here terminates the editor: the session unwinds through
//! the raw-mode guard, `main` clears the screen, prints the diagnostic and
//! exits with status 1. Recoverable problems (bad escape sequences, save
//! failures, out-of-range edits) never become an `EditorError`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A fatal editor error.
#[derive(Debug, Error)]
pub enum EditorError {
    /// Entering or leaving raw mode failed.
    #[error("terminal setup failed: {0}")]
    Terminal(#[source] io::Error),

    /// Neither the ioctl nor the cursor position report produced a size.
    #[error("unable to determine window size")]
    WindowSize,

    /// Reading from the terminal failed for a reason other than a timeout.
    #[error("read failed: {0}")]
    Read(#[source] io::Error),

    /// Writing a frame to the terminal failed.
    #[error("write failed: {0}")]
    Output(#[source] io::Error),

    /// The file named on the command line could not be opened.
    #[error("cannot open {}: {source}", path.display())]
    Open {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A termination signal arrived while waiting for input.
    #[error("terminated by signal")]
    Terminated,
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, EditorError>;
