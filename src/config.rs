//! Editor configuration.

use std::time::Duration;

/// Default tab stop width in columns.
pub const DEFAULT_TAB_STOP: usize = 8;

/// Default number of consecutive Ctrl-Q presses needed to discard changes.
pub const DEFAULT_QUIT_TIMES: usize = 2;

/// Configuration for the editor.
#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// Tab stop width used when building row renders.
    pub tab_stop: usize,
    /// Consecutive quit commands required when the buffer is modified.
    pub quit_times: usize,
    /// How long a status message stays visible.
    pub message_timeout: Duration,
    /// How long a single terminal read waits before reporting "no data".
    pub read_timeout: Duration,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_stop: DEFAULT_TAB_STOP,
            quit_times: DEFAULT_QUIT_TIMES,
            message_timeout: Duration::from_secs(5),
            read_timeout: Duration::from_millis(100),
        }
    }
}

impl EditorConfig {
    /// Set the tab stop width. Zero is bumped to one.
    #[must_use]
    pub fn with_tab_stop(mut self, tab_stop: usize) -> Self {
        self.tab_stop = tab_stop.max(1);
        self
    }

    /// Set the number of consecutive quit commands for a modified buffer.
    /// Zero is bumped to one.
    #[must_use]
    pub fn with_quit_times(mut self, quit_times: usize) -> Self {
        self.quit_times = quit_times.max(1);
        self
    }

    /// Set the status message display duration.
    #[must_use]
    pub const fn with_message_timeout(mut self, timeout: Duration) -> Self {
        self.message_timeout = timeout;
        self
    }

    /// Set the per-read input timeout.
    #[must_use]
    pub const fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }
}
