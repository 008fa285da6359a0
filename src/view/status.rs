//! Transient status message.

use std::time::{Duration, Instant};

/// A one-line notice shown in the message bar until it expires.
#[derive(Debug, Clone, Default)]
pub struct StatusMessage {
    text: String,
    set_at: Option<Instant>,
}

impl StatusMessage {
    /// Create an empty message.
    pub const fn new() -> Self {
        Self {
            text: String::new(),
            set_at: None,
        }
    }

    /// Replace the message, stamping it with the current time.
    pub fn set(&mut self, text: impl Into<String>) {
        self.set_at_time(text, Instant::now());
    }

    /// Replace the message with an explicit timestamp.
    pub fn set_at_time(&mut self, text: impl Into<String>, now: Instant) {
        self.text = text.into();
        self.set_at = Some(now);
    }

    /// The message text, regardless of age.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The message text if it is younger than `timeout` at `now`.
    pub fn visible(&self, now: Instant, timeout: Duration) -> Option<&str> {
        let set_at = self.set_at?;
        if self.text.is_empty() || now.saturating_duration_since(set_at) >= timeout {
            return None;
        }
        Some(&self.text)
    }
}
