//! Terminal control: raw mode, window size and the frame output buffer.

pub mod output;
mod raw;
mod size;

pub use output::AppendBuffer;
pub use raw::{best_effort_cleanup, clear_screen, RawModeGuard};
pub use size::{cursor_position, parse_cursor_report, window_size, WindowSize};
