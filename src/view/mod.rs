//! View: what the user sees.
//!
//! - [`Viewport`]: cursor, render column and scroll offsets
//! - [`Compositor`]: assembles rows, status bar and message bar into one frame
//! - [`StatusMessage`]: the transient notice in the message bar

pub mod compositor;
mod status;
mod viewport;

pub use compositor::Compositor;
pub use status::StatusMessage;
pub use viewport::{Direction, Viewport, RESERVED_ROWS};
