//! Buffer module: the in-memory document.
//!
//! This module contains:
//! - [`Row`]: one line of raw bytes with its tab-expanded render
//! - [`TextBuffer`]: the ordered rows, dirty tracking and serialization
//! - [`Cursor`]: a position in buffer coordinates

mod row;
mod text;

pub use row::{render_chars, Row};
pub use text::{Cursor, TextBuffer};
