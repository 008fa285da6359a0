//! # ped
//!
//! A minimal terminal text editor that talks to the terminal directly.
//!
//! ped puts the terminal into raw mode, decodes keystrokes (including escape
//! sequences) itself, and redraws the whole screen with a single write per
//! frame so nothing ever flickers.
//!
//! ## Core Concepts
//!
//! - **Key decoding**: raw bytes become [`Key`] events; unknown sequences
//!   collapse to a harmless `Escape`
//! - **Rows with renders**: each line keeps its raw bytes and a tab-expanded
//!   render that is rebuilt on every edit
//! - **Single-write frames**: the [`Compositor`] builds rows, status bar and
//!   message bar into one [`AppendBuffer`]
//! - **Scoped raw mode**: [`RawModeGuard`] restores the terminal on every exit
//!
//! ## Example
//!
//! ```rust
//! use ped::{Cursor, TextBuffer};
//!
//! let mut buffer = TextBuffer::default();
//! let mut cursor = Cursor::default();
//! for byte in b"a\tb" {
//!     buffer.insert_char(&mut cursor, *byte);
//! }
//! assert_eq!(buffer.row(0).unwrap().render(), b"a       b");
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod buffer;
pub mod config;
pub mod document;
pub mod editor;
pub mod error;
pub mod input;
pub mod terminal;
pub mod view;

// Re-exports for convenience
pub use buffer::{Cursor, Row, TextBuffer};
pub use config::EditorConfig;
pub use editor::{Action, Editor};
pub use error::{EditorError, Result};
pub use input::{ByteSource, Key, KeyDecoder, StdinSource};
pub use terminal::{AppendBuffer, RawModeGuard, WindowSize};
pub use view::{Compositor, StatusMessage, Viewport};
