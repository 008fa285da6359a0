//! Input: raw terminal bytes to logical key events.
//!
//! - [`ByteSource`]: one byte at a time with a short timeout
//! - [`KeyDecoder`]: resolves escape sequences into [`Key`] values
//! - [`StdinSource`]: the real terminal, polled with a timeout

mod decoder;
mod key;
mod source;

pub use decoder::KeyDecoder;
pub use key::{ctrl, Key, BACKSPACE, ENTER, ESC};
pub use source::{ByteSource, StdinSource};
pub(crate) use source::read_failure;
