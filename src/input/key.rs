//! Logical key events.

/// The escape byte that starts terminal control sequences.
pub const ESC: u8 = 0x1b;

/// Byte sent by the Enter key in raw mode.
pub const ENTER: u8 = b'\r';

/// Byte sent by the Backspace key on most terminals.
pub const BACKSPACE: u8 = 0x7f;

/// Control byte produced by Ctrl plus a letter.
///
/// ```
/// assert_eq!(ped::input::ctrl(b'q'), 0x11);
/// ```
#[inline]
pub const fn ctrl(letter: u8) -> u8 {
    letter & 0x1f
}

/// A decoded key press.
///
/// Plain and control bytes stay as [`Key::Byte`]; everything the terminal
/// encodes specially gets its own variant so no synthetic code can collide
/// with a real byte value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Any byte without special meaning to the decoder.
    Byte(u8),
    /// Enter / carriage return.
    Enter,
    /// Backspace (DEL byte).
    Backspace,
    /// Lone escape, or an escape sequence the decoder does not know.
    Escape,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Page Up.
    PageUp,
    /// Page Down.
    PageDown,
    /// Forward delete.
    Delete,
    /// Insert key.
    Insert,
}

impl Key {
    /// Map a single byte that is not part of an escape sequence.
    pub const fn from_byte(byte: u8) -> Self {
        match byte {
            ENTER => Self::Enter,
            BACKSPACE => Self::Backspace,
            ESC => Self::Escape,
            other => Self::Byte(other),
        }
    }
}
