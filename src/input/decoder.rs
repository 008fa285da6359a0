//! Escape sequence decoder.
//!
//! Turns a byte stream into [`Key`] events. The decoder only consumes bytes
//! from its [`ByteSource`], so any byte stream can be replayed through it.

use super::key::{Key, ESC};
use super::source::{read_failure, ByteSource};
use crate::error::Result;

/// Decodes keys from a byte source.
#[derive(Debug)]
pub struct KeyDecoder<S> {
    source: S,
}

impl<S: ByteSource> KeyDecoder<S> {
    /// Wrap a byte source.
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// Access the underlying source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Block until a key is available.
    ///
    /// Read timeouts are not errors; the decoder just keeps waiting.
    pub fn read_key(&mut self) -> Result<Key> {
        loop {
            if let Some(key) = self.try_read_key()? {
                return Ok(key);
            }
        }
    }

    /// Attempt to decode one key. Returns `Ok(None)` if the first read timed out.
    pub fn try_read_key(&mut self) -> Result<Option<Key>> {
        let Some(byte) = self.next_byte()? else {
            return Ok(None);
        };

        let key = if byte == ESC {
            self.decode_escape()?
        } else {
            Key::from_byte(byte)
        };
        tracing::trace!(?key, "decoded key");
        Ok(Some(key))
    }

    fn next_byte(&mut self) -> Result<Option<u8>> {
        self.source.read_byte().map_err(read_failure)
    }

    /// Decode whatever follows an ESC byte.
    fn decode_escape(&mut self) -> Result<Key> {
        let Some(first) = self.next_byte()? else {
            return Ok(Key::Escape);
        };
        let Some(second) = self.next_byte()? else {
            return Ok(Key::Escape);
        };

        let key = match (first, second) {
            (b'[', digit @ b'0'..=b'9') => {
                let Some(third) = self.next_byte()? else {
                    return Ok(Key::Escape);
                };
                if third == b'~' {
                    tilde_key(digit)
                } else {
                    Key::Escape
                }
            }
            (b'[', b'A') => Key::Up,
            (b'[', b'B') => Key::Down,
            (b'[', b'C') => Key::Right,
            (b'[', b'D') => Key::Left,
            (b'[' | b'O', b'H') => Key::Home,
            (b'[' | b'O', b'F') => Key::End,
            _ => Key::Escape,
        };
        Ok(key)
    }
}

/// Keys encoded as `ESC [ <digit> ~`.
const fn tilde_key(digit: u8) -> Key {
    match digit {
        b'1' | b'7' => Key::Home,
        b'2' => Key::Insert,
        b'3' => Key::Delete,
        b'4' | b'8' => Key::End,
        b'5' => Key::PageUp,
        b'6' => Key::PageDown,
        _ => Key::Escape,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EditorError;
    use std::collections::VecDeque;
    use std::io;

    fn decoder(bytes: &[u8]) -> KeyDecoder<VecDeque<u8>> {
        KeyDecoder::new(bytes.iter().copied().collect())
    }

    fn decode_all(bytes: &[u8]) -> Vec<Key> {
        let mut decoder = decoder(bytes);
        let mut keys = Vec::new();
        while let Some(key) = decoder.try_read_key().unwrap() {
            keys.push(key);
        }
        keys
    }

    #[test]
    fn test_plain_bytes() {
        assert_eq!(
            decode_all(b"a\r\x7f\x08"),
            vec![Key::Byte(b'a'), Key::Enter, Key::Backspace, Key::Byte(8)]
        );
    }

    #[test]
    fn test_arrows() {
        assert_eq!(
            decode_all(b"\x1b[A\x1b[B\x1b[C\x1b[D"),
            vec![Key::Up, Key::Down, Key::Right, Key::Left]
        );
    }

    #[test]
    fn test_home_end_variants() {
        assert_eq!(
            decode_all(b"\x1b[H\x1bOH\x1b[1~\x1b[7~"),
            vec![Key::Home; 4]
        );
        assert_eq!(
            decode_all(b"\x1b[F\x1bOF\x1b[4~\x1b[8~"),
            vec![Key::End; 4]
        );
    }

    #[test]
    fn test_tilde_table() {
        assert_eq!(
            decode_all(b"\x1b[2~\x1b[3~\x1b[5~\x1b[6~"),
            vec![Key::Insert, Key::Delete, Key::PageUp, Key::PageDown]
        );
    }

    #[test]
    fn test_lone_escape() {
        assert_eq!(decode_all(b"\x1b"), vec![Key::Escape]);
        // Only one follow-up byte before the timeout.
        assert_eq!(decode_all(b"\x1b["), vec![Key::Escape]);
    }

    #[test]
    fn test_digit_without_third_byte() {
        assert_eq!(decode_all(b"\x1b[5"), vec![Key::Escape]);
    }

    #[test]
    fn test_unknown_sequences_are_escape() {
        // The unknown sequence is consumed whole and decoding resumes after it.
        assert_eq!(decode_all(b"\x1b[Zx"), vec![Key::Escape, Key::Byte(b'x')]);
        assert_eq!(decode_all(b"\x1b[9~"), vec![Key::Escape]);
        assert_eq!(decode_all(b"\x1b[5x"), vec![Key::Escape]);
        assert_eq!(decode_all(b"\x1bOA"), vec![Key::Escape]);
    }

    #[test]
    fn test_read_key_skips_timeouts() {
        /// Source that times out a few times before every byte.
        struct Sluggish {
            bytes: VecDeque<u8>,
            stalls: usize,
        }

        impl ByteSource for Sluggish {
            fn read_byte(&mut self) -> io::Result<Option<u8>> {
                if self.stalls > 0 {
                    self.stalls -= 1;
                    return Ok(None);
                }
                Ok(self.bytes.pop_front())
            }
        }

        let mut decoder = KeyDecoder::new(Sluggish {
            bytes: b"q".iter().copied().collect(),
            stalls: 3,
        });
        assert_eq!(decoder.read_key().unwrap(), Key::Byte(b'q'));
    }

    #[test]
    fn test_read_error_is_fatal() {
        struct Broken;

        impl ByteSource for Broken {
            fn read_byte(&mut self) -> io::Result<Option<u8>> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
            }
        }

        let mut decoder = KeyDecoder::new(Broken);
        assert!(matches!(decoder.read_key(), Err(EditorError::Read(_))));
    }
}
