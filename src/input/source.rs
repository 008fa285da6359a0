//! Byte sources for the key decoder.

use crate::error::EditorError;
use nix::errno::Errno;
use nix::poll::{poll, PollFd, PollFlags, PollTimeout};
use signal_hook::consts::{SIGHUP, SIGTERM};
use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, Read};
use std::os::fd::AsFd;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// A stream of input bytes with a short read timeout.
pub trait ByteSource {
    /// Read one byte.
    ///
    /// Returns `Ok(None)` when no byte arrived within the timeout. An error
    /// of kind [`io::ErrorKind::Interrupted`] means the editor was asked to
    /// terminate; any other error is an unrecoverable read failure.
    fn read_byte(&mut self) -> io::Result<Option<u8>>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        (**self).read_byte()
    }
}

/// Replays queued bytes; an empty queue behaves like a timeout.
impl ByteSource for VecDeque<u8> {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        Ok(self.pop_front())
    }
}

/// Turn a source error into the matching fatal editor error.
pub(crate) fn read_failure(err: io::Error) -> EditorError {
    if err.kind() == io::ErrorKind::Interrupted {
        EditorError::Terminated
    } else {
        EditorError::Read(err)
    }
}

/// Raw terminal input from stdin.
///
/// Waits at most the configured timeout for data with `poll(2)`, then reads
/// everything available without any std buffering so that `poll` always
/// reflects what is still unread.
#[derive(Debug)]
pub struct StdinSource {
    tty: File,
    pending: VecDeque<u8>,
    timeout_ms: u16,
    terminate: Arc<AtomicBool>,
}

impl StdinSource {
    /// Open stdin for raw reads and register SIGTERM/SIGHUP handlers.
    pub fn new(read_timeout: Duration) -> io::Result<Self> {
        let tty = File::from(io::stdin().as_fd().try_clone_to_owned()?);

        let terminate = Arc::new(AtomicBool::new(false));
        for signal in [SIGTERM, SIGHUP] {
            signal_hook::flag::register(signal, Arc::clone(&terminate))?;
        }

        let millis = u16::try_from(read_timeout.as_millis()).unwrap_or(u16::MAX);

        Ok(Self {
            tty,
            pending: VecDeque::with_capacity(64),
            timeout_ms: millis,
            terminate,
        })
    }

    /// Wait for the terminal to become readable.
    fn wait_readable(&self) -> io::Result<bool> {
        let mut fds = [PollFd::new(self.tty.as_fd(), PollFlags::POLLIN)];
        match poll(&mut fds, PollTimeout::from(self.timeout_ms)) {
            Ok(ready) => Ok(ready > 0),
            // Window resizes and the like; the caller just retries.
            Err(Errno::EINTR) => Ok(false),
            Err(errno) => Err(errno.into()),
        }
    }
}

impl ByteSource for StdinSource {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        if let Some(byte) = self.pending.pop_front() {
            return Ok(Some(byte));
        }

        if self.terminate.load(Ordering::Relaxed) {
            return Err(io::Error::new(
                io::ErrorKind::Interrupted,
                "termination signal received",
            ));
        }

        if !self.wait_readable()? {
            return Ok(None);
        }

        let mut chunk = [0u8; 64];
        match self.tty.read(&mut chunk) {
            Ok(0) => Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "terminal input closed",
            )),
            Ok(n) => {
                self.pending.extend(&chunk[..n]);
                Ok(self.pending.pop_front())
            }
            Err(e) if matches!(e.kind(), io::ErrorKind::Interrupted | io::ErrorKind::WouldBlock) => {
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
