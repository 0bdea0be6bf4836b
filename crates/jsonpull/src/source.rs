//! Byte-level input with pushback.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufReader, Read, StdinLock};
use std::path::Path;

/// Whitespace handling for a single [`ByteSource::read_byte`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Whitespace {
    /// Silently consume whitespace and return the first significant byte.
    Skip,
    /// Return whitespace bytes like any other.
    Keep,
}

pub(crate) fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}

/// A byte-at-a-time reader over any [`Read`] stream, with an unbounded
/// pushback queue.
///
/// Pushed-back bytes are replayed in their original stream order before any
/// further bytes are taken from the underlying reader. Callers that consume
/// bytes speculatively push the entire consumed span back as one unit, which
/// restores the stream exactly; [`offset`](ByteSource::offset) accounts for
/// pushback so it always names the position of the next byte a read would
/// return.
///
/// Once the reader reports end of input the source is exhausted and the
/// reader is never touched again; releasing the underlying resource is left
/// to `Drop`.
#[derive(Debug)]
pub struct ByteSource<R> {
    inner: R,
    pushback: VecDeque<u8>,
    offset: u64,
    exhausted: bool,
}

impl ByteSource<BufReader<File>> {
    /// Opens the file at `path` for reading.
    ///
    /// # Errors
    ///
    /// Returns any error from [`File::open`].
    pub fn from_path(path: impl AsRef<Path>) -> io::Result<Self> {
        Ok(Self::new(BufReader::new(File::open(path)?)))
    }
}

impl ByteSource<StdinLock<'static>> {
    /// Reads from standard input.
    #[must_use]
    pub fn from_stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: Read> ByteSource<R> {
    /// Wraps `inner`.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            pushback: VecDeque::new(),
            offset: 0,
            exhausted: false,
        }
    }

    /// Logical position of the next byte [`read_byte`](Self::read_byte)
    /// would return: bytes handed out so far (skipped whitespace included)
    /// minus bytes currently pushed back.
    #[must_use]
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Returns the next logical byte, draining the pushback queue before the
    /// underlying stream, or `None` once the input is exhausted.
    ///
    /// With [`Whitespace::Skip`], space, tab, carriage return and line feed
    /// are consumed silently and never returned.
    ///
    /// # Errors
    ///
    /// Propagates reader errors; interrupted reads are retried.
    pub fn read_byte(&mut self, whitespace: Whitespace) -> io::Result<Option<u8>> {
        loop {
            let byte = match self.pushback.pop_front() {
                Some(byte) => Some(byte),
                None => self.read_inner()?,
            };
            match byte {
                None => return Ok(None),
                Some(byte) => {
                    self.offset += 1;
                    if whitespace == Whitespace::Keep || !is_whitespace(byte) {
                        return Ok(Some(byte));
                    }
                }
            }
        }
    }

    /// Prepends `bytes` to the pushback queue, in the given order, so the
    /// next reads replay them before any further stream bytes.
    ///
    /// Spans compose most-recent-first: pushing `b"ab"` then `b"cd"` replays
    /// `c`, `d`, `a`, `b`. Callers that undo a failed speculative match push
    /// the whole consumed span back as one call, so replay order is always
    /// the original stream order.
    pub fn push_back(&mut self, bytes: &[u8]) {
        for &byte in bytes.iter().rev() {
            self.pushback.push_front(byte);
        }
        debug_assert!(
            self.offset >= bytes.len() as u64,
            "pushed back more bytes than were read"
        );
        self.offset -= bytes.len() as u64;
    }

    fn read_inner(&mut self) -> io::Result<Option<u8>> {
        if self.exhausted {
            return Ok(None);
        }
        let mut buf = [0u8; 1];
        loop {
            match self.inner.read(&mut buf) {
                Ok(0) => {
                    self.exhausted = true;
                    return Ok(None);
                }
                Ok(_) => return Ok(Some(buf[0])),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => return Err(err),
            }
        }
    }
}
