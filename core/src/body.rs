//! Sequential read/write abstraction over message body content.
//!
//! # Design
//! `BodyStream` decouples body content from the message value so bodies can
//! be consumed incrementally or materialized whole. The backing store here is
//! an in-memory byte buffer with a cursor; the API is shaped so a file or
//! socket backed variant could honor the same contract. The stream is the one
//! stateful piece of the model: cursor position and the open flag mutate in
//! place, so a single instance must not be shared across concurrent
//! operations. Messages stay value-like because `Clone` copies the buffer.
//!
//! Every operation fails with `StreamError::Closed` once `close()` has been
//! called, and `write` fails with `StreamError::Unsupported` on a read-only
//! stream.

use crate::error::StreamError;

/// Capability of a stream's backing store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamMode {
    ReadOnly,
    ReadWrite,
}

/// In-memory body stream with a cursor and explicit close semantics.
#[derive(Debug, Clone)]
pub struct BodyStream {
    buf: Vec<u8>,
    pos: usize,
    mode: StreamMode,
    open: bool,
}

impl BodyStream {
    /// Writable stream seeded from a string, cursor at the start.
    pub fn from_string(content: impl Into<String>) -> Self {
        Self::from_bytes(content.into().into_bytes())
    }

    /// Writable stream seeded from raw bytes, cursor at the start.
    pub fn from_bytes(content: Vec<u8>) -> Self {
        Self {
            buf: content,
            pos: 0,
            mode: StreamMode::ReadWrite,
            open: true,
        }
    }

    /// Read-only stream over fixed content; `write` fails with
    /// `StreamError::Unsupported`.
    pub fn read_only(content: Vec<u8>) -> Self {
        Self {
            mode: StreamMode::ReadOnly,
            ..Self::from_bytes(content)
        }
    }

    /// Empty writable stream.
    pub fn empty() -> Self {
        Self::from_bytes(Vec::new())
    }

    pub fn mode(&self) -> StreamMode {
        self.mode
    }

    /// Read up to `len` bytes from the cursor, advancing it. Returns fewer
    /// bytes (possibly none) at end of stream.
    pub fn read(&mut self, len: usize) -> Result<Vec<u8>, StreamError> {
        self.ensure_open()?;
        let end = self.buf.len().min(self.pos.saturating_add(len));
        let chunk = self.buf[self.pos..end].to_vec();
        self.pos = end;
        Ok(chunk)
    }

    /// Write bytes at the cursor, overwriting existing content and extending
    /// the buffer as needed. Returns the number of bytes written.
    pub fn write(&mut self, data: &[u8]) -> Result<usize, StreamError> {
        self.ensure_open()?;
        if self.mode == StreamMode::ReadOnly {
            return Err(StreamError::Unsupported("write"));
        }
        let overlap = (self.buf.len() - self.pos).min(data.len());
        self.buf[self.pos..self.pos + overlap].copy_from_slice(&data[..overlap]);
        self.buf.extend_from_slice(&data[overlap..]);
        self.pos += data.len();
        Ok(data.len())
    }

    /// Materialize the whole content as a string, regardless of the cursor
    /// position. Non-UTF-8 bytes are replaced.
    pub fn contents(&self) -> Result<String, StreamError> {
        self.ensure_open()?;
        Ok(String::from_utf8_lossy(&self.buf).into_owned())
    }

    /// True once the cursor has passed the last byte.
    pub fn eof(&self) -> Result<bool, StreamError> {
        self.ensure_open()?;
        Ok(self.pos >= self.buf.len())
    }

    /// Current cursor position.
    pub fn tell(&self) -> Result<usize, StreamError> {
        self.ensure_open()?;
        Ok(self.pos)
    }

    /// Move the cursor to `offset`. Seeking past the end is an error.
    pub fn seek(&mut self, offset: usize) -> Result<(), StreamError> {
        self.ensure_open()?;
        if offset > self.buf.len() {
            return Err(StreamError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "seek past end of stream",
            )));
        }
        self.pos = offset;
        Ok(())
    }

    /// Move the cursor back to the start.
    pub fn rewind(&mut self) -> Result<(), StreamError> {
        self.seek(0)
    }

    /// Total content length in bytes, when known. An in-memory stream always
    /// knows its size; the `Option` is part of the contract for sources that
    /// may not.
    pub fn size(&self) -> Result<Option<usize>, StreamError> {
        self.ensure_open()?;
        Ok(Some(self.buf.len()))
    }

    /// Release the stream. Every subsequent operation fails with
    /// `StreamError::Closed`. Closing twice is a no-op.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_closed(&self) -> bool {
        !self.open
    }

    fn ensure_open(&self) -> Result<(), StreamError> {
        if self.open {
            Ok(())
        } else {
            Err(StreamError::Closed)
        }
    }
}
