//! Sink trait and stock implementations.

use alloc::vec::Vec;

use crate::error::SinkError;

/// A caller-owned destination for encoded bytes.
///
/// This is the only contract the encoder places on its output: accept a
/// byte slice or say why not. Implementations decide where the bytes go:
/// a growable buffer, a fixed caller slice, a writer, a counter.
///
/// Failed appends must not leave a partial copy of `bytes` behind; the
/// encoder relies on this for its write-nothing-on-error guarantee.
pub trait ByteSink {
    /// Append `bytes` to the sink.
    fn append(&mut self, bytes: &[u8]) -> Result<(), SinkError>;
}

impl<S: ByteSink + ?Sized> ByteSink for &mut S {
    #[inline]
    fn append(&mut self, bytes: &[u8]) -> Result<(), SinkError> {
        (**self).append(bytes)
    }
}

impl ByteSink for Vec<u8> {
    #[inline]
    fn append(&mut self, bytes: &[u8]) -> Result<(), SinkError> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

/// Writes into a fixed caller-provided buffer.
///
/// Appends that do not fit fail with [`SinkError::Full`] and write nothing.
#[derive(Debug)]
pub struct SliceSink<'a> {
    buf: &'a mut [u8],
    len: usize,
}

impl<'a> SliceSink<'a> {
    /// Create a sink over `buf`, starting empty.
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, len: 0 }
    }

    /// Bytes written so far.
    pub fn written(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Number of bytes written so far.
    pub fn position(&self) -> usize {
        self.len
    }

    /// Capacity left in the buffer.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.len
    }
}

impl ByteSink for SliceSink<'_> {
    #[inline]
    fn append(&mut self, bytes: &[u8]) -> Result<(), SinkError> {
        let available = self.buf.len() - self.len;
        if bytes.len() > available {
            return Err(SinkError::Full {
                needed: bytes.len(),
                available,
            });
        }
        self.buf[self.len..self.len + bytes.len()].copy_from_slice(bytes);
        self.len += bytes.len();
        Ok(())
    }
}

/// Discards bytes, keeping only a running total.
///
/// Useful for sizing a buffer before encoding for real.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountSink {
    count: usize,
}

impl CountSink {
    /// Create a sink with a zero count.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total bytes accepted so far.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl ByteSink for CountSink {
    #[inline]
    fn append(&mut self, bytes: &[u8]) -> Result<(), SinkError> {
        self.count += bytes.len();
        Ok(())
    }
}

/// Adapts any [`std::io::Write`] into a sink.
///
/// `io::Error` carries more than a [`SinkError`] can; the original error is
/// kept and can be inspected with [`take_error`](IoSink::take_error) after
/// a failed encode.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct IoSink<W> {
    writer: W,
    error: Option<std::io::Error>,
}

#[cfg(feature = "std")]
impl<W: std::io::Write> IoSink<W> {
    /// Create a sink over a writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            error: None,
        }
    }

    /// Get a reference to the underlying writer.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Get the `io::Error` behind the last [`SinkError::Write`], if any.
    pub fn last_error(&self) -> Option<&std::io::Error> {
        self.error.as_ref()
    }

    /// Take the `io::Error` behind the last [`SinkError::Write`], if any.
    pub fn take_error(&mut self) -> Option<std::io::Error> {
        self.error.take()
    }

    /// Consume the sink and return the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

#[cfg(feature = "std")]
impl<W: std::io::Write> ByteSink for IoSink<W> {
    #[inline]
    fn append(&mut self, bytes: &[u8]) -> Result<(), SinkError> {
        match self.writer.write_all(bytes) {
            Ok(()) => Ok(()),
            Err(e) => {
                self.error = Some(e);
                Err(SinkError::Write {
                    message: "io write failed",
                })
            }
        }
    }
}
