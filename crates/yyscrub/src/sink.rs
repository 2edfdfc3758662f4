//! Append-only output sinks.

use alloc::vec::Vec;
use core::convert::Infallible;

use bstr::BString;

use crate::ScrubError;

/// An append-only byte sink. Passes only ever write forward.
pub trait Sink {
    /// Error raised when bytes cannot be accepted.
    type Error;

    /// Appends `bytes` to the output.
    ///
    /// # Errors
    ///
    /// Returns the sink's own error if the bytes could not be written.
    fn put(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;

    /// Appends a single byte.
    ///
    /// # Errors
    ///
    /// See [`Sink::put`].
    fn put_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.put(&[byte])
    }
}

impl Sink for Vec<u8> {
    type Error = Infallible;

    fn put(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.extend_from_slice(bytes);
        Ok(())
    }

    fn put_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.push(byte);
        Ok(())
    }
}

impl Sink for BString {
    type Error = Infallible;

    fn put(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.extend_from_slice(bytes);
        Ok(())
    }

    fn put_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.push(byte);
        Ok(())
    }
}

/// Counts what a pass writes and lifts sink failures into [`ScrubError`].
pub(crate) struct Emitter<'a, S: Sink + ?Sized> {
    sink: &'a mut S,
    written: usize,
}

impl<'a, S: Sink + ?Sized> Emitter<'a, S> {
    pub(crate) fn new(sink: &'a mut S) -> Self {
        Self { sink, written: 0 }
    }

    pub(crate) fn put(&mut self, bytes: &[u8]) -> Result<(), ScrubError<S::Error>> {
        self.sink.put(bytes).map_err(ScrubError::Sink)?;
        self.written += bytes.len();
        Ok(())
    }

    pub(crate) fn byte(&mut self, byte: u8) -> Result<(), ScrubError<S::Error>> {
        self.sink.put_byte(byte).map_err(ScrubError::Sink)?;
        self.written += 1;
        Ok(())
    }

    pub(crate) fn written(&self) -> usize {
        self.written
    }
}

/// Adapts any [`std::io::Write`] into a [`Sink`].
///
/// No buffering is added; wrap files in a `BufWriter` first.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct IoSink<W> {
    inner: W,
    written: usize,
}

#[cfg(feature = "std")]
impl<W: std::io::Write> IoSink<W> {
    /// Wraps `inner`.
    pub fn new(inner: W) -> Self {
        Self { inner, written: 0 }
    }

    /// Total bytes accepted so far.
    #[must_use]
    pub fn written(&self) -> usize {
        self.written
    }

    /// Returns the wrapped writer without flushing it.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

#[cfg(feature = "std")]
impl<W: std::io::Write> Sink for IoSink<W> {
    type Error = std::io::Error;

    fn put(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.inner.write_all(bytes)?;
        self.written += bytes.len();
        Ok(())
    }
}
