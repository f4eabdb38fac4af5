//! Destinations for drained bytes.

use alloc::vec::Vec;

/// Consumes bytes drained from a FIFO.
pub trait Sink {
    /// Consume a byte.
    fn send(&mut self, byte: u8);

    /// Consume a contiguous run of bytes.
    ///
    /// Default implementation calls `send` for each byte.
    #[inline]
    fn send_slice(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.send(byte);
        }
    }

    /// Flush buffered data. Called once a drain completes.
    #[inline]
    fn flush(&mut self) {}
}

impl<S: Sink + ?Sized> Sink for &mut S {
    #[inline]
    fn send(&mut self, byte: u8) {
        (**self).send(byte);
    }

    #[inline]
    fn send_slice(&mut self, bytes: &[u8]) {
        (**self).send_slice(bytes);
    }

    #[inline]
    fn flush(&mut self) {
        (**self).flush();
    }
}

/// Drops all bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct DropSink;

impl Sink for DropSink {
    #[inline]
    fn send(&mut self, _byte: u8) {}
}

/// Calls a closure for each byte.
#[derive(Debug)]
pub struct FnSink<F>(pub F);

impl<F: FnMut(u8)> Sink for FnSink<F> {
    #[inline]
    fn send(&mut self, byte: u8) {
        (self.0)(byte);
    }
}

/// Collects bytes into a `Vec`.
#[derive(Debug, Clone, Default)]
pub struct CollectSink {
    bytes: Vec<u8>,
}

impl CollectSink {
    /// Create an empty sink.
    #[must_use]
    pub const fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Bytes collected so far.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the sink and return the collected bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl Sink for CollectSink {
    #[inline]
    fn send(&mut self, byte: u8) {
        self.bytes.push(byte);
    }

    #[inline]
    fn send_slice(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }
}
