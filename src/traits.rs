//! Byte producer and consumer seams.
//!
//! Both sides report the *unsatisfied remainder* of a request: `0` means the
//! whole request completed.

use crate::fifo::CircularByteBuffer;

/// Accepts bytes.
pub trait ByteProducer {
    /// Write as much of `data` as fits. Returns the number of bytes not written.
    fn write(&mut self, data: &[u8]) -> usize;

    /// True if no byte can be written.
    fn is_full(&self) -> bool;

    /// Number of bytes that can be written right now.
    fn available(&self) -> usize;
}

/// Supplies bytes.
pub trait ByteConsumer {
    /// Fill as much of `out` as possible. Returns the number of slots not filled.
    fn read(&mut self, out: &mut [u8]) -> usize;

    /// True if no byte can be read.
    fn is_empty(&self) -> bool;
}

impl ByteProducer for CircularByteBuffer {
    #[inline]
    fn write(&mut self, data: &[u8]) -> usize {
        CircularByteBuffer::write(self, data)
    }

    #[inline]
    fn is_full(&self) -> bool {
        CircularByteBuffer::is_full(self)
    }

    #[inline]
    fn available(&self) -> usize {
        CircularByteBuffer::available(self)
    }
}

impl ByteConsumer for CircularByteBuffer {
    #[inline]
    fn read(&mut self, out: &mut [u8]) -> usize {
        CircularByteBuffer::read(self, out)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        CircularByteBuffer::is_empty(self)
    }
}

/// Move bytes from `src` to `dst` through `scratch` until `src` runs dry or
/// `dst` fills. Returns the number of bytes moved.
///
/// Only as many bytes as `dst` can accept are taken from `src`, so nothing is
/// lost to backpressure.
///
/// ```
/// use byte_fifo::{CircularByteBuffer, transfer};
///
/// let mut src = CircularByteBuffer::with_capacity(8).unwrap();
/// let mut dst = CircularByteBuffer::with_capacity(4).unwrap();
/// src.write(b"hello");
///
/// let mut scratch = [0u8; 2];
/// assert_eq!(transfer(&mut src, &mut dst, &mut scratch), 3);
/// assert_eq!(src.len(), 2);
/// ```
pub fn transfer<C, P>(src: &mut C, dst: &mut P, scratch: &mut [u8]) -> usize
where
    C: ByteConsumer + ?Sized,
    P: ByteProducer + ?Sized,
{
    let mut moved = 0;
    loop {
        let room = dst.available().min(scratch.len());
        if room == 0 || src.is_empty() {
            return moved;
        }

        let chunk = &mut scratch[..room];
        let unread = src.read(chunk);
        let got = room - unread;
        let rejected = dst.write(&chunk[..got]);
        debug_assert_eq!(rejected, 0, "producer rejected bytes it reported room for");
        moved += got - rejected;

        if got == 0 || unread > 0 {
            return moved;
        }
    }
}
