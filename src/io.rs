//! `std::io` adapters.
//!
//! A full buffer on write, or an empty one on read, is reported as
//! [`io::ErrorKind::WouldBlock`] since the FIFO never blocks. A deinitialized
//! buffer reports [`io::ErrorKind::NotConnected`].

use std::io;

use crate::fifo::CircularByteBuffer;

fn deinitialized() -> io::Error {
    io::Error::new(io::ErrorKind::NotConnected, "FIFO is deinitialized")
}

impl io::Write for CircularByteBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if !self.is_initialized() {
            return Err(deinitialized());
        }
        let written = buf.len() - CircularByteBuffer::write(self, buf);
        if written == 0 && !buf.is_empty() {
            return Err(io::ErrorKind::WouldBlock.into());
        }
        Ok(written)
    }

    /// No-op. Unlike [`CircularByteBuffer::flush`], buffered bytes are kept.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl io::Read for CircularByteBuffer {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if !self.is_initialized() {
            return Err(deinitialized());
        }
        let read = buf.len() - CircularByteBuffer::read(self, buf);
        if read == 0 && !buf.is_empty() {
            return Err(io::ErrorKind::WouldBlock.into());
        }
        Ok(read)
    }
}
