//! Fixed-capacity circular byte FIFO.

use alloc::boxed::Box;
use alloc::vec::Vec;

use snafu::{ResultExt, ensure};

use crate::error::{AllocFailedSnafu, InitError, ZeroCapacitySnafu};
use crate::sink::Sink;

/// Lifecycle state of a [`CircularByteBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// No backing store. Writes and reads are no-ops.
    Deinitialized,
    /// Initialized and holding no bytes.
    Empty,
    /// Holding at least one byte, with room for more.
    PartiallyFilled,
    /// Holding `capacity - 1` bytes. The next write is rejected.
    Full,
}

/// Single-producer, single-consumer circular byte buffer.
///
/// The buffer owns a byte store of exactly `capacity` slots, allocated once by
/// [`init`](Self::init) and released by [`deinit`](Self::deinit) or on drop.
/// One slot is always left unused, so at most `capacity - 1` bytes are held
/// at a time.
///
/// `head` is the slot of the next byte to read and `tail` the slot of the most
/// recently written byte. Both are `None` exactly when the buffer is empty.
#[derive(Debug, Default)]
pub struct CircularByteBuffer {
    storage: Option<Box<[u8]>>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl CircularByteBuffer {
    /// Create a deinitialized buffer. Call [`init`](Self::init) before use.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            storage: None,
            head: None,
            tail: None,
        }
    }

    /// Create and initialize a buffer of `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Result<Self, InitError> {
        let mut fifo = Self::new();
        fifo.init(capacity)?;
        Ok(fifo)
    }

    /// Allocate `capacity` slots and reset to the empty state.
    ///
    /// An already initialized buffer releases its old store first. On error
    /// the buffer is left deinitialized.
    pub fn init(&mut self, capacity: usize) -> Result<(), InitError> {
        self.deinit();
        ensure!(capacity > 0, ZeroCapacitySnafu);

        let mut storage = Vec::new();
        storage
            .try_reserve_exact(capacity)
            .context(AllocFailedSnafu { capacity })?;
        storage.resize(capacity, 0);

        self.storage = Some(storage.into_boxed_slice());
        Ok(())
    }

    /// Release the backing store. Calling this again is a no-op.
    pub fn deinit(&mut self) {
        self.storage = None;
        self.flush();
    }

    /// Discard buffered bytes without touching the store.
    ///
    /// The old bytes remain in memory but can no longer be read.
    #[inline]
    pub fn flush(&mut self) {
        self.head = None;
        self.tail = None;
    }

    /// True if no byte is available to read.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// True if the next write would be rejected.
    ///
    /// A buffer of capacity 1 has no usable slot and is always full.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        match self.storage {
            Some(_) => self.len() + 1 >= self.capacity(),
            None => false,
        }
    }

    /// Number of slots in the store, 0 when deinitialized.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.as_deref().map_or(0, <[u8]>::len)
    }

    /// Number of buffered bytes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        match (self.head, self.tail) {
            (Some(head), Some(tail)) => {
                let capacity = self.capacity();
                (tail + capacity - head) % capacity + 1
            }
            _ => 0,
        }
    }

    /// Number of bytes that can be written before the buffer is full.
    #[inline]
    #[must_use]
    pub fn available(&self) -> usize {
        self.capacity().saturating_sub(1).saturating_sub(self.len())
    }

    /// True if a backing store is present.
    #[inline]
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.storage.is_some()
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> State {
        if !self.is_initialized() {
            State::Deinitialized
        } else if self.is_full() {
            State::Full
        } else if self.is_empty() {
            State::Empty
        } else {
            State::PartiallyFilled
        }
    }

    /// Write bytes in order until the buffer fills.
    ///
    /// Returns the number of bytes from the end of `data` that were not
    /// written; `0` means everything was accepted. A deinitialized buffer
    /// writes nothing and returns `data.len()`.
    pub fn write(&mut self, data: &[u8]) -> usize {
        let capacity = self.capacity();
        if capacity == 0 {
            return data.len();
        }

        for (written, &byte) in data.iter().enumerate() {
            if self.is_full() {
                return data.len() - written;
            }

            let next = self.tail.map_or(0, |tail| (tail + 1) % capacity);
            if let Some(storage) = self.storage.as_deref_mut() {
                storage[next] = byte;
            }
            self.tail = Some(next);
            self.head.get_or_insert(0);
        }

        0
    }

    /// Read bytes in FIFO order into `out` until the buffer empties.
    ///
    /// Returns the number of slots at the end of `out` that were not filled;
    /// those slots are left untouched. A deinitialized buffer reads nothing
    /// and returns `out.len()`.
    pub fn read(&mut self, out: &mut [u8]) -> usize {
        let capacity = self.capacity();
        if capacity == 0 {
            return out.len();
        }

        let requested = out.len();
        for (read, slot) in out.iter_mut().enumerate() {
            let Some(head) = self.head else {
                return requested - read;
            };

            if let Some(storage) = self.storage.as_deref() {
                *slot = storage[head];
            }

            if self.tail == Some(head) {
                self.flush();
            } else {
                self.head = Some((head + 1) % capacity);
            }
        }

        0
    }

    /// Write a single byte. Returns it back if the buffer is full or
    /// deinitialized.
    #[inline]
    pub fn push(&mut self, byte: u8) -> Result<(), u8> {
        if self.write(&[byte]) == 0 {
            Ok(())
        } else {
            Err(byte)
        }
    }

    /// Read a single byte.
    #[inline]
    #[must_use]
    pub fn pop(&mut self) -> Option<u8> {
        let mut byte = [0u8; 1];
        (self.read(&mut byte) == 0).then_some(byte[0])
    }

    /// Oldest buffered byte, without consuming it.
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<u8> {
        let head = self.head?;
        self.storage.as_deref()?.get(head).copied()
    }

    /// Buffered bytes as up to two slices in FIFO order.
    ///
    /// The second slice is non-empty only when the contents wrap past the end
    /// of the store.
    #[must_use]
    pub fn as_slices(&self) -> (&[u8], &[u8]) {
        let (Some(head), Some(tail), Some(storage)) =
            (self.head, self.tail, self.storage.as_deref())
        else {
            return (&[], &[]);
        };

        if head <= tail {
            (&storage[head..=tail], &[])
        } else {
            (&storage[head..], &storage[..=tail])
        }
    }

    /// Move every buffered byte into `sink`, oldest first, then flush the
    /// sink. Returns the number of bytes moved.
    ///
    /// The sink receives at most two slices, one per contiguous run.
    pub fn drain_into<S: Sink>(&mut self, sink: &mut S) -> usize {
        let (first, second) = self.as_slices();
        let count = first.len() + second.len();
        for run in [first, second] {
            if !run.is_empty() {
                sink.send_slice(run);
            }
        }

        self.flush();
        sink.flush();
        count
    }
}
