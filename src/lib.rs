//! A `no_std` circular byte FIFO with an explicit init/deinit/flush
//! lifecycle, plus a decoder for 3-character encoded 18-bit values.
//!
//! # FIFO
//!
//! Writes and reads are partial: both return the number of bytes that could
//! *not* be transferred, so `0` means the whole request was satisfied.
//!
//! ```
//! use byte_fifo::CircularByteBuffer;
//!
//! let mut fifo = CircularByteBuffer::with_capacity(4).unwrap();
//!
//! assert_eq!(fifo.write(&[10, 20, 30]), 0);
//! assert!(fifo.is_full());
//! assert_eq!(fifo.write(&[40]), 1); // rejected
//!
//! let mut out = [0u8; 2];
//! assert_eq!(fifo.read(&mut out), 0);
//! assert_eq!(out, [10, 20]);
//! ```
//!
//! # Triple decoding
//!
//! ```
//! use byte_fifo::decode_triple;
//!
//! assert_eq!(decode_triple(b'1', b'2', b'3'), 4227);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod decode;
mod error;
mod fifo;
#[cfg(feature = "std")]
mod io;
mod sink;
mod traits;

#[cfg(test)]
mod tests;

pub use decode::{decode_triple, encode_triple};
pub use error::InitError;
pub use fifo::{CircularByteBuffer, State};
pub use sink::{CollectSink, DropSink, FnSink, Sink};
pub use traits::{ByteConsumer, ByteProducer, transfer};
