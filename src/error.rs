//! Error types for FIFO initialization.
//!
//! Only initialization can fail. Writes and reads report shortfall through
//! their return value instead of an error.

use alloc::collections::TryReserveError;

use snafu::Snafu;

/// Error returned when a [`CircularByteBuffer`](crate::CircularByteBuffer)
/// cannot be initialized. The buffer is left deinitialized.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(crate)))]
#[non_exhaustive]
pub enum InitError {
    /// A capacity of zero was requested.
    #[snafu(display("FIFO capacity must be at least 1 byte"))]
    ZeroCapacity,

    /// The backing store could not be allocated.
    #[snafu(display("failed to allocate {capacity} bytes of FIFO storage"))]
    AllocFailed {
        /// Requested capacity in bytes.
        capacity: usize,
        /// Allocator error.
        source: TryReserveError,
    },
}
