//! 3-character field decoding.
//!
//! An 18-bit value is carried as three bytes, each holding 6 bits offset by
//! [`OFFSET`] so that small values land on printable ASCII (`'0'` for 0).
//! The first byte holds bits 12..=17, the second bits 6..=11 and the last
//! bits 0..=5.
//!
//! Inputs are not range checked. A byte below `OFFSET` or above
//! `OFFSET + FIELD_MASK` wraps and is masked to 6 bits.

/// Offset added to each 6-bit field when encoding.
pub const OFFSET: u8 = 0x30;

/// Width of one field in bits.
pub const FIELD_BITS: u32 = 6;

/// Mask selecting one field.
pub const FIELD_MASK: u32 = 0x3F;

/// Largest value three fields can carry.
pub const MAX_VALUE: u32 = (1 << (3 * FIELD_BITS)) - 1;

#[inline]
const fn field(byte: u8) -> u32 {
    byte.wrapping_sub(OFFSET) as u32 & FIELD_MASK
}

/// Decode three encoded bytes, most significant first.
///
/// ```
/// use byte_fifo::decode_triple;
///
/// // '1' '2' '3' -> 1 << 12 | 2 << 6 | 3
/// assert_eq!(decode_triple(0x31, 0x32, 0x33), 4227);
/// ```
#[inline]
#[must_use]
pub const fn decode_triple(high: u8, mid: u8, low: u8) -> u32 {
    (field(high) << (2 * FIELD_BITS)) | (field(mid) << FIELD_BITS) | field(low)
}

/// Encode the low 18 bits of `value`, most significant field first.
///
/// Bits above [`MAX_VALUE`] are dropped.
#[inline]
#[must_use]
pub const fn encode_triple(value: u32) -> [u8; 3] {
    [
        ((value >> (2 * FIELD_BITS)) & FIELD_MASK) as u8 + OFFSET,
        ((value >> FIELD_BITS) & FIELD_MASK) as u8 + OFFSET,
        (value & FIELD_MASK) as u8 + OFFSET,
    ]
}
