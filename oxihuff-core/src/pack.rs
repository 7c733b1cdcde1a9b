//! Byte packing with an explicit bit length.
//!
//! A packed bit sequence is a byte buffer plus the number of meaningful bits
//! in it. The bit count is part of the format rather than inferred, so the
//! zero padding in the final byte is never mistaken for data.

use crate::bitstream::BitBuffer;
use crate::error::{OxiHuffError, Result};

/// A bit sequence packed into whole bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackedBits {
    /// `ceil(bit_count / 8)` bytes, MSB-first, zero-padded.
    pub bytes: Vec<u8>,
    /// Exact logical bit length.
    pub bit_count: u64,
}

impl PackedBits {
    /// Number of zero bits padding the final byte.
    pub fn padding_bits(&self) -> u8 {
        ((8 - self.bit_count % 8) % 8) as u8
    }
}

/// Number of bytes needed to hold `bit_count` bits.
#[inline]
pub fn packed_len(bit_count: u64) -> u64 {
    bit_count.div_ceil(8)
}

/// Pack a bit buffer into bytes, carrying its exact bit length.
pub fn pack(bits: &BitBuffer) -> PackedBits {
    PackedBits {
        bytes: bits.as_bytes().to_vec(),
        bit_count: bits.len(),
    }
}

/// Pack a bit buffer without copying.
pub fn pack_owned(bits: BitBuffer) -> PackedBits {
    let (bytes, bit_count) = bits.into_parts();
    PackedBits { bytes, bit_count }
}

/// Unpack `bit_count` bits from `bytes`.
///
/// Bytes beyond `ceil(bit_count / 8)` are ignored and pad bits in the last
/// used byte are discarded.
///
/// # Errors
///
/// Returns a format error if `bytes` holds fewer than `bit_count` bits.
pub fn unpack(bytes: &[u8], bit_count: u64) -> Result<BitBuffer> {
    let needed = packed_len(bit_count);
    if (bytes.len() as u64) < needed {
        return Err(OxiHuffError::format_error(format!(
            "bit count {} needs {} bytes, only {} available",
            bit_count,
            needed,
            bytes.len()
        )));
    }
    // needed <= bytes.len(), so it fits in usize
    let needed = needed as usize;
    Ok(BitBuffer::from_raw_parts(bytes[..needed].to_vec(), bit_count))
}
