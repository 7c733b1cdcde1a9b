//! Bit-level buffers for prefix codes.
//!
//! [`BitBuffer`] is an ordered, growable sequence of bits with a logical
//! length that is tracked separately from the number of bytes backing it.
//! [`BitCursor`] walks a buffer one bit at a time for decoding.
//!
//! # Bit Ordering
//!
//! Bits are stored MSB-first: the first bit pushed occupies the most
//! significant position of the first byte. Unused low bits of the final byte
//! are always zero.
//!
//! # Example
//!
//! ```
//! use oxihuff_core::bitstream::BitBuffer;
//!
//! let mut bits = BitBuffer::new();
//! bits.push_bits(0b101, 3);
//! bits.push_bit(true);
//!
//! assert_eq!(bits.len(), 4);
//! assert_eq!(bits.as_bytes(), &[0b1011_0000]);
//! assert_eq!(bits.to_string(), "1011");
//! ```

use std::fmt;

/// An ordered sequence of bits, packed MSB-first into bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BitBuffer {
    /// Backing storage. Pad bits in the final byte are zero.
    bytes: Vec<u8>,
    /// Logical length in bits.
    len: u64,
}

impl BitBuffer {
    /// Create an empty bit buffer.
    pub fn new() -> Self {
        Self {
            bytes: Vec::new(),
            len: 0,
        }
    }

    /// Create an empty bit buffer with room for `bits` bits.
    pub fn with_capacity(bits: u64) -> Self {
        Self {
            bytes: Vec::with_capacity(bits.div_ceil(8) as usize),
            len: 0,
        }
    }

    /// Build a buffer from raw parts.
    ///
    /// The caller guarantees `bytes.len() == ceil(len / 8)`; pad bits are
    /// cleared here.
    pub(crate) fn from_raw_parts(mut bytes: Vec<u8>, len: u64) -> Self {
        debug_assert_eq!(bytes.len() as u64, len.div_ceil(8));
        let used = (len % 8) as u32;
        if used != 0 {
            if let Some(last) = bytes.last_mut() {
                *last &= !(0xFFu8 >> used);
            }
        }
        Self { bytes, len }
    }

    /// Number of bits in the buffer.
    #[inline]
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Check whether the buffer holds no bits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of bytes backing the buffer, `ceil(len / 8)`.
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    /// Backing bytes, MSB-first, zero-padded.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the buffer, returning its bytes and logical bit length.
    pub fn into_parts(self) -> (Vec<u8>, u64) {
        (self.bytes, self.len)
    }

    /// Append a single bit.
    #[inline]
    pub fn push_bit(&mut self, bit: bool) {
        let offset = (self.len % 8) as u32;
        if offset == 0 {
            self.bytes.push(0);
        }
        if bit {
            if let Some(last) = self.bytes.last_mut() {
                *last |= 0x80 >> offset;
            }
        }
        self.len += 1;
    }

    /// Append the low `count` bits of `value`, most significant first.
    ///
    /// # Arguments
    ///
    /// * `value` - The bits to write, right-aligned
    /// * `count` - Number of bits to write (0-64)
    pub fn push_bits(&mut self, value: u64, count: u8) {
        debug_assert!(count <= 64, "Cannot push more than 64 bits at once");

        for shift in (0..count).rev() {
            self.push_bit((value >> shift) & 1 == 1);
        }
    }

    /// Append every bit of another buffer.
    pub fn extend_from(&mut self, other: &BitBuffer) {
        if self.len % 8 == 0 {
            // Byte-aligned: the other buffer's pad bits are already zero.
            self.bytes.extend_from_slice(&other.bytes);
            self.len += other.len;
            return;
        }
        for bit in other.iter() {
            self.push_bit(bit);
        }
    }

    /// Get the bit at `index`, or `None` past the logical end.
    #[inline]
    pub fn get(&self, index: u64) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        let byte = self.bytes[(index / 8) as usize];
        Some(byte & (0x80 >> (index % 8)) != 0)
    }

    /// Iterate over the bits in order.
    pub fn iter(&self) -> BitCursor<'_> {
        BitCursor::new(self)
    }

    /// Create a cursor positioned at the first bit.
    pub fn cursor(&self) -> BitCursor<'_> {
        BitCursor::new(self)
    }
}

impl fmt::Display for BitBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromIterator<bool> for BitBuffer {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut buffer = BitBuffer::new();
        for bit in iter {
            buffer.push_bit(bit);
        }
        buffer
    }
}

impl<'a> IntoIterator for &'a BitBuffer {
    type Item = bool;
    type IntoIter = BitCursor<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A read position within a [`BitBuffer`].
#[derive(Debug, Clone)]
pub struct BitCursor<'a> {
    buffer: &'a BitBuffer,
    position: u64,
}

impl<'a> BitCursor<'a> {
    /// Create a cursor at the start of `buffer`.
    pub fn new(buffer: &'a BitBuffer) -> Self {
        Self {
            buffer,
            position: 0,
        }
    }

    /// Read the next bit, or `None` once the logical length is exhausted.
    #[inline]
    pub fn read_bit(&mut self) -> Option<bool> {
        let bit = self.buffer.get(self.position)?;
        self.position += 1;
        Some(bit)
    }

    /// Number of bits consumed so far.
    #[inline]
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Number of bits left to read.
    #[inline]
    pub fn remaining(&self) -> u64 {
        self.buffer.len() - self.position
    }

    /// Check whether every bit has been consumed.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.buffer.len()
    }
}

impl Iterator for BitCursor<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        self.read_bit()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BitCursor<'_> {}
