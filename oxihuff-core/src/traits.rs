//! Core traits for prefix coding and block compression.
//!
//! The symbol-level traits separate the two halves of a prefix code: encoding
//! needs only a symbol → code mapping, while decoding needs the tree shape.
//! The block-level traits turn whole byte buffers into self-describing
//! compressed blocks and back.

use crate::bitstream::BitBuffer;
use crate::error::Result;

/// Maps a symbol sequence to a bit sequence.
pub trait SymbolEncoder {
    /// Encode all symbols, in order.
    ///
    /// # Errors
    ///
    /// Fails if any symbol has no code; implementations must never emit an
    /// empty code in its place.
    fn encode(&self, symbols: &[u8]) -> Result<BitBuffer>;

    /// Number of bits `encode` would produce, without producing them.
    fn encoded_len(&self, symbols: &[u8]) -> Result<u64>;
}

/// Maps a bit sequence back to a symbol sequence.
pub trait SymbolDecoder {
    /// Decode the full logical length of `bits`.
    ///
    /// # Errors
    ///
    /// Fails if the bits end in the middle of a code.
    fn decode(&self, bits: &BitBuffer) -> Result<Vec<u8>>;
}

/// A one-shot compressor producing a self-describing serialized block.
pub trait Compressor {
    /// Compress `input` into a serialized block.
    fn compress_all(&mut self, input: &[u8]) -> Result<Vec<u8>>;
}

/// The inverse of [`Compressor`].
pub trait Decompressor {
    /// Decompress a serialized block.
    fn decompress_all(&mut self, input: &[u8]) -> Result<Vec<u8>>;
}
