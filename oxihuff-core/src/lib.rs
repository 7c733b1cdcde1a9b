//! # OxiHuff Core
//!
//! Core components for the OxiHuff compression library.
//!
//! This crate provides the building blocks shared by the codec and its
//! front ends:
//!
//! - [`bitstream`]: MSB-first bit buffers and cursors for prefix codes
//! - [`pack`]: Byte packing with an explicit logical bit length
//! - [`traits`]: Symbol-level and block-level codec traits
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L3: Front ends                                          │
//! │     CLI, async adapters, batch API                      │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Codec                                               │
//! │     Frequency table, Huffman tree, code table, blocks   │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: Bits (this crate)                                   │
//! │     BitBuffer/BitCursor, pack/unpack, errors            │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxihuff_core::bitstream::BitBuffer;
//! use oxihuff_core::pack::{pack, unpack};
//!
//! let mut bits = BitBuffer::new();
//! bits.push_bits(0b100011, 6);
//!
//! let packed = pack(&bits);
//! assert_eq!(packed.bytes, vec![0x8C]);
//! assert_eq!(packed.bit_count, 6);
//!
//! let restored = unpack(&packed.bytes, packed.bit_count).unwrap();
//! assert_eq!(restored, bits);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

#[cfg(feature = "async-io")]
pub mod async_io;
pub mod bitstream;
pub mod error;
pub mod pack;
pub mod traits;

// Re-exports for convenience
pub use bitstream::{BitBuffer, BitCursor};
pub use error::{OxiHuffError, Result};
pub use pack::{PackedBits, pack, unpack};
pub use traits::{Compressor, Decompressor, SymbolDecoder, SymbolEncoder};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bitstream::{BitBuffer, BitCursor};
    pub use crate::error::{OxiHuffError, Result};
    pub use crate::pack::{PackedBits, pack, unpack};
    pub use crate::traits::{Compressor, Decompressor, SymbolDecoder, SymbolEncoder};
}
