//! Pure Rust deterministic Huffman coding.
//!
//! Builds an optimal prefix code from the symbol frequencies of an input,
//! encodes the input into an exact-length bitstream, and stores the frequency
//! table next to the packed payload so the block decodes on its own.
//!
//! # Features
//!
//! - Deterministic tree construction: equal weights are broken by insertion
//!   order, so the same frequencies always give the same codes
//! - Exact bit count in the block header, no reliance on padding
//! - Single-symbol inputs get a one-bit code
//! - Explicit errors for unknown symbols, truncated codes and corrupt blocks
//! - Optional parallel batch compression (`parallel` feature)
//!
//! # Example
//!
//! ```
//! use oxihuff_huffman::{CompressedBlock, compress, decompress};
//!
//! let block = compress(b"appm").unwrap();
//! assert_eq!(block.bit_count(), 6);
//!
//! let bytes = block.to_bytes();
//! let parsed = CompressedBlock::from_bytes(&bytes).unwrap();
//! assert_eq!(decompress(&parsed).unwrap(), b"appm");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod block;
pub mod codec;
pub mod codes;
pub mod config;
pub mod frequency;
pub mod tree;

pub use block::CompressedBlock;
pub use codec::{HuffmanCompressor, HuffmanDecompressor, compress, compress_with, decompress};
pub use codes::{Code, CodeTable};
pub use config::{EmptyInputPolicy, HuffmanConfig};
pub use frequency::{ALPHABET_SIZE, FrequencyTable};
pub use tree::{HuffmanTree, Node, NodeId, NodeKind};

use oxihuff_core::error::Result;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Compress many independent inputs, one block per input.
///
/// Each input gets its own tree; results are returned in input order.
#[cfg(not(feature = "parallel"))]
pub fn compress_batch<T>(inputs: &[T], config: &HuffmanConfig) -> Vec<Result<CompressedBlock>>
where
    T: AsRef<[u8]> + Sync,
{
    inputs
        .iter()
        .map(|input| compress_with(input.as_ref(), config))
        .collect()
}

/// Compress many independent inputs in parallel, one block per input.
///
/// Each input gets its own tree; results are returned in input order.
#[cfg(feature = "parallel")]
pub fn compress_batch<T>(inputs: &[T], config: &HuffmanConfig) -> Vec<Result<CompressedBlock>>
where
    T: AsRef<[u8]> + Sync,
{
    inputs
        .par_iter()
        .map(|input| compress_with(input.as_ref(), config))
        .collect()
}
