//! The compression pipeline.
//!
//! Compression runs frequency count, tree build, code derivation, encoding and
//! packing. Decompression rebuilds the same tree from the stored frequencies,
//! unpacks exactly `bit_count` bits and walks the tree.

use crate::block::CompressedBlock;
use crate::codes::CodeTable;
use crate::config::HuffmanConfig;
use crate::frequency::FrequencyTable;
use crate::tree::HuffmanTree;
use oxihuff_core::error::{OxiHuffError, Result};
use oxihuff_core::pack::{pack_owned, unpack};
use oxihuff_core::traits::{Compressor, Decompressor, SymbolDecoder, SymbolEncoder};
use tracing::{debug, warn};

/// Compress `data` with the default configuration.
pub fn compress(data: &[u8]) -> Result<CompressedBlock> {
    compress_with(data, &HuffmanConfig::DEFAULT)
}

/// Compress `data` with an explicit configuration.
///
/// # Errors
///
/// - [`OxiHuffError::EmptyAlphabet`] for empty input under
///   [`EmptyInputPolicy::Reject`](crate::EmptyInputPolicy::Reject)
/// - [`OxiHuffError::FrequencyOverflow`] if a symbol count exceeds `u32::MAX`
/// - [`OxiHuffError::FormatError`] if `verify` is set and the block does not
///   decode back to `data`
pub fn compress_with(data: &[u8], config: &HuffmanConfig) -> Result<CompressedBlock> {
    if data.is_empty() {
        if config.allows_empty() {
            debug!("empty input, emitting empty block");
            return Ok(CompressedBlock::empty());
        }
        return Err(OxiHuffError::EmptyAlphabet);
    }

    let frequencies = FrequencyTable::count(data)?;
    let tree = HuffmanTree::build(&frequencies);
    let codes = CodeTable::from_tree(&tree);
    let bits = codes.encode(data)?;
    let block = CompressedBlock::new(frequencies, pack_owned(bits))?;

    debug!(
        input = data.len(),
        leaves = block.leaf_count(),
        bits = block.bit_count(),
        output = block.serialized_len(),
        "compressed block"
    );

    if config.verify {
        let restored = decompress(&block)?;
        if restored != data {
            warn!("verification failed: decoded block differs from input");
            return Err(OxiHuffError::format_error(
                "verification failed: decoded block differs from input",
            ));
        }
    }

    Ok(block)
}

/// Restore the original bytes of a block.
///
/// # Errors
///
/// Returns a format error if the stored bit count disagrees with the
/// frequencies, and [`OxiHuffError::TruncatedCode`] if the payload ends
/// mid-code.
pub fn decompress(block: &CompressedBlock) -> Result<Vec<u8>> {
    if block.is_empty() {
        return Ok(Vec::new());
    }

    let tree = HuffmanTree::build(block.frequencies());
    let codes = CodeTable::from_tree(&tree);
    let expected_bits = codes.encoded_bit_len(block.frequencies());
    if block.bit_count() != expected_bits {
        return Err(OxiHuffError::format_error(format!(
            "bit count {} does not match the {} bits implied by the frequencies",
            block.bit_count(),
            expected_bits
        )));
    }

    let bits = unpack(block.payload(), block.bit_count())?;
    let output = tree.decode(&bits)?;

    if output.len() as u64 != block.original_len() {
        return Err(OxiHuffError::format_error(format!(
            "decoded {} symbols, frequencies promise {}",
            output.len(),
            block.original_len()
        )));
    }

    debug!(bits = block.bit_count(), output = output.len(), "decompressed block");
    Ok(output)
}

/// Block compressor producing serialized [`CompressedBlock`] bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct HuffmanCompressor {
    config: HuffmanConfig,
}

impl HuffmanCompressor {
    /// Create a compressor with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a compressor with an explicit configuration.
    pub fn with_config(config: HuffmanConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &HuffmanConfig {
        &self.config
    }
}

impl Compressor for HuffmanCompressor {
    fn compress_all(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        Ok(compress_with(input, &self.config)?.to_bytes())
    }
}

/// Block decompressor accepting serialized [`CompressedBlock`] bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct HuffmanDecompressor;

impl HuffmanDecompressor {
    /// Create a decompressor.
    pub fn new() -> Self {
        Self
    }
}

impl Decompressor for HuffmanDecompressor {
    fn decompress_all(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        decompress(&CompressedBlock::from_bytes(input)?)
    }
}
