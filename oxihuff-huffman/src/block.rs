//! Self-describing compressed blocks and their byte layout.
//!
//! ```text
//! +-------------+--------------------------------+--------------+---------+
//! | leaf count  | leaf_count x (symbol, freq)    | bit count    | payload |
//! | u32 LE      | u8 + u32 LE, ascending symbol  | u64 LE       | bytes   |
//! +-------------+--------------------------------+--------------+---------+
//! ```
//!
//! The payload holds `ceil(bit_count / 8)` bytes, MSB first, with zero pad
//! bits. The frequency table is enough to rebuild the exact tree used for
//! encoding, so a block can be decoded with no other context.

use crate::frequency::{ALPHABET_SIZE, FrequencyTable};
use oxihuff_core::error::{OxiHuffError, Result};
use oxihuff_core::pack::{PackedBits, packed_len};
use std::io::{self, Read, Write};

/// Size of the leaf count field.
const LEAF_COUNT_SIZE: usize = 4;
/// Size of one `(symbol, frequency)` entry.
const LEAF_ENTRY_SIZE: usize = 5;
/// Size of the bit count field.
const BIT_COUNT_SIZE: usize = 8;

/// A compressed block: frequencies, exact bit length, and packed payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedBlock {
    frequencies: FrequencyTable,
    bit_count: u64,
    payload: Vec<u8>,
}

impl CompressedBlock {
    /// Assemble a block, checking that its parts are consistent.
    ///
    /// # Errors
    ///
    /// Returns a format error if the payload length does not match the bit
    /// count, or if an empty alphabet comes with a non-zero bit count.
    pub fn new(frequencies: FrequencyTable, packed: PackedBits) -> Result<Self> {
        let expected = packed_len(packed.bit_count);
        if packed.bytes.len() as u64 != expected {
            return Err(OxiHuffError::format_error(format!(
                "payload has {} bytes but {} bits need {}",
                packed.bytes.len(),
                packed.bit_count,
                expected
            )));
        }
        if frequencies.is_empty() && packed.bit_count != 0 {
            return Err(OxiHuffError::format_error(
                "empty alphabet with non-empty payload",
            ));
        }
        Ok(Self {
            frequencies,
            bit_count: packed.bit_count,
            payload: packed.bytes,
        })
    }

    /// The block for zero bytes of input.
    pub fn empty() -> Self {
        Self {
            frequencies: FrequencyTable::new(),
            bit_count: 0,
            payload: Vec::new(),
        }
    }

    /// Frequency table the code was built from.
    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    /// Number of meaningful payload bits.
    pub fn bit_count(&self) -> u64 {
        self.bit_count
    }

    /// Packed payload bytes.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Number of distinct symbols.
    pub fn leaf_count(&self) -> usize {
        self.frequencies.len()
    }

    /// Number of bytes the original input had.
    pub fn original_len(&self) -> u64 {
        self.frequencies.total()
    }

    /// Check whether this block encodes zero bytes.
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// The payload as a [`PackedBits`] view.
    pub fn packed(&self) -> PackedBits {
        PackedBits {
            bytes: self.payload.clone(),
            bit_count: self.bit_count,
        }
    }

    /// Size of the serialized block in bytes.
    pub fn serialized_len(&self) -> usize {
        LEAF_COUNT_SIZE
            + self.frequencies.len() * LEAF_ENTRY_SIZE
            + BIT_COUNT_SIZE
            + self.payload.len()
    }

    /// Serialized size divided by `original_len`, or 0.0 for empty input.
    pub fn compression_ratio(&self, original_len: usize) -> f64 {
        if original_len == 0 {
            return 0.0;
        }
        self.serialized_len() as f64 / original_len as f64
    }

    /// Serialize the block.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut output = Vec::with_capacity(self.serialized_len());
        output.extend_from_slice(&(self.frequencies.len() as u32).to_le_bytes());
        for (symbol, count) in self.frequencies.iter() {
            output.push(symbol);
            output.extend_from_slice(&count.to_le_bytes());
        }
        output.extend_from_slice(&self.bit_count.to_le_bytes());
        output.extend_from_slice(&self.payload);
        output
    }

    /// Serialize the block to a writer.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(&self.to_bytes())?;
        Ok(())
    }

    /// Read one block from a reader, leaving any following bytes unread.
    ///
    /// # Errors
    ///
    /// Returns a format error if the input ends early, lists more than 256
    /// symbols, lists symbols out of order, or records a zero frequency.
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        let leaf_count = u32::from_le_bytes(read_array(reader, "leaf count")?) as usize;
        if leaf_count > ALPHABET_SIZE {
            return Err(OxiHuffError::format_error(format!(
                "leaf count {} exceeds alphabet size {}",
                leaf_count, ALPHABET_SIZE
            )));
        }

        let mut pairs = Vec::with_capacity(leaf_count);
        let mut previous: Option<u8> = None;
        for _ in 0..leaf_count {
            let [symbol, c0, c1, c2, c3] = read_array::<_, LEAF_ENTRY_SIZE>(reader, "leaf entry")?;
            if previous.is_some_and(|p| p >= symbol) {
                return Err(OxiHuffError::format_error(format!(
                    "leaf symbols out of order at {:#04x}",
                    symbol
                )));
            }
            previous = Some(symbol);
            pairs.push((symbol, u32::from_le_bytes([c0, c1, c2, c3])));
        }
        let frequencies = FrequencyTable::from_counts(pairs)?;

        let bit_count = u64::from_le_bytes(read_array(reader, "bit count")?);
        let payload_len = packed_len(bit_count);

        let mut payload = Vec::new();
        reader.by_ref().take(payload_len).read_to_end(&mut payload)?;
        if payload.len() as u64 != payload_len {
            return Err(OxiHuffError::format_error(format!(
                "payload truncated: expected {} bytes, found {}",
                payload_len,
                payload.len()
            )));
        }

        Self::new(
            frequencies,
            PackedBits {
                bytes: payload,
                bit_count,
            },
        )
    }

    /// Parse a block that occupies all of `data`.
    ///
    /// # Errors
    ///
    /// Fails like [`read_from`](Self::read_from), and also on trailing bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut cursor = data;
        let block = Self::read_from(&mut cursor)?;
        if !cursor.is_empty() {
            return Err(OxiHuffError::format_error(format!(
                "{} trailing bytes after block",
                cursor.len()
            )));
        }
        Ok(block)
    }
}

fn read_array<R: Read, const N: usize>(reader: &mut R, what: &str) -> Result<[u8; N]> {
    let mut buf = [0u8; N];
    reader.read_exact(&mut buf).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => {
            OxiHuffError::format_error(format!("unexpected end of block reading {}", what))
        }
        _ => OxiHuffError::Io(e),
    })?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn appm_block() -> CompressedBlock {
        CompressedBlock::new(
            FrequencyTable::count(b"appm").unwrap(),
            PackedBits {
                bytes: vec![0x8C],
                bit_count: 6,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_appm_layout() {
        let bytes = appm_block().to_bytes();
        let expected: Vec<u8> = vec![
            3, 0, 0, 0, // leaf count
            b'a', 1, 0, 0, 0, //
            b'm', 1, 0, 0, 0, //
            b'p', 2, 0, 0, 0, //
            6, 0, 0, 0, 0, 0, 0, 0, // bit count
            0x8C,
        ];
        assert_eq!(bytes, expected);
        assert_eq!(appm_block().serialized_len(), bytes.len());
    }

    #[test]
    fn test_empty_block_layout() {
        let block = CompressedBlock::empty();
        assert!(block.is_empty());
        assert_eq!(block.to_bytes(), vec![0u8; 12]);
        assert_eq!(CompressedBlock::from_bytes(&[0u8; 12]).unwrap(), block);
        assert_eq!(block.compression_ratio(0), 0.0);
    }

    #[test]
    fn test_parse_roundtrip() {
        let block = appm_block();
        assert_eq!(CompressedBlock::from_bytes(&block.to_bytes()).unwrap(), block);
        assert_eq!(block.original_len(), 4);
        assert_eq!(block.leaf_count(), 3);
    }

    #[test]
    fn test_write_and_read_stream() {
        let mut stream = Vec::new();
        appm_block().write_to(&mut stream).unwrap();
        CompressedBlock::empty().write_to(&mut stream).unwrap();

        let mut reader = stream.as_slice();
        assert_eq!(CompressedBlock::read_from(&mut reader).unwrap(), appm_block());
        assert_eq!(
            CompressedBlock::read_from(&mut reader).unwrap(),
            CompressedBlock::empty()
        );
        assert!(reader.is_empty());
    }

    #[test]
    fn test_new_rejects_inconsistent_parts() {
        let freq = FrequencyTable::count(b"ab").unwrap();
        let short = PackedBits {
            bytes: vec![],
            bit_count: 2,
        };
        assert!(CompressedBlock::new(freq, short).is_err());

        let orphan = PackedBits {
            bytes: vec![0],
            bit_count: 1,
        };
        assert!(CompressedBlock::new(FrequencyTable::new(), orphan).is_err());
    }

    #[test]
    fn test_truncated_inputs() {
        let bytes = appm_block().to_bytes();
        for cut in 0..bytes.len() {
            let err = CompressedBlock::from_bytes(&bytes[..cut]).unwrap_err();
            assert!(
                matches!(err, OxiHuffError::FormatError { .. }),
                "cut at {} gave {:?}",
                cut,
                err
            );
        }
    }

    #[test]
    fn test_trailing_bytes_rejected() {
        let mut bytes = appm_block().to_bytes();
        bytes.push(0);
        assert!(matches!(
            CompressedBlock::from_bytes(&bytes),
            Err(OxiHuffError::FormatError { .. })
        ));
    }

    #[test]
    fn test_bad_headers_rejected() {
        let mut too_many = vec![0u8; 12];
        too_many[..4].copy_from_slice(&257u32.to_le_bytes());
        assert!(CompressedBlock::from_bytes(&too_many).is_err());

        // 'b' listed before 'a'
        let unordered = [
            2, 0, 0, 0, b'b', 1, 0, 0, 0, b'a', 1, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0x40,
        ];
        assert!(CompressedBlock::from_bytes(&unordered).is_err());

        let zero_freq = [1, 0, 0, 0, b'a', 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        assert!(CompressedBlock::from_bytes(&zero_freq).is_err());
    }

    #[test]
    fn test_compression_ratio() {
        let block = appm_block();
        let ratio = block.compression_ratio(4);
        assert!((ratio - block.serialized_len() as f64 / 4.0).abs() < 1e-12);
    }
}
