//! Prefix code tables derived from a Huffman tree.

use crate::frequency::{ALPHABET_SIZE, FrequencyTable};
use crate::tree::{HuffmanTree, NodeKind};
use oxihuff_core::bitstream::BitBuffer;
use oxihuff_core::error::{OxiHuffError, Result};
use oxihuff_core::traits::SymbolEncoder;
use std::fmt;
use tracing::debug;

/// A single prefix code: the low `len` bits of `value`, read MSB first.
///
/// Code lengths are bounded by the tree depth. With 32-bit frequencies the
/// deepest possible tree is well under 64 levels (a Fibonacci-weighted
/// alphabet overflows `u32` past depth ~46), so a `u64` always holds a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Code {
    /// Code bits, right-aligned.
    pub value: u64,
    /// Number of bits.
    pub len: u8,
}

impl Code {
    /// The code extended by one bit.
    pub fn child(self, bit: bool) -> Self {
        Self {
            value: (self.value << 1) | bit as u64,
            len: self.len + 1,
        }
    }

    /// Bit at `index`, counted from the first emitted bit.
    pub fn bit(self, index: u8) -> Option<bool> {
        (index < self.len).then(|| (self.value >> (self.len - 1 - index)) & 1 == 1)
    }

    /// The code as a bit buffer.
    pub fn to_bits(self) -> BitBuffer {
        let mut bits = BitBuffer::with_capacity(self.len as u64);
        bits.push_bits(self.value, self.len);
        bits
    }

    /// Check whether this code is a prefix of (or equal to) `other`.
    pub fn is_prefix_of(self, other: Code) -> bool {
        self.len <= other.len
            && other
                .value
                .checked_shr(u32::from(other.len - self.len))
                .unwrap_or(0)
                == self.value
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.len {
            let bit = (self.value >> (self.len - 1 - i)) & 1;
            write!(f, "{}", bit)?;
        }
        Ok(())
    }
}

/// Mapping from every symbol of a tree to its code.
///
/// Built once per tree and used read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: [Option<Code>; ALPHABET_SIZE],
    len: usize,
}

impl Default for CodeTable {
    fn default() -> Self {
        Self {
            codes: [None; ALPHABET_SIZE],
            len: 0,
        }
    }
}

impl CodeTable {
    /// Derive codes by walking every root-to-leaf path.
    ///
    /// A left step appends 0 and a right step appends 1. A tree consisting of a
    /// single leaf assigns that symbol the one-bit code `0`. An empty tree
    /// yields an empty table.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut table = Self::default();
        let Some(root) = tree.root() else {
            return table;
        };

        if let NodeKind::Leaf { symbol } = tree.node(root).kind {
            table.insert(symbol, Code { value: 0, len: 1 });
            return table;
        }

        let mut stack = vec![(root, Code::default())];
        while let Some((id, code)) = stack.pop() {
            match tree.node(id).kind {
                NodeKind::Leaf { symbol } => table.insert(symbol, code),
                NodeKind::Internal { left, right } => {
                    stack.push((right, code.child(true)));
                    stack.push((left, code.child(false)));
                }
            }
        }

        debug!(
            symbols = table.len,
            max_length = table.max_length(),
            "derived code table"
        );
        table
    }

    fn insert(&mut self, symbol: u8, code: Code) {
        if self.codes[symbol as usize].replace(code).is_none() {
            self.len += 1;
        }
    }

    /// Code for `symbol`, if the symbol is in the alphabet.
    pub fn get(&self, symbol: u8) -> Option<Code> {
        self.codes[symbol as usize]
    }

    /// Iterate over `(symbol, code)` in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, Code)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(symbol, code)| code.map(|c| (symbol as u8, c)))
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check whether the table has no codes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Length of the longest code, 0 for an empty table.
    pub fn max_length(&self) -> u8 {
        self.iter().map(|(_, c)| c.len).max().unwrap_or(0)
    }

    /// Exact number of bits needed to encode an input with these frequencies.
    ///
    /// Symbols with no code contribute nothing.
    pub fn encoded_bit_len(&self, frequencies: &FrequencyTable) -> u64 {
        frequencies
            .iter()
            .filter_map(|(symbol, count)| self.get(symbol).map(|c| c.len as u64 * count as u64))
            .sum()
    }

    /// Frequency-weighted average code length in bits per symbol.
    pub fn average_code_length(&self, frequencies: &FrequencyTable) -> f64 {
        let total = frequencies.total();
        if total == 0 {
            return 0.0;
        }
        self.encoded_bit_len(frequencies) as f64 / total as f64
    }
}

impl SymbolEncoder for CodeTable {
    /// Concatenate the code of every symbol of `data`, in order.
    fn encode(&self, data: &[u8]) -> Result<BitBuffer> {
        let bit_len = self.encoded_len(data)?;
        let mut bits = BitBuffer::with_capacity(bit_len);
        for &symbol in data {
            // encoded_len has already checked every symbol
            if let Some(code) = self.get(symbol) {
                bits.push_bits(code.value, code.len);
            }
        }
        Ok(bits)
    }

    fn encoded_len(&self, data: &[u8]) -> Result<u64> {
        if self.is_empty() {
            return Err(OxiHuffError::EmptyAlphabet);
        }
        data.iter()
            .enumerate()
            .try_fold(0u64, |total, (position, &symbol)| {
                self.get(symbol)
                    .map(|c| total + c.len as u64)
                    .ok_or_else(|| OxiHuffError::unknown_symbol(symbol, position))
            })
    }
}
