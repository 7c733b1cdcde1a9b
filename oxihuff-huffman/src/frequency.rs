//! Symbol frequency counting.

use oxihuff_core::error::{OxiHuffError, Result};
use std::collections::BTreeMap;

/// Number of distinct 8-bit symbols.
pub const ALPHABET_SIZE: usize = 256;

/// Occurrence counts for the symbols of an input.
///
/// Only symbols that occur are stored, and every stored count is at least one.
/// Iteration is always in ascending symbol order, which is also the insertion
/// order used by the tree builder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<u8, u32>,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every symbol of `data` in a single pass.
    ///
    /// Empty input produces an empty table.
    ///
    /// # Errors
    ///
    /// Returns [`OxiHuffError::FrequencyOverflow`] if a symbol occurs more
    /// than `u32::MAX` times.
    pub fn count(data: &[u8]) -> Result<Self> {
        let mut raw = [0u64; ALPHABET_SIZE];
        for &byte in data {
            raw[byte as usize] += 1;
        }

        let mut counts = BTreeMap::new();
        for (symbol, &count) in raw.iter().enumerate() {
            if count == 0 {
                continue;
            }
            let symbol = symbol as u8;
            let count =
                u32::try_from(count).map_err(|_| OxiHuffError::frequency_overflow(symbol))?;
            counts.insert(symbol, count);
        }

        Ok(Self { counts })
    }

    /// Build a table from explicit `(symbol, count)` pairs.
    ///
    /// # Errors
    ///
    /// Returns a format error for a zero count or a repeated symbol.
    pub fn from_counts<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u8, u32)>,
    {
        let mut counts = BTreeMap::new();
        for (symbol, count) in pairs {
            if count == 0 {
                return Err(OxiHuffError::format_error(format!(
                    "symbol {:#04x} has zero frequency",
                    symbol
                )));
            }
            if counts.insert(symbol, count).is_some() {
                return Err(OxiHuffError::format_error(format!(
                    "symbol {:#04x} listed more than once",
                    symbol
                )));
            }
        }
        Ok(Self { counts })
    }

    /// Count for `symbol`, if it occurs.
    pub fn get(&self, symbol: u8) -> Option<u32> {
        self.counts.get(&symbol).copied()
    }

    /// Check whether `symbol` occurs.
    pub fn contains(&self, symbol: u8) -> bool {
        self.counts.contains_key(&symbol)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check whether no symbol occurs.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of symbol occurrences.
    pub fn total(&self) -> u64 {
        self.counts.values().map(|&c| c as u64).sum()
    }

    /// Iterate over `(symbol, count)` in ascending symbol order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (u8, u32)> + '_ {
        self.counts.iter().map(|(&symbol, &count)| (symbol, count))
    }

    /// Shannon entropy in bits per symbol.
    ///
    /// This is the lower bound on the average code length of any prefix code
    /// for this distribution. Returns 0.0 for an empty table.
    pub fn entropy(&self) -> f64 {
        let total = self.total() as f64;
        if total == 0.0 {
            return 0.0;
        }
        self.counts
            .values()
            .map(|&c| {
                let p = c as f64 / total;
                -p * p.log2()
            })
            .sum()
    }
}
