//! Codes command implementation.

use crate::utils::{CmdResult, display_symbol, load_frequencies, print_code_table};
use oxihuff_huffman::{CodeTable, FrequencyTable, HuffmanTree};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// JSON output for one code table entry.
#[derive(Debug, Serialize, Deserialize)]
pub struct CodeEntryJson {
    /// Symbol value.
    pub symbol: u8,
    /// Printable form of the symbol.
    pub display: String,
    /// Occurrence count.
    pub frequency: u32,
    /// Code as a string of 0s and 1s.
    pub code: String,
    /// Code length in bits.
    pub bits: u8,
}

/// JSON output for a whole code table.
#[derive(Debug, Serialize, Deserialize)]
pub struct CodeTableJson {
    /// Source file.
    pub file: String,
    /// Number of distinct symbols.
    pub symbols: usize,
    /// Total occurrences.
    pub total: u64,
    /// Weighted average code length in bits.
    pub average_bits: f64,
    /// Shannon entropy in bits per symbol.
    pub entropy: f64,
    /// Codes in ascending symbol order.
    pub codes: Vec<CodeEntryJson>,
}

impl CodeTableJson {
    fn new(file: &Path, codes: &CodeTable, frequencies: &FrequencyTable) -> Self {
        Self {
            file: file.display().to_string(),
            symbols: codes.len(),
            total: frequencies.total(),
            average_bits: codes.average_code_length(frequencies),
            entropy: frequencies.entropy(),
            codes: codes
                .iter()
                .map(|(symbol, code)| CodeEntryJson {
                    symbol,
                    display: display_symbol(symbol),
                    frequency: frequencies.get(symbol).unwrap_or(0),
                    code: code.to_string(),
                    bits: code.len,
                })
                .collect(),
        }
    }
}

pub fn cmd_codes(file: &Path, raw: bool, json: bool) -> CmdResult {
    let frequencies = load_frequencies(file, raw)?;
    let codes = CodeTable::from_tree(&HuffmanTree::build(&frequencies));

    if json {
        let output = CodeTableJson::new(file, &codes, &frequencies);
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Code table: {}", file.display());
    println!();
    if codes.is_empty() {
        println!("(empty alphabet)");
        return Ok(());
    }
    print_code_table(&codes, &frequencies);
    Ok(())
}
