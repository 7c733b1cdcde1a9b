//! Encode command implementation.

use crate::utils::{CmdResult, display_symbol};
use dialoguer::Input;
use oxihuff_core::SymbolEncoder;
use oxihuff_huffman::{CodeTable, FrequencyTable, HuffmanTree};
use std::fs;
use std::path::Path;

/// Result of encoding one word.
#[derive(Debug)]
pub struct EncodedWord {
    /// Per-symbol codes, in word order.
    pub symbols: Vec<(u8, String)>,
    /// The whole word as a bit string.
    pub bits: String,
}

/// Encode `word` with codes trained on `training`.
pub fn encode_word(word: &[u8], training: &[u8]) -> CmdResult<EncodedWord> {
    let frequencies = FrequencyTable::count(training)?;
    let codes = CodeTable::from_tree(&HuffmanTree::build(&frequencies));
    let bits = codes.encode(word)?;

    let symbols = word
        .iter()
        .filter_map(|&s| codes.get(s).map(|c| (s, c.to_string())))
        .collect();
    Ok(EncodedWord {
        symbols,
        bits: bits.to_string(),
    })
}

pub fn cmd_encode(word: Option<String>, corpus: Option<&Path>) -> CmdResult {
    let word = match word {
        Some(w) => w,
        None => Input::<String>::new()
            .with_prompt("Word to encode")
            .interact_text()?,
    };

    let training = match corpus {
        Some(path) => fs::read(path)?,
        None => word.as_bytes().to_vec(),
    };

    let encoded = encode_word(word.as_bytes(), &training)?;

    for (symbol, code) in &encoded.symbols {
        println!("  {:>6}  {}", display_symbol(*symbol), code);
    }
    println!();
    println!("{} ({} bits)", encoded.bits, encoded.bits.len());
    Ok(())
}
