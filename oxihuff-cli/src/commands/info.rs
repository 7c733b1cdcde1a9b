//! Info command implementation.

use crate::utils::{CmdResult, format_size, read_block};
use std::path::Path;

pub fn cmd_info(file: &Path) -> CmdResult {
    let block = read_block(file)?;
    let original = block.original_len();
    let stored = block.serialized_len() as u64;

    println!("Block Information");
    println!("=================");
    println!("File: {}", file.display());
    println!("Size: {} ({} bytes)", format_size(stored), stored);
    println!();
    println!("Header:");
    println!("  Distinct symbols: {}", block.leaf_count());
    println!("  Bit count: {}", block.bit_count());
    println!(
        "  Payload: {} bytes ({} pad bits)",
        block.payload().len(),
        block.packed().padding_bits()
    );
    println!("  Original size: {} ({} bytes)", format_size(original), original);

    if original > 0 {
        println!(
            "  Average code length: {:.3} bits/symbol",
            block.bit_count() as f64 / original as f64
        );
        println!(
            "  Entropy: {:.3} bits/symbol",
            block.frequencies().entropy()
        );
        println!(
            "  Compression ratio: {:.1}%",
            (1.0 - stored as f64 / original as f64) * 100.0
        );
    }

    Ok(())
}
