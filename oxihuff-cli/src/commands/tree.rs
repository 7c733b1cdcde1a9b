//! Tree command implementation.

use crate::utils::{CmdResult, load_frequencies};
use oxihuff_huffman::HuffmanTree;
use std::path::Path;

pub fn cmd_tree(file: &Path, raw: bool) -> CmdResult {
    let frequencies = load_frequencies(file, raw)?;
    let tree = HuffmanTree::build(&frequencies);

    println!("Huffman tree: {}", file.display());
    println!(
        "  {} leaves, {} nodes, depth {}",
        tree.leaf_count(),
        tree.node_count(),
        tree.depth()
    );
    println!();
    print!("{}", tree.render());
    Ok(())
}
