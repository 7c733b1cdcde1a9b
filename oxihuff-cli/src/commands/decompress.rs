//! Decompress command implementation.

use crate::utils::{CmdResult, format_size, read_block, uncompressed_path};
use oxihuff_huffman::decompress;
use std::fs;
use std::path::Path;
use tracing::info;

pub fn cmd_decompress(file: &Path, output: Option<&Path>, verbose: bool) -> CmdResult {
    let block = read_block(file)?;
    let restored = decompress(&block)?;

    let target = output.map_or_else(|| uncompressed_path(file), Path::to_path_buf);
    fs::write(&target, &restored)?;

    info!(
        input = %file.display(),
        output = %target.display(),
        restored = restored.len(),
        "wrote decompressed data"
    );

    if verbose {
        println!(
            "  {} -> {} ({} -> {})",
            file.display(),
            target.display(),
            format_size(block.serialized_len() as u64),
            format_size(restored.len() as u64)
        );
    }
    println!("Decompressed {} to {}", file.display(), target.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxihuff_huffman::compress;

    #[test]
    fn test_decompress_roundtrip() {
        let dir = std::env::temp_dir().join(format!("oxihuff-decompress-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let input = dir.join("words_compressed.txt");
        fs::write(&input, compress(b"mississippi").unwrap().to_bytes()).unwrap();

        cmd_decompress(&input, None, false).unwrap();
        let restored = fs::read(dir.join("words_compressed_uncompressed.txt")).unwrap();
        assert_eq!(restored, b"mississippi");

        let explicit = dir.join("explicit.out");
        cmd_decompress(&input, Some(&explicit), true).unwrap();
        assert_eq!(fs::read(&explicit).unwrap(), b"mississippi");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_decompress_rejects_garbage() {
        let dir = std::env::temp_dir().join(format!("oxihuff-garbage-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let input = dir.join("garbage.bin");
        fs::write(&input, [1u8, 0, 0]).unwrap();

        assert!(cmd_decompress(&input, None, false).is_err());
        assert!(!dir.join("garbage_uncompressed.bin").exists());

        fs::remove_dir_all(&dir).unwrap();
    }
}
