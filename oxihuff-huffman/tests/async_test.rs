//! Async block I/O over the Huffman codec.

#![cfg(feature = "async-io")]

use oxihuff_core::async_io::{AsyncCompressorWrapper, AsyncDecompressorWrapper};
use oxihuff_huffman::{CompressedBlock, HuffmanCompressor, HuffmanDecompressor};
use std::io::Cursor;

#[tokio::test]
async fn test_async_huffman_roundtrip() {
    let original = b"async readers feed the same synchronous codec".repeat(20);

    let mut compressor = AsyncCompressorWrapper::new(HuffmanCompressor::new());
    let mut compressed = Vec::new();
    let written = compressor
        .compress_async(&mut Cursor::new(original.clone()), &mut compressed)
        .await
        .unwrap();
    assert_eq!(written, compressed.len());

    let block = CompressedBlock::from_bytes(&compressed).unwrap();
    assert_eq!(block.original_len(), original.len() as u64);

    let mut decompressor = AsyncDecompressorWrapper::new(HuffmanDecompressor::new());
    let mut restored = Vec::new();
    decompressor
        .decompress_async(&mut Cursor::new(compressed), &mut restored)
        .await
        .unwrap();
    assert_eq!(restored, original);
}

#[tokio::test]
async fn test_async_rejects_corrupt_block() {
    let mut decompressor = AsyncDecompressorWrapper::new(HuffmanDecompressor::new());
    let mut restored = Vec::new();
    let result = decompressor
        .decompress_async(&mut Cursor::new(vec![5u8, 0, 0, 0]), &mut restored)
        .await;
    assert!(result.is_err());
    assert!(restored.is_empty());
}
