//! Huffman codec integration tests.

use oxihuff_core::{OxiHuffError, SymbolDecoder, SymbolEncoder, pack, unpack};
use oxihuff_huffman::{
    CodeTable, CompressedBlock, FrequencyTable, HuffmanCompressor, HuffmanConfig,
    HuffmanDecompressor, HuffmanTree, compress, compress_with, decompress,
};

/// Reproducible pseudo-random bytes.
fn lcg_bytes(seed: u64, len: usize, modulus: u8) -> Vec<u8> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            ((state >> 33) % modulus as u64) as u8
        })
        .collect()
}

fn roundtrip(data: &[u8]) {
    let block = compress(data).expect("compression failed");
    let parsed = CompressedBlock::from_bytes(&block.to_bytes()).expect("parse failed");
    assert_eq!(parsed, block);
    let restored = decompress(&parsed).expect("decompression failed");
    assert_eq!(restored, data);
}

#[test]
fn test_appm_scenario() {
    let freq = FrequencyTable::count(b"appm").unwrap();
    let tree = HuffmanTree::build(&freq);
    let codes = CodeTable::from_tree(&tree);

    let a = codes.get(b'a').unwrap();
    let p = codes.get(b'p').unwrap();
    let m = codes.get(b'm').unwrap();
    assert!(p.len < a.len);
    assert_eq!(a.len, m.len);

    let bits = codes.encode(b"appm").unwrap();
    assert_eq!(bits.len(), (a.len + 2 * p.len + m.len) as u64);

    let packed = pack(&bits);
    let unpacked = unpack(&packed.bytes, packed.bit_count).unwrap();
    assert_eq!(unpacked, bits);
    assert_eq!(tree.decode(&unpacked).unwrap(), b"appm");
}

#[test]
fn test_roundtrip_assorted() {
    roundtrip(b"a");
    roundtrip(b"ab");
    roundtrip(b"aaaa");
    roundtrip(b"mississippi");
    roundtrip(b"The quick brown fox jumps over the lazy dog.");
    roundtrip(&b"TOBEORNOTTOBEORTOBEORNOT".repeat(50));
    roundtrip(&[0u8; 1000]);
    roundtrip(&(0..=255u8).collect::<Vec<_>>());
    roundtrip(&(0..=255u8).cycle().take(10_000).collect::<Vec<_>>());
}

#[test]
fn test_roundtrip_random() {
    for seed in 0..20u64 {
        let modulus = [2u8, 3, 17, 64, 255][seed as usize % 5];
        let data = lcg_bytes(seed, 500 + seed as usize * 97, modulus);
        roundtrip(&data);
    }
}

#[test]
fn test_codes_are_prefix_free() {
    for seed in 1..30u64 {
        let data = lcg_bytes(seed * 7919, 2000, 200);
        let codes = CodeTable::from_tree(&HuffmanTree::build(
            &FrequencyTable::count(&data).unwrap(),
        ));
        let all: Vec<_> = codes.iter().collect();
        for (i, (sa, a)) in all.iter().enumerate() {
            for (sb, b) in &all[i + 1..] {
                assert!(
                    !a.is_prefix_of(*b) && !b.is_prefix_of(*a),
                    "codes for {} ({}) and {} ({}) overlap",
                    sa,
                    a,
                    sb,
                    b
                );
            }
        }
    }
}

#[test]
fn test_deterministic_codes() {
    let data = lcg_bytes(42, 4096, 50);
    let first = CodeTable::from_tree(&HuffmanTree::build(&FrequencyTable::count(&data).unwrap()));

    // Same frequencies, different input order
    let mut shuffled = data.clone();
    shuffled.reverse();
    let second = CodeTable::from_tree(&HuffmanTree::build(
        &FrequencyTable::count(&shuffled).unwrap(),
    ));
    assert_eq!(first, second);

    assert_eq!(compress(&data).unwrap(), compress(&data).unwrap());
}

#[test]
fn test_code_lengths_are_optimal_order() {
    // A more frequent symbol never gets a longer code
    let data = lcg_bytes(7, 8000, 40);
    let freq = FrequencyTable::count(&data).unwrap();
    let codes = CodeTable::from_tree(&HuffmanTree::build(&freq));
    for (sa, ca) in freq.iter() {
        for (sb, cb) in freq.iter() {
            if ca > cb {
                assert!(codes.get(sa).unwrap().len <= codes.get(sb).unwrap().len);
            }
        }
    }
    assert!(codes.average_code_length(&freq) >= freq.entropy());
    assert!(codes.average_code_length(&freq) < freq.entropy() + 1.0);
}

#[test]
fn test_fibonacci_weights_make_deep_codes() {
    // Fibonacci frequencies produce a maximally skewed tree
    let mut fib = vec![1u32, 1];
    while fib.len() < 47 {
        let next = fib[fib.len() - 1] + fib[fib.len() - 2];
        fib.push(next);
    }
    let freq = FrequencyTable::from_counts(fib.iter().enumerate().map(|(i, &c)| (i as u8, c)))
        .unwrap();
    let tree = HuffmanTree::build(&freq);
    let codes = CodeTable::from_tree(&tree);

    assert_eq!(tree.depth(), 46);
    assert_eq!(codes.max_length(), 46);

    let message: Vec<u8> = (0..47u8).rev().chain(0..47u8).collect();
    let bits = codes.encode(&message).unwrap();
    assert_eq!(tree.decode(&bits).unwrap(), message);
}

#[test]
fn test_unknown_symbol_is_reported() {
    let codes = CodeTable::from_tree(&HuffmanTree::build(&FrequencyTable::count(b"abc").unwrap()));
    match codes.encode(b"abcd") {
        Err(OxiHuffError::UnknownSymbol { symbol, position }) => {
            assert_eq!(symbol, b'd');
            assert_eq!(position, 3);
        }
        other => panic!("expected UnknownSymbol, got {:?}", other),
    }
}

#[test]
fn test_degenerate_alphabet() {
    let block = compress(b"aaaa").unwrap();
    assert_eq!(block.bit_count(), 4);
    assert_eq!(block.leaf_count(), 1);
    assert_eq!(decompress(&block).unwrap(), b"aaaa");
}

#[test]
fn test_empty_input() {
    let block = compress(b"").unwrap();
    assert_eq!(block.to_bytes(), vec![0u8; 12]);
    assert_eq!(decompress(&block).unwrap(), b"");
    assert!(matches!(
        compress_with(b"", &HuffmanConfig::STRICT),
        Err(OxiHuffError::EmptyAlphabet)
    ));
}

#[test]
fn test_corrupted_payload_is_detected() {
    let data = b"corruption should never go unnoticed";
    let block = compress(data).unwrap();
    let bytes = block.to_bytes();

    // Dropping the last payload byte leaves the block short
    assert!(matches!(
        CompressedBlock::from_bytes(&bytes[..bytes.len() - 1]),
        Err(OxiHuffError::FormatError { .. })
    ));

    // Flipping payload bits either fails or decodes to different bytes
    let first_payload = bytes.len() - block.payload().len();
    for flip in [0x01u8, 0x80, 0xFF] {
        let mut corrupt = bytes.clone();
        corrupt[first_payload] ^= flip;
        let block = CompressedBlock::from_bytes(&corrupt).unwrap();
        if let Ok(restored) = decompress(&block) {
            assert_ne!(restored, data);
        }
    }
}

#[test]
fn test_block_stream_of_many() {
    let inputs: Vec<Vec<u8>> = (0..5).map(|i| lcg_bytes(i, 100 * (i as usize + 1), 30)).collect();
    let mut stream = Vec::new();
    for input in &inputs {
        compress(input).unwrap().write_to(&mut stream).unwrap();
    }

    let mut reader = stream.as_slice();
    for input in &inputs {
        let block = CompressedBlock::read_from(&mut reader).unwrap();
        assert_eq!(&decompress(&block).unwrap(), input);
    }
    assert!(reader.is_empty());
}

#[test]
fn test_compressor_traits() {
    use oxihuff_core::{Compressor, Decompressor};

    let data = lcg_bytes(99, 3000, 8);
    let compressed = HuffmanCompressor::new().compress_all(&data).unwrap();
    assert!(compressed.len() < data.len());
    let restored = HuffmanDecompressor::new()
        .decompress_all(&compressed)
        .unwrap();
    assert_eq!(restored, data);
}
