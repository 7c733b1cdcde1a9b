//! Performance benchmarks for oxihuff-huffman
//!
//! This benchmark suite evaluates:
//! - Compression/decompression throughput across data patterns
//! - Tree and code table construction cost
//! - Batch compression (sequential, or rayon with `parallel`)

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use oxihuff_core::SymbolEncoder;
use oxihuff_huffman::{
    CodeTable, FrequencyTable, HuffmanConfig, HuffmanTree, compress, compress_batch, decompress,
};
use std::hint::black_box;

/// Type alias for pattern generator functions
type PatternGenerator = fn(usize) -> Vec<u8>;

/// Generate test data patterns for benchmarking
mod test_data {
    /// Uniform data - a single symbol
    pub fn uniform(size: usize) -> Vec<u8> {
        vec![0xAA; size]
    }

    /// Random data - flat distribution over all 256 symbols
    pub fn random(size: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(size);
        let mut seed: u64 = 0x123456789ABCDEF0;
        for _ in 0..size {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            data.push((seed >> 32) as u8);
        }
        data
    }

    /// Text-like data - skewed distribution
    pub fn text_like(size: usize) -> Vec<u8> {
        let text = b"The quick brown fox jumps over the lazy dog. \
                     Pack my box with five dozen liquor jugs. \
                     How vexingly quick daft zebras jump! ";
        text.iter().copied().cycle().take(size).collect()
    }

    /// Small alphabet with heavily skewed weights
    pub fn skewed(size: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(size);
        let mut seed: u64 = 0xC0FFEE;
        for _ in 0..size {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            let r = (seed >> 40) as u32 % 100;
            data.push(match r {
                0..=59 => b'e',
                60..=84 => b't',
                85..=94 => b'a',
                95..=98 => b'o',
                _ => b'z',
            });
        }
        data
    }
}

/// Standard data sizes for benchmarking
mod data_sizes {
    pub const SMALL: usize = 10 * 1024; // 10 KB
    pub const MEDIUM: usize = 100 * 1024; // 100 KB
    pub const LARGE: usize = 1024 * 1024; // 1 MB
}

const PATTERNS: [(&str, PatternGenerator); 4] = [
    ("uniform", test_data::uniform),
    ("random", test_data::random),
    ("text_like", test_data::text_like),
    ("skewed", test_data::skewed),
];

/// Benchmark compression across data patterns
fn bench_compress_patterns(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress_patterns");
    let size = data_sizes::MEDIUM;

    for (name, generator) in PATTERNS {
        let data = generator(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &data, |b, data| {
            b.iter(|| {
                let block = compress(black_box(data)).unwrap();
                black_box(block);
            });
        });
    }

    group.finish();
}

/// Benchmark decompression across data patterns
fn bench_decompress_patterns(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompress_patterns");
    let size = data_sizes::MEDIUM;

    for (name, generator) in PATTERNS {
        let block = compress(&generator(size)).unwrap();
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &block, |b, block| {
            b.iter(|| {
                let data = decompress(black_box(block)).unwrap();
                black_box(data);
            });
        });
    }

    group.finish();
}

/// Benchmark throughput against input size
fn bench_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress_sizes");

    for size in [data_sizes::SMALL, data_sizes::MEDIUM, data_sizes::LARGE] {
        let data = test_data::text_like(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| black_box(compress(black_box(data)).unwrap()));
        });
    }

    group.finish();
}

/// Benchmark the per-block model cost: tree build plus code derivation
fn bench_model_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("model_build");

    let full = FrequencyTable::count(&test_data::random(data_sizes::SMALL)).unwrap();
    group.bench_function("tree_and_codes_256", |b| {
        b.iter(|| {
            let tree = HuffmanTree::build(black_box(&full));
            black_box(CodeTable::from_tree(&tree));
        });
    });

    let data = test_data::text_like(data_sizes::MEDIUM);
    let codes =
        CodeTable::from_tree(&HuffmanTree::build(&FrequencyTable::count(&data).unwrap()));
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("encode_only", |b| {
        b.iter(|| black_box(codes.encode(black_box(&data)).unwrap()));
    });

    group.finish();
}

/// Benchmark batch compression of many small inputs
fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");

    let inputs: Vec<Vec<u8>> = (0..64)
        .map(|i| {
            let mut data = test_data::skewed(data_sizes::SMALL);
            data.rotate_left(i * 13);
            data
        })
        .collect();
    group.throughput(Throughput::Bytes((inputs.len() * data_sizes::SMALL) as u64));
    group.bench_function("compress_batch_64x10k", |b| {
        b.iter(|| black_box(compress_batch(black_box(&inputs), &HuffmanConfig::DEFAULT)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_compress_patterns,
    bench_decompress_patterns,
    bench_sizes,
    bench_model_build,
    bench_batch
);
criterion_main!(benches);
