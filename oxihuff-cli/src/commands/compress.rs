//! Compress command implementation.

use crate::utils::{CmdResult, compressed_path, create_progress_bar, format_size};
use oxihuff_huffman::{HuffmanConfig, compress_with};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Options for the compress command.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompressOptions {
    /// Reject empty input.
    pub strict: bool,
    /// Decode each block before writing it.
    pub verify: bool,
    /// Show a progress bar for multiple files.
    pub progress: bool,
    /// Print a line per file.
    pub verbose: bool,
}

impl CompressOptions {
    fn config(&self) -> HuffmanConfig {
        let base = if self.strict {
            HuffmanConfig::STRICT
        } else {
            HuffmanConfig::DEFAULT
        };
        base.with_verify(self.verify || base.verify)
    }
}

/// Compress each file to `output` (single file only) or to its default name.
pub fn cmd_compress(
    files: &[PathBuf],
    output: Option<&Path>,
    options: CompressOptions,
) -> CmdResult {
    if output.is_some() && files.len() > 1 {
        return Err("--output can only be used with a single input file".into());
    }

    let config = options.config();
    let pb = create_progress_bar(files.len() as u64, options.progress && files.len() > 1);

    let mut total_in = 0u64;
    let mut total_out = 0u64;

    for file in files {
        pb.set_message(file.display().to_string());

        let target = output.map_or_else(|| compressed_path(file), Path::to_path_buf);
        let (read, written) = compress_file(file, &target, &config)?;
        total_in += read;
        total_out += written;

        if options.verbose {
            pb.suspend(|| {
                println!(
                    "  {} -> {} ({} -> {})",
                    file.display(),
                    target.display(),
                    format_size(read),
                    format_size(written)
                );
            });
        }
        pb.inc(1);
    }

    pb.finish_and_clear();

    let savings = if total_in > 0 {
        (1.0 - total_out as f64 / total_in as f64) * 100.0
    } else {
        0.0
    };
    println!(
        "Compressed {} file(s): {} -> {} ({:.1}% saved)",
        files.len(),
        format_size(total_in),
        format_size(total_out),
        savings
    );

    Ok(())
}

/// Compress one file, returning `(bytes read, bytes written)`.
fn compress_file(input: &Path, output: &Path, config: &HuffmanConfig) -> CmdResult<(u64, u64)> {
    let data = fs::read(input)?;
    let block = compress_with(&data, config)
        .map_err(|e| format!("{}: {}", input.display(), e))?;
    let bytes = block.to_bytes();
    fs::write(output, &bytes)?;

    info!(
        input = %input.display(),
        output = %output.display(),
        original = data.len(),
        compressed = bytes.len(),
        "wrote compressed block"
    );
    Ok((data.len() as u64, bytes.len() as u64))
}
