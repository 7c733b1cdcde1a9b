//! Utility functions for the CLI.

use indicatif::{ProgressBar, ProgressStyle};
use oxihuff_huffman::{CodeTable, CompressedBlock, FrequencyTable};
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

/// Result type for command implementations.
pub type CmdResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Extension used for compressed files whose input has no extension.
pub const DEFAULT_EXTENSION: &str = "huff";

/// Create a progress bar with standard styling.
pub fn create_progress_bar(len: u64, enable: bool) -> ProgressBar {
    if !enable {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    match ProgressStyle::default_bar()
        .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
    {
        Ok(style) => pb.set_style(style.progress_chars("█▓▒░ ")),
        Err(e) => tracing::debug!("falling back to default progress style: {}", e),
    }
    pb
}

/// Derive an output path next to `input`: `<stem><suffix>.<ext>`.
///
/// Without an extension the result is `<stem><suffix>`, or
/// `<stem><suffix>.<fallback_ext>` if a fallback is given.
pub fn sibling_path(input: &Path, suffix: &str, fallback_ext: Option<&str>) -> PathBuf {
    let mut name = OsString::from(input.file_stem().unwrap_or(input.as_os_str()));
    name.push(suffix);

    // Appended by hand: set_extension would clobber a dotted stem
    let ext = input.extension().or(fallback_ext.map(OsStr::new));
    if let Some(ext) = ext {
        name.push(".");
        name.push(ext);
    }
    input.with_file_name(name)
}

/// Default output for `compress`: `name_compressed.ext`.
pub fn compressed_path(input: &Path) -> PathBuf {
    sibling_path(input, "_compressed", Some(DEFAULT_EXTENSION))
}

/// Default output for `decompress`: `name_uncompressed.ext`.
pub fn uncompressed_path(input: &Path) -> PathBuf {
    sibling_path(input, "_uncompressed", None)
}

/// Read and parse a compressed file.
pub fn read_block(path: &Path) -> CmdResult<CompressedBlock> {
    let data = fs::read(path)?;
    Ok(CompressedBlock::from_bytes(&data)?)
}

/// Load a frequency table from a compressed file, or count a raw file.
pub fn load_frequencies(path: &Path, raw: bool) -> CmdResult<FrequencyTable> {
    if raw {
        Ok(FrequencyTable::count(&fs::read(path)?)?)
    } else {
        Ok(read_block(path)?.frequencies().clone())
    }
}

/// Quote a symbol for display, escaping non-printable bytes.
pub fn display_symbol(symbol: u8) -> String {
    format!("'{}'", std::ascii::escape_default(symbol))
}

/// Format a byte count with a binary unit.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}

/// Print a code table as an aligned text table.
pub fn print_code_table(codes: &CodeTable, frequencies: &FrequencyTable) {
    println!(
        "{:>6} {:>8} {:>10} {:>4}  Code",
        "Symbol", "Byte", "Frequency", "Bits"
    );
    println!("{}", "-".repeat(50));

    for (symbol, code) in codes.iter() {
        println!(
            "{:>6} {:>8} {:>10} {:>4}  {}",
            display_symbol(symbol),
            format!("{:#04x}", symbol),
            frequencies.get(symbol).unwrap_or(0),
            code.len,
            code
        );
    }

    println!("{}", "-".repeat(50));
    println!(
        "{} symbols, {} occurrences, {:.3} bits/symbol (entropy {:.3})",
        codes.len(),
        frequencies.total(),
        codes.average_code_length(frequencies),
        frequencies.entropy()
    );
}
