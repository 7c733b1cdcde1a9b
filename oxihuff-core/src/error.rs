//! Error types for OxiHuff operations.
//!
//! Every failure of the codec is reported as an explicit error value. The
//! codec never substitutes an empty or default code for a symbol it cannot
//! handle, and it never stops decoding early without saying so.

use std::io;
use thiserror::Error;

/// The main error type for OxiHuff operations.
#[derive(Debug, Error)]
pub enum OxiHuffError {
    /// I/O error from an underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An operation needed at least one symbol but the alphabet is empty.
    #[error("Empty alphabet: no symbols to build a code from")]
    EmptyAlphabet,

    /// A symbol has no entry in the code table it is being encoded with.
    #[error("Unknown symbol {symbol:#04x} at input position {position}")]
    UnknownSymbol {
        /// The symbol that has no code.
        symbol: u8,
        /// Index of the symbol in the input.
        position: usize,
    },

    /// The bit buffer ended in the middle of a code.
    #[error("Truncated code: bits exhausted mid-path at bit position {bit_position}")]
    TruncatedCode {
        /// Bit position where the input ran out.
        bit_position: u64,
    },

    /// A persisted block is malformed or internally inconsistent.
    #[error("Format error: {message}")]
    FormatError {
        /// Description of the inconsistency.
        message: String,
    },

    /// A symbol occurs more often than the wire format can record.
    #[error("Frequency overflow: symbol {symbol:#04x} occurs more than {max} times")]
    FrequencyOverflow {
        /// The symbol whose count overflowed.
        symbol: u8,
        /// Largest representable count.
        max: u32,
    },
}

/// Result type alias for OxiHuff operations.
pub type Result<T> = std::result::Result<T, OxiHuffError>;

impl OxiHuffError {
    /// Create an unknown symbol error.
    pub fn unknown_symbol(symbol: u8, position: usize) -> Self {
        Self::UnknownSymbol { symbol, position }
    }

    /// Create a truncated code error.
    pub fn truncated(bit_position: u64) -> Self {
        Self::TruncatedCode { bit_position }
    }

    /// Create a format error.
    pub fn format_error(message: impl Into<String>) -> Self {
        Self::FormatError {
            message: message.into(),
        }
    }

    /// Create a frequency overflow error.
    pub fn frequency_overflow(symbol: u8) -> Self {
        Self::FrequencyOverflow {
            symbol,
            max: u32::MAX,
        }
    }

    /// Whether this error indicates corrupt or inconsistent compressed input,
    /// as opposed to a problem with the caller's data or the environment.
    pub fn is_corruption(&self) -> bool {
        matches!(self, Self::TruncatedCode { .. } | Self::FormatError { .. })
    }
}
