//! Compression configuration.

/// What to do when asked to compress zero bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyInputPolicy {
    /// Produce a block with an empty alphabet and no payload.
    ///
    /// Decompressing it yields zero bytes.
    #[default]
    EmptyBlock,
    /// Fail with [`OxiHuffError::EmptyAlphabet`](oxihuff_core::OxiHuffError::EmptyAlphabet).
    Reject,
}

/// Huffman compression parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HuffmanConfig {
    /// Handling of empty input.
    pub empty_input: EmptyInputPolicy,
    /// Decode every block right after building it and compare with the input.
    pub verify: bool,
}

impl HuffmanConfig {
    /// Default configuration.
    ///
    /// - Empty input produces an empty block
    /// - No self-check
    pub const DEFAULT: Self = Self {
        empty_input: EmptyInputPolicy::EmptyBlock,
        verify: false,
    };

    /// Strict configuration.
    ///
    /// - Empty input is an error
    /// - Every block is decoded and compared before it is returned
    pub const STRICT: Self = Self {
        empty_input: EmptyInputPolicy::Reject,
        verify: true,
    };

    /// Create the default configuration.
    pub fn new() -> Self {
        Self::DEFAULT
    }

    /// Set the empty input policy.
    pub fn with_empty_input(mut self, policy: EmptyInputPolicy) -> Self {
        self.empty_input = policy;
        self
    }

    /// Enable or disable the post-compression self-check.
    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// Check whether empty input is accepted.
    pub fn allows_empty(&self) -> bool {
        self.empty_input == EmptyInputPolicy::EmptyBlock
    }
}

impl Default for HuffmanConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
