//! Async I/O adapters for block compressors.
//!
//! Huffman blocks are built from a fully materialized input (the frequency
//! table must be known before the first code is emitted), so the codec itself
//! stays synchronous. These wrappers let an async collaborator drain an
//! `AsyncRead` source, run a synchronous [`Compressor`] or [`Decompressor`]
//! over the buffered bytes, and write the result to an `AsyncWrite` sink.
//!
//! # Feature Flag
//!
//! This module is only available when the `async-io` feature is enabled:
//!
//! ```toml
//! [dependencies]
//! oxihuff-core = { version = "0.1.0", features = ["async-io"] }
//! ```

use crate::error::Result;
use crate::traits::{Compressor, Decompressor};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Initial capacity for the buffered input (32KB).
const DEFAULT_BUFFER_SIZE: usize = 32 * 1024;

/// An async wrapper around a synchronous block compressor.
#[derive(Debug)]
pub struct AsyncCompressorWrapper<C> {
    inner: C,
    buffer_size: usize,
}

impl<C: Compressor + Send> AsyncCompressorWrapper<C> {
    /// Create a new async compressor wrapper.
    pub fn new(compressor: C) -> Self {
        Self::with_buffer_size(compressor, DEFAULT_BUFFER_SIZE)
    }

    /// Create a wrapper that pre-allocates `buffer_size` bytes for input.
    pub fn with_buffer_size(compressor: C, buffer_size: usize) -> Self {
        Self {
            inner: compressor,
            buffer_size,
        }
    }

    /// Get a reference to the inner compressor.
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Consume the wrapper and return the inner compressor.
    pub fn into_inner(self) -> C {
        self.inner
    }

    /// Read `input` to the end, compress it, and write the block to `output`.
    ///
    /// # Returns
    ///
    /// The number of bytes written to `output`.
    pub async fn compress_async<R, W>(&mut self, input: &mut R, output: &mut W) -> Result<usize>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut data = Vec::with_capacity(self.buffer_size);
        input.read_to_end(&mut data).await?;

        let block = self.inner.compress_all(&data)?;
        output.write_all(&block).await?;
        output.flush().await?;
        Ok(block.len())
    }
}

/// An async wrapper around a synchronous block decompressor.
#[derive(Debug)]
pub struct AsyncDecompressorWrapper<D> {
    inner: D,
    buffer_size: usize,
}

impl<D: Decompressor + Send> AsyncDecompressorWrapper<D> {
    /// Create a new async decompressor wrapper.
    pub fn new(decompressor: D) -> Self {
        Self::with_buffer_size(decompressor, DEFAULT_BUFFER_SIZE)
    }

    /// Create a wrapper that pre-allocates `buffer_size` bytes for input.
    pub fn with_buffer_size(decompressor: D, buffer_size: usize) -> Self {
        Self {
            inner: decompressor,
            buffer_size,
        }
    }

    /// Get a reference to the inner decompressor.
    pub fn inner(&self) -> &D {
        &self.inner
    }

    /// Consume the wrapper and return the inner decompressor.
    pub fn into_inner(self) -> D {
        self.inner
    }

    /// Read a serialized block from `input`, decompress it, and write the
    /// restored bytes to `output`.
    ///
    /// # Returns
    ///
    /// The number of bytes written to `output`.
    pub async fn decompress_async<R, W>(&mut self, input: &mut R, output: &mut W) -> Result<usize>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut data = Vec::with_capacity(self.buffer_size);
        input.read_to_end(&mut data).await?;

        let restored = self.inner.decompress_all(&data)?;
        output.write_all(&restored).await?;
        output.flush().await?;
        Ok(restored.len())
    }
}
