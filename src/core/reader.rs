//! # Structured Wire Reader
//!
//! Abstraction over byte sources that decode entry points consume.
//!
//! Field-level reads (`u32` little-endian, fixed 32-byte hash) are expressed
//! once as default methods on [`WireRead`]; backends only supply a raw
//! fixed-length read. Two backends are provided:
//! - [`SliceReader`] for in-memory buffers (zero-copy cursor)
//! - [`IoReader`] for any `std::io::Read` byte stream

use crate::core::{HashDigest, NULL_HASH};
use crate::error::{Result, WireError};
use std::io::Read;

/// A structured source of wire-format bytes.
///
/// Every read either fills the request completely or fails; there are no
/// partial reads at this layer.
pub trait WireRead {
    /// Read exactly `buf.len()` bytes into `buf`
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()>;

    /// Read a 4-byte little-endian unsigned integer
    fn read_u32_le(&mut self) -> Result<u32> {
        let mut bytes = [0u8; 4];
        self.read_exact(&mut bytes)?;
        Ok(u32::from_le_bytes(bytes))
    }

    /// Read a 32-byte content hash, as-is (no endianness transform)
    fn read_hash(&mut self) -> Result<HashDigest> {
        let mut hash = NULL_HASH;
        self.read_exact(&mut hash)?;
        Ok(hash)
    }
}

/// Cursor over an in-memory byte slice
#[derive(Debug)]
pub struct SliceReader<'a> {
    data: &'a [u8],
}

impl<'a> SliceReader<'a> {
    /// Create a reader over the full slice
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Bytes not yet consumed
    pub fn remaining(&self) -> usize {
        self.data.len()
    }
}

impl WireRead for SliceReader<'_> {
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        if self.data.len() < buf.len() {
            return Err(WireError::UnexpectedEof {
                expected: buf.len(),
                available: self.data.len(),
            });
        }
        let (head, tail) = self.data.split_at(buf.len());
        buf.copy_from_slice(head);
        self.data = tail;
        Ok(())
    }
}

/// Adapter turning any `std::io::Read` into a [`WireRead`]
#[derive(Debug)]
pub struct IoReader<R> {
    inner: R,
}

impl<R: Read> IoReader<R> {
    /// Wrap a readable byte stream
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Recover the underlying stream
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> WireRead for IoReader<R> {
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        self.inner.read_exact(buf).map_err(WireError::Io)
    }
}
