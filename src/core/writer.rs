//! # Structured Wire Writer
//!
//! Abstraction over byte sinks that encode entry points produce into.
//!
//! Mirrors [`WireRead`](crate::core::reader::WireRead): field-level writes
//! are default methods, backends supply a raw byte append. In-memory sinks
//! (`Vec<u8>`, `BytesMut`) are infallible; [`IoWriter`] surfaces the
//! underlying stream's errors.

use crate::core::HashDigest;
use crate::error::{Result, WireError};
use bytes::{BufMut, BytesMut};
use std::io::Write;

/// A structured sink for wire-format bytes
pub trait WireWrite {
    /// Append raw bytes verbatim
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()>;

    /// Append a 4-byte little-endian unsigned integer
    fn write_u32_le(&mut self, value: u32) -> Result<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Append a 32-byte content hash, as-is (no endianness transform)
    fn write_hash(&mut self, hash: &HashDigest) -> Result<()> {
        self.write_bytes(hash)
    }
}

impl WireWrite for Vec<u8> {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

impl WireWrite for BytesMut {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.put_slice(bytes);
        Ok(())
    }
}

/// Adapter turning any `std::io::Write` into a [`WireWrite`]
#[derive(Debug)]
pub struct IoWriter<W> {
    inner: W,
}

impl<W: Write> IoWriter<W> {
    /// Wrap a writable byte stream
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Flush and recover the underlying stream
    pub fn into_inner(mut self) -> Result<W> {
        self.inner.flush().map_err(WireError::Io)?;
        Ok(self.inner)
    }
}

impl<W: Write> WireWrite for IoWriter<W> {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.inner.write_all(bytes).map_err(WireError::Io)
    }
}
