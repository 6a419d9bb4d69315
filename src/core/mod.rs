//! # Core Wire Components
//!
//! Low-level wire reading, writing, and stream framing.
//!
//! This module provides the foundation for the protocol: structured byte
//! readers and writers plus a tokio codec for framing inventory items over
//! byte streams.
//!
//! ## Components
//! - **Reader**: [`reader::WireRead`] trait with slice and `io::Read` backends
//! - **Writer**: [`writer::WireWrite`] trait with buffer and `io::Write` backends
//! - **Codec**: Tokio codec yielding one item per fixed-size frame
//!
//! ## Security
//! - Fixed-length reads validate availability before copying
//! - No length-prefixed allocations; frame size is a compile-time constant

pub mod codec;
pub mod reader;
pub mod writer;

/// Size in bytes of a content hash digest
pub const HASH_SIZE: usize = 32;

/// A fixed 32-byte content digest, opaque at this layer
pub type HashDigest = [u8; HASH_SIZE];

/// The all-zero digest used by default-constructed items
pub const NULL_HASH: HashDigest = [0u8; HASH_SIZE];
