//! # Inventory Items
//!
//! The atomic unit of inventory announcement and request messages.
//!
//! An [`InventoryItem`] pairs an [`InventoryKind`] tag with a 32-byte content
//! hash and serializes to a canonical 36-byte wire form: a `u32`
//! little-endian kind code followed by the raw hash bytes.
//!
//! ## Wire Format
//! ```text
//! [Kind code (4, u32 LE)] [Content hash (32, raw)]
//! ```
//!
//! ## Kind Codes
//! | kind         | outbound code | decoded from |
//! |--------------|---------------|--------------|
//! | Error        | 0             | 0            |
//! | Transaction  | 1             | 1            |
//! | Block        | 2             | 2            |
//! | CompactBlock | 4             | 4            |
//! | FilteredBlock| 0 (no dedicated code) | (never) |
//! | Unrecognized | 0             | any other value |
//!
//! The mapping is fixed forever; changing a code is a protocol-breaking
//! change. Decoding is total over the `u32` code space: foreign codes yield
//! `Unrecognized` rather than an error, so messages carrying item kinds
//! introduced by newer peers still decode.

use crate::core::reader::{IoReader, SliceReader, WireRead};
use crate::core::writer::{IoWriter, WireWrite};
use crate::core::{HashDigest, HASH_SIZE, NULL_HASH};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{Read, Write};

/// Classification of the object an inventory item advertises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InventoryKind {
    /// The zero/default tag; carries no referent
    #[default]
    Error,
    /// Hash of a transaction
    Transaction,
    /// Hash of a full block
    Block,
    /// Hash of a block served with a transaction filter applied
    FilteredBlock,
    /// Hash of a compact block
    CompactBlock,
    /// Any wire code this peer does not know; never produced outbound
    Unrecognized,
}

impl InventoryKind {
    /// Map a kind to its outbound wire code.
    ///
    /// Surjective but not injective: kinds without a dedicated code
    /// (`Error`, `FilteredBlock`, `Unrecognized`) all collapse to zero.
    /// Outbound production only ever uses kinds with a real code, so the
    /// collapse never needs to be reversed.
    pub fn to_wire_code(self) -> u32 {
        match self {
            InventoryKind::Transaction => 1,
            InventoryKind::Block => 2,
            InventoryKind::CompactBlock => 4,
            InventoryKind::Error | InventoryKind::FilteredBlock | InventoryKind::Unrecognized => 0,
        }
    }

    /// Map a wire code to a kind.
    ///
    /// Total over the `u32` space; unknown codes become `Unrecognized`.
    pub fn from_wire_code(code: u32) -> Self {
        match code {
            0 => InventoryKind::Error,
            1 => InventoryKind::Transaction,
            2 => InventoryKind::Block,
            4 => InventoryKind::CompactBlock,
            _ => InventoryKind::Unrecognized,
        }
    }

    /// True for the block-flavored kinds: `Block`, `CompactBlock`,
    /// `FilteredBlock`
    pub fn is_block(self) -> bool {
        matches!(
            self,
            InventoryKind::Block | InventoryKind::CompactBlock | InventoryKind::FilteredBlock
        )
    }

    /// True only for `Transaction`
    pub fn is_transaction(self) -> bool {
        self == InventoryKind::Transaction
    }
}

/// A (kind, hash) pair advertising an object's existence without its payload.
///
/// Plain value semantics: copying duplicates the tag and the 32 hash bytes,
/// equality is a pure conjunction on both fields. The default item is
/// `(Error, all-zero hash)` and is the only combination [`is_valid`]
/// rejects.
///
/// [`is_valid`]: InventoryItem::is_valid
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InventoryItem {
    kind: InventoryKind,
    hash: HashDigest,
}

impl InventoryItem {
    /// Serialized size of every item: 4-byte kind code + 32-byte hash
    pub const FIXED_SIZE: usize = HASH_SIZE + 4;

    /// Build an item from a kind and a content hash.
    ///
    /// No validation is performed; arbitrary combinations, including
    /// `Error` with a non-zero hash, are representable.
    pub fn new(kind: InventoryKind, hash: HashDigest) -> Self {
        Self { kind, hash }
    }

    /// The kind tag
    pub fn kind(&self) -> InventoryKind {
        self.kind
    }

    /// Replace the kind tag
    pub fn set_kind(&mut self, kind: InventoryKind) {
        self.kind = kind;
    }

    /// The 32-byte content hash
    pub fn hash(&self) -> &HashDigest {
        &self.hash
    }

    /// Replace the content hash
    pub fn set_hash(&mut self, hash: HashDigest) {
        self.hash = hash;
    }

    /// True unless the item is exactly the default `(Error, all-zero hash)`.
    ///
    /// Note the logical-OR: `Error` with a non-zero hash is valid, and a
    /// real kind with an all-zero hash is valid.
    pub fn is_valid(&self) -> bool {
        self.kind != InventoryKind::Error || self.hash != NULL_HASH
    }

    /// Clear back to the default value: `Error` kind, all-zero hash
    pub fn reset(&mut self) {
        self.kind = InventoryKind::Error;
        self.hash = NULL_HASH;
    }

    /// True iff the kind is `Block`, `CompactBlock`, or `FilteredBlock`
    pub fn is_block_kind(&self) -> bool {
        self.kind.is_block()
    }

    /// True iff the kind is `Transaction`
    pub fn is_transaction_kind(&self) -> bool {
        self.kind.is_transaction()
    }

    /// Serialized size in bytes, independent of content.
    ///
    /// The version parameter is a forward-compatibility hook for callers
    /// computing enclosing message lengths; it is accepted and ignored.
    pub const fn serialized_size(_version: u32) -> usize {
        Self::FIXED_SIZE
    }

    /// Decode one item from a structured reader.
    ///
    /// Fails only on truncated or erroring input; unknown kind codes decode
    /// to `Unrecognized` and still consume the full 36 bytes, keeping the
    /// source aligned for whatever follows.
    pub fn decode<R: WireRead>(_version: u32, source: &mut R) -> Result<Self> {
        let kind = InventoryKind::from_wire_code(source.read_u32_le()?);
        let hash = source.read_hash()?;
        Ok(Self { kind, hash })
    }

    /// Decode an item from a byte buffer, returning a default (invalid)
    /// item when the buffer is truncated.
    ///
    /// Factory counterpart of [`from_data`](Self::from_data) for callers
    /// that gate on [`is_valid`](Self::is_valid) instead of a flag.
    pub fn decoded_from(version: u32, data: &[u8]) -> Self {
        let mut item = Self::default();
        item.from_data(version, data);
        item
    }

    /// Decode into `self` from a byte buffer.
    ///
    /// Returns `true` on success. On failure `self` is left equal to the
    /// default value; there is no partial-success state.
    pub fn from_data(&mut self, version: u32, data: &[u8]) -> bool {
        self.from_reader(version, &mut SliceReader::new(data))
    }

    /// Decode into `self` from a readable byte stream.
    ///
    /// Same contract as [`from_data`](Self::from_data).
    pub fn from_stream<R: Read>(&mut self, version: u32, stream: R) -> bool {
        self.from_reader(version, &mut IoReader::new(stream))
    }

    /// Decode into `self` from a structured reader.
    ///
    /// Resets `self` before attempting the decode, so a failure never
    /// leaves a partially-populated item behind.
    pub fn from_reader<R: WireRead>(&mut self, version: u32, source: &mut R) -> bool {
        self.reset();
        match Self::decode(version, source) {
            Ok(item) => {
                *self = item;
                true
            }
            Err(_) => {
                self.reset();
                false
            }
        }
    }

    /// Encode into a structured writer: kind code then raw hash bytes
    pub fn encode<W: WireWrite>(&self, _version: u32, sink: &mut W) -> Result<()> {
        sink.write_u32_le(self.kind.to_wire_code())?;
        sink.write_hash(&self.hash)?;
        Ok(())
    }

    /// Encode to a fresh byte buffer of exactly [`FIXED_SIZE`] bytes.
    ///
    /// [`FIXED_SIZE`]: Self::FIXED_SIZE
    pub fn to_data(&self, version: u32) -> Vec<u8> {
        let mut data = Vec::with_capacity(Self::FIXED_SIZE);
        self.encode(version, &mut data)
            .expect("in-memory encode cannot fail");
        debug_assert_eq!(data.len(), Self::serialized_size(version));
        data
    }

    /// Encode into a writable byte stream, flushing before returning
    pub fn to_stream<W: Write>(&self, version: u32, stream: W) -> Result<()> {
        let mut sink = IoWriter::new(stream);
        self.encode(version, &mut sink)?;
        sink.into_inner()?;
        Ok(())
    }
}

impl fmt::Debug for InventoryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InventoryItem")
            .field("kind", &self.kind)
            .field("hash", &hex::encode(self.hash))
            .finish()
    }
}
