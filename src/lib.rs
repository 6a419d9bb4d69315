//! # Inventory Protocol
//!
//! Wire-format inventory announcement primitives for peer-to-peer blockchain
//! protocols.
//!
//! An inventory item advertises the availability of an object (a transaction
//! or a block variant) to a remote peer without transmitting the object's
//! payload. It pairs a kind tag with a 32-byte content hash and serializes to
//! a fixed 36-byte wire form, embedded verbatim inside larger inventory
//! announcement and request messages.
//!
//! ## Components
//! - **Message**: The [`InventoryItem`] value type and its kind enumeration
//! - **Core**: Structured wire reader/writer abstractions and a tokio codec
//!   for framing item streams
//! - **Error**: Error types covering truncated or erroring input
//!
//! ## Wire Format
//! ```text
//! [Kind code (4, u32 LE)] [Content hash (32, raw)]
//! ```
//!
//! ## Forward Compatibility
//! - Unknown kind codes decode to [`InventoryKind::Unrecognized`] rather than
//!   failing, so messages carrying item kinds introduced by newer peers still
//!   decode
//! - Every entry point threads a protocol-version parameter for the enclosing
//!   message layer; current behavior is version-independent

pub mod config;
pub mod core;
pub mod error;
pub mod message;

pub use crate::config::PROTOCOL_VERSION;
pub use crate::core::codec::InventoryCodec;
pub use crate::core::reader::{IoReader, SliceReader, WireRead};
pub use crate::core::writer::{IoWriter, WireWrite};
pub use crate::core::{HashDigest, HASH_SIZE, NULL_HASH};
pub use crate::error::{Result, WireError};
pub use crate::message::inventory::{InventoryItem, InventoryKind};
