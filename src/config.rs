//! # Protocol Constants
//!
//! Centralized wire-protocol constants.
//!
//! The inventory codec itself is version-independent: the version constant
//! exists so callers assembling larger protocol messages have a single
//! default to thread through the encode/decode entry points.

/// Default protocol version threaded through encode/decode entry points.
///
/// Reserved for forward compatibility with the enclosing message layer; the
/// inventory codec accepts but ignores it.
pub const PROTOCOL_VERSION: u32 = 70_012;
