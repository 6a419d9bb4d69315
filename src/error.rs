//! # Error Types
//!
//! Error handling for the inventory wire codec.
//!
//! Only one failure mode exists at this layer: a truncated or erroring byte
//! source during decode. Encoding into an in-memory buffer cannot fail;
//! encoding into an I/O sink surfaces the sink's own error. Unknown kind
//! codes are never an error; they decode to `InventoryKind::Unrecognized`.
//!
//! All errors implement `std::error::Error` for interoperability.

use std::io;
use thiserror::Error;

/// Primary error type for wire read/write operations
#[derive(Error, Debug)]
pub enum WireError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("unexpected end of input: needed {expected} bytes, {available} available")]
    UnexpectedEof { expected: usize, available: usize },
}

/// Type alias for Results using WireError
pub type Result<T> = std::result::Result<T, WireError>;
