//! # Inventory Stream Codec
//!
//! Tokio codec framing inventory items over byte streams.
//!
//! Every frame is exactly [`InventoryItem::FIXED_SIZE`] bytes, so framing
//! needs no length prefix: the decoder waits until a full frame is buffered
//! and yields one item per frame. Useful with `tokio_util::codec::Framed`
//! over any `AsyncRead`/`AsyncWrite` transport.

use crate::config::PROTOCOL_VERSION;
use crate::core::reader::SliceReader;
use crate::error::WireError;
use crate::message::inventory::InventoryItem;
use bytes::BytesMut;
use tokio_util::codec::{Decoder, Encoder};
use tracing::trace;

/// Codec yielding one [`InventoryItem`] per 36-byte frame
#[derive(Debug, Clone)]
pub struct InventoryCodec {
    version: u32,
}

impl InventoryCodec {
    /// Create a codec threading the given protocol version through
    /// encode/decode
    pub fn new(version: u32) -> Self {
        Self { version }
    }

    /// Protocol version threaded through this codec
    pub fn version(&self) -> u32 {
        self.version
    }
}

impl Default for InventoryCodec {
    fn default() -> Self {
        Self::new(PROTOCOL_VERSION)
    }
}

impl Decoder for InventoryCodec {
    type Item = InventoryItem;
    type Error = WireError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<InventoryItem>, WireError> {
        if src.len() < InventoryItem::FIXED_SIZE {
            return Ok(None);
        }
        let frame = src.split_to(InventoryItem::FIXED_SIZE);
        let item = InventoryItem::decode(self.version, &mut SliceReader::new(&frame))?;
        trace!(kind = ?item.kind(), "decoded inventory item");
        Ok(Some(item))
    }
}

impl Encoder<InventoryItem> for InventoryCodec {
    type Error = WireError;

    fn encode(&mut self, item: InventoryItem, dst: &mut BytesMut) -> Result<(), WireError> {
        dst.reserve(InventoryItem::FIXED_SIZE);
        item.encode(self.version, dst)
    }
}
