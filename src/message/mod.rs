//! # Protocol Message Payloads
//!
//! Value types embedded in peer-to-peer protocol messages.
//!
//! ## Components
//! - **Inventory**: The (kind, hash) pair advertising an object's existence
//!   without its payload
//!
//! The enclosing message envelope (the list that batches many items, the
//! header that frames it) lives in outer layers; this module owns only the
//! payload values and their canonical wire forms.

pub mod inventory;

pub use inventory::{InventoryItem, InventoryKind};
