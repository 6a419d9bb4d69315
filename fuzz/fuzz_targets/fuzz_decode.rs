#![no_main]

use inventory_protocol::{InventoryItem, PROTOCOL_VERSION};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Fuzz inventory decoding - test for panics, crashes, infinite loops
    let mut item = InventoryItem::default();
    let ok = item.from_data(PROTOCOL_VERSION, data);
    // A failed decode must leave the default (invalid) item behind.
    assert!(ok || !item.is_valid());
});
