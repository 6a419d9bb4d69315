//! Property-based tests using proptest
//!
//! These tests validate codec invariants across a wide range of randomly
//! generated inputs, ensuring robust behavior under all conditions.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use inventory_protocol::{
    InventoryItem, InventoryKind, HASH_SIZE, PROTOCOL_VERSION,
};
use proptest::prelude::*;

fn arb_hash() -> impl Strategy<Value = [u8; HASH_SIZE]> {
    any::<[u8; HASH_SIZE]>()
}

// Property: decoding any 36-byte buffer succeeds, whatever the kind code
proptest! {
    #[test]
    fn prop_any_full_buffer_decodes(code in any::<u32>(), hash in arb_hash()) {
        let mut bytes = code.to_le_bytes().to_vec();
        bytes.extend_from_slice(&hash);

        let mut item = InventoryItem::default();
        prop_assert!(item.from_data(PROTOCOL_VERSION, &bytes));
        prop_assert_eq!(item.kind(), InventoryKind::from_wire_code(code));
        prop_assert_eq!(item.hash(), &hash);
    }
}

// Property: decoding any buffer shorter than 36 bytes fails and resets
proptest! {
    #[test]
    fn prop_short_buffers_fail(data in prop::collection::vec(any::<u8>(), 0..36)) {
        let mut item = InventoryItem::new(InventoryKind::Block, [0xEE; HASH_SIZE]);
        prop_assert!(!item.from_data(PROTOCOL_VERSION, &data));
        prop_assert_eq!(item, InventoryItem::default());
    }
}

// Property: encoding is deterministic and always 36 bytes
proptest! {
    #[test]
    fn prop_encoding_deterministic_fixed_size(code in any::<u32>(), hash in arb_hash()) {
        let item = InventoryItem::new(InventoryKind::from_wire_code(code), hash);
        let first = item.to_data(PROTOCOL_VERSION);
        let second = item.to_data(PROTOCOL_VERSION);

        prop_assert_eq!(first.len(), InventoryItem::FIXED_SIZE);
        prop_assert_eq!(first, second);
    }
}

// Property: items built from decoded wire codes round-trip exactly
proptest! {
    #[test]
    fn prop_decoded_kinds_round_trip(code in prop_oneof![Just(0u32), Just(1), Just(2), Just(4)], hash in arb_hash()) {
        let item = InventoryItem::new(InventoryKind::from_wire_code(code), hash);
        let bytes = item.to_data(PROTOCOL_VERSION);

        let mut decoded = InventoryItem::default();
        prop_assert!(decoded.from_data(PROTOCOL_VERSION, &bytes));
        prop_assert_eq!(decoded, item);
    }
}

// Property: the wire-code mapping is total and stable in both directions
proptest! {
    #[test]
    fn prop_kind_mapping_total(code in any::<u32>()) {
        let kind = InventoryKind::from_wire_code(code);
        match code {
            0 => prop_assert_eq!(kind, InventoryKind::Error),
            1 => prop_assert_eq!(kind, InventoryKind::Transaction),
            2 => prop_assert_eq!(kind, InventoryKind::Block),
            4 => prop_assert_eq!(kind, InventoryKind::CompactBlock),
            _ => prop_assert_eq!(kind, InventoryKind::Unrecognized),
        }
    }
}
