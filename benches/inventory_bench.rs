use bytes::BytesMut;
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use inventory_protocol::{
    InventoryCodec, InventoryItem, InventoryKind, HASH_SIZE, PROTOCOL_VERSION,
};
use tokio_util::codec::{Decoder, Encoder};

#[allow(clippy::unwrap_used)]
fn bench_inventory_encode_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("inventory_encode_decode");
    group.throughput(Throughput::Bytes(InventoryItem::FIXED_SIZE as u64));

    let item = InventoryItem::new(InventoryKind::Transaction, [0x11; HASH_SIZE]);
    let bytes = item.to_data(PROTOCOL_VERSION);

    group.bench_function("encode", |b| {
        b.iter(|| item.to_data(PROTOCOL_VERSION));
    });

    group.bench_function("decode", |b| {
        let mut target = InventoryItem::default();
        b.iter(|| {
            assert!(target.from_data(PROTOCOL_VERSION, &bytes));
        });
    });

    group.bench_function("codec_roundtrip", |b| {
        let mut codec = InventoryCodec::default();
        b.iter(|| {
            let mut buf = BytesMut::with_capacity(InventoryItem::FIXED_SIZE);
            codec.encode(item.clone(), &mut buf).unwrap();
            let decoded = codec.decode(&mut buf).unwrap();
            assert!(decoded.is_some());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_inventory_encode_decode);
criterion_main!(benches);
