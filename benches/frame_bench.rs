use criterion::{criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use message_framing::core::codec::encode_msg_size;
use message_framing::{FragmentAssembler, MessageFrame, Padding};

#[allow(clippy::unwrap_used)]
fn bench_frame_build_and_reassemble(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_build_reassemble");
    let body_sizes = [64usize, 512, 4096, 65536, 1024 * 1024];

    for &size in &body_sizes {
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_function(format!("build_{size}b"), |b| {
            b.iter_batched(
                || vec![0u8; size],
                |body| {
                    let frame = MessageFrame::from_body(&body, Padding { pre: 16, post: 4 });
                    assert_eq!(frame.body_size() as usize, size);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("reassemble_{size}b"), |b| {
            let mut wire = encode_msg_size(size as u32).to_vec();
            wire.extend_from_slice(&vec![0u8; size]);
            // Deliver in 1400-byte chunks like a segment-sized transport would
            b.iter(|| {
                let mut asm = FragmentAssembler::new(&wire[..4], Padding::NONE).unwrap();
                for chunk in wire[4..].chunks(1400) {
                    asm.append(chunk);
                }
                assert!(asm.is_complete());
                let frame = asm.graduate().unwrap();
                assert_eq!(frame.body_size() as usize, size);
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_frame_build_and_reassemble);
criterion_main!(benches);
