//! Encode-path benchmarks - bound vs erased sink dispatch.
//!
//! The bound path lets the compiler inline the whole encode chain into the
//! sink; the erased path pays one indirect call per append. Buffers are
//! pre-allocated and reused via `clear()` for steady-state numbers.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use wirecast::{ErasedSink, Packer};

fn int_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("int_dispatch");
    let iterations = 10_000u64;
    group.throughput(Throughput::Elements(iterations));

    {
        let mut buf: Vec<u8> = Vec::with_capacity(iterations as usize * 9);
        group.bench_function("bound_vec", |b| {
            b.iter(|| {
                buf.clear();
                let mut packer = Packer::new(&mut buf);
                for i in 0..iterations {
                    packer.pack_uint(black_box(i)).unwrap();
                }
            })
        });
    }

    {
        let mut buf: Vec<u8> = Vec::with_capacity(iterations as usize * 9);
        group.bench_function("erased_vec", |b| {
            b.iter(|| {
                buf.clear();
                let mut erased = ErasedSink::new(&mut buf);
                let mut packer = Packer::new(&mut erased);
                for i in 0..iterations {
                    packer.pack_uint(black_box(i)).unwrap();
                }
            })
        });
    }

    group.finish();
}

fn mixed_records(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed_records");
    let records = 1_000u64;
    group.throughput(Throughput::Elements(records));

    let mut buf: Vec<u8> = Vec::with_capacity(records as usize * 32);
    group.bench_function("map_str_int_float", |b| {
        b.iter(|| {
            buf.clear();
            let mut packer = Packer::new(&mut buf);
            for i in 0..records {
                packer.pack_map(3).unwrap();
                packer.pack_str("id").unwrap();
                packer.pack_uint(black_box(i)).unwrap();
                packer.pack_str("name").unwrap();
                packer.pack_str(black_box("benchmark record")).unwrap();
                packer.pack_str("score").unwrap();
                packer.pack_f64(black_box(i as f64 * 0.5)).unwrap();
            }
        })
    });

    group.finish();
}

criterion_group!(benches, int_dispatch, mixed_records);
criterion_main!(benches);
