// Copyright 2026
// SPDX-License-Identifier: Apache-2.0
//
// Criterion benchmarks for array rendering

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use magic_static::config::DEFAULT_SYMBOL;
use magic_static::render::{render_array, write_array};
use std::hint::black_box;

fn database(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 131 % 256) as u8).collect()
}

fn bench_render_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_array");

    // a compiled magic.mgc is typically several megabytes
    for size in [1024, 64 * 1024, 1024 * 1024, 8 * 1024 * 1024].iter() {
        let bytes = database(*size);
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &bytes, |b, bytes| {
            b.iter(|| render_array(black_box(DEFAULT_SYMBOL), black_box(bytes)))
        });
    }

    group.finish();
}

fn bench_write_to_sink(c: &mut Criterion) {
    let bytes = database(1024 * 1024);

    c.bench_function("write_array_sink_1mib", |b| {
        b.iter(|| write_array(std::io::sink(), DEFAULT_SYMBOL, black_box(&bytes)))
    });
}

criterion_group!(benches, bench_render_sizes, bench_write_to_sink);

criterion_main!(benches);
