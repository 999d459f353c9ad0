// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use benchmarks::seeded;

fn benchmark_next_uniform(c: &mut Criterion) {
    let mut fortuna = seeded();

    let mut group = c.benchmark_group("fortuna_uniform");
    group.throughput(Throughput::Elements(1));
    group.bench_function("next_uniform", |b| {
        b.iter(|| black_box(fortuna.next_uniform().expect("next_uniform failed")));
    });
    group.finish();
}

fn benchmark_fill_ints(c: &mut Criterion) {
    let mut fortuna = seeded();

    let mut group = c.benchmark_group("fortuna_fill_ints");
    for count in [4usize, 64, 1024, 16384].iter() {
        group.throughput(Throughput::Bytes((*count * 4) as u64));
        group.bench_with_input(format!("{} words", count), count, |b, &count| {
            let mut dest = vec![0u32; count];

            b.iter(|| {
                fortuna
                    .fill_ints_into(black_box(&mut dest))
                    .expect("fill_ints_into failed")
            });
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_next_uniform, benchmark_fill_ints);
criterion_main!(benches);
