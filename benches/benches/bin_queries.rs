// Copyright 2025 the Bin Partition Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bin_partition::{Bin, Rect};
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};

const WORLD: f64 = 4096.0;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // xorshift64*
        self.0 ^= self.0 >> 12;
        self.0 ^= self.0 << 25;
        self.0 ^= self.0 >> 27;
        (self.0.wrapping_mul(0x2545_F491_4F6C_DD1D) >> 32) as u32
    }

    fn next_f64(&mut self, max: f64) -> f64 {
        f64::from(self.next_u32()) / f64::from(u32::MAX) * max
    }
}

fn gen_rects(n: usize, max_size: f64, seed: u64) -> Vec<Rect<f64>> {
    let mut rng = Rng::new(seed);
    (0..n)
        .map(|_| {
            let w = 1.0 + rng.next_f64(max_size);
            let h = 1.0 + rng.next_f64(max_size);
            Rect::new(rng.next_f64(WORLD - w), rng.next_f64(WORLD - h), w, h)
        })
        .collect()
}

fn filled_bin(cells: usize, rects: &[Rect<f64>]) -> Bin<usize, Rect<f64>> {
    let mut bin = Bin::new(cells, cells, WORLD, WORLD).unwrap();
    for (i, r) in rects.iter().enumerate() {
        bin.insert(*r, i).unwrap();
    }
    bin
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for &n in &[1_000_usize, 10_000] {
        let rects = gen_rects(n, 64.0, 1);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("grid_64x64_{n}"), |b| {
            b.iter_batched(
                || Bin::<usize, Rect<f64>>::new(64, 64, WORLD, WORLD).unwrap(),
                |mut bin| {
                    for (i, r) in rects.iter().enumerate() {
                        bin.insert(*r, i).unwrap();
                    }
                    black_box(bin)
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let rects = gen_rects(10_000, 64.0, 2);
    let queries = gen_rects(256, 256.0, 3);
    let mut group = c.benchmark_group("query");
    group.throughput(Throughput::Elements(queries.len() as u64));
    for &cells in &[16_usize, 64, 256] {
        let bin = filled_bin(cells, &rects);
        group.bench_function(format!("rect_{cells}x{cells}"), |b| {
            b.iter(|| {
                let mut hits = 0;
                for q in &queries {
                    bin.visit_rect(q, |_, _| hits += 1);
                }
                black_box(hits)
            });
        });
        group.bench_function(format!("point_{cells}x{cells}"), |b| {
            b.iter(|| {
                let mut hits = 0;
                for q in &queries {
                    hits += bin.query_point(q.x, q.y).len();
                }
                black_box(hits)
            });
        });
    }
    group.finish();
}

fn bench_move_and_delete(c: &mut Criterion) {
    let rects = gen_rects(5_000, 32.0, 4);
    let moved = gen_rects(5_000, 32.0, 5);
    let mut group = c.benchmark_group("update");
    group.bench_function("move_64x64", |b| {
        b.iter_batched(
            || filled_bin(64, &rects),
            |mut bin| {
                for (i, (old, new)) in rects.iter().zip(&moved).enumerate() {
                    bin.move_object(i, old, *new);
                }
                black_box(bin)
            },
            BatchSize::LargeInput,
        );
    });
    group.bench_function("delete_scan_64x64", |b| {
        b.iter_batched(
            || filled_bin(64, &rects[..500]),
            |mut bin| {
                for i in 0..500 {
                    black_box(bin.delete(&i));
                }
                bin
            },
            BatchSize::LargeInput,
        );
    });
    group.bench_function("delete_with_rect_64x64", |b| {
        b.iter_batched(
            || filled_bin(64, &rects[..500]),
            |mut bin| {
                for (i, r) in rects[..500].iter().enumerate() {
                    bin.delete_with_rect(&i, r);
                }
                bin
            },
            BatchSize::LargeInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_insert, bench_query, bench_move_and_delete);
criterion_main!(benches);
