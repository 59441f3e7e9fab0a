// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use understory_bsp::{BuildConfig, PolyArea, Tree};

const WORLD: Rect = Rect::new(0.0, 0.0, 1000.0, 1000.0);

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// `n * n` square pillars on a regular grid, like a warehouse floor.
fn gen_pillars(n: usize) -> Vec<PolyArea> {
    let cell = WORLD.width() / n as f64;
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as f64 * cell + cell * 0.25;
            let y0 = y as f64 * cell + cell * 0.25;
            out.push(PolyArea::from_rect(Rect::new(
                x0,
                y0,
                x0 + cell * 0.5,
                y0 + cell * 0.5,
            )));
        }
    }
    out
}

/// Scattered boxes that may overlap, which forces many splits.
fn gen_scattered(count: usize) -> Vec<PolyArea> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| {
            let w = 5.0 + rng.next_f64() * 40.0;
            let h = 5.0 + rng.next_f64() * 40.0;
            let x0 = 1.0 + rng.next_f64() * (WORLD.width() - w - 2.0);
            let y0 = 1.0 + rng.next_f64() * (WORLD.height() - h - 2.0);
            PolyArea::from_rect(Rect::new(x0, y0, x0 + w, y0 + h))
        })
        .collect()
}

fn gen_segments(count: usize) -> Vec<(Point, Point)> {
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    let mut point = || Point::new(rng.next_f64() * 1000.0, rng.next_f64() * 1000.0);
    (0..count).map(|_| (point(), point())).collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("bsp_build");
    for &n in &[4usize, 8, 16] {
        let polys = gen_pillars(n);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("pillars_n{}", n), |b| {
            b.iter_batched(
                Tree::new,
                |mut tree| {
                    let stats = tree.build(&polys, WORLD);
                    black_box(stats);
                },
                BatchSize::SmallInput,
            )
        });
    }
    for &penalty in &[0u32, 2, 8] {
        let polys = gen_scattered(128);
        group.bench_function(format!("scattered_128_penalty{}", penalty), |b| {
            b.iter_batched(
                || {
                    Tree::with_config(BuildConfig {
                        split_penalty: penalty,
                        ..BuildConfig::default()
                    })
                },
                |mut tree| {
                    let stats = tree.build(&polys, WORLD);
                    black_box(stats);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("bsp_query");
    let segments = gen_segments(1024);
    for &n in &[4usize, 16] {
        let mut tree = Tree::new();
        tree.build(&gen_pillars(n), WORLD);
        group.throughput(Throughput::Elements(segments.len() as u64));
        group.bench_function(format!("segment_test_pillars_n{}", n), |b| {
            b.iter(|| {
                let hits = segments
                    .iter()
                    .filter(|(s, e)| tree.segment_test(*s, *e).is_some())
                    .count();
                black_box(hits);
            })
        });
        group.bench_function(format!("leaf_at_pillars_n{}", n), |b| {
            b.iter(|| {
                for (s, _) in &segments {
                    black_box(tree.leaf_at(*s));
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_queries);
criterion_main!(benches);
