// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Affine, Point, Rect, Size, Vec2};
use understory_bsp::{PolyArea, Tree};
use understory_sat::SatSolver;
use understory_slide::{Actor, resolve_move};

const WORLD: Rect = Rect::new(0.0, 0.0, 1000.0, 1000.0);

fn corridor_world() -> Tree {
    // Two long walls with gaps, plus a row of crates down the middle.
    let mut polys = vec![
        PolyArea::from_rect(Rect::new(100.0, 300.0, 450.0, 320.0)),
        PolyArea::from_rect(Rect::new(550.0, 300.0, 900.0, 320.0)),
        PolyArea::from_rect(Rect::new(100.0, 680.0, 450.0, 700.0)),
        PolyArea::from_rect(Rect::new(550.0, 680.0, 900.0, 700.0)),
    ];
    for i in 0..8 {
        let x0 = 120.0 + i as f64 * 100.0;
        polys.push(PolyArea::from_rect(Rect::new(x0, 480.0, x0 + 30.0, 520.0)));
    }
    let mut tree = Tree::new();
    tree.build(&polys, WORLD);
    tree
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("slide");
    let tree = corridor_world();
    let actors: Vec<Actor> = (0..256)
        .map(|i| {
            let x = 20.0 + (i % 16) as f64 * 60.0;
            let y = 350.0 + (i / 16) as f64 * 20.0;
            Actor::new(Point::new(x, y), Vec2::new(8.0, 8.0))
        })
        .collect();
    group.throughput(Throughput::Elements(actors.len() as u64));
    for (name, step) in [
        ("free", Vec2::new(3.0, 0.0)),
        ("into_walls", Vec2::new(0.0, -40.0)),
        ("diagonal", Vec2::new(25.0, 25.0)),
    ] {
        group.bench_function(format!("resolve_move_{}", name), |b| {
            b.iter(|| {
                let mut total = Vec2::ZERO;
                for actor in &actors {
                    total += resolve_move(&tree, actor, step);
                }
                black_box(total);
            })
        });
    }
    group.finish();
}

fn bench_sat(c: &mut Criterion) {
    let mut group = c.benchmark_group("sat");
    let hexagon: Vec<Point> = (0..6)
        .map(|i| {
            let a = core::f64::consts::TAU * i as f64 / 6.0;
            Point::new(a.cos() * 10.0, a.sin() * 10.0)
        })
        .collect();
    let centers: Vec<Point> = (0..256)
        .map(|i| Point::new((i % 16) as f64 * 4.0, (i / 16) as f64 * 4.0))
        .collect();
    group.throughput(Throughput::Elements(centers.len() as u64));
    group.bench_function("polygon_circle", |b| {
        let mut solver = SatSolver::new();
        b.iter(|| {
            for &c in &centers {
                black_box(solver.test_polygon_circle(Point::new(30.0, 30.0), &hexagon, c, 3.0));
            }
        })
    });
    group.bench_function("polygon_polygon", |b| {
        let mut solver = SatSolver::new();
        b.iter(|| {
            for &c in &centers {
                black_box(solver.test_polygon_polygon(Point::new(30.0, 30.0), &hexagon, c, &hexagon));
            }
        })
    });
    group.bench_function("box_box_rotated", |b| {
        let mut solver = SatSolver::new();
        b.iter(|| {
            for &c in &centers {
                let relative = Affine::translate(c.to_vec2()) * Affine::rotate(0.3);
                black_box(solver.test_box_box(
                    Point::new(20.0, 20.0),
                    Size::new(16.0, 8.0),
                    Point::ORIGIN,
                    Size::new(6.0, 6.0),
                    relative,
                ));
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_resolve, bench_sat);
criterion_main!(benches);
