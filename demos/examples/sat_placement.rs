// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SAT placement checks.
//!
//! Decide whether pieces can be dropped onto a board: a rotated plank against the
//! existing crates, and a round token against a hexagonal tile.
//!
//! Run:
//! - `cargo run -p understory_demos --example sat_placement`

use kurbo::{Affine, Point, Size, Vec2};
use understory_sat::{SatSolver, test_polygon_circle};

/// Overlap allowed before a placement is rejected.
const TOLERANCE: f64 = 0.05;

fn main() {
    let crates = [
        (Point::new(0.0, 0.0), Size::new(4.0, 4.0)),
        (Point::new(10.0, 2.0), Size::new(3.0, 6.0)),
    ];
    let plank = Size::new(8.0, 1.0);

    let mut solver = SatSolver::new();
    for angle in [0.0_f64, 0.4, 0.8, 1.2] {
        let placement = Affine::translate(Vec2::new(5.0, 1.0)) * Affine::rotate(angle);
        let blocked = crates.iter().any(|&(pos, size)| {
            !solver.test_box_box(pos, size, Point::ORIGIN, plank, placement)
                && solver.result().is_overlapping(TOLERANCE)
        });
        println!(
            "plank at {:4.1} rad: {}",
            angle,
            if blocked { "blocked" } else { "fits" }
        );
    }

    let hexagon: Vec<Point> = (0..6)
        .map(|i| {
            let a = core::f64::consts::TAU * f64::from(i) / 6.0;
            Point::new(2.0 * a.cos(), 2.0 * a.sin())
        })
        .collect();
    for x in [3.0, 2.5, 2.0] {
        let result = test_polygon_circle(Point::ORIGIN, &hexagon, Point::new(x, 0.0), 0.5);
        match (result.distance(), result.depth()) {
            (Some(gap), _) => println!("token at x={x}: clear by {gap:.3}"),
            (_, Some(depth)) => println!(
                "token at x={x}: overlaps by {depth:.3} along ({:.2}, {:.2})",
                result.axis.x, result.axis.y
            ),
            (None, None) => unreachable!("a result is either separated or overlapping"),
        }
    }
}
