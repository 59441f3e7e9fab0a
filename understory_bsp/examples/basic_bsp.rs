// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Understory BSP: build over obstacles, locate a point, cast a segment.

use kurbo::{Point, Rect};
use understory_bsp::{PolyArea, Tree};

fn main() {
    let mut tree = Tree::new();
    let stats = tree.build(
        &[
            PolyArea::from_rect(Rect::new(4.0, 4.0, 6.0, 6.0)),
            PolyArea::new([
                Point::new(7.0, 1.0),
                Point::new(9.0, 1.0),
                Point::new(8.0, 3.0),
            ]),
        ],
        Rect::new(0.0, 0.0, 10.0, 10.0),
    );
    println!("built: {stats:?}");

    let leaf = tree.leaf_at(Point::new(2.0, 8.0));
    println!("leaf at (2,8): {leaf:?}");

    let start = Point::new(0.5, 5.0);
    let end = Point::new(9.5, 5.0);
    match tree.segment_test(start, end) {
        Some(hit) => println!(
            "hit edge {:?} at t={:.3}, point {:?}",
            hit.edge,
            hit.fraction,
            hit.point(start, end)
        ),
        None => println!("no hit"),
    }
}
