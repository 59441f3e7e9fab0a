// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! BSP basics.
//!
//! Build a tree over a few obstacles, walk its structure, locate points, and cast
//! segments. Build and split decisions are logged at trace level.
//!
//! Run:
//! - `cargo run -p understory_demos --example bsp_basics`

use kurbo::{Point, Rect};
use understory_bsp::{NodeRef, PolyArea, Tree};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let obstacles = [
        PolyArea::from_rect(Rect::new(20.0, 20.0, 40.0, 30.0)),
        PolyArea::new([
            Point::new(60.0, 50.0),
            Point::new(80.0, 50.0),
            Point::new(70.0, 70.0),
        ]),
        PolyArea::from_rect(Rect::new(10.0, 60.0, 30.0, 90.0)),
    ];
    let mut tree = Tree::new();
    let stats = tree.build(&obstacles, Rect::new(0.0, 0.0, 100.0, 100.0));
    println!("{stats:?}");

    // Every leaf is a convex cell; list how deep each one sits.
    for leaf in tree.leaf_ids() {
        let depth = tree.ancestors(NodeRef::Leaf(leaf)).count();
        println!(
            "leaf {:>2}: depth {depth}, {} edge(s)",
            leaf.index(),
            tree.leaf(leaf).edges().len()
        );
    }

    let probe = Point::new(50.0, 10.0);
    let leaf = tree.leaf_at(probe).unwrap();
    println!("{probe:?} lies in leaf {}", leaf.index());

    let (start, end) = (Point::new(5.0, 25.0), Point::new(95.0, 25.0));
    let hit = tree.segment_test(start, end).unwrap();
    let edge = tree.edge(hit.edge);
    println!(
        "segment hits edge {} of obstacle {:?} at {:?} (t = {:.3})",
        hit.edge.index(),
        edge.owner,
        hit.point(start, end),
        hit.fraction
    );
    assert_eq!(edge.owner, Some(0), "the first box blocks the segment");

    // Segments that leave the world stop at the boundary.
    let out = tree
        .segment_test(Point::new(50.0, 40.0), Point::new(50.0, 140.0))
        .unwrap();
    assert!(tree.edge(out.edge).is_boundary());
    println!("boundary reached at t = {:.3}", out.fraction);
}
