// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collide and slide.
//!
//! Walk a box through a small room for a few steps and print where it ends up. The
//! actor pushes diagonally into a wall and slides along it, then drops past the
//! wall's end.
//!
//! Run:
//! - `cargo run -p understory_demos --example slide_walk`

use kurbo::{Point, Rect, Vec2};
use understory_bsp::{PolyArea, Tree};
use understory_slide::{Actor, SlideConfig, resolve_move_with};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let mut tree = Tree::new();
    tree.build(
        &[
            PolyArea::from_rect(Rect::new(40.0, 30.0, 50.0, 100.0)),
            PolyArea::from_rect(Rect::new(70.0, 0.0, 80.0, 40.0)),
        ],
        Rect::new(0.0, 0.0, 120.0, 120.0),
    );

    let config = SlideConfig::default();
    let mut actor = Actor::new(Point::new(20.0, 80.0), Vec2::new(4.0, 4.0));
    let step = Vec2::new(6.0, -6.0);
    for i in 0..16 {
        let outcome = resolve_move_with(&tree, &actor, step, &config);
        actor = actor.translate(outcome.displacement);
        println!(
            "step {i:>2}: at ({:6.2}, {:6.2}){}",
            actor.center.x,
            actor.center.y,
            if outcome.is_blocked() { "  blocked" } else { "" }
        );
    }

    // The walls keep the actor between them.
    assert!(actor.rect().x1 <= 70.0 + 1e-6, "stopped by the second wall");
}
