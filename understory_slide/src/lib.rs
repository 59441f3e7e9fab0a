// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_slide --heading-base-level=0

//! Understory Slide: collide-and-slide movement for axis-aligned actors.
//!
//! Given an [`Actor`] (a box described by its center and half extent), a desired
//! displacement, and a [`Tree`](understory_bsp::Tree) built over the level geometry,
//! [`resolve_move`] returns the displacement the actor can actually make. Motion into a
//! wall is cut where the actor touches it while motion along the wall is kept. When a
//! wall corner would end up inside the actor, the whole move is shortened instead.
//!
//! The resolver only asks the tree for segment hits; it never mutates it. Call it once
//! per actor per step and apply the result with [`Actor::translate`].
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Rect, Vec2};
//! use understory_bsp::{PolyArea, Tree};
//! use understory_slide::{Actor, resolve_move};
//!
//! let mut tree = Tree::new();
//! tree.build(
//!     &[PolyArea::from_rect(Rect::new(14.0, 10.0, 20.0, 90.0))],
//!     Rect::new(0.0, 0.0, 100.0, 100.0),
//! );
//!
//! let actor = Actor::new(Point::new(10.0, 50.0), Vec2::new(1.0, 1.0));
//! let moved = resolve_move(&tree, &actor, Vec2::new(10.0, 5.0));
//!
//! // Stopped at the wall on x, still free on y.
//! assert!((moved.x - 3.0).abs() < 1e-9);
//! assert!((moved.y - 5.0).abs() < 1e-9);
//! let actor = actor.translate(moved);
//! assert!((actor.center.x - 10.0 - 3.0).abs() < 1e-9);
//! ```
//!
//! [`resolve_move_with`] takes a [`SlideConfig`] and reports which corner hit first and
//! which wall edge clipped the move, if any.
//!
//! This crate is `no_std`.

#![no_std]

mod actor;
mod resolve;

pub use actor::Actor;
pub use resolve::{
    CornerHit, DEFAULT_CORNER_EPSILON, SlideConfig, SlideOutcome, resolve_move, resolve_move_with,
};
