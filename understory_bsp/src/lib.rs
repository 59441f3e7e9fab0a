// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_bsp --heading-base-level=0

//! Understory BSP: a Kurbo-native 2D binary space partition over polygon obstacles.
//!
//! Understory BSP is the static-geometry half of a collide-and-slide movement stack.
//!
//! - Build a tree from closed obstacle polygons inside a bounding rectangle.
//! - Locate the convex cell (leaf) containing a point.
//! - Find the first obstacle edge crossed by a segment.
//!
//! The bounding rectangle is always added as four synthetic edges, so the partition is
//! closed and segments leaving the world hit the boundary.
//!
//! ## Orientation
//!
//! Each edge gets a [`Plane`] whose normal is the clockwise perpendicular of its
//! direction. Wind obstacles counter-clockwise (y-up) and normals face outward; the
//! boundary is wound the other way so its normals face into the world. "Front" is the
//! side a normal points to.
//!
//! ## Building
//!
//! [`Tree::build`] recursively picks a splitting edge among the current edge set using a
//! least-damage score, `|front - back| + penalty * splits`, and cuts straddling edges in
//! two. Split pieces are appended to the edge list and keep the owner and plane of the
//! edge they came from. A set with no useful splitter becomes a [`Leaf`].
//!
//! ## Querying
//!
//! [`Tree::segment_test`] walks cells in travel order and stops at the first
//! intersecting edge it meets. Within a single leaf the first intersecting edge in list
//! order wins, so the hit is close to, but not guaranteed to be, the nearest one.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_bsp::{PolyArea, Tree};
//!
//! let mut tree = Tree::new();
//! let stats = tree.build(
//!     &[PolyArea::from_rect(Rect::new(4.0, 4.0, 6.0, 6.0))],
//!     Rect::new(0.0, 0.0, 10.0, 10.0),
//! );
//! assert_eq!(stats.input_edges, 8);
//!
//! let hit = tree
//!     .segment_test(Point::new(0.0, 5.0), Point::new(10.0, 5.0))
//!     .unwrap();
//! assert!((hit.fraction - 0.4).abs() < 1e-9);
//! assert_eq!(tree.edge(hit.edge).owner, Some(0));
//!
//! assert!(tree.segment_test(Point::new(1.0, 1.0), Point::new(3.0, 1.0)).is_none());
//! ```
//!
//! ### Float semantics
//!
//! Coordinates are assumed finite. Points within [`BuildConfig::epsilon`] of a plane are
//! treated as lying on it, both while building and while querying.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use kurbo::{Point, Rect};
use thiserror::Error;

mod build;
pub mod query;
pub mod tree;
pub mod types;

pub use query::{ColInfo, segment_intersection};
pub use tree::{Ancestors, BuildStats, Leaf, LeafId, Node, NodeId, NodeRef, Tree};
pub use types::{
    BuildConfig, DEFAULT_EPSILON, DEFAULT_SPLIT_PENALTY, Edge, EdgeId, Plane, PolyArea,
    SegmentSplit, Side,
};

/// Malformed input to [`Tree::try_build`].
#[derive(Clone, Debug, PartialEq, Error)]
pub enum BuildError {
    /// A polygon has fewer than three vertices.
    #[error("polygon {polygon} has {vertices} vertices, at least 3 are required")]
    DegeneratePolygon {
        /// Index of the polygon in the input slice.
        polygon: usize,
        /// Its vertex count.
        vertices: usize,
    },
    /// A polygon vertex lies outside the bounding rectangle.
    #[error("vertex {vertex} of polygon {polygon} at {point:?} lies outside the bounds")]
    VertexOutOfBounds {
        /// Index of the polygon in the input slice.
        polygon: usize,
        /// Index of the vertex in the polygon.
        vertex: usize,
        /// The offending position.
        point: Point,
    },
    /// The bounding rectangle is empty or inverted.
    #[error("bounds {bounds:?} are empty or inverted")]
    InvalidBounds {
        /// The rejected rectangle.
        bounds: Rect,
    },
}
