// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_sat --heading-base-level=0

//! Understory SAT: separating-axis overlap tests for convex shapes.
//!
//! Each test projects both shapes onto a set of candidate axes. If any axis leaves a gap
//! between the two projections, the shapes are disjoint and that gap is reported;
//! otherwise the axis with the smallest overlap gives the penetration depth.
//!
//! - [`test_polygon_circle`]: a convex polygon against a circle. Axes are the polygon's
//!   edge normals plus, for each vertex, the direction from the circle center.
//! - [`test_polygon_polygon`]: two convex polygons. Axes are the edge normals of both.
//! - [`test_box_box`]: two axis-aligned boxes in different frames, related by an
//!   [`Affine`](kurbo::Affine) that maps box B's frame into box A's.
//!
//! Polygons are described by vertices in a local frame plus a center (world position).
//! Results always carry a unit axis and values in world units.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_sat::test_polygon_polygon;
//!
//! let square = [
//!     Point::new(-1.0, -1.0),
//!     Point::new(1.0, -1.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(-1.0, 1.0),
//! ];
//!
//! let touching = test_polygon_polygon(Point::ORIGIN, &square, Point::new(1.0, 0.0), &square);
//! assert_eq!(touching.depth(), Some(1.0));
//!
//! let apart = test_polygon_polygon(Point::ORIGIN, &square, Point::new(3.0, 0.0), &square);
//! assert_eq!(apart.distance(), Some(1.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod projection;
mod solver;

pub use projection::Projection;
pub use solver::{SatResult, SatSolver, test_box_box, test_polygon_circle, test_polygon_polygon};
