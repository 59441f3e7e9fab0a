// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-dimensional shadows of shapes on an axis.

use kurbo::{Point, Vec2};

/// Closed interval `[min, max]` covered by a shape projected onto an axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Projection {
    /// Lowest projected value.
    pub min: f64,
    /// Highest projected value.
    pub max: f64,
}

impl Projection {
    /// Create an interval from its bounds.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Project `vertices` onto `axis`. The axis need not be unit length.
    ///
    /// # Panics
    ///
    /// Panics if `vertices` is empty.
    pub fn of_points(axis: Vec2, vertices: &[Point]) -> Self {
        let (first, rest) = vertices
            .split_first()
            .expect("cannot project an empty vertex list");
        let start = axis.dot(first.to_vec2());
        rest.iter().fold(Self::new(start, start), |acc, v| {
            let value = axis.dot(v.to_vec2());
            Self::new(acc.min.min(value), acc.max.max(value))
        })
    }

    /// Interval shifted by `offset`.
    pub fn shifted(self, offset: f64) -> Self {
        Self::new(self.min + offset, self.max + offset)
    }

    /// Whether the intervals share at least one point. Touching counts.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.min <= other.max && other.min <= self.max
    }

    /// Length of the shared part. Only meaningful when [`overlaps`](Self::overlaps).
    pub fn overlap_depth(&self, other: &Self) -> f64 {
        self.max.min(other.max) - self.min.max(other.min)
    }

    /// Width of the gap between the intervals. Only meaningful when they do not overlap.
    pub fn distance(&self, other: &Self) -> f64 {
        self.min.max(other.min) - self.max.min(other.max)
    }
}
