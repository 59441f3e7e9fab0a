// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned actors.

use kurbo::{Point, Rect, Vec2};

/// An axis-aligned box that moves through a tree.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Actor {
    /// Center of the box.
    pub center: Point,
    /// Half of the box's width and height.
    pub half_extent: Vec2,
}

impl Actor {
    /// Create an actor from its center and half extent.
    pub const fn new(center: Point, half_extent: Vec2) -> Self {
        Self {
            center,
            half_extent,
        }
    }

    /// Actor covering `rect`.
    pub fn from_rect(rect: Rect) -> Self {
        let rect = rect.abs();
        Self::new(
            rect.center(),
            Vec2::new(rect.width() * 0.5, rect.height() * 0.5),
        )
    }

    /// The four corners, counter-clockwise for y-up:
    /// `(+x, +y)`, `(-x, +y)`, `(-x, -y)`, `(+x, -y)` relative to the center.
    ///
    /// Consecutive corners (wrapping) form the box's edges with outward normals.
    pub fn corners(&self) -> [Point; 4] {
        let Vec2 { x, y } = self.half_extent;
        [
            self.center + Vec2::new(x, y),
            self.center + Vec2::new(-x, y),
            self.center + Vec2::new(-x, -y),
            self.center + Vec2::new(x, -y),
        ]
    }

    /// Bounding rectangle.
    pub fn rect(&self) -> Rect {
        Rect::from_center_size(self.center, (self.half_extent * 2.0).to_size())
    }

    /// The same actor moved by `by`.
    #[must_use]
    pub fn translate(&self, by: Vec2) -> Self {
        Self::new(self.center + by, self.half_extent)
    }
}
