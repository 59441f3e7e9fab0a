// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types: oriented lines, edges, and polygon areas.

use alloc::vec::Vec;
use kurbo::{Point, Rect, Vec2};

/// Default thin-slab tolerance, in world units.
pub const DEFAULT_EPSILON: f64 = 1e-3;

/// Default weight applied to each edge split when scoring a splitter.
pub const DEFAULT_SPLIT_PENALTY: u32 = 8;

/// Which side of a [`Plane`] a point or segment lies on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Strictly in front of the plane (the side its normal points to).
    Front,
    /// Strictly behind the plane.
    Back,
    /// Within the tolerance slab around the plane.
    On,
    /// A segment with one endpoint in front and the other behind.
    Split,
}

/// An oriented 2D line.
///
/// `normal · p + offset` is the signed distance of `p` from the line. The normal is the
/// clockwise perpendicular of the edge direction, so counter-clockwise (y-up) polygons
/// get outward-facing planes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Plane {
    normal: Vec2,
    offset: f64,
}

/// Result of [`Plane::split_segment`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SegmentSplit {
    /// The segment is not cut; it lies entirely on this side.
    Whole(Side),
    /// The segment straddles the plane. Pieces keep the original orientation.
    Split {
        /// The part in front of the plane.
        front: [Point; 2],
        /// The part behind the plane.
        back: [Point; 2],
    },
}

impl Plane {
    /// A plane with a zero normal. Every point classifies as [`Side::On`].
    pub const DEGENERATE: Self = Self {
        normal: Vec2::ZERO,
        offset: 0.0,
    };

    /// Build the plane through `v1` and `v2`.
    ///
    /// Coincident points produce [`Plane::DEGENERATE`] rather than a NaN normal.
    pub fn from_points(v1: Point, v2: Point) -> Self {
        let dir = v2 - v1;
        let len = dir.hypot();
        if len <= f64::EPSILON {
            return Self::DEGENERATE;
        }
        let normal = Vec2::new(dir.y, -dir.x) / len;
        Self {
            normal,
            offset: -normal.dot(v1.to_vec2()),
        }
    }

    /// Unit normal, or zero for a degenerate plane.
    pub fn normal(&self) -> Vec2 {
        self.normal
    }

    /// Signed offset `d` in `normal · p + d`.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Whether this plane came from a zero-length edge.
    pub fn is_degenerate(&self) -> bool {
        self.normal == Vec2::ZERO
    }

    /// Unit tangent, pointing along the edge the plane was built from.
    pub fn direction(&self) -> Vec2 {
        Vec2::new(-self.normal.y, self.normal.x)
    }

    /// The point on the line closest to the origin.
    pub fn point(&self) -> Point {
        (self.normal * -self.offset).to_point()
    }

    /// Signed distance of `p` from the line.
    pub fn distance(&self, p: Point) -> f64 {
        self.normal.dot(p.to_vec2()) + self.offset
    }

    /// Classify a point. Never returns [`Side::Split`].
    pub fn side(&self, p: Point, epsilon: f64) -> Side {
        let dist = self.distance(p);
        if dist > epsilon {
            Side::Front
        } else if dist < -epsilon {
            Side::Back
        } else {
            Side::On
        }
    }

    /// Classify a segment without cutting it.
    pub fn classify_segment(&self, a: Point, b: Point, epsilon: f64) -> Side {
        match (self.side(a, epsilon), self.side(b, epsilon)) {
            (Side::On, s) | (s, Side::On) => s,
            (sa, sb) if sa == sb => sa,
            _ => Side::Split,
        }
    }

    /// Classify a segment, cutting it at the plane when it straddles.
    pub fn split_segment(&self, a: Point, b: Point, epsilon: f64) -> SegmentSplit {
        let side = self.classify_segment(a, b, epsilon);
        if side != Side::Split {
            return SegmentSplit::Whole(side);
        }
        let da = self.distance(a);
        let db = self.distance(b);
        let p = a.lerp(b, da / (da - db));
        if da > 0.0 {
            SegmentSplit::Split {
                front: [a, p],
                back: [p, b],
            }
        } else {
            SegmentSplit::Split {
                front: [p, b],
                back: [a, p],
            }
        }
    }

    /// Clip a segment to one half-space.
    ///
    /// Returns `None` when nothing remains on the kept side. Segments lying on the plane
    /// are discarded.
    pub fn clip_segment(
        &self,
        keep_front: bool,
        a: Point,
        b: Point,
        epsilon: f64,
    ) -> Option<[Point; 2]> {
        let keep = if keep_front { Side::Front } else { Side::Back };
        match self.split_segment(a, b, epsilon) {
            SegmentSplit::Whole(side) if side == keep => Some([a, b]),
            SegmentSplit::Whole(_) => None,
            SegmentSplit::Split { front, back } => Some(if keep_front { front } else { back }),
        }
    }
}

/// Stable handle of an edge in a [`Tree`](crate::Tree).
///
/// Edge handles are indices into an append-only list and stay valid until the next build.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Position of the edge in [`Tree::edges`](crate::Tree::edges).
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A directed segment of an obstacle or of the world boundary.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Edge {
    /// Start point.
    pub p0: Point,
    /// End point.
    pub p1: Point,
    /// Index of the polygon this edge came from; `None` for the world boundary.
    pub owner: Option<usize>,
    /// Plane of the original, unsplit edge.
    pub plane: Plane,
}

impl Edge {
    pub(crate) fn new(p0: Point, p1: Point, owner: Option<usize>) -> Self {
        Self {
            p0,
            p1,
            owner,
            plane: Plane::from_points(p0, p1),
        }
    }

    /// A piece of this edge; it keeps the owner and plane.
    pub(crate) fn piece(&self, [p0, p1]: [Point; 2]) -> Self {
        Self {
            p0,
            p1,
            owner: self.owner,
            plane: self.plane,
        }
    }

    /// Whether this edge belongs to the synthetic world boundary.
    pub fn is_boundary(&self) -> bool {
        self.owner.is_none()
    }

    /// Euclidean length.
    pub fn length(&self) -> f64 {
        (self.p1 - self.p0).hypot()
    }
}

/// A closed loop of vertices describing an obstacle.
///
/// The loop is implicitly closed. Wind obstacles counter-clockwise (y-up) so their edge
/// normals face outward.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PolyArea {
    vertices: Vec<Point>,
}

impl PolyArea {
    /// Create an area from its vertices.
    pub fn new(vertices: impl Into<Vec<Point>>) -> Self {
        Self {
            vertices: vertices.into(),
        }
    }

    /// Counter-clockwise loop around `rect`.
    pub fn from_rect(rect: Rect) -> Self {
        let r = rect.abs();
        Self::new([
            Point::new(r.x0, r.y0),
            Point::new(r.x1, r.y0),
            Point::new(r.x1, r.y1),
            Point::new(r.x0, r.y1),
        ])
    }

    /// Vertices in loop order.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the area has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Consecutive vertex pairs, starting with the closing pair `(last, first)`.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[(i + n - 1) % n], self.vertices[i]))
    }
}

/// Tuning for building and querying a [`Tree`](crate::Tree).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BuildConfig {
    /// Points closer than this to a plane count as lying on it.
    pub epsilon: f64,
    /// Score added per edge a candidate splitter would cut.
    pub split_penalty: u32,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            split_penalty: DEFAULT_SPLIT_PENALTY,
        }
    }
}
