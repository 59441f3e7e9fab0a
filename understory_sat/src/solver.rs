// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The separating-axis solver.

use kurbo::{Affine, Point, Size, Vec2};

use crate::projection::Projection;

/// Outcome of a separating-axis test.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SatResult {
    /// `true` when a separating axis was found, i.e. the shapes are disjoint.
    pub has_separating_axis: bool,
    /// Unit witness axis: the separating axis, or the axis of least penetration.
    ///
    /// Shapes collapsed to single points have no edge normals; they are tested along the
    /// line between them instead (the x axis if they coincide), so this is always unit
    /// length after a test.
    pub axis: Vec2,
    /// Gap width when disjoint, penetration depth when overlapping.
    pub value: f64,
}

impl Default for SatResult {
    fn default() -> Self {
        Self {
            has_separating_axis: true,
            axis: Vec2::ZERO,
            value: 0.0,
        }
    }
}

impl SatResult {
    fn separated(axis: Vec2, distance: f64) -> Self {
        Self {
            has_separating_axis: true,
            axis,
            value: distance,
        }
    }

    fn overlapping(axis: Vec2, depth: f64) -> Self {
        Self {
            has_separating_axis: false,
            axis,
            value: depth,
        }
    }

    /// Gap between the shapes, if they are disjoint.
    pub fn distance(&self) -> Option<f64> {
        self.has_separating_axis.then_some(self.value)
    }

    /// Penetration depth, if the shapes overlap.
    pub fn depth(&self) -> Option<f64> {
        (!self.has_separating_axis).then_some(self.value)
    }

    /// Whether the shapes overlap by more than `tolerance`.
    ///
    /// Shapes that merely touch report a depth of zero and pass a zero tolerance.
    pub fn is_overlapping(&self, tolerance: f64) -> bool {
        !self.has_separating_axis && self.value > tolerance
    }
}

/// Least-penetration tracker shared by the overlap paths.
///
/// Stays empty when every candidate axis had zero length.
struct Deepest {
    best: Option<(Vec2, f64)>,
}

impl Deepest {
    fn new() -> Self {
        Self { best: None }
    }

    fn offer(&mut self, axis: Vec2, depth: f64) {
        if self.best.map(|(_, d)| depth < d).unwrap_or(true) {
            self.best = Some((axis, depth));
        }
    }

    fn finish(self) -> Option<SatResult> {
        self.best.map(|(axis, depth)| SatResult::overlapping(axis, depth))
    }
}

/// Outcome along a single unit axis.
fn along_axis(axis: Vec2, a: &Projection, b: &Projection) -> SatResult {
    if a.overlaps(b) {
        SatResult::overlapping(axis, a.overlap_depth(b))
    } else {
        SatResult::separated(axis, a.distance(b))
    }
}

/// Unit vector along `v`, or the x axis when `v` is zero.
fn unit_or_x(v: Vec2) -> Vec2 {
    let len = v.hypot();
    if len == 0.0 {
        Vec2::new(1.0, 0.0)
    } else {
        v / len
    }
}

/// Single-query separating-axis solver.
///
/// Every test overwrites the stored result; read it back with [`SatSolver::result`].
/// Polygons are given as vertices in their own local frame plus a world position, wound
/// counter-clockwise (y-up). Only convex polygons give meaningful answers.
#[derive(Clone, Debug, Default)]
pub struct SatSolver {
    result: SatResult,
}

impl SatSolver {
    /// Create a solver with no result yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Result of the last test.
    pub fn result(&self) -> SatResult {
        self.result
    }

    /// Polygon `vertices_a` at `center_a` against a circle at `center_b`.
    ///
    /// Candidate axes are the polygon's edge normals and, per vertex, the direction from
    /// the circle center to that vertex. The first separating axis ends the test. A
    /// polygon collapsed onto the circle center has none of these and is tested along
    /// the x axis.
    ///
    /// # Panics
    ///
    /// Panics if the polygon has fewer than three vertices.
    pub fn test_polygon_circle(
        &mut self,
        center_a: Point,
        vertices_a: &[Point],
        center_b: Point,
        radius: f64,
    ) -> SatResult {
        assert!(vertices_a.len() >= 3, "polygon needs at least 3 vertices");
        let rel = center_a - center_b;
        let circle = Projection::new(-radius, radius);
        let mut deepest = Deepest::new();

        let n = vertices_a.len();
        for i in 0..n {
            let edge = vertices_a[i] - vertices_a[(i + n - 1) % n];
            let to_vertex = vertices_a[i].to_vec2() + rel;
            for axis in [Vec2::new(edge.y, -edge.x), to_vertex] {
                let len = axis.hypot();
                if len == 0.0 {
                    continue;
                }
                let axis = axis / len;
                let poly = Projection::of_points(axis, vertices_a).shifted(axis.dot(rel));
                if !poly.overlaps(&circle) {
                    self.result = SatResult::separated(axis, poly.distance(&circle));
                    return self.result;
                }
                deepest.offer(axis, poly.overlap_depth(&circle));
            }
        }

        self.result = deepest.finish().unwrap_or_else(|| {
            let axis = Vec2::new(1.0, 0.0);
            let poly = Projection::of_points(axis, vertices_a).shifted(axis.dot(rel));
            along_axis(axis, &poly, &circle)
        });
        self.result
    }

    /// Polygon `vertices_a` at `center_a` against polygon `vertices_b` at `center_b`.
    ///
    /// Candidate axes are the edge normals of both polygons. Distances and depths are
    /// measured in world units along the unit witness axis. When both polygons have
    /// collapsed to points, the line between the two points is the only axis tried.
    ///
    /// # Panics
    ///
    /// Panics if either polygon has fewer than three vertices.
    pub fn test_polygon_polygon(
        &mut self,
        center_a: Point,
        vertices_a: &[Point],
        center_b: Point,
        vertices_b: &[Point],
    ) -> SatResult {
        assert!(vertices_a.len() >= 3, "polygon A needs at least 3 vertices");
        assert!(vertices_b.len() >= 3, "polygon B needs at least 3 vertices");
        let rel = center_b - center_a;
        let mut deepest = Deepest::new();

        for vertices in [vertices_a, vertices_b] {
            let n = vertices.len();
            for i in 0..n {
                let edge = vertices[i] - vertices[(i + n - 1) % n];
                let axis = Vec2::new(edge.y, -edge.x);
                let len = axis.hypot();
                if len == 0.0 {
                    continue;
                }
                let a = Projection::of_points(axis, vertices_a);
                let b = Projection::of_points(axis, vertices_b).shifted(axis.dot(rel));
                if !a.overlaps(&b) {
                    self.result = SatResult::separated(axis / len, a.distance(&b) / len);
                    return self.result;
                }
                deepest.offer(axis / len, a.overlap_depth(&b) / len);
            }
        }

        self.result = deepest.finish().unwrap_or_else(|| {
            let axis = unit_or_x(vertices_b[0].to_vec2() + rel - vertices_a[0].to_vec2());
            let a = Projection::of_points(axis, vertices_a);
            let b = Projection::of_points(axis, vertices_b).shifted(axis.dot(rel));
            along_axis(axis, &a, &b)
        });
        self.result
    }

    /// Box `pos_a + size_a` against box `pos_b + size_b`, where box B lives in a frame
    /// that `relative` maps into box A's frame.
    ///
    /// Returns `true` when the boxes are disjoint. The full outcome is kept in
    /// [`SatSolver::result`]. Zero-sized boxes act as points.
    pub fn test_box_box(
        &mut self,
        pos_a: Point,
        size_a: Size,
        pos_b: Point,
        size_b: Size,
        relative: Affine,
    ) -> bool {
        let a = box_vertices(pos_a, size_a);
        let b = box_vertices(pos_b, size_b).map(|v| relative * v);
        self.test_polygon_polygon(Point::ORIGIN, &a, Point::ORIGIN, &b)
            .has_separating_axis
    }
}

fn box_vertices(pos: Point, size: Size) -> [Point; 4] {
    [
        pos,
        pos + Vec2::new(size.width, 0.0),
        pos + Vec2::new(size.width, size.height),
        pos + Vec2::new(0.0, size.height),
    ]
}

/// Polygon against circle with a throwaway solver. See [`SatSolver::test_polygon_circle`].
pub fn test_polygon_circle(
    center_a: Point,
    vertices_a: &[Point],
    center_b: Point,
    radius: f64,
) -> SatResult {
    SatSolver::new().test_polygon_circle(center_a, vertices_a, center_b, radius)
}

/// Polygon against polygon with a throwaway solver. See [`SatSolver::test_polygon_polygon`].
pub fn test_polygon_polygon(
    center_a: Point,
    vertices_a: &[Point],
    center_b: Point,
    vertices_b: &[Point],
) -> SatResult {
    SatSolver::new().test_polygon_polygon(center_a, vertices_a, center_b, vertices_b)
}

/// Box against box with a throwaway solver; `true` when disjoint.
/// See [`SatSolver::test_box_box`].
pub fn test_box_box(
    pos_a: Point,
    size_a: Size,
    pos_b: Point,
    size_b: Size,
    relative: Affine,
) -> bool {
    SatSolver::new().test_box_box(pos_a, size_a, pos_b, size_b, relative)
}
