// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read-only queries over a built tree: point location and segment collision.

use alloc::vec;
use kurbo::Point;

use crate::tree::{LeafId, NodeRef, Tree};
use crate::types::{EdgeId, Side};

/// A segment query hit.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ColInfo {
    /// Position along the queried segment, `0` at its start and `1` at its end.
    pub fraction: f64,
    /// The edge that was hit.
    pub edge: EdgeId,
}

impl ColInfo {
    /// World-space hit point on the segment `start..end` this hit came from.
    pub fn point(&self, start: Point, end: Point) -> Point {
        start.lerp(end, self.fraction)
    }
}

/// Intersect segment `a0..a1` with segment `b0..b1`.
///
/// Returns the fractions `(t, s)` along each segment. `t` must lie in `[0, 1]`; `s` must
/// stay at least `epsilon` world units away from either end of `b`, so touching an
/// edge's endpoint is not a hit. Abutting walls therefore do not catch a segment running
/// along their shared face. Parallel segments never intersect.
pub fn segment_intersection(
    a0: Point,
    a1: Point,
    b0: Point,
    b1: Point,
    epsilon: f64,
) -> Option<(f64, f64)> {
    let r = a1 - a0;
    let s = b1 - b0;
    let denom = r.cross(s);
    let scale = r.hypot() * s.hypot();
    if denom.abs() <= f64::EPSILON * scale {
        return None;
    }
    let qp = b0 - a0;
    let t = qp.cross(s) / denom;
    let u = qp.cross(r) / denom;
    let slack = epsilon / s.hypot();
    if (0.0..=1.0).contains(&t) && (slack..=1.0 - slack).contains(&u) {
        Some((t, u))
    } else {
        None
    }
}

impl Tree {
    /// Find the leaf whose cell contains `point`.
    ///
    /// Points on a splitting plane go to the front side. Returns `None` for an empty tree.
    pub fn leaf_at(&self, point: Point) -> Option<LeafId> {
        let epsilon = self.config.epsilon;
        let mut current = self.root?;
        loop {
            match current {
                NodeRef::Leaf(id) => return Some(id),
                NodeRef::Internal(id) => {
                    let node = &self.nodes[id.0];
                    current = match self.plane(id).side(point, epsilon) {
                        Side::Back => node.back?,
                        _ => node.front?,
                    };
                }
            }
        }
    }

    /// First edge hit by the segment `start..end`.
    ///
    /// Cells are visited in travel order: the side holding `start` before the side
    /// holding `end`. Within a leaf, the first edge in [`Leaf::edges`](crate::Leaf::edges)
    /// order that intersects wins, which is not necessarily the nearest one.
    pub fn segment_test(&self, start: Point, end: Point) -> Option<ColInfo> {
        let epsilon = self.config.epsilon;
        let mut stack = vec![self.root?];
        while let Some(current) = stack.pop() {
            match current {
                NodeRef::Leaf(id) => {
                    for &edge_id in &self.leaves[id.0].edges {
                        let edge = &self.edges[edge_id.0];
                        if let Some((fraction, _)) =
                            segment_intersection(start, end, edge.p0, edge.p1, epsilon)
                        {
                            return Some(ColInfo {
                                fraction,
                                edge: edge_id,
                            });
                        }
                    }
                }
                NodeRef::Internal(id) => {
                    let node = &self.nodes[id.0];
                    let plane = self.plane(id);
                    let s0 = plane.side(start, epsilon);
                    let s1 = plane.side(end, epsilon);
                    let (first, second) = match (s0, s1) {
                        (Side::On, Side::Back) => (node.front, node.back),
                        (Side::On, _) => (node.front, None),
                        (a, b) if a == b => match a {
                            Side::Front => (node.front, None),
                            _ => (node.back, None),
                        },
                        (Side::Front, _) => (node.front, node.back),
                        _ => (node.back, node.front),
                    };
                    // Stack order: `first` must be popped before `second`.
                    stack.extend(second);
                    stack.extend(first);
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PolyArea;
    use alloc::vec::Vec;
    use kurbo::Rect;

    fn square_world() -> Tree {
        let mut tree = Tree::new();
        tree.build(
            &[PolyArea::from_rect(Rect::new(4.0, 4.0, 6.0, 6.0))],
            Rect::new(0.0, 0.0, 10.0, 10.0),
        );
        tree
    }

    #[test]
    fn crossing_segments_report_both_fractions() {
        let hit = segment_intersection(
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(1.0, -1.0),
            Point::new(1.0, 3.0),
            0.0,
        );
        assert_eq!(hit, Some((0.25, 0.25)));
    }

    #[test]
    fn parallel_segments_do_not_intersect() {
        let hit = segment_intersection(
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            1e-3,
        );
        assert_eq!(hit, None);
    }

    #[test]
    fn edge_end_band_is_in_world_units() {
        let a0 = Point::new(0.0, 0.0);
        let a1 = Point::new(4.0, 0.0);
        // Edge ends 0.0005 below the query segment.
        let b0 = Point::new(2.0, 10.0);
        let b1 = Point::new(2.0, -0.0005);
        assert!(segment_intersection(a0, a1, b0, b1, 1e-3).is_none());
        assert!(segment_intersection(a0, a1, b0, b1, 1e-4).is_some());
    }

    #[test]
    fn touching_an_edge_endpoint_is_not_a_hit() {
        let a0 = Point::new(0.0, 0.0);
        let a1 = Point::new(4.0, 0.0);
        let b0 = Point::new(2.0, 0.0);
        let b1 = Point::new(2.0, 5.0);
        assert_eq!(segment_intersection(a0, a1, b0, b1, 1e-3), None);
        assert_eq!(segment_intersection(a0, a1, b1, b0, 1e-3), None);
        assert_eq!(segment_intersection(a0, a1, b0, b1, 0.0), Some((0.5, 0.0)));
    }

    #[test]
    fn segment_along_a_seam_between_abutting_boxes_misses() {
        let mut tree = Tree::new();
        tree.build(
            &[
                PolyArea::from_rect(Rect::new(4.0, 2.0, 6.0, 5.0)),
                PolyArea::from_rect(Rect::new(4.0, 5.0, 6.0, 8.0)),
            ],
            Rect::new(0.0, 0.0, 10.0, 10.0),
        );
        // Runs up the shared left face, crossing the seam at its corner.
        assert_eq!(
            tree.segment_test(Point::new(4.0, 3.0), Point::new(4.0, 7.0)),
            None
        );
        // A segment through the middle of the seam still hits.
        let hit = tree
            .segment_test(Point::new(5.0, 0.5), Point::new(5.0, 9.5))
            .expect("crosses the lower box");
        assert_eq!(tree.edge(hit.edge).owner, Some(0));
    }

    #[test]
    fn first_listed_edge_wins_within_a_leaf() {
        let mut tree = Tree::new();
        tree.build(&[], Rect::new(0.0, 0.0, 10.0, 10.0));
        let leaf = tree.leaf(LeafId(0));
        assert_eq!(leaf.edges()[0], EdgeId(0));
        assert_eq!(leaf.edges()[2], EdgeId(2));

        // Crosses the right boundary (edge 2) first, then the left one (edge 0).
        let start = Point::new(15.0, 5.0);
        let end = Point::new(-5.0, 5.0);
        let right = tree.edge(EdgeId(2));
        let nearer = segment_intersection(start, end, right.p0, right.p1, 1e-3);
        assert_eq!(nearer.map(|(t, _)| t), Some(0.25));

        let hit = tree.segment_test(start, end).expect("crosses the world");
        assert_eq!(hit.edge, EdgeId(0), "leaf order wins over distance");
        assert!((hit.fraction - 0.75).abs() < 1e-12);
    }

    #[test]
    fn segment_hits_square_left_face() {
        let tree = square_world();
        let start = Point::new(0.0, 5.0);
        let end = Point::new(10.0, 5.0);
        let hit = tree.segment_test(start, end).expect("segment crosses the square");
        assert!((hit.fraction - 0.4).abs() < 1e-9, "fraction {}", hit.fraction);
        let edge = tree.edge(hit.edge);
        assert_eq!(edge.owner, Some(0));
        assert!((hit.point(start, end).x - 4.0).abs() < 1e-9);
    }

    #[test]
    fn segment_from_the_right_hits_right_face() {
        let tree = square_world();
        let hit = tree
            .segment_test(Point::new(9.0, 5.5), Point::new(1.0, 5.5))
            .expect("segment crosses the square");
        assert!((hit.fraction - 0.375).abs() < 1e-9, "fraction {}", hit.fraction);
        assert!(tree.edge(hit.edge).plane.normal().x > 0.0);
    }

    #[test]
    fn segment_in_free_space_misses() {
        let tree = square_world();
        assert_eq!(
            tree.segment_test(Point::new(1.0, 1.0), Point::new(3.0, 8.0)),
            None
        );
        assert_eq!(
            tree.segment_test(Point::new(1.0, 8.0), Point::new(9.0, 8.0)),
            None
        );
    }

    #[test]
    fn segment_leaving_the_world_hits_the_boundary() {
        let tree = square_world();
        let hit = tree
            .segment_test(Point::new(2.0, 2.0), Point::new(-2.0, 2.0))
            .expect("boundary is solid");
        assert!(tree.edge(hit.edge).is_boundary());
        assert!((hit.fraction - 0.5).abs() < 1e-9);
    }

    #[test]
    fn empty_tree_answers_nothing() {
        let tree = Tree::new();
        assert_eq!(tree.leaf_at(Point::new(1.0, 1.0)), None);
        assert_eq!(
            tree.segment_test(Point::new(0.0, 0.0), Point::new(1.0, 1.0)),
            None
        );
    }

    #[test]
    fn leaf_at_is_stable_and_consistent_with_ancestors() {
        let tree = square_world();
        let probes = [
            Point::new(1.0, 1.0),
            Point::new(5.0, 5.0),
            Point::new(8.5, 2.5),
            Point::new(5.0, 9.0),
            Point::new(4.0, 5.0),
        ];
        for p in probes {
            let leaf = tree.leaf_at(p).expect("built tree");
            assert_eq!(tree.leaf_at(p), Some(leaf));
            let path: Vec<_> = tree.ancestors(NodeRef::Leaf(leaf)).collect();
            for (node, side) in path {
                let found = tree.plane(node).side(p, tree.config().epsilon);
                match side {
                    Side::Front => assert_ne!(found, Side::Back, "{p:?} strayed behind"),
                    _ => assert_ne!(found, Side::Front, "{p:?} strayed in front"),
                }
            }
        }
    }
}
