// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree construction: edge registration, recursive partitioning, and splitter choice.

use alloc::vec::Vec;
use kurbo::{Point, Rect};

use crate::BuildError;
use crate::tree::{BuildStats, Leaf, LeafId, Node, NodeId, NodeRef, Tree};
use crate::types::{Edge, EdgeId, PolyArea, SegmentSplit, Side};

impl Tree {
    /// Build the tree over `polygons` inside `bounds`, replacing any previous contents.
    ///
    /// # Panics
    ///
    /// Panics if a polygon has fewer than three vertices, if a vertex lies outside
    /// `bounds`, or if `bounds` is empty. Use [`Tree::try_build`] to get the error instead.
    pub fn build(&mut self, polygons: &[PolyArea], bounds: Rect) -> BuildStats {
        match self.try_build(polygons, bounds) {
            Ok(stats) => stats,
            Err(err) => panic!("invalid BSP input: {err}"),
        }
    }

    /// Build the tree, reporting malformed input as an error.
    ///
    /// On error the tree is left empty.
    pub fn try_build(
        &mut self,
        polygons: &[PolyArea],
        bounds: Rect,
    ) -> Result<BuildStats, BuildError> {
        self.clear();
        validate(polygons, bounds)?;

        for (index, poly) in polygons.iter().enumerate() {
            for (a, b) in poly.segments() {
                self.edges.push(Edge::new(a, b, Some(index)));
            }
        }
        // Clockwise, so boundary normals face into the world.
        let corners = [
            Point::new(bounds.x0, bounds.y0),
            Point::new(bounds.x0, bounds.y1),
            Point::new(bounds.x1, bounds.y1),
            Point::new(bounds.x1, bounds.y0),
        ];
        for (&a, &b) in corners.iter().zip(corners.iter().cycle().skip(1)) {
            self.edges.push(Edge::new(a, b, None));
        }

        let mut stats = BuildStats {
            input_edges: self.edges.len(),
            ..BuildStats::default()
        };
        let all: Vec<EdgeId> = (0..self.edges.len()).map(EdgeId).collect();
        self.root = self.construct(all, None, 0, &mut stats);

        stats.edges = self.edges.len();
        stats.nodes = self.nodes.len();
        stats.leaves = self.leaves.len();
        tracing::debug!(
            polygons = polygons.len(),
            input_edges = stats.input_edges,
            edges = stats.edges,
            nodes = stats.nodes,
            leaves = stats.leaves,
            splits = stats.splits,
            depth = stats.depth,
            "built bsp tree"
        );
        Ok(stats)
    }

    fn construct(
        &mut self,
        indices: Vec<EdgeId>,
        parent: Option<NodeId>,
        depth: usize,
        stats: &mut BuildStats,
    ) -> Option<NodeRef> {
        if indices.is_empty() {
            return None;
        }

        let Some(splitter) = self.choose_splitter(&indices) else {
            let id = LeafId(self.leaves.len());
            tracing::trace!(leaf = id.0, edges = indices.len(), depth, "bsp leaf");
            stats.depth = stats.depth.max(depth);
            self.leaves.push(Leaf {
                edges: indices,
                parent,
            });
            return Some(NodeRef::Leaf(id));
        };

        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            splitter,
            front: None,
            back: None,
            parent,
        });
        tracing::trace!(node = id.0, splitter = splitter.0, depth, "bsp split");

        let plane = self.edges[splitter.0].plane;
        let epsilon = self.config.epsilon;
        let mut fronts = Vec::new();
        let mut backs = Vec::new();
        for index in indices {
            let edge = self.edges[index.0];
            match plane.split_segment(edge.p0, edge.p1, epsilon) {
                SegmentSplit::Whole(Side::Front) => fronts.push(index),
                SegmentSplit::Whole(Side::Back) => backs.push(index),
                SegmentSplit::Whole(_) => {
                    if plane.normal().dot(edge.plane.normal()) > 0.0 {
                        fronts.push(index);
                    } else {
                        backs.push(index);
                    }
                }
                SegmentSplit::Split { front, back } => {
                    stats.splits += 1;
                    fronts.push(self.push_edge(edge.piece(front)));
                    backs.push(self.push_edge(edge.piece(back)));
                }
            }
        }

        let front = self.construct(fronts, Some(id), depth + 1, stats);
        let back = self.construct(backs, Some(id), depth + 1, stats);
        let node = &mut self.nodes[id.0];
        node.front = front;
        node.back = back;
        Some(NodeRef::Internal(id))
    }

    fn push_edge(&mut self, edge: Edge) -> EdgeId {
        self.edges.push(edge);
        EdgeId(self.edges.len() - 1)
    }

    /// Least-damage splitter: minimize `|front - back| + penalty * splits`.
    ///
    /// A candidate that cuts nothing and leaves one side empty would not partition the
    /// set and is skipped. `None` means the set is a leaf.
    fn choose_splitter(&self, indices: &[EdgeId]) -> Option<EdgeId> {
        let epsilon = self.config.epsilon;
        let penalty = self.config.split_penalty as usize;
        let mut best: Option<(usize, EdgeId)> = None;

        for &candidate in indices {
            let plane = self.edges[candidate.0].plane;
            if plane.is_degenerate() {
                continue;
            }

            let mut front = 0_usize;
            let mut back = 0_usize;
            let mut split = 0_usize;
            for &other in indices {
                if other == candidate {
                    continue;
                }
                let edge = &self.edges[other.0];
                match plane.classify_segment(edge.p0, edge.p1, epsilon) {
                    Side::Front => front += 1,
                    Side::Back => back += 1,
                    Side::Split => split += 1,
                    Side::On => {}
                }
            }

            if split == 0 && (front == 0 || back == 0) {
                continue;
            }

            let score = front.abs_diff(back) + penalty * split;
            if best.map(|(s, _)| score < s).unwrap_or(true) {
                best = Some((score, candidate));
            }
        }
        best.map(|(_, id)| id)
    }
}

fn validate(polygons: &[PolyArea], bounds: Rect) -> Result<(), BuildError> {
    if !(bounds.x0 < bounds.x1 && bounds.y0 < bounds.y1) {
        return Err(BuildError::InvalidBounds { bounds });
    }
    for (polygon, poly) in polygons.iter().enumerate() {
        if poly.len() < 3 {
            return Err(BuildError::DegeneratePolygon {
                polygon,
                vertices: poly.len(),
            });
        }
        for (vertex, &point) in poly.vertices().iter().enumerate() {
            let inside = bounds.x0 <= point.x
                && point.x <= bounds.x1
                && bounds.y0 <= point.y
                && point.y <= bounds.y1;
            if !inside {
                return Err(BuildError::VertexOutOfBounds {
                    polygon,
                    vertex,
                    point,
                });
            }
        }
    }
    Ok(())
}
