// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree storage: arenas of nodes, leaves, and edges addressed by index.

use alloc::vec::Vec;

use crate::types::{BuildConfig, Edge, EdgeId, Plane, Side};

/// Handle of an internal (splitting) node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in [`Tree::nodes`].
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Handle of a leaf (convex cell).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct LeafId(pub(crate) usize);

impl LeafId {
    /// Position of the leaf in [`Tree::leaves`].
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Reference to either kind of tree node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeRef {
    /// An internal node with a splitting plane.
    Internal(NodeId),
    /// A terminal convex cell.
    Leaf(LeafId),
}

/// An internal node: a splitting edge and the two half-spaces it separates.
#[derive(Clone, Debug)]
pub struct Node {
    pub(crate) splitter: EdgeId,
    pub(crate) front: Option<NodeRef>,
    pub(crate) back: Option<NodeRef>,
    pub(crate) parent: Option<NodeId>,
}

impl Node {
    /// The edge whose plane splits this node.
    pub fn splitter(&self) -> EdgeId {
        self.splitter
    }

    /// Subtree in front of the splitting plane.
    pub fn front(&self) -> Option<NodeRef> {
        self.front
    }

    /// Subtree behind the splitting plane.
    pub fn back(&self) -> Option<NodeRef> {
        self.back
    }

    /// Parent node, `None` at the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

/// A convex cell and the edges confined to it. A leaf may hold no edges.
#[derive(Clone, Debug)]
pub struct Leaf {
    pub(crate) edges: Vec<EdgeId>,
    pub(crate) parent: Option<NodeId>,
}

impl Leaf {
    /// Edges in the cell, in the order they are tested by segment queries.
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Parent node, `None` when the whole tree is a single leaf.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

/// Summary of a completed build.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Edges registered from polygons and the boundary, before any splitting.
    pub input_edges: usize,
    /// Total edges after building, including split pieces.
    pub edges: usize,
    /// Internal nodes.
    pub nodes: usize,
    /// Leaves.
    pub leaves: usize,
    /// Number of edges cut by a splitting plane.
    pub splits: usize,
    /// Depth of the deepest leaf; a single-leaf tree has depth 0.
    pub depth: usize,
}

/// A 2D binary space partition over polygon obstacles.
///
/// Built once by [`Tree::build`]; a later build replaces everything. Handles returned
/// by one build are meaningless after the next.
pub struct Tree {
    pub(crate) config: BuildConfig,
    pub(crate) edges: Vec<Edge>,
    pub(crate) nodes: Vec<Node>,
    pub(crate) leaves: Vec<Leaf>,
    pub(crate) root: Option<NodeRef>,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Tree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tree")
            .field("config", &self.config)
            .field("edges", &self.edges.len())
            .field("nodes", &self.nodes.len())
            .field("leaves", &self.leaves.len())
            .field("root", &self.root)
            .finish()
    }
}

impl Tree {
    /// Create an empty tree with the default [`BuildConfig`].
    pub fn new() -> Self {
        Self::with_config(BuildConfig::default())
    }

    /// Create an empty tree with the given configuration.
    pub fn with_config(config: BuildConfig) -> Self {
        Self {
            config,
            edges: Vec::new(),
            nodes: Vec::new(),
            leaves: Vec::new(),
            root: None,
        }
    }

    /// Configuration used by builds and queries.
    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Drop all nodes, leaves, and edges.
    pub fn clear(&mut self) {
        self.edges.clear();
        self.nodes.clear();
        self.leaves.clear();
        self.root = None;
    }

    /// Whether the tree has not been built (or was cleared).
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Root of the tree.
    pub fn root(&self) -> Option<NodeRef> {
        self.root
    }

    /// All edges: original edges first, then split pieces in creation order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Internal nodes in creation (pre-)order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Leaves in creation order.
    pub fn leaves(&self) -> &[Leaf] {
        &self.leaves
    }

    /// Handles of all leaves, in creation order.
    pub fn leaf_ids(&self) -> impl Iterator<Item = LeafId> + '_ {
        (0..self.leaves.len()).map(LeafId)
    }

    /// Look up an edge.
    ///
    /// # Panics
    ///
    /// Panics if the handle is not from the current build.
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.0]
    }

    /// Look up an internal node.
    ///
    /// # Panics
    ///
    /// Panics if the handle is not from the current build.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Look up a leaf.
    ///
    /// # Panics
    ///
    /// Panics if the handle is not from the current build.
    pub fn leaf(&self, id: LeafId) -> &Leaf {
        &self.leaves[id.0]
    }

    /// The splitting plane of an internal node.
    pub fn plane(&self, id: NodeId) -> &Plane {
        &self.edges[self.nodes[id.0].splitter.0].plane
    }

    /// Parent of any node.
    pub fn parent(&self, node: NodeRef) -> Option<NodeId> {
        match node {
            NodeRef::Internal(id) => self.nodes[id.0].parent,
            NodeRef::Leaf(id) => self.leaves[id.0].parent,
        }
    }

    /// Walk from `node` to the root, yielding each ancestor and the side of its plane
    /// the walk came from.
    pub fn ancestors(&self, node: NodeRef) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            current: node,
        }
    }
}

/// Iterator returned by [`Tree::ancestors`].
#[derive(Debug)]
pub struct Ancestors<'a> {
    tree: &'a Tree,
    current: NodeRef,
}

impl Iterator for Ancestors<'_> {
    type Item = (NodeId, Side);

    fn next(&mut self) -> Option<Self::Item> {
        let parent = self.tree.parent(self.current)?;
        let side = if self.tree.node(parent).front == Some(self.current) {
            Side::Front
        } else {
            Side::Back
        };
        self.current = NodeRef::Internal(parent);
        Some((parent, side))
    }
}
