// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collide-and-slide resolution of a single move.

use kurbo::Vec2;
use understory_bsp::{ColInfo, EdgeId, Plane, Tree};

use crate::actor::Actor;

/// Default tolerance for [`SlideConfig::corner_epsilon`].
pub const DEFAULT_CORNER_EPSILON: f64 = 1e-5;

/// Tuning for [`resolve_move_with`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SlideConfig {
    /// How close, as a fraction along an actor edge or as a squared distance, a hit
    /// must be to the corner that already collided to count as that same contact.
    pub corner_epsilon: f64,
}

impl Default for SlideConfig {
    fn default() -> Self {
        Self {
            corner_epsilon: DEFAULT_CORNER_EPSILON,
        }
    }
}

/// The earliest corner contact of a move.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CornerHit {
    /// Index into [`Actor::corners`].
    pub corner: usize,
    /// Where that corner's sweep hit.
    pub hit: ColInfo,
}

/// Detailed result of [`resolve_move_with`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SlideOutcome {
    /// Displacement to apply to the actor.
    pub displacement: Vec2,
    /// Scale applied by the leading-edge pass, `1.0` when nothing clipped the move.
    pub fraction: f64,
    /// Earliest opposing corner contact, if any.
    pub corner_hit: Option<CornerHit>,
    /// Edge whose vertex clipped the move during the leading-edge pass.
    pub clip_edge: Option<EdgeId>,
}

impl SlideOutcome {
    /// Whether the requested move was changed at all.
    pub fn is_blocked(&self) -> bool {
        self.corner_hit.is_some() || self.clip_edge.is_some()
    }
}

/// Corrected displacement for moving `actor` by `displacement` through `tree`.
///
/// Shorthand for [`resolve_move_with`] with the default [`SlideConfig`].
pub fn resolve_move(tree: &Tree, actor: &Actor, displacement: Vec2) -> Vec2 {
    resolve_move_with(tree, actor, displacement, &SlideConfig::default()).displacement
}

/// Resolve a move in two passes.
///
/// 1. Each corner is swept along the running displacement. A hit on a wall that faces
///    the motion removes the into-wall component for the unswept part of the sweep, so
///    motion along the wall survives.
/// 2. Each actor edge that still leads the motion is placed at its destination and
///    tested against the tree. A wall vertex that would end up inside the actor clips
///    the whole move to the point where the edge touches it. Contacts at the corner
///    that already collided in the first pass are skipped, as are wall vertices that
///    only meet the edge at one of its ends.
///
/// An empty tree never blocks.
pub fn resolve_move_with(
    tree: &Tree,
    actor: &Actor,
    displacement: Vec2,
    config: &SlideConfig,
) -> SlideOutcome {
    let corners = actor.corners();
    let eps = config.corner_epsilon;
    let mut out = displacement;
    let mut corner_hit: Option<CornerHit> = None;

    for (corner, &start) in corners.iter().enumerate() {
        let Some(hit) = tree.segment_test(start, start + out) else {
            continue;
        };
        let normal = tree.edge(hit.edge).plane.normal();
        let into = out.dot(normal);
        if into > 0.0 {
            continue;
        }
        out -= normal * ((1.0 - hit.fraction) * into);
        tracing::trace!(
            corner,
            fraction = hit.fraction,
            edge = hit.edge.index(),
            "slide corner hit"
        );
        if corner_hit.is_none_or(|c| hit.fraction < c.hit.fraction) {
            corner_hit = Some(CornerHit { corner, hit });
        }
    }

    let mut fraction = 1.0;
    let mut clip_edge = None;
    let hit_corner = corner_hit.map(|c| c.corner);

    for (prev, next) in (0..4).cycle().skip(3).zip(0..4) {
        let p1 = corners[prev];
        let p2 = corners[next];
        let plane = Plane::from_points(p1, p2);
        let lead = plane.normal().dot(out);
        if lead <= 0.0 {
            continue;
        }
        let Some(hit) = tree.segment_test(p1 + out, p2 + out) else {
            continue;
        };
        if (hit_corner == Some(prev) && hit.fraction < eps)
            || (hit_corner == Some(next) && hit.fraction > 1.0 - eps)
        {
            continue;
        }
        let edge = tree.edge(hit.edge);
        let vertex = if out.dot(edge.p1 - edge.p0) >= 0.0 {
            edge.p0
        } else {
            edge.p1
        };
        if (vertex - p1).hypot2() < eps || (vertex - p2).hypot2() < eps {
            continue;
        }
        let dist = plane.distance(vertex);
        if dist < 0.0 {
            continue;
        }
        let clipped = dist / lead;
        if clipped > 1.0 {
            continue;
        }
        // Only a vertex strictly between the edge's ends when they reach it is inside.
        let span = p2 - p1;
        let along = (vertex - (p1 + out * clipped)).dot(span) / span.hypot2();
        if along <= eps || along >= 1.0 - eps {
            continue;
        }
        tracing::trace!(
            actor_edge = next,
            fraction = clipped,
            edge = hit.edge.index(),
            "slide clipped by wall vertex"
        );
        fraction = clipped;
        clip_edge = Some(hit.edge);
        break;
    }

    SlideOutcome {
        displacement: out * fraction,
        fraction,
        corner_hit,
        clip_edge,
    }
}
