//! Shortest-path search over the venue graph.
//!
//! # Algorithm
//!
//! Both endpoints are snapped to their nearest graph nodes, then a plain
//! Dijkstra runs *from the destination* over the (optionally
//! accessible-only) edge set, producing the exact cost-to-destination of
//! every node in integer millimetres.  Walkways are stored as symmetric
//! directed pairs, so the reverse search yields true forward distances.
//!
//! The polyline is then recovered by a forward walk from the origin: at each
//! node, step to the smallest-`NodeId` neighbour that lies on a shortest
//! path (`edge + dist[next] == dist[cur]`) *and* from which the destination
//! is still reachable without revisiting the walk — the reachability check
//! matters only where zero-length walkways create equal-cost branches.
//! Among all tied shortest simple paths this selects the lexicographically
//! smallest node-id sequence, so identical queries always render identical
//! polylines.
//!
//! # Cost units
//!
//! All costs are **integer millimetres** (u32) internally, converted from
//! the graph's precomputed edge lengths.  Ties are therefore exact; no
//! float-comparison fuzz enters the tie-break.  `PathResult` exposes metres.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use wf_core::{GeoPoint, NodeId};

use crate::graph::VenueGraph;

/// Fixed pedestrian speed for ETA display: 4 km/h.
pub const WALKING_SPEED_M_PER_MIN: f32 = 4_000.0 / 60.0;

// ── PathResult ────────────────────────────────────────────────────────────────

/// The result of a routing query: a render-ready polyline and the summed
/// walkway length.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    /// Node coordinates in walk order.  First point is the snapped origin,
    /// last is the snapped destination.
    pub points: Vec<GeoPoint>,
    /// Sum of traversed edge lengths in metres — not the straight-line
    /// distance between the endpoints.
    pub total_distance_m: f32,
}

impl PathResult {
    /// Walk time in whole minutes at the fixed 4 km/h pedestrian speed
    /// (ceiling, so displayed ETAs never undershoot).
    pub fn eta_minutes(&self) -> u32 {
        (self.total_distance_m / WALKING_SPEED_M_PER_MIN).ceil() as u32
    }

    /// `true` if origin and destination snapped to the same node.
    pub fn is_trivial(&self) -> bool {
        self.points.len() <= 1
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Shortest path between two arbitrary coordinates.
///
/// Snaps `origin` and `destination` to their nearest graph nodes (coordinates
/// outside the venue included), then routes between them.  Returns `None`
/// when the graph is empty or when `accessible_only` is set and no
/// accessible-edge path connects the snapped endpoints — an expected
/// outcome, not an error.
pub fn find_path(
    graph: &VenueGraph,
    origin: GeoPoint,
    destination: GeoPoint,
    accessible_only: bool,
) -> Option<PathResult> {
    let from = graph.nearest_node(origin)?;
    let to = graph.nearest_node(destination)?;
    find_path_between(graph, from, to, accessible_only)
}

/// Shortest path between two already-snapped graph nodes.
///
/// Used directly when the destination is a POI whose anchor node is known,
/// bypassing the coordinate snap.
pub fn find_path_between(
    graph: &VenueGraph,
    from: NodeId,
    to: NodeId,
    accessible_only: bool,
) -> Option<PathResult> {
    let dist = cost_to(graph, to, accessible_only);
    let total_mm = dist[from.index()];
    if total_mm == u32::MAX {
        return None;
    }

    // Forward walk selecting the lexicographically smallest shortest path.
    // A candidate is committed only once the destination is known to stay
    // reachable through unvisited shortest-path nodes: a zero-length walkway
    // can tie on cost (`dist[next] == dist[cur]`) while leading into a branch
    // whose only way back out revisits the walk.
    let mut visited = vec![false; graph.node_count()];
    visited[from.index()] = true;

    let mut points = vec![graph.node_pos(from)];
    let mut cur = from;
    while cur != to {
        let remaining = dist[cur.index()];
        let mut candidates: Vec<NodeId> = graph
            .neighbors(cur, accessible_only)
            .filter_map(|(edge, n)| {
                let d = dist[n.index()];
                (d != u32::MAX
                    && !visited[n.index()]
                    && graph.edge_length_mm(edge).saturating_add(d) == remaining)
                    .then_some(n)
            })
            .collect();
        candidates.sort_unstable();
        let next = candidates
            .into_iter()
            .find(|&n| completes_route(graph, &dist, &visited, n, to, accessible_only))?;
        visited[next.index()] = true;
        points.push(graph.node_pos(next));
        cur = next;
    }

    Some(PathResult {
        points,
        total_distance_m: total_mm as f32 / 1000.0,
    })
}

/// `true` if `to` is reachable from `start` along shortest-path edges
/// (`edge + dist[next] == dist[node]`) using only unvisited nodes.
///
/// Every shortest walk contains a simple shortest path, and each of its
/// steps satisfies the equality above, so a feasible candidate always
/// exists and the forward walk terminates in at most `node_count` steps.
fn completes_route(
    graph: &VenueGraph,
    dist: &[u32],
    visited: &[bool],
    start: NodeId,
    to: NodeId,
    accessible_only: bool,
) -> bool {
    if start == to {
        return true;
    }

    let mut seen = vec![false; graph.node_count()];
    seen[start.index()] = true;
    let mut stack = vec![start];

    while let Some(node) = stack.pop() {
        let remaining = dist[node.index()];
        for (edge, next) in graph.neighbors(node, accessible_only) {
            let d = dist[next.index()];
            if d == u32::MAX
                || seen[next.index()]
                || visited[next.index()]
                || graph.edge_length_mm(edge).saturating_add(d) != remaining
            {
                continue;
            }
            if next == to {
                return true;
            }
            seen[next.index()] = true;
            stack.push(next);
        }
    }

    false
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Cost in millimetres from every node *to* `target`, `u32::MAX` where
/// unreachable.  Runs to completion (no early exit) because the forward walk
/// needs the full field.
fn cost_to(graph: &VenueGraph, target: NodeId, accessible_only: bool) -> Vec<u32> {
    let n = graph.node_count();
    let mut dist = vec![u32::MAX; n];
    dist[target.index()] = 0;

    // Min-heap: (cost, node). Reverse makes BinaryHeap (max) behave as min-heap.
    // Secondary key NodeId keeps pop order deterministic.
    let mut heap: BinaryHeap<Reverse<(u32, NodeId)>> = BinaryHeap::new();
    heap.push(Reverse((0, target)));

    while let Some(Reverse((cost, node))) = heap.pop() {
        // Skip stale heap entries.
        if cost > dist[node.index()] {
            continue;
        }

        for (edge, neighbor) in graph.neighbors(node, accessible_only) {
            let new_cost = cost.saturating_add(graph.edge_length_mm(edge));
            if new_cost < dist[neighbor.index()] {
                dist[neighbor.index()] = new_cost;
                heap.push(Reverse((new_cost, neighbor)));
            }
        }
    }

    dist
}
