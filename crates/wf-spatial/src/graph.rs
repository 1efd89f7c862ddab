//! Venue graph representation and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing edges.
//! Given a `NodeId n`, its outgoing edges occupy the slice:
//!
//! ```text
//! edges[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! All edge arrays (`edge_to`, `edge_length_mm`, `edge_accessible`) are
//! sorted by source node and indexed by `EdgeId`.  Iteration over a node's
//! neighbours is therefore a contiguous memory scan — ideal for Dijkstra's
//! inner loop.
//!
//! Edge lengths are supplied in metres but stored as **integer millimetres**
//! so path costs accumulate exactly and ties between equal-length routes are
//! exact rather than float-fuzzy.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps `(lat, lon)` to the nearest `NodeId`.  Used
//! to snap arbitrary coordinates (live visitor fixes, tapped map positions)
//! to graph nodes before routing.
//!
//! # Immutability
//!
//! A built `VenueGraph` is strictly read-only: every invariant is checked in
//! [`VenueGraphBuilder::build`] and queries never mutate, so one instance can
//! be shared across threads without locking.

use rstar::{PointDistance, RTree, RTreeObject, AABB};
use rustc_hash::{FxHashMap, FxHashSet};

use wf_core::{EdgeId, GeoPoint, NodeId, PoiId};

use crate::error::{GraphError, GraphResult};

/// Longest representable edge: u32 millimetres caps out near 4 295 km.
const MAX_EDGE_LENGTH_M: f32 = 4_000_000.0;

// ── R-tree node entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index: a 2-D `[lat, lon]` point with
/// the associated `NodeId`.
#[derive(Clone)]
struct NodeEntry {
    point: [f32; 2], // [lat, lon]
    id: NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    /// Squared Euclidean distance in lat/lon space.  Sufficient for
    /// nearest-node queries at venue scale (error < 0.1 % at ≤ 60° lat).
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

// ── VenueGraph ────────────────────────────────────────────────────────────────

/// Immutable walkway graph in CSR format plus a spatial index for snapping
/// and the POI-to-node binding table.
///
/// Construct via [`VenueGraphBuilder`]; `build()` rejects malformed venue
/// data so queries can assume a valid graph.
pub struct VenueGraph {
    /// Geographic position of each node.  Indexed by `NodeId`.
    node_pos: Vec<GeoPoint>,

    /// CSR row pointer.  Outgoing edges of node `n` are at EdgeIds
    /// `node_out_start[n] .. node_out_start[n+1]`.  Length = `node_count + 1`.
    node_out_start: Vec<u32>,

    /// Destination node of each edge.
    edge_to: Vec<NodeId>,

    /// Length of each edge in millimetres.
    edge_length_mm: Vec<u32>,

    /// `false` for edges unusable by mobility-constrained visitors (stairs,
    /// rough surfaces).  The accessible-only route filter excludes these.
    edge_accessible: Vec<bool>,

    /// Which node anchors each POI.
    poi_nodes: FxHashMap<PoiId, NodeId>,

    spatial_idx: RTree<NodeEntry>,
}

impl VenueGraph {
    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_pos.is_empty()
    }

    /// Position of a node.  `id` must come from this graph's builder.
    #[inline]
    pub fn node_pos(&self, id: NodeId) -> GeoPoint {
        self.node_pos[id.index()]
    }

    /// Length of an edge in millimetres (the exact routing cost unit).
    #[inline]
    pub fn edge_length_mm(&self, id: EdgeId) -> u32 {
        self.edge_length_mm[id.index()]
    }

    /// Length of an edge in metres.
    #[inline]
    pub fn edge_length_m(&self, id: EdgeId) -> f32 {
        self.edge_length_mm[id.index()] as f32 / 1000.0
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over `(EdgeId, destination)` for all outgoing edges of
    /// `node`.  With `accessible_only` set, edges marked non-accessible are
    /// skipped.
    ///
    /// This is a contiguous index scan — no heap allocation.
    #[inline]
    pub fn neighbors(
        &self,
        node: NodeId,
        accessible_only: bool,
    ) -> impl Iterator<Item = (EdgeId, NodeId)> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        (start..end).filter_map(move |i| {
            if accessible_only && !self.edge_accessible[i] {
                return None;
            }
            Some((EdgeId(i as u32), self.edge_to[i]))
        })
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// Snap an arbitrary coordinate to the nearest graph node.
    ///
    /// Coordinates far outside the venue are accepted and snapped too; the
    /// resulting large distances are the caller's signal, not an error here.
    /// Returns `None` only if the graph has no nodes.
    pub fn nearest_node(&self, pos: GeoPoint) -> Option<NodeId> {
        self.spatial_idx
            .nearest_neighbor(&[pos.lat, pos.lon])
            .map(|e| e.id)
    }

    /// Up to `k` nearest nodes to `pos`, sorted by ascending distance.
    pub fn k_nearest_nodes(&self, pos: GeoPoint, k: usize) -> Vec<NodeId> {
        self.spatial_idx
            .nearest_neighbor_iter(&[pos.lat, pos.lon])
            .take(k)
            .map(|e| e.id)
            .collect()
    }

    // ── POI bindings ──────────────────────────────────────────────────────

    /// The node anchoring the given POI, if the POI is bound in this graph.
    pub fn poi_node(&self, poi: PoiId) -> Option<NodeId> {
        self.poi_nodes.get(&poi).copied()
    }

    /// Iterator over every `(PoiId, NodeId)` binding, in no particular order.
    pub fn poi_bindings(&self) -> impl Iterator<Item = (PoiId, NodeId)> + '_ {
        self.poi_nodes.iter().map(|(&poi, &node)| (poi, node))
    }
}

// ── VenueGraphBuilder ─────────────────────────────────────────────────────────

/// Construct a [`VenueGraph`] incrementally, then call [`build`](Self::build).
///
/// The builder accepts waypoints, POI anchors, and walkways in any order.
/// `build()` validates the dataset (duplicate edges, invalid lengths,
/// duplicate POI bindings, POI connectivity), sorts edges by source node,
/// constructs the CSR arrays, and bulk-loads the R-tree.
///
/// Walkways are bidirectional: each [`add_walkway`](Self::add_walkway) call
/// produces two directed edges with identical length and accessibility.
///
/// # Example
///
/// ```
/// use wf_core::{GeoPoint, PoiId};
/// use wf_spatial::VenueGraphBuilder;
///
/// let mut b = VenueGraphBuilder::new();
/// let gate = b.add_poi_node(PoiId(1), GeoPoint::new(25.6690, -100.2500));
/// let fork = b.add_waypoint(GeoPoint::new(25.6695, -100.2495));
/// b.add_walkway(gate, fork, 75.0, true);
/// let graph = b.build().unwrap();
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 2); // bidirectional
/// ```
pub struct VenueGraphBuilder {
    nodes:        Vec<GeoPoint>,
    raw_edges:    Vec<RawEdge>,
    poi_bindings: Vec<(PoiId, NodeId)>,
}

struct RawEdge {
    from:       NodeId,
    to:         NodeId,
    length_m:   f32,
    accessible: bool,
}

impl VenueGraphBuilder {
    pub fn new() -> Self {
        Self { nodes: Vec::new(), raw_edges: Vec::new(), poi_bindings: Vec::new() }
    }

    /// Pre-allocate for the expected number of nodes and walkways to reduce
    /// reallocations when bulk-loading the venue dataset.
    pub fn with_capacity(nodes: usize, walkways: usize) -> Self {
        Self {
            nodes:        Vec::with_capacity(nodes),
            raw_edges:    Vec::with_capacity(walkways * 2),
            poi_bindings: Vec::new(),
        }
    }

    /// Add an unnamed path waypoint and return its `NodeId` (sequential
    /// from 0).
    pub fn add_waypoint(&mut self, pos: GeoPoint) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(pos);
        id
    }

    /// Add a node and bind a POI to it in one step.
    pub fn add_poi_node(&mut self, poi: PoiId, pos: GeoPoint) -> NodeId {
        let node = self.add_waypoint(pos);
        self.bind_poi(poi, node);
        node
    }

    /// Bind a POI to an existing node.  Each POI id may be bound once;
    /// several POIs may share one node (e.g. a kiosk cluster).
    pub fn bind_poi(&mut self, poi: PoiId, node: NodeId) {
        self.poi_bindings.push((poi, node));
    }

    /// Add a bidirectional walkway between `a` and `b`.
    ///
    /// - `length_m`: physical length in metres (≥ 0, finite).
    /// - `accessible`: `true` if traversable by mobility-constrained
    ///   visitors (ramps, smooth surfaces).
    pub fn add_walkway(&mut self, a: NodeId, b: NodeId, length_m: f32, accessible: bool) {
        self.raw_edges.push(RawEdge { from: a, to: b, length_m, accessible });
        self.raw_edges.push(RawEdge { from: b, to: a, length_m, accessible });
    }

    /// Look up the position of a node added earlier (used by data layers to
    /// compute walkway lengths between adjacent waypoints).
    pub fn node_pos(&self, id: NodeId) -> GeoPoint {
        self.nodes[id.index()]
    }

    pub fn node_count(&self) -> usize { self.nodes.len() }
    pub fn walkway_count(&self) -> usize { self.raw_edges.len() / 2 }

    /// Consume the builder and produce a [`VenueGraph`].
    ///
    /// # Errors
    ///
    /// Any malformed venue data is fatal here, not during routing:
    ///
    /// - [`GraphError::DuplicateEdge`] — two edges between the same ordered
    ///   node pair (includes a walkway added twice).
    /// - [`GraphError::InvalidLength`] — negative, non-finite, or
    ///   unrepresentably long edge.
    /// - [`GraphError::UnknownNode`] — an edge or POI binding referencing a
    ///   node this builder never created.
    /// - [`GraphError::DuplicatePoiBinding`] — a POI bound to two nodes.
    /// - [`GraphError::PoiDisconnected`] — a POI that the unrestricted graph
    ///   does not connect to the other POIs.  (The accessible-only subgraph
    ///   is allowed to be disconnected.)
    pub fn build(self) -> GraphResult<VenueGraph> {
        let node_count = self.nodes.len();
        let edge_count = self.raw_edges.len();

        // ── Edge validation ───────────────────────────────────────────────
        let mut seen_pairs: FxHashSet<(u32, u32)> =
            FxHashSet::with_capacity_and_hasher(edge_count, Default::default());
        for e in &self.raw_edges {
            if e.from.index() >= node_count {
                return Err(GraphError::UnknownNode(e.from));
            }
            if e.to.index() >= node_count {
                return Err(GraphError::UnknownNode(e.to));
            }
            if !e.length_m.is_finite() || e.length_m < 0.0 || e.length_m > MAX_EDGE_LENGTH_M {
                return Err(GraphError::InvalidLength {
                    from: e.from,
                    to: e.to,
                    length_m: e.length_m,
                });
            }
            if !seen_pairs.insert((e.from.0, e.to.0)) {
                return Err(GraphError::DuplicateEdge { from: e.from, to: e.to });
            }
        }

        // ── POI binding validation ────────────────────────────────────────
        let mut poi_nodes: FxHashMap<PoiId, NodeId> =
            FxHashMap::with_capacity_and_hasher(self.poi_bindings.len(), Default::default());
        for &(poi, node) in &self.poi_bindings {
            if node.index() >= node_count {
                return Err(GraphError::UnknownNode(node));
            }
            if poi_nodes.insert(poi, node).is_some() {
                return Err(GraphError::DuplicatePoiBinding(poi));
            }
        }

        // ── CSR construction ──────────────────────────────────────────────
        // Sort edges by source node so each node's edges are contiguous.
        let mut raw = self.raw_edges;
        raw.sort_unstable_by_key(|e| e.from.0);

        let edge_to: Vec<NodeId> = raw.iter().map(|e| e.to).collect();
        let edge_length_mm: Vec<u32> = raw
            .iter()
            .map(|e| (e.length_m * 1000.0).round() as u32)
            .collect();
        let edge_accessible: Vec<bool> = raw.iter().map(|e| e.accessible).collect();

        let mut node_out_start = vec![0u32; node_count + 1];
        for e in &raw {
            node_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, edge_count);

        // ── POI connectivity over the unrestricted graph ──────────────────
        check_poi_connectivity(&node_out_start, &edge_to, &poi_nodes, node_count)?;

        // Bulk-load R-tree for O(N log N) construction (faster than N inserts).
        let entries: Vec<NodeEntry> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, &pos)| NodeEntry {
                point: [pos.lat, pos.lon],
                id: NodeId(i as u32),
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        Ok(VenueGraph {
            node_pos: self.nodes,
            node_out_start,
            edge_to,
            edge_length_mm,
            edge_accessible,
            poi_nodes,
            spatial_idx,
        })
    }
}

impl Default for VenueGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// BFS from one POI node over all edges (accessibility ignored); every other
/// POI node must be reached.
fn check_poi_connectivity(
    node_out_start: &[u32],
    edge_to: &[NodeId],
    poi_nodes: &FxHashMap<PoiId, NodeId>,
    node_count: usize,
) -> GraphResult<()> {
    let Some((_, &start)) = poi_nodes.iter().next() else {
        return Ok(()); // no POIs, nothing to connect
    };

    let mut visited = vec![false; node_count];
    let mut queue = std::collections::VecDeque::new();
    visited[start.index()] = true;
    queue.push_back(start);

    while let Some(node) = queue.pop_front() {
        let lo = node_out_start[node.index()] as usize;
        let hi = node_out_start[node.index() + 1] as usize;
        for &next in &edge_to[lo..hi] {
            if !visited[next.index()] {
                visited[next.index()] = true;
                queue.push_back(next);
            }
        }
    }

    for (&poi, &node) in poi_nodes {
        if !visited[node.index()] {
            return Err(GraphError::PoiDisconnected { poi, node });
        }
    }
    Ok(())
}
