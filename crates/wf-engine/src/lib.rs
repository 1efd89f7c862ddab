//! `wf-engine` — the query surface of the venue wayfinding core.
//!
//! [`WayfindEngine`] owns the immutable [`VenueGraph`] and the POI
//! collection, validates at construction that the two agree (every POI bound
//! to a graph node and vice versa), and exposes the operations the
//! surrounding application calls: distance, shortest path, proximity
//! ranking, and nearest-of-category.
//!
//! Build the engine once at startup, before handing it to any worker; after
//! that it is strictly read-only (`Send + Sync`, no interior mutability) and
//! may serve any number of concurrent callers without locking.  Every query
//! computes fresh results — nothing is cached across location changes.

use rustc_hash::FxHashSet;
use thiserror::Error;

use wf_core::{GeoPoint, Poi, PoiCategory, PoiId};
use wf_spatial::{
    find_path, find_path_between, nearest_of_category, rank_by_distance,
    rank_within_categories, PathResult, RankedPoi, VenueGraph,
};


// ── Errors ────────────────────────────────────────────────────────────────────

/// Venue-dataset mismatches between the POI collection and the graph.
/// Fatal at [`WayfindEngine::new`] time; queries never produce errors.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("duplicate POI id {0} in the POI collection")]
    DuplicatePoi(PoiId),

    #[error("POI {0} has no node in the venue graph")]
    UnboundPoi(PoiId),

    #[error("graph binds POI {0} but the POI collection has no such record")]
    UnknownPoiBinding(PoiId),
}

pub type EngineResult<T> = Result<T, EngineError>;

// ── WayfindEngine ─────────────────────────────────────────────────────────────

/// Immutable wayfinding engine: venue graph + POI collection.
pub struct WayfindEngine {
    graph: VenueGraph,
    pois: Vec<Poi>,
}

impl WayfindEngine {
    /// Compose a validated engine from a built graph and the loaded POIs.
    ///
    /// # Errors
    ///
    /// Rejects datasets where the POI collection and the graph's POI
    /// bindings disagree, so every query can assume the id↔node invariant.
    pub fn new(graph: VenueGraph, pois: Vec<Poi>) -> EngineResult<Self> {
        let mut ids: FxHashSet<PoiId> =
            FxHashSet::with_capacity_and_hasher(pois.len(), Default::default());
        for poi in &pois {
            if !ids.insert(poi.id) {
                return Err(EngineError::DuplicatePoi(poi.id));
            }
            if graph.poi_node(poi.id).is_none() {
                return Err(EngineError::UnboundPoi(poi.id));
            }
        }
        for (poi, _) in graph.poi_bindings() {
            if !ids.contains(&poi) {
                return Err(EngineError::UnknownPoiBinding(poi));
            }
        }
        Ok(Self { graph, pois })
    }

    /// The venue's POI collection, in load order.
    pub fn pois(&self) -> &[Poi] {
        &self.pois
    }

    /// The underlying graph, for callers that need snapping or raw queries.
    pub fn graph(&self) -> &VenueGraph {
        &self.graph
    }

    /// Straight-line distance in metres between two coordinates.
    ///
    /// The same metric that produced the graph's edge lengths, so ranked
    /// distances and route totals shown side by side are consistent.
    pub fn distance(&self, a: GeoPoint, b: GeoPoint) -> f32 {
        a.distance_m(b)
    }

    /// Shortest walking route between two coordinates, or `None` when no
    /// (accessible) route connects their snapped nodes.
    pub fn find_path(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
        accessible_only: bool,
    ) -> Option<PathResult> {
        find_path(&self.graph, origin, destination, accessible_only)
    }

    /// Shortest walking route from a coordinate to a specific POI, routed to
    /// the POI's own anchor node rather than a re-snapped coordinate.
    /// `None` for an unknown POI id or when no route exists.
    pub fn route_to_poi(
        &self,
        origin: GeoPoint,
        poi: PoiId,
        accessible_only: bool,
    ) -> Option<PathResult> {
        let from = self.graph.nearest_node(origin)?;
        let to = self.graph.poi_node(poi)?;
        find_path_between(&self.graph, from, to, accessible_only)
    }

    /// All POIs ranked by straight-line distance from `origin`, ascending;
    /// ties by POI id.  With `accessible_only` set, non-accessible POIs are
    /// dropped before ranking, as the map's recommendation panel does.
    pub fn rank_by_distance(&self, origin: GeoPoint, accessible_only: bool) -> Vec<RankedPoi<'_>> {
        rank_by_distance(
            origin,
            self.pois.iter().filter(|p| !accessible_only || p.accessible),
        )
    }

    /// The closest POI of `category`, or `None` if the (possibly
    /// accessibility-filtered) category is empty.
    pub fn nearest_of_category(
        &self,
        origin: GeoPoint,
        category: PoiCategory,
        accessible_only: bool,
    ) -> Option<&Poi> {
        nearest_of_category(origin, &self.pois, category, accessible_only)
    }

    /// Ranked union over several categories — the emergency screen's
    /// "closest help points" and the chat assistant's related-POI
    /// suggestions.
    pub fn rank_within_categories(
        &self,
        origin: GeoPoint,
        categories: &[PoiCategory],
    ) -> Vec<RankedPoi<'_>> {
        rank_within_categories(origin, &self.pois, categories)
    }
}
