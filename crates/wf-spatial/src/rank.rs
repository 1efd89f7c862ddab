//! Straight-line proximity ranking over POI collections.
//!
//! All functions here are stateless and pure: callers re-invoke them on
//! every location or filter change instead of caching.  Distances come from
//! the same haversine metric that produced the graph's edge lengths, so
//! ranked distances and route totals are mutually consistent.
//!
//! Determinism: equidistant POIs are ordered by ascending `PoiId`, so the
//! same query always yields the same list.

use wf_core::{GeoPoint, Poi, PoiCategory};

/// One entry of a ranked POI list.
#[derive(Debug, Clone)]
pub struct RankedPoi<'a> {
    pub poi: &'a Poi,
    pub distance_m: f32,
}

/// Rank POIs by ascending straight-line distance from `origin`.
///
/// Ties break by `PoiId` ascending.  The caller applies any category or
/// accessibility filtering beforehand (or takes the top N afterwards for
/// recommendation panels).
pub fn rank_by_distance<'a>(
    origin: GeoPoint,
    pois: impl IntoIterator<Item = &'a Poi>,
) -> Vec<RankedPoi<'a>> {
    let mut ranked: Vec<RankedPoi<'a>> = pois
        .into_iter()
        .map(|poi| RankedPoi { poi, distance_m: origin.distance_m(poi.position) })
        .collect();
    ranked.sort_by(|a, b| {
        a.distance_m
            .total_cmp(&b.distance_m)
            .then_with(|| a.poi.id.cmp(&b.poi.id))
    });
    ranked
}

/// The closest POI of one category, or `None` if the filtered set is empty.
///
/// With `accessible_only` set, POIs not flagged accessible are excluded as
/// well — an empty result then prompts the caller's fallback UI rather than
/// an error.
pub fn nearest_of_category<'a>(
    origin: GeoPoint,
    pois: impl IntoIterator<Item = &'a Poi>,
    category: PoiCategory,
    accessible_only: bool,
) -> Option<&'a Poi> {
    pois.into_iter()
        .filter(|p| p.category == category && (!accessible_only || p.accessible))
        .map(|p| (origin.distance_m(p.position), p))
        .min_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.id.cmp(&b.1.id)))
        .map(|(_, p)| p)
}

/// Ranked union over several categories — e.g. the emergency screen's
/// "closest help points" (first-aid and assembly together).
pub fn rank_within_categories<'a>(
    origin: GeoPoint,
    pois: impl IntoIterator<Item = &'a Poi>,
    categories: &[PoiCategory],
) -> Vec<RankedPoi<'a>> {
    rank_by_distance(
        origin,
        pois.into_iter().filter(|p| categories.contains(&p.category)),
    )
}
