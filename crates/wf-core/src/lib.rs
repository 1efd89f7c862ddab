//! `wf-core` — foundational types for the venue wayfinding engine.
//!
//! This crate is a dependency of every other `wf-*` crate.  It intentionally
//! has no `wf-*` dependencies and no required external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`geo`]       | `GeoPoint`, haversine distance                          |
//! | [`ids`]       | `NodeId`, `EdgeId`, `PoiId`                             |
//! | [`poi`]       | `Poi`, `PoiCategory`, `LocalizedText`, `Language`       |
//! | [`location`]  | `UserLocation`, `LocationSource`                        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod geo;
pub mod ids;
pub mod location;
pub mod poi;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::GeoPoint;
pub use ids::{EdgeId, NodeId, PoiId};
pub use location::{LocationSource, UserLocation};
pub use poi::{Language, LocalizedText, Poi, PoiCategory};
