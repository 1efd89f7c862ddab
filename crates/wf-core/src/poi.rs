//! Point-of-interest model: category enumeration and localized naming.
//!
//! The category set is fixed and exhaustively matched everywhere — no
//! string-keyed lookups.  Localized names live on the POI but are resolved by
//! an explicit [`Language`] key; the routing core itself only ever handles
//! coordinates, categories, and accessibility flags.

use crate::geo::GeoPoint;
use crate::ids::PoiId;

// ── Category ──────────────────────────────────────────────────────────────────

/// The fixed set of venue feature categories.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PoiCategory {
    /// Restroom blocks.
    Restrooms,
    /// First-aid / medical assistance stations.
    FirstAid,
    /// Food courts and stalls.
    Food,
    /// Venue exits.
    Exit,
    /// Emergency assembly points.
    Assembly,
    /// Ticketing / wristband desks.
    Ticketing,
    /// Wristband top-up kiosks.
    TopUp,
}

impl PoiCategory {
    /// Every category, in declaration order.  Useful for building filter
    /// chips or iterating recommendation panels.
    pub const ALL: [PoiCategory; 7] = [
        PoiCategory::Restrooms,
        PoiCategory::FirstAid,
        PoiCategory::Food,
        PoiCategory::Exit,
        PoiCategory::Assembly,
        PoiCategory::Ticketing,
        PoiCategory::TopUp,
    ];

    /// Stable machine-readable label, useful for logs and dataset keys.
    pub fn as_str(self) -> &'static str {
        match self {
            PoiCategory::Restrooms => "restrooms",
            PoiCategory::FirstAid  => "first-aid",
            PoiCategory::Food      => "food",
            PoiCategory::Exit      => "exit",
            PoiCategory::Assembly  => "assembly",
            PoiCategory::Ticketing => "ticketing",
            PoiCategory::TopUp     => "top-up",
        }
    }
}

impl std::fmt::Display for PoiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Localization ──────────────────────────────────────────────────────────────

/// Supported display languages for POI names.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Language {
    /// Spanish (venue default).
    #[default]
    Es,
    /// English.
    En,
}

/// A display string in every supported language, resolved by enumerated key
/// rather than by constructing field names from language codes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalizedText {
    pub es: String,
    pub en: String,
}

impl LocalizedText {
    pub fn new(es: impl Into<String>, en: impl Into<String>) -> Self {
        Self { es: es.into(), en: en.into() }
    }

    /// The string for the given language.
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::Es => &self.es,
            Language::En => &self.en,
        }
    }
}

// ── Poi ───────────────────────────────────────────────────────────────────────

/// A named, categorized, located venue feature.  Immutable after load.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Poi {
    /// Unique across the venue dataset.
    pub id: PoiId,
    pub category: PoiCategory,
    pub name: LocalizedText,
    pub position: GeoPoint,
    /// `true` if the feature itself is usable by mobility-constrained
    /// visitors.  Distinct from edge accessibility: a POI can be accessible
    /// yet have no accessible route leading to it.
    pub accessible: bool,
}
