//! Visitor location fixes.
//!
//! A [`UserLocation`] is created per acquisition event and replaced, never
//! mutated, on each update.  The plate identifier of an NFC fix lives inside
//! [`LocationSource::Nfc`], so it cannot exist for a GPS fix by construction.

use crate::geo::GeoPoint;

/// How a location fix was acquired.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LocationSource {
    /// Device GPS.  May be far outside the venue; routing snaps it to the
    /// nearest graph node rather than rejecting it.
    Gps,
    /// A tap on one of the venue's NFC wayfinding plates.
    Nfc {
        /// Identifier printed on the plate that was tapped.
        plate: String,
    },
}

/// A visitor's position at one moment, tagged with its source.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserLocation {
    pub position: GeoPoint,
    pub source: LocationSource,
}

impl UserLocation {
    /// A GPS fix at the given coordinate.
    pub fn gps(position: GeoPoint) -> Self {
        Self { position, source: LocationSource::Gps }
    }

    /// An NFC plate fix at the plate's registered coordinate.
    pub fn nfc(position: GeoPoint, plate: impl Into<String>) -> Self {
        Self { position, source: LocationSource::Nfc { plate: plate.into() } }
    }

    /// The plate identifier, present only for NFC fixes.
    pub fn plate(&self) -> Option<&str> {
        match &self.source {
            LocationSource::Nfc { plate } => Some(plate),
            LocationSource::Gps => None,
        }
    }
}
