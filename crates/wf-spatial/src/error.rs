//! Venue-graph configuration errors.
//!
//! Every variant is a fatal dataset problem surfaced once, at
//! [`VenueGraphBuilder::build`](crate::VenueGraphBuilder::build) time.  A
//! missing route at query time is *not* an error — routing and ranking
//! queries return `Option` instead.

use thiserror::Error;

use wf_core::{NodeId, PoiId};

/// Errors produced while constructing a [`VenueGraph`](crate::VenueGraph).
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("duplicate edge {from} -> {to}")]
    DuplicateEdge { from: NodeId, to: NodeId },

    #[error("invalid length {length_m} m on edge {from} -> {to}")]
    InvalidLength { from: NodeId, to: NodeId, length_m: f32 },

    #[error("node {0} not in graph")]
    UnknownNode(NodeId),

    #[error("POI {0} bound to more than one node")]
    DuplicatePoiBinding(PoiId),

    #[error("POI {poi} at node {node} is unreachable from the rest of the venue")]
    PoiDisconnected { poi: PoiId, node: NodeId },
}

pub type GraphResult<T> = Result<T, GraphError>;
