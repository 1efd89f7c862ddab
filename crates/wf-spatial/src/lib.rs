//! `wf-spatial` — venue graph, spatial indexing, routing, and ranking.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                    |
//! |------------|-------------------------------------------------------------|
//! | [`graph`]  | `VenueGraph` (CSR + R-tree), `VenueGraphBuilder`            |
//! | [`router`] | `find_path`, `PathResult`, walking-speed ETA                |
//! | [`rank`]   | `rank_by_distance`, `nearest_of_category`, `RankedPoi`      |
//! | [`error`]  | `GraphError`, `GraphResult<T>`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public value types.     |

pub mod error;
pub mod graph;
pub mod rank;
pub mod router;


pub use error::{GraphError, GraphResult};
pub use graph::{VenueGraph, VenueGraphBuilder};
pub use rank::{nearest_of_category, rank_by_distance, rank_within_categories, RankedPoi};
pub use router::{find_path, find_path_between, PathResult, WALKING_SPEED_M_PER_MIN};
