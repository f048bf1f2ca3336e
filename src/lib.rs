//! Sociograph
//!
//! An in-memory analytics core for static social graphs: an immutable,
//! undirected graph store built once from an edge list, connectivity
//! metrics, connected components, and a live mutual-friend recommendation
//! engine fast enough for per-query interactive use.
//!
//! # Architecture
//!
//! - [`graph`]: the [`SocialGraph`] store — symmetric adjacency over
//!   generic node identifiers, built once and immutable thereafter.
//! - [`algo`]: algorithms over the store — friend recommendations and
//!   connected components.
//! - [`analytics`]: the façade owning the one shared store, KPI assembly,
//!   and the trait seams for external ranking/community providers.
//!
//! ## Example Usage
//!
//! ```rust
//! use sociograph::{recommend_friends, SocialGraph};
//!
//! let graph =
//!     SocialGraph::from_edges([(1u64, 2), (1, 3), (2, 3), (2, 4), (3, 4)]).unwrap();
//! assert_eq!(graph.degree(&1), 2);
//!
//! // Node 4 shares two mutual friends (2 and 3) with node 1.
//! let recs = recommend_friends(&graph, &1, 5).unwrap();
//! assert_eq!(recs.len(), 1);
//! assert_eq!(recs[0].recommended, 4);
//! assert_eq!(recs[0].mutual_friends, 2);
//! ```

#![warn(clippy::all)]

pub mod algo;
pub mod analytics;
pub mod graph;

// Re-export main types for convenience
pub use algo::{connected_components, recommend_friends, ComponentSet, Recommendation};
pub use analytics::{Analytics, CommunityProvider, NetworkKpis, RankingEntry, RankingProvider};
pub use graph::{GraphError, GraphResult, NeighborSet, SocialGraph, SocialId, UserId};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
