//! In-memory social graph storage
//!
//! The store is built once from an edge list and never mutated afterwards:
//! there is no incremental insertion or removal, and rebuilding means
//! constructing a new store from a new edge list. Because nothing writes
//! after construction, a built graph can be shared freely across
//! concurrent readers without locking.

use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxBuildHasher;
use thiserror::Error;
use tracing::debug;

use super::types::{SocialId, UserId};

/// Adjacency set of a single node.
///
/// Insertion-ordered so enumeration does not depend on hasher state.
pub type NeighborSet<N> = IndexSet<N, FxBuildHasher>;

type AdjacencyMap<N> = IndexMap<N, NeighborSet<N>, FxBuildHasher>;

/// Errors that can occur during graph construction and queries
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge joined a node to itself. Self-loops are rejected rather
    /// than silently dropped, and construction aborts with no partial
    /// graph.
    #[error("invalid edge: self-loop on node {0}")]
    SelfLoopEdge(String),

    /// An out-of-range or unparseable caller-supplied parameter.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Undirected, unweighted, simple graph over opaque node identifiers.
///
/// Adjacency is symmetric: `b` is a neighbor of `a` exactly when `a` is a
/// neighbor of `b`. Duplicate edges collapse regardless of endpoint
/// order, and the node set is the union of all edge endpoints.
#[derive(Debug, Clone)]
pub struct SocialGraph<N: SocialId = UserId> {
    /// Node -> set of adjacent nodes, keyed in first-seen order
    adjacency: AdjacencyMap<N>,

    /// Number of undirected edges
    edge_count: usize,
}

impl<N: SocialId> SocialGraph<N> {
    /// Build a graph from an edge list.
    ///
    /// Endpoint pairs may repeat in either order; they collapse to a
    /// single undirected edge. A self-loop aborts the whole build with
    /// [`GraphError::SelfLoopEdge`].
    pub fn from_edges<I>(edges: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = (N, N)>,
    {
        let mut adjacency = AdjacencyMap::default();
        let mut edge_count = 0;

        for (src, dst) in edges {
            if src == dst {
                return Err(GraphError::SelfLoopEdge(src.to_string()));
            }
            let inserted = adjacency.entry(src.clone()).or_default().insert(dst.clone());
            adjacency.entry(dst).or_default().insert(src);
            if inserted {
                edge_count += 1;
            }
        }

        debug!(
            "built social graph: {} nodes, {} edges",
            adjacency.len(),
            edge_count
        );

        Ok(SocialGraph {
            adjacency,
            edge_count,
        })
    }

    /// Neighbors of `node`, in first-seen order.
    ///
    /// Absent nodes yield an empty iterator rather than an error, so
    /// callers can probe arbitrary identifiers safely. Every call starts
    /// a fresh iteration.
    pub fn neighbors<'g>(&'g self, node: &N) -> impl Iterator<Item = &'g N> + 'g {
        self.adjacency.get(node).into_iter().flatten()
    }

    /// Direct access to a node's adjacency set, if the node exists.
    pub fn neighbor_set(&self, node: &N) -> Option<&NeighborSet<N>> {
        self.adjacency.get(node)
    }

    /// Number of distinct neighbors; 0 for absent nodes.
    pub fn degree(&self, node: &N) -> usize {
        self.adjacency.get(node).map_or(0, |s| s.len())
    }

    /// Symmetric edge membership test, O(1) expected.
    pub fn has_edge(&self, a: &N, b: &N) -> bool {
        self.adjacency.get(a).map_or(false, |s| s.contains(b))
    }

    /// Whether `node` appears in the graph.
    pub fn contains(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// All nodes, in first-seen order. Every call starts a fresh
    /// iteration.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Fraction of possible edges present: 2E / N(N-1). 0.0 below two
    /// nodes.
    pub fn density(&self) -> f64 {
        let n = self.node_count();
        if n < 2 {
            return 0.0;
        }
        (2.0 * self.edge_count as f64) / (n as f64 * (n - 1) as f64)
    }

    /// Mean number of connections per node: 2E / N. 0.0 for an empty
    /// graph.
    pub fn average_degree(&self) -> f64 {
        let n = self.node_count();
        if n == 0 {
            return 0.0;
        }
        (2.0 * self.edge_count as f64) / n as f64
    }
}
