//! Analytics façade
//!
//! Owns the one immutable [`SocialGraph`] every consumer reads:
//! interactive recommendation queries, batch precomputation, and the
//! external ranking/community collaborators all reference the same store,
//! so their results cannot diverge. Built once at startup and dropped at
//! process exit; rebuilding from a changed edge list means constructing a
//! new `Analytics` value.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::algo::components::connected_components;
use crate::algo::recommend::{recommend_friends, Recommendation};
use crate::graph::{GraphError, GraphResult, SocialGraph, SocialId, UserId};

/// Headline network metrics.
///
/// Field names match the KPI export shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkKpis {
    pub total_users: usize,
    pub total_connections: usize,
    pub density: f64,
    pub avg_degree: f64,
    pub connected_components: usize,
    pub num_communities: usize,
}

/// One row of an influence ranking (`node`, `score`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry<N> {
    pub node: N,
    pub score: f64,
}

/// Node-importance ranking collaborator, e.g. a PageRank implementation.
pub trait RankingProvider<N: SocialId> {
    /// `(node, score)` rows sorted by descending score.
    fn rank(&self, graph: &SocialGraph<N>) -> Vec<RankingEntry<N>>;
}

/// Community-detection collaborator, e.g. greedy modularity maximization.
pub trait CommunityProvider<N: SocialId> {
    /// Partition of the node set into disjoint groups.
    fn communities(&self, graph: &SocialGraph<N>) -> Vec<Vec<N>>;
}

/// Analytics over a single shared graph store
pub struct Analytics<N: SocialId = UserId> {
    graph: SocialGraph<N>,
}

impl<N: SocialId> Analytics<N> {
    /// Wrap an already-built graph.
    pub fn new(graph: SocialGraph<N>) -> Self {
        info!(
            "analytics ready: {} users, {} connections",
            graph.node_count(),
            graph.edge_count()
        );
        Analytics { graph }
    }

    /// Build the graph from an edge list and wrap it.
    pub fn from_edges<I>(edges: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = (N, N)>,
    {
        Ok(Self::new(SocialGraph::from_edges(edges)?))
    }

    /// The shared store.
    pub fn graph(&self) -> &SocialGraph<N> {
        &self.graph
    }

    /// Assemble the headline metrics, asking `provider` for the
    /// community partition. Only the group count is consumed.
    pub fn kpis<C: CommunityProvider<N>>(&self, provider: &C) -> NetworkKpis {
        NetworkKpis {
            total_users: self.graph.node_count(),
            total_connections: self.graph.edge_count(),
            density: self.graph.density(),
            avg_degree: self.graph.average_degree(),
            connected_components: connected_components(&self.graph).count(),
            num_communities: provider.communities(&self.graph).len(),
        }
    }

    /// Top `top_k` rows of `ranker`'s influence table.
    pub fn top_influencers<R: RankingProvider<N>>(
        &self,
        ranker: &R,
        top_k: usize,
    ) -> Vec<RankingEntry<N>> {
        let mut ranking = ranker.rank(&self.graph);
        ranking.truncate(top_k);
        ranking
    }

    /// Live recommendations for one user against the shared store.
    pub fn recommend(&self, user: &N, top_n: usize) -> GraphResult<Vec<Recommendation<N>>> {
        recommend_friends(&self.graph, user, top_n)
    }
}

impl<N: SocialId + Send + Sync> Analytics<N> {
    /// Batch recommendations for many users, one engine call per user in
    /// parallel. The store is immutable and the engine a pure function of
    /// it, so readers need no coordination. Rows keep the order of
    /// `users`, each user's suggestions ranked as in
    /// [`recommend_friends`].
    pub fn recommend_many(
        &self,
        users: &[N],
        top_n: usize,
    ) -> GraphResult<Vec<Recommendation<N>>> {
        if top_n == 0 {
            return Err(GraphError::InvalidArgument(
                "top_n must be at least 1".to_string(),
            ));
        }
        let batches: Vec<Vec<Recommendation<N>>> = users
            .par_iter()
            .map(|user| recommend_friends(&self.graph, user, top_n))
            .collect::<GraphResult<_>>()?;
        Ok(batches.into_iter().flatten().collect())
    }
}
