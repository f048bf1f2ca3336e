//! Mutual-friend recommendation engine
//!
//! Scores friend-of-friend candidates for a query node by how many
//! neighbors they share with it and returns the top N. Pure function of
//! the graph and its arguments: no internal state, no randomness.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::graph::{GraphError, GraphResult, SocialGraph, SocialId};

/// One ranked suggestion for `user`.
///
/// Field names match the tabular export shape
/// (`user`, `recommended`, `mutual_friends`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation<N> {
    /// The query node the suggestion was computed for
    pub user: N,

    /// Suggested new connection. Never the query node itself and never
    /// one of its existing neighbors.
    pub recommended: N,

    /// Number of shared neighbors, always at least 1
    pub mutual_friends: usize,
}

/// Rank non-adjacent candidates for `user` by mutual-friend count.
///
/// Returns at most `top_n` entries, highest count first; ties are broken
/// by ascending candidate identifier. A `user` absent from the graph
/// yields an empty result rather than an error, keeping the engine usable
/// for exploratory, user-typed queries. `top_n` must be at least 1.
///
/// Candidates are enumerated through the 2-hop neighborhood: every
/// `user -> friend -> candidate` walk contributes one distinct mutual
/// friend, so the per-candidate tally equals the size of the neighbor
/// intersection, and nodes with zero mutual friends are never visited.
pub fn recommend_friends<N: SocialId>(
    graph: &SocialGraph<N>,
    user: &N,
    top_n: usize,
) -> GraphResult<Vec<Recommendation<N>>> {
    if top_n == 0 {
        return Err(GraphError::InvalidArgument(
            "top_n must be at least 1".to_string(),
        ));
    }

    let friends = match graph.neighbor_set(user) {
        Some(friends) => friends,
        None => return Ok(Vec::new()),
    };

    let mut tally: FxHashMap<&N, usize> = FxHashMap::default();
    for friend in friends {
        for candidate in graph.neighbors(friend) {
            if candidate == user || friends.contains(candidate) {
                continue;
            }
            *tally.entry(candidate).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(&N, usize)> = tally.into_iter().collect();
    ranked.sort_unstable_by(|(a, count_a), (b, count_b)| {
        count_b.cmp(count_a).then_with(|| a.cmp(b))
    });
    ranked.truncate(top_n);

    debug!(
        "recommendations for {}: returning {} of up to {}",
        user,
        ranked.len(),
        top_n
    );

    Ok(ranked
        .into_iter()
        .map(|(candidate, mutual_friends)| Recommendation {
            user: user.clone(),
            recommended: candidate.clone(),
            mutual_friends,
        })
        .collect())
}
