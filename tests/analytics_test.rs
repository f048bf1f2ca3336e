use anyhow::Result;
use serde_json::json;
use sociograph::{
    connected_components, Analytics, CommunityProvider, NetworkKpis, RankingEntry,
    RankingProvider, Recommendation, SocialGraph, UserId,
};

/// Degree-proportional stand-in for an external ranking provider
struct DegreeRanker;

impl RankingProvider<UserId> for DegreeRanker {
    fn rank(&self, graph: &SocialGraph<UserId>) -> Vec<RankingEntry<UserId>> {
        let mut entries: Vec<RankingEntry<UserId>> = graph
            .nodes()
            .map(|&node| RankingEntry {
                node,
                score: graph.degree(&node) as f64,
            })
            .collect();
        entries.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap()
                .then_with(|| a.node.cmp(&b.node))
        });
        entries
    }
}

/// Stand-in community provider: one group per connected component
struct ComponentCommunities;

impl CommunityProvider<UserId> for ComponentCommunities {
    fn communities(&self, graph: &SocialGraph<UserId>) -> Vec<Vec<UserId>> {
        connected_components(graph).components().to_vec()
    }
}

fn edges(pairs: &[(u64, u64)]) -> Vec<(UserId, UserId)> {
    pairs
        .iter()
        .map(|&(a, b)| (UserId::new(a), UserId::new(b)))
        .collect()
}

#[test]
fn test_kpis_over_user_ids() -> Result<()> {
    let analytics = Analytics::from_edges(edges(&[
        (1, 2),
        (2, 3),
        (1, 3),
        (10, 11),
        (11, 12),
        (10, 12),
    ]))?;

    let kpis = analytics.kpis(&ComponentCommunities);
    assert_eq!(
        kpis,
        NetworkKpis {
            total_users: 6,
            total_connections: 6,
            density: 0.4,
            avg_degree: 2.0,
            connected_components: 2,
            num_communities: 2,
        }
    );
    Ok(())
}

#[test]
fn test_influencer_table() -> Result<()> {
    // Node 2 touches everyone; degree ranking must lead with it.
    let analytics = Analytics::from_edges(edges(&[(1, 2), (2, 3), (2, 4), (3, 4)]))?;

    let top = analytics.top_influencers(&DegreeRanker, 2);
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].node, UserId::new(2));
    assert_eq!(top[0].score, 3.0);
    Ok(())
}

#[test]
fn test_result_tables_serialize_with_wire_field_names() -> Result<()> {
    let analytics = Analytics::from_edges(edges(&[
        (1, 2),
        (1, 3),
        (2, 3),
        (2, 4),
        (3, 4),
    ]))?;

    let recs = analytics.recommend(&UserId::new(1), 5)?;
    assert_eq!(
        serde_json::to_value(&recs)?,
        json!([{ "user": 1, "recommended": 4, "mutual_friends": 2 }])
    );

    let top = analytics.top_influencers(&DegreeRanker, 1);
    assert_eq!(
        serde_json::to_value(&top)?,
        json!([{ "node": 2, "score": 3.0 }])
    );

    let kpis = analytics.kpis(&ComponentCommunities);
    let value = serde_json::to_value(&kpis)?;
    for key in [
        "total_users",
        "total_connections",
        "density",
        "avg_degree",
        "connected_components",
        "num_communities",
    ] {
        assert!(value.get(key).is_some(), "missing KPI field {}", key);
    }
    Ok(())
}

#[test]
fn test_batch_precompute_for_every_user() -> Result<()> {
    let analytics = Analytics::from_edges(edges(&[
        (1, 2),
        (1, 3),
        (2, 3),
        (2, 4),
        (3, 4),
        (4, 5),
    ]))?;
    let users: Vec<UserId> = analytics.graph().nodes().copied().collect();

    let table: Vec<Recommendation<UserId>> = analytics.recommend_many(&users, 15)?;
    assert!(!table.is_empty());

    // Every row satisfies the per-user engine guarantees.
    for row in &table {
        assert_ne!(row.user, row.recommended);
        assert!(!analytics.graph().has_edge(&row.user, &row.recommended));
        assert!(row.mutual_friends >= 1);
    }

    // And the batch is exactly the per-user queries, concatenated.
    let mut expected = Vec::new();
    for user in &users {
        expected.extend(analytics.recommend(user, 15)?);
    }
    assert_eq!(table, expected);
    Ok(())
}

#[test]
fn test_search_input_parsing() {
    assert_eq!(UserId::parse("12").unwrap(), UserId::new(12));
    assert!(UserId::parse("twelve").is_err());
}
