//! Connected components of the undirected graph
//!
//! Union-find with path halving and union by rank. Components are
//! numbered in order of first appearance along the store's node
//! iteration, so results are deterministic.

use rustc_hash::FxHashMap;

use crate::graph::{SocialGraph, SocialId};

/// Disjoint-set forest over dense node indices
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    fn new(size: usize) -> Self {
        UnionFind {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    fn find(&mut self, mut i: usize) -> usize {
        while self.parent[i] != i {
            // Path halving keeps trees shallow without a second pass
            self.parent[i] = self.parent[self.parent[i]];
            i = self.parent[i];
        }
        i
    }

    fn union(&mut self, i: usize, j: usize) {
        let root_i = self.find(i);
        let root_j = self.find(j);
        if root_i == root_j {
            return;
        }
        if self.rank[root_i] < self.rank[root_j] {
            self.parent[root_i] = root_j;
        } else if self.rank[root_i] > self.rank[root_j] {
            self.parent[root_j] = root_i;
        } else {
            self.parent[root_j] = root_i;
            self.rank[root_i] += 1;
        }
    }
}

/// Partition of the graph into connected components
#[derive(Debug, Clone)]
pub struct ComponentSet<N> {
    components: Vec<Vec<N>>,
    assignment: FxHashMap<N, usize>,
}

impl<N: SocialId> ComponentSet<N> {
    /// Number of components
    pub fn count(&self) -> usize {
        self.components.len()
    }

    /// Component members. Components appear in order of first appearance,
    /// members in node iteration order.
    pub fn components(&self) -> &[Vec<N>] {
        &self.components
    }

    /// Component index of `node`, if present in the graph
    pub fn component_of(&self, node: &N) -> Option<usize> {
        self.assignment.get(node).copied()
    }
}

/// Find all connected components of the graph.
pub fn connected_components<N: SocialId>(graph: &SocialGraph<N>) -> ComponentSet<N> {
    let nodes: Vec<&N> = graph.nodes().collect();
    let mut index: FxHashMap<&N, usize> = FxHashMap::default();
    for (i, node) in nodes.iter().enumerate() {
        index.insert(*node, i);
    }

    let mut uf = UnionFind::new(nodes.len());
    for (i, node) in nodes.iter().enumerate() {
        for neighbor in graph.neighbors(node) {
            uf.union(i, index[neighbor]);
        }
    }

    // Compact union-find roots into component ids in first-seen order
    let mut root_to_component: FxHashMap<usize, usize> = FxHashMap::default();
    let mut components: Vec<Vec<N>> = Vec::new();
    let mut assignment: FxHashMap<N, usize> = FxHashMap::default();

    for (i, node) in nodes.iter().enumerate() {
        let root = uf.find(i);
        let next = components.len();
        let id = *root_to_component.entry(root).or_insert(next);
        if id == next {
            components.push(Vec::new());
        }
        components[id].push((*node).clone());
        assignment.insert((*node).clone(), id);
    }

    ComponentSet {
        components,
        assignment,
    }
}
