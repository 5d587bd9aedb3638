//! Shared helpers for the lock test suites.
//!
//! [`EdgeListSpace`] is a small integer graph that property tests can build
//! from generated edge lists; [`bfs_distances`] is the independent oracle
//! the search results are checked against.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet, VecDeque};

use degrees_search::contract::SearchSpace;

/// Integer-labelled graph with `(from, to)` edges, labelled by edge index.
#[derive(Debug, Clone)]
pub struct EdgeListSpace {
    adjacency: BTreeMap<u32, BTreeSet<(u32, u32)>>,
}

impl EdgeListSpace {
    /// Build from an edge list. With `directed == false` every edge is
    /// added in both directions. Self-loops are kept.
    #[must_use]
    pub fn new(edges: &[(u32, u32)], directed: bool) -> Self {
        let mut adjacency: BTreeMap<u32, BTreeSet<(u32, u32)>> = BTreeMap::new();
        for (label, &(from, to)) in (0u32..).zip(edges) {
            adjacency.entry(from).or_default().insert((label, to));
            if !directed {
                adjacency.entry(to).or_default().insert((label, from));
            }
        }
        Self { adjacency }
    }

    /// Whether edge `label` leads from `from` to `to`.
    #[must_use]
    pub fn has_edge(&self, from: u32, label: u32, to: u32) -> bool {
        self.adjacency
            .get(&from)
            .is_some_and(|out| out.contains(&(label, to)))
    }

    fn successors(&self, state: u32) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.adjacency.get(&state).into_iter().flatten().copied()
    }
}

impl SearchSpace for EdgeListSpace {
    type State = u32;
    type Action = u32;

    #[allow(clippy::unnecessary_literal_bound)]
    fn space_id(&self) -> &str {
        "edge_list"
    }

    fn neighbors(&self, state: &u32) -> Vec<(u32, u32)> {
        self.successors(*state).collect()
    }
}

/// Breadth-first edge distances from `source` to every reachable state.
#[must_use]
pub fn bfs_distances(space: &EdgeListSpace, source: u32) -> BTreeMap<u32, u64> {
    let mut dist = BTreeMap::from([(source, 0u64)]);
    let mut queue = VecDeque::from([source]);
    while let Some(state) = queue.pop_front() {
        let d = dist[&state];
        for (_, next) in space.successors(state) {
            if let Entry::Vacant(e) = dist.entry(next) {
                e.insert(d + 1);
                queue.push_back(next);
            }
        }
    }
    dist
}

/// Whether `path` is a walk in `space` from `source` that ends at `target`.
#[must_use]
pub fn is_valid_path(space: &EdgeListSpace, source: u32, target: u32, path: &[(u32, u32)]) -> bool {
    let mut at = source;
    for &(label, next) in path {
        if !space.has_edge(at, label, next) {
            return false;
        }
        at = next;
    }
    at == target
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undirected_edges_go_both_ways() {
        let space = EdgeListSpace::new(&[(1, 2)], false);
        assert_eq!(space.neighbors(&1), vec![(0, 2)]);
        assert_eq!(space.neighbors(&2), vec![(0, 1)]);
        let directed = EdgeListSpace::new(&[(1, 2)], true);
        assert!(directed.neighbors(&2).is_empty());
    }

    #[test]
    fn oracle_distances_and_paths() {
        let space = EdgeListSpace::new(&[(1, 2), (2, 3), (1, 3), (4, 5)], false);
        let dist = bfs_distances(&space, 1);
        assert_eq!(dist.get(&3), Some(&1));
        assert_eq!(dist.get(&4), None);
        assert!(is_valid_path(&space, 1, 3, &[(0, 2), (1, 3)]));
        assert!(!is_valid_path(&space, 1, 3, &[(3, 5)]));
        assert!(is_valid_path(&space, 1, 1, &[]));
    }
}
