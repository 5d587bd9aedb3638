//! `CoStarWorld`: the co-starring graph as a search space.
//!
//! States are people, actions are the movies two people share.

use degrees_kernel::costar::{CoStarGraph, MovieId, PersonId};
use degrees_search::contract::SearchSpace;

/// Borrowing adapter from [`CoStarGraph`] to [`SearchSpace`].
#[derive(Debug, Clone, Copy)]
pub struct CoStarWorld<'g> {
    graph: &'g CoStarGraph,
}

impl<'g> CoStarWorld<'g> {
    #[must_use]
    pub fn new(graph: &'g CoStarGraph) -> Self {
        Self { graph }
    }

    #[must_use]
    pub fn graph(&self) -> &'g CoStarGraph {
        self.graph
    }
}

impl SearchSpace for CoStarWorld<'_> {
    type State = PersonId;
    type Action = MovieId;

    #[allow(clippy::unnecessary_literal_bound)]
    fn space_id(&self) -> &str {
        "costar"
    }

    fn neighbors(&self, state: &PersonId) -> Vec<(MovieId, PersonId)> {
        self.graph.neighbors_for_person(state).into_iter().collect()
    }
}
