//! Search entry point and expansion loop.

use std::collections::BTreeSet;

use crate::contract::SearchSpace;
use crate::error::SearchError;
use crate::frontier::{Frontier, PriorityFrontier, QueueFrontier, StackFrontier};
use crate::heuristic::Heuristic;
use crate::node::SearchNode;
use crate::policy::{FrontierKind, SearchPolicy};
use crate::report::{SearchReport, Termination};

/// `(action, state)` steps from the start (exclusive) to the target (inclusive).
pub type Path<A, S> = Vec<(A, S)>;

/// Outcome of [`find_path`]: `Ok(None)` when no path exists.
pub type FindPathResult<A, S> = Result<Option<Path<A, S>>, SearchError>;

/// Result of a search execution.
///
/// `path` is `None` unless the search terminated as
/// [`Termination::Found`]; check `report.termination` to tell exhaustion
/// from an aborted run.
#[derive(Debug)]
pub struct SearchResult<S, A> {
    pub path: Option<Path<A, S>>,
    /// States removed from the frontier and expanded (the target excluded).
    pub explored: BTreeSet<S>,
    /// All nodes created during search, indexed by `node_id`.
    pub nodes: Vec<SearchNode<S, A>>,
    pub report: SearchReport,
}

impl<S, A> SearchResult<S, A> {
    #[must_use]
    pub fn is_found(&self) -> bool {
        self.report.termination.is_found()
    }
}

/// Run a graph search from `source` until a node with state `target` is
/// removed from the frontier.
///
/// The frontier kind in `policy` picks depth-first, breadth-first or
/// priority (uniform-cost / A\*) order. Neighbors already in the frontier or
/// already explored are never enqueued again, so every search terminates on a
/// finite graph. Unknown states are not an error: the search simply finds
/// nothing and exhausts.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] if the policy fails validation. No
/// search step is taken in that case.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(space = space.space_id(), frontier = %policy.frontier)
)]
pub fn search<W, H>(
    space: &W,
    source: W::State,
    target: &W::State,
    policy: &SearchPolicy,
    heuristic: &H,
) -> Result<SearchResult<W::State, W::Action>, SearchError>
where
    W: SearchSpace + ?Sized,
    H: Heuristic<W::State> + ?Sized,
{
    policy.validate()?;

    let run = Run {
        space,
        target,
        heuristic,
        max_expansions: policy.max_expansions,
    };
    match policy.frontier {
        FrontierKind::Stack => run.drive(StackFrontier::new(), source),
        FrontierKind::Queue => run.drive(QueueFrontier::new(), source),
        FrontierKind::Priority => run.drive(PriorityFrontier::new(), source),
    }
}

/// Shortest-path convenience: run an unbudgeted search and return the path.
///
/// `Ok(None)` means no path exists.
///
/// # Errors
///
/// Propagates [`SearchError`] from [`search`].
pub fn find_path<W, H>(
    space: &W,
    source: W::State,
    target: &W::State,
    frontier: FrontierKind,
    heuristic: &H,
) -> FindPathResult<W::Action, W::State>
where
    W: SearchSpace + ?Sized,
    H: Heuristic<W::State> + ?Sized,
{
    let result = search(
        space,
        source,
        target,
        &SearchPolicy::with_frontier(frontier),
        heuristic,
    )?;
    Ok(result.path)
}

/// Reconstruct the path from root to a goal node by following parent ids.
///
/// The root contributes no step, so a goal that is the root yields an empty
/// path.
#[must_use]
pub fn reconstruct_path<S: Clone, A: Clone>(
    nodes: &[SearchNode<S, A>],
    goal_node_id: u64,
) -> Path<A, S> {
    let mut path = Vec::new();
    let mut current = node_at(nodes, goal_node_id);

    while let Some(node) = current {
        let (Some(parent_id), Some(action)) = (node.parent_id, node.action.as_ref()) else {
            break;
        };
        path.push((action.clone(), node.state.clone()));
        current = node_at(nodes, parent_id);
    }

    path.reverse();
    path
}

fn node_at<S, A>(nodes: &[SearchNode<S, A>], node_id: u64) -> Option<&SearchNode<S, A>> {
    usize::try_from(node_id).ok().and_then(|i| nodes.get(i))
}

/// Borrowed inputs of one search invocation.
struct Run<'a, W: SearchSpace + ?Sized, H: ?Sized> {
    space: &'a W,
    target: &'a W::State,
    heuristic: &'a H,
    max_expansions: Option<u64>,
}

impl<W, H> Run<'_, W, H>
where
    W: SearchSpace + ?Sized,
    H: Heuristic<W::State> + ?Sized,
{
    fn drive<F>(
        &self,
        mut frontier: F,
        source: W::State,
    ) -> Result<SearchResult<W::State, W::Action>, SearchError>
    where
        F: Frontier<W::State, W::Action>,
    {
        let mut nodes: Vec<SearchNode<W::State, W::Action>> = Vec::new();
        let mut explored: BTreeSet<W::State> = BTreeSet::new();
        let mut nodes_expanded: u64 = 0;
        let mut duplicates_suppressed: u64 = 0;

        let root_h = self.heuristic.estimate(&source);
        let root = SearchNode::root(0, source, root_h);
        nodes.push(root.clone());
        frontier.add(root);

        let termination = loop {
            if frontier.is_empty() {
                break Termination::Exhausted;
            }

            if let Some(max_expansions) = self.max_expansions {
                if nodes_expanded >= max_expansions {
                    break Termination::Aborted { max_expansions };
                }
            }

            let current = frontier.remove()?;
            nodes_expanded += 1;
            tracing::trace!(
                node_id = current.node_id,
                state = ?current.state,
                g_cost = current.g_cost,
                f_cost = current.f_cost(),
                "expand"
            );

            if current.state == *self.target {
                break Termination::Found {
                    node_id: current.node_id,
                    depth: current.g_cost,
                };
            }

            explored.insert(current.state.clone());

            let mut neighbors = self.space.neighbors(&current.state);
            neighbors.sort();

            for (action, state) in neighbors {
                if frontier.contains_state(&state) || explored.contains(&state) {
                    duplicates_suppressed += 1;
                    continue;
                }
                let h_cost = self.heuristic.estimate(&state);
                let child = current.child(nodes.len() as u64, action, state, h_cost);
                nodes.push(child.clone());
                frontier.add(child);
            }
        };

        let path = match termination {
            Termination::Found { node_id, .. } => Some(reconstruct_path(&nodes, node_id)),
            Termination::Exhausted | Termination::Aborted { .. } => None,
        };

        let report = SearchReport {
            space_id: self.space.space_id().to_string(),
            frontier: frontier.kind(),
            termination,
            nodes_expanded,
            nodes_generated: nodes.len() as u64,
            duplicates_suppressed,
            explored_count: explored.len() as u64,
            frontier_high_water: frontier.high_water(),
        };
        tracing::debug!(
            termination = ?report.termination,
            nodes_expanded,
            nodes_generated = report.nodes_generated,
            "search finished"
        );

        Ok(SearchResult {
            path,
            explored,
            nodes,
            report,
        })
    }
}
