//! Search space contract trait.

use std::fmt::Debug;

/// A finite graph the search driver can explore.
///
/// # Contract
///
/// - `neighbors` is pure: the same state yields the same pairs for the
///   lifetime of a search. The graph is fully loaded before search starts.
/// - Order of the returned pairs does not matter; the driver sorts them so
///   every run expands in the same order.
/// - Edge cost is uniform: one pair is one step.
pub trait SearchSpace {
    /// Vertex label.
    type State: Clone + Ord + Debug;
    /// Edge label.
    type Action: Clone + Ord + Debug;

    /// Identifier recorded in search reports.
    fn space_id(&self) -> &str;

    /// `(action, state)` pairs reachable from `state` in one step.
    fn neighbors(&self, state: &Self::State) -> Vec<(Self::Action, Self::State)>;
}
