//! Search-tree nodes and the priority ordering key.

/// An immutable node of the search tree.
///
/// Nodes live in a per-search arena indexed by `node_id`; `parent_id` points
/// back into that arena. A node is never mutated after creation, so parent
/// links always form a tree rooted at the start node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode<S, A> {
    /// Monotonic identifier, equal to the node's arena index.
    pub node_id: u64,
    /// Parent node ID (`None` for root).
    pub parent_id: Option<u64>,
    /// The graph vertex this node reaches.
    pub state: S,
    /// The edge label traversed from the parent (`None` for root).
    pub action: Option<A>,
    /// Path cost so far; +1 per edge.
    pub g_cost: u64,
    /// Heuristic estimate of the remaining cost (0 for uninformed search).
    pub h_cost: u64,
}

impl<S, A> SearchNode<S, A> {
    /// A start node: no parent, no action, zero path cost.
    #[must_use]
    pub fn root(node_id: u64, state: S, h_cost: u64) -> Self {
        Self {
            node_id,
            parent_id: None,
            state,
            action: None,
            g_cost: 0,
            h_cost,
        }
    }

    /// A node one edge below `self`.
    #[must_use]
    pub fn child(&self, node_id: u64, action: A, state: S, h_cost: u64) -> Self {
        Self {
            node_id,
            parent_id: Some(self.node_id),
            state,
            action: Some(action),
            g_cost: self.g_cost.saturating_add(1),
            h_cost,
        }
    }

    /// Compute `f_cost = g_cost + h_cost` (the priority ordering key).
    #[must_use]
    pub fn f_cost(&self) -> u64 {
        self.g_cost.saturating_add(self.h_cost)
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// The priority ordering key: `(f_cost, insertion)`.
///
/// Lower `f_cost` first; ties go to the node inserted earlier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub f_cost: u64,
    pub insertion: u64,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.f_cost
            .cmp(&other.f_cost)
            .then(self.insertion.cmp(&other.insertion))
    }
}
