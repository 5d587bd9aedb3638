//! Frontiers: the discovered-but-not-yet-expanded nodes of a search.
//!
//! One capability trait, [`Frontier`], with three independent implementors
//! that differ only in which node `remove` selects:
//!
//! | kind       | `remove` returns                 | search it yields     |
//! |------------|----------------------------------|----------------------|
//! | `Stack`    | most recently added              | depth-first          |
//! | `Queue`    | least recently added             | breadth-first        |
//! | `Priority` | lowest `f_cost`, oldest on ties  | uniform-cost / A\*   |
//!
//! Frontiers do not deduplicate. Callers check `contains_state` (and their
//! explored set) before `add`.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use crate::error::SearchError;
use crate::node::{FrontierKey, SearchNode};
use crate::policy::FrontierKind;

/// Capability set shared by every frontier policy.
pub trait Frontier<S, A> {
    /// Which selection policy this frontier implements.
    fn kind(&self) -> FrontierKind;

    /// Insert a node.
    fn add(&mut self, node: SearchNode<S, A>);

    /// Remove the next node according to the policy.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::EmptyFrontier`] if the frontier is empty.
    fn remove(&mut self) -> Result<SearchNode<S, A>, SearchError>;

    /// Whether any node currently in the frontier has this state.
    ///
    /// Linear in the frontier size.
    fn contains_state(&self, state: &S) -> bool;

    /// Current number of nodes.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Largest size the frontier has reached.
    fn high_water(&self) -> u64;
}

fn raise_high_water(high_water: &mut u64, len: usize) {
    let size = len as u64;
    if size > *high_water {
        *high_water = size;
    }
}

// ---------------------------------------------------------------------------
// Stack (LIFO)
// ---------------------------------------------------------------------------

/// Last-in, first-out frontier.
#[derive(Debug)]
pub struct StackFrontier<S, A> {
    nodes: Vec<SearchNode<S, A>>,
    high_water: u64,
}

impl<S, A> StackFrontier<S, A> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            high_water: 0,
        }
    }
}

impl<S, A> Default for StackFrontier<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: PartialEq, A> Frontier<S, A> for StackFrontier<S, A> {
    fn kind(&self) -> FrontierKind {
        FrontierKind::Stack
    }

    fn add(&mut self, node: SearchNode<S, A>) {
        self.nodes.push(node);
        raise_high_water(&mut self.high_water, self.nodes.len());
    }

    fn remove(&mut self) -> Result<SearchNode<S, A>, SearchError> {
        self.nodes.pop().ok_or(SearchError::EmptyFrontier {
            kind: FrontierKind::Stack,
        })
    }

    fn contains_state(&self, state: &S) -> bool {
        self.nodes.iter().any(|n| n.state == *state)
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn high_water(&self) -> u64 {
        self.high_water
    }
}

// ---------------------------------------------------------------------------
// Queue (FIFO)
// ---------------------------------------------------------------------------

/// First-in, first-out frontier.
#[derive(Debug)]
pub struct QueueFrontier<S, A> {
    nodes: VecDeque<SearchNode<S, A>>,
    high_water: u64,
}

impl<S, A> QueueFrontier<S, A> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: VecDeque::new(),
            high_water: 0,
        }
    }
}

impl<S, A> Default for QueueFrontier<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: PartialEq, A> Frontier<S, A> for QueueFrontier<S, A> {
    fn kind(&self) -> FrontierKind {
        FrontierKind::Queue
    }

    fn add(&mut self, node: SearchNode<S, A>) {
        self.nodes.push_back(node);
        raise_high_water(&mut self.high_water, self.nodes.len());
    }

    fn remove(&mut self) -> Result<SearchNode<S, A>, SearchError> {
        self.nodes.pop_front().ok_or(SearchError::EmptyFrontier {
            kind: FrontierKind::Queue,
        })
    }

    fn contains_state(&self, state: &S) -> bool {
        self.nodes.iter().any(|n| n.state == *state)
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn high_water(&self) -> u64 {
        self.high_water
    }
}

// ---------------------------------------------------------------------------
// Priority (lowest f_cost, stable)
// ---------------------------------------------------------------------------

/// A heap entry wrapping a node with its ordering key.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<FrontierKey>` to get
/// min-heap behavior (lowest `f_cost` first).
#[derive(Debug)]
struct PriorityEntry<S, A> {
    key: Reverse<FrontierKey>,
    node: SearchNode<S, A>,
}

impl<S, A> PartialEq for PriorityEntry<S, A> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<S, A> Eq for PriorityEntry<S, A> {}

impl<S, A> PartialOrd for PriorityEntry<S, A> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<S, A> Ord for PriorityEntry<S, A> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Lowest-`f_cost`-first frontier.
///
/// Each `add` stamps a private insertion counter into the key, so among
/// equal `f_cost` nodes the one added first is removed first regardless of
/// the nodes' own ids.
#[derive(Debug)]
pub struct PriorityFrontier<S, A> {
    heap: BinaryHeap<PriorityEntry<S, A>>,
    next_insertion: u64,
    high_water: u64,
}

impl<S, A> PriorityFrontier<S, A> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_insertion: 0,
            high_water: 0,
        }
    }

    /// `f_cost` of the node `remove` would return next.
    #[cfg(test)]
    fn peek_f_cost(&self) -> Option<u64> {
        self.heap.peek().map(|e| e.key.0.f_cost)
    }
}

impl<S, A> Default for PriorityFrontier<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: PartialEq, A> Frontier<S, A> for PriorityFrontier<S, A> {
    fn kind(&self) -> FrontierKind {
        FrontierKind::Priority
    }

    fn add(&mut self, node: SearchNode<S, A>) {
        let key = FrontierKey {
            f_cost: node.f_cost(),
            insertion: self.next_insertion,
        };
        self.next_insertion += 1;
        self.heap.push(PriorityEntry {
            key: Reverse(key),
            node,
        });
        raise_high_water(&mut self.high_water, self.heap.len());
    }

    fn remove(&mut self) -> Result<SearchNode<S, A>, SearchError> {
        self.heap
            .pop()
            .map(|e| e.node)
            .ok_or(SearchError::EmptyFrontier {
                kind: FrontierKind::Priority,
            })
    }

    fn contains_state(&self, state: &S) -> bool {
        self.heap.iter().any(|e| e.node.state == *state)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn high_water(&self) -> u64 {
        self.high_water
    }
}
