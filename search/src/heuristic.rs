//! Heuristics: estimates of the remaining cost from a state to the target.

/// Remaining-cost estimate used to order the priority frontier.
///
/// Any `Fn(&S) -> u64` is a heuristic; closures usually capture the target.
/// A state already in the frontier is never re-queued at a lower cost, so
/// with a non-zero estimate the returned path may be longer than the
/// shortest one, even if the estimate never overestimates.
pub trait Heuristic<S> {
    fn estimate(&self, state: &S) -> u64;
}

/// Always 0. Turns the priority frontier into uniform-cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl<S> Heuristic<S> for ZeroHeuristic {
    fn estimate(&self, _state: &S) -> u64 {
        0
    }
}

impl<S, F> Heuristic<S> for F
where
    F: Fn(&S) -> u64,
{
    fn estimate(&self, state: &S) -> u64 {
        self(state)
    }
}
