//! Frontier policy lock tests.
//!
//! Proves:
//! 1. The three-node scenario `A -m1- B -m2- C`, `A -m3- C` resolves the same
//!    way for every breadth-first or uniform-cost search
//! 2. Directed edges are honored (no reverse path)
//! 3. Removing from an empty frontier is an error for every policy

use degrees_search::error::SearchError;
use degrees_search::frontier::{Frontier, PriorityFrontier, QueueFrontier, StackFrontier};
use degrees_search::heuristic::ZeroHeuristic;
use degrees_search::policy::{FrontierKind, SearchPolicy};
use degrees_search::report::Termination;
use degrees_search::search::{find_path, search};
use lock_tests::{is_valid_path, EdgeListSpace};

const A: u32 = 0;
const B: u32 = 1;
const C: u32 = 2;
const M1: u32 = 0;
const M3: u32 = 2;

fn triangle(directed: bool) -> EdgeListSpace {
    // Labels follow edge order: m1, m2, m3.
    EdgeListSpace::new(&[(A, B), (B, C), (A, C)], directed)
}

// ---------------------------------------------------------------------------
// 1. Three-node scenario
// ---------------------------------------------------------------------------

#[test]
fn direct_edge_beats_two_hop_route() {
    let space = triangle(false);
    for kind in [FrontierKind::Queue, FrontierKind::Priority] {
        let path = find_path(&space, A, &C, kind, &ZeroHeuristic).unwrap();
        assert_eq!(path, Some(vec![(M3, C)]), "{kind}");
    }
}

#[test]
fn single_hop_to_neighbor() {
    let space = triangle(false);
    for kind in [FrontierKind::Queue, FrontierKind::Priority] {
        let path = find_path(&space, A, &B, kind, &ZeroHeuristic).unwrap();
        assert_eq!(path, Some(vec![(M1, B)]), "{kind}");
    }
}

#[test]
fn undirected_reverse_search_uses_direct_edge() {
    let space = triangle(false);
    for kind in FrontierKind::ALL {
        let path = find_path(&space, C, &A, kind, &ZeroHeuristic).unwrap();
        assert_eq!(path, Some(vec![(M3, A)]), "{kind}");
    }
}

#[test]
fn depth_first_still_returns_a_valid_path() {
    let space = triangle(false);
    for target in [B, C] {
        let path = find_path(&space, A, &target, FrontierKind::Stack, &ZeroHeuristic)
            .unwrap()
            .unwrap();
        assert!(is_valid_path(&space, A, target, &path));
    }
}

// ---------------------------------------------------------------------------
// 2. Directed edges
// ---------------------------------------------------------------------------

#[test]
fn directed_reverse_search_finds_no_path() {
    let space = triangle(true);
    for kind in FrontierKind::ALL {
        let result = search(
            &space,
            C,
            &A,
            &SearchPolicy::with_frontier(kind),
            &ZeroHeuristic,
        )
        .unwrap();
        assert_eq!(result.path, None, "{kind}");
        assert_eq!(result.report.termination, Termination::Exhausted);
        assert_eq!(result.report.nodes_expanded, 1);
    }
}

// ---------------------------------------------------------------------------
// 3. Empty frontier
// ---------------------------------------------------------------------------

fn assert_empty_remove<F: Frontier<u32, u32>>(mut frontier: F) {
    let kind = frontier.kind();
    assert!(frontier.is_empty());
    assert_eq!(
        frontier.remove().unwrap_err(),
        SearchError::EmptyFrontier { kind }
    );
}

#[test]
fn empty_remove_is_an_error_for_every_policy() {
    assert_empty_remove(StackFrontier::<u32, u32>::new());
    assert_empty_remove(QueueFrontier::<u32, u32>::new());
    assert_empty_remove(PriorityFrontier::<u32, u32>::new());
}

#[test]
fn empty_frontier_error_names_the_policy() {
    let err = QueueFrontier::<u32, u32>::new().remove().unwrap_err();
    assert!(err.to_string().contains("queue"), "{err}");
}
