//! Heuristic lock tests on maze worlds.
//!
//! Proves:
//! 1. On these mazes, priority search with Manhattan distance returns paths as
//!    short as the zero heuristic
//! 2. It never expands more nodes than the zero heuristic
//! 3. An unreachable goal exhausts under every policy
//! 4. Frontier states are not re-priced, so a heuristic can cost path length

use degrees_harness::worlds::grid::{manhattan, GridWorld};
use degrees_search::heuristic::ZeroHeuristic;
use degrees_search::policy::{FrontierKind, SearchPolicy};
use degrees_search::report::Termination;
use degrees_search::search::search;

const MAZES: [&str; 4] = [
    "
#######
#A   ##
# ##  #
#    B#
#######
",
    "
###########
#A        #
#######   #
#         #
#   #######
#        B#
###########
",
    "
############
#A         #
#          #
#          #
#         B#
############
",
    "
##############
#A #      #  #
#  #  ##  #  #
#     #      #
#######  ##  #
#B       #   #
##############
",
];

fn priority() -> SearchPolicy {
    SearchPolicy::with_frontier(FrontierKind::Priority)
}

// ---------------------------------------------------------------------------
// 1-2. Admissible heuristic
// ---------------------------------------------------------------------------

#[test]
fn manhattan_keeps_paths_shortest_and_expands_no_more() {
    for maze in MAZES {
        let grid = GridWorld::parse(maze).unwrap();
        let zero = search(&grid, grid.start(), &grid.goal(), &priority(), &ZeroHeuristic).unwrap();
        let guided = search(
            &grid,
            grid.start(),
            &grid.goal(),
            &priority(),
            &manhattan(grid.goal()),
        )
        .unwrap();

        let zero_len = zero.path.as_ref().map(Vec::len);
        assert!(zero_len.is_some(), "maze should be solvable:{maze}");
        assert_eq!(guided.path.as_ref().map(Vec::len), zero_len, "{maze}");
        assert!(
            guided.report.nodes_expanded <= zero.report.nodes_expanded,
            "guided {} > zero {}:{maze}",
            guided.report.nodes_expanded,
            zero.report.nodes_expanded
        );
    }
}

#[test]
fn open_field_path_equals_manhattan_distance() {
    let grid = GridWorld::parse(MAZES[2]).unwrap();
    let h = manhattan(grid.goal());
    let result = search(&grid, grid.start(), &grid.goal(), &priority(), &h).unwrap();
    assert_eq!(
        result.report.path_length(),
        Some(h(&grid.start()))
    );
}

#[test]
fn breadth_first_agrees_with_uniform_cost_on_mazes() {
    for maze in MAZES {
        let grid = GridWorld::parse(maze).unwrap();
        let queue = search(
            &grid,
            grid.start(),
            &grid.goal(),
            &SearchPolicy::with_frontier(FrontierKind::Queue),
            &ZeroHeuristic,
        )
        .unwrap();
        let uniform = search(&grid, grid.start(), &grid.goal(), &priority(), &ZeroHeuristic).unwrap();
        assert_eq!(queue.report.path_length(), uniform.report.path_length());
    }
}

// ---------------------------------------------------------------------------
// 3. Unreachable goal
// ---------------------------------------------------------------------------

#[test]
fn walled_off_goal_exhausts() {
    let grid = GridWorld::parse(
        "
#######
#A  # #
#   #B#
#######
",
    )
    .unwrap();
    for kind in FrontierKind::ALL {
        let result = search(
            &grid,
            grid.start(),
            &grid.goal(),
            &SearchPolicy::with_frontier(kind),
            &manhattan(grid.goal()),
        )
        .unwrap();
        assert_eq!(result.report.termination, Termination::Exhausted, "{kind}");
        assert_eq!(result.explored.len(), 6, "{kind}");
    }
}

// ---------------------------------------------------------------------------
// 4. No re-pricing of in-flight states
// ---------------------------------------------------------------------------

/// A state already in the frontier is never re-queued with a cheaper
/// `g_cost`, so a non-zero heuristic can lock in a detour. The zero
/// heuristic is unaffected on unit-cost graphs.
#[test]
fn heuristic_can_lock_in_a_detour() {
    let grid = GridWorld::parse(
        "
#######
#B#   #
# # #A#
#     #
#######
",
    )
    .unwrap();
    let zero = search(&grid, grid.start(), &grid.goal(), &priority(), &ZeroHeuristic).unwrap();
    let guided = search(
        &grid,
        grid.start(),
        &grid.goal(),
        &priority(),
        &manhattan(grid.goal()),
    )
    .unwrap();
    assert_eq!(zero.report.path_length(), Some(7));
    assert_eq!(guided.report.path_length(), Some(9));
}
