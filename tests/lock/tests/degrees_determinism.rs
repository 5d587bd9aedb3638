//! Degrees run lock tests over the small fixture.
//!
//! Proves:
//! 1. Known degrees of separation for fixed pairs
//! 2. Run output is byte-identical across repeated runs
//! 3. Graph and policy digests are stable and bound into the run

use degrees_harness::runner::{run_degrees, run_degrees_by_name, RunError};
use degrees_harness::worlds::small::small_costar_graph;
use degrees_kernel::costar::PersonId;
use degrees_search::policy::{FrontierKind, SearchPolicy};
use degrees_search::report::Termination;

// ---------------------------------------------------------------------------
// 1. Known degrees
// ---------------------------------------------------------------------------

#[test]
fn known_pairs() {
    let graph = small_costar_graph().unwrap();
    let cases = [
        ("Kevin Bacon", "Tom Hanks", Some(1)),
        ("Tom Hanks", "Kevin Bacon", Some(1)),
        ("Robin Wright", "Tom Hanks", Some(1)),
        ("Cary Elwes", "Kevin Bacon", Some(3)),
        ("Cary Elwes", "Tom Cruise", Some(4)),
        ("Emma Watson", "Tom Cruise", None),
    ];
    for (from, to, expected) in cases {
        let run = run_degrees_by_name(
            &graph,
            from,
            to,
            &SearchPolicy::with_frontier(FrontierKind::Queue),
        )
        .unwrap();
        assert_eq!(run.degrees(), expected, "{from} -> {to}");
    }
}

#[test]
fn budget_too_small_aborts_without_a_chain() {
    let graph = small_costar_graph().unwrap();
    let policy = SearchPolicy {
        frontier: FrontierKind::Queue,
        max_expansions: Some(2),
    };
    let run = run_degrees(
        &graph,
        &PersonId::from("144"),
        &PersonId::from("129"),
        &policy,
    )
    .unwrap();
    assert_eq!(run.degrees(), None);
    assert_eq!(
        run.report.termination,
        Termination::Aborted { max_expansions: 2 }
    );
    assert_eq!(run.report.nodes_expanded, 2);
}

#[test]
fn unknown_person_is_an_error_not_a_missing_path() {
    let graph = small_costar_graph().unwrap();
    let err = run_degrees(
        &graph,
        &PersonId::from("0"),
        &PersonId::from("102"),
        &SearchPolicy::default(),
    )
    .unwrap_err();
    assert_eq!(
        err,
        RunError::UnknownPerson {
            id: PersonId::from("0")
        }
    );
}

// ---------------------------------------------------------------------------
// 2. Byte-identical output
// ---------------------------------------------------------------------------

#[test]
fn repeated_runs_are_byte_identical() {
    let graph = small_costar_graph().unwrap();
    for kind in FrontierKind::ALL {
        let policy = SearchPolicy::with_frontier(kind);
        let render = || {
            run_degrees_by_name(&graph, "Cary Elwes", "Tom Cruise", &policy)
                .unwrap()
                .to_canonical_json_bytes()
                .unwrap()
        };
        let first = render();
        for _ in 0..5 {
            assert_eq!(first, render(), "{kind}");
        }
    }
}

// ---------------------------------------------------------------------------
// 3. Digest binding
// ---------------------------------------------------------------------------

#[test]
fn digests_are_stable_and_distinct() {
    let a = small_costar_graph().unwrap().digest().unwrap();
    let b = small_costar_graph().unwrap().digest().unwrap();
    assert_eq!(a, b);
    assert_eq!(a.algorithm(), "sha256");

    let queue = SearchPolicy::with_frontier(FrontierKind::Queue).digest().unwrap();
    let stack = SearchPolicy::with_frontier(FrontierKind::Stack).digest().unwrap();
    assert_ne!(queue, stack);
}

#[test]
fn adding_a_star_changes_the_graph_digest() {
    let base = small_costar_graph().unwrap();
    let mut extended = small_costar_graph().unwrap();
    assert!(extended.add_star(&"914612".into(), &"95953".into()));
    assert_ne!(base.digest().unwrap(), extended.digest().unwrap());

    let run = run_degrees_by_name(
        &extended,
        "Emma Watson",
        "Tom Cruise",
        &SearchPolicy::default(),
    )
    .unwrap();
    assert_eq!(run.degrees(), Some(1));
    assert_eq!(run.graph_digest, extended.digest().unwrap());
}
