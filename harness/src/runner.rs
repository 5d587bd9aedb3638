//! Degrees runner: degrees of separation between two people.
//!
//! # Pipeline
//!
//! ```text
//! resolve names → validate endpoints → search(CoStarWorld)
//!   → path → per-hop links → bind graph + policy digests
//! ```
//!
//! The runner owns the boundary checks the search core leaves to its
//! caller: an unknown person id is a [`RunError::UnknownPerson`] here,
//! whereas the core would simply exhaust.

use degrees_kernel::costar::{CoStarGraph, MovieId, PersonId};
use degrees_kernel::proof::canon::{canonical_json_bytes, CanonError};
use degrees_kernel::proof::hash::ContentHash;
use degrees_search::error::SearchError;
use degrees_search::heuristic::ZeroHeuristic;
use degrees_search::policy::SearchPolicy;
use degrees_search::report::SearchReport;
use degrees_search::search::search;

use crate::worlds::costar::CoStarWorld;

/// Error during a degrees run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RunError {
    /// A person id is not present in the graph.
    #[error("unknown person id {id}")]
    UnknownPerson { id: PersonId },
    /// No person has this name.
    #[error("no person named {name:?}")]
    PersonNotFound { name: String },
    /// Several people share this name; the caller must pick an id.
    #[error("name {name:?} matches {} people", .candidates.len())]
    AmbiguousName {
        name: String,
        candidates: Vec<PersonId>,
    },
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error("canonical serialization failed: {detail}")]
    Canon { detail: String },
}

impl From<CanonError> for RunError {
    fn from(e: CanonError) -> Self {
        Self::Canon {
            detail: e.to_string(),
        }
    }
}

/// One hop of the chain: `from` and `to` both starred in `movie`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoStarLink {
    pub from: PersonId,
    pub to: PersonId,
    pub movie: MovieId,
}

/// Outcome of [`run_degrees`].
#[derive(Debug, Clone)]
pub struct DegreesRun {
    pub source: PersonId,
    pub target: PersonId,
    /// `None` when the two people are not connected (or the budget ran out;
    /// see `report.termination`).
    pub links: Option<Vec<CoStarLink>>,
    pub report: SearchReport,
    pub graph_digest: ContentHash,
    pub policy_digest: ContentHash,
}

impl DegreesRun {
    /// Degrees of separation, if connected.
    #[must_use]
    pub fn degrees(&self) -> Option<usize> {
        self.links.as_ref().map(Vec::len)
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let links = self.links.as_ref().map(|links| {
            links
                .iter()
                .map(|l| {
                    serde_json::json!({
                        "from": l.from.as_str(),
                        "movie": l.movie.as_str(),
                        "to": l.to.as_str(),
                    })
                })
                .collect::<Vec<_>>()
        });
        serde_json::json!({
            "degrees": self.degrees(),
            "graph_digest": self.graph_digest.as_str(),
            "links": links,
            "policy_digest": self.policy_digest.as_str(),
            "report": self.report.to_json_value(),
            "source": self.source.as_str(),
            "target": self.target.as_str(),
        })
    }

    /// Serialize the run to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }
}

/// Resolve a name to exactly one person id (case-insensitive).
///
/// # Errors
///
/// [`RunError::PersonNotFound`] if nobody has the name,
/// [`RunError::AmbiguousName`] if more than one person does.
pub fn resolve_person(graph: &CoStarGraph, name: &str) -> Result<PersonId, RunError> {
    let mut ids = graph.person_ids_for_name(name);
    match ids.len() {
        0 => Err(RunError::PersonNotFound {
            name: name.to_string(),
        }),
        1 => Ok(ids.remove(0)),
        _ => Err(RunError::AmbiguousName {
            name: name.to_string(),
            candidates: ids,
        }),
    }
}

/// Find the chain of movies linking `source` to `target`.
///
/// Uses the policy's frontier with the zero heuristic; with a queue or
/// priority frontier the chain is a shortest one.
///
/// # Errors
///
/// [`RunError::UnknownPerson`] if either id is not in the graph,
/// [`RunError::Search`] if the policy is invalid, and
/// [`RunError::Canon`] if digest computation fails.
#[tracing::instrument(skip(graph, policy), fields(frontier = %policy.frontier))]
pub fn run_degrees(
    graph: &CoStarGraph,
    source: &PersonId,
    target: &PersonId,
    policy: &SearchPolicy,
) -> Result<DegreesRun, RunError> {
    for id in [source, target] {
        if !graph.contains_person(id) {
            return Err(RunError::UnknownPerson { id: id.clone() });
        }
    }

    let world = CoStarWorld::new(graph);
    let result = search(&world, source.clone(), target, policy, &ZeroHeuristic)?;
    let links = result.path.map(|path| links_from_path(source, path));

    let run = DegreesRun {
        source: source.clone(),
        target: target.clone(),
        links,
        report: result.report,
        graph_digest: graph.digest()?,
        policy_digest: policy.digest()?,
    };
    tracing::info!(
        degrees = ?run.degrees(),
        nodes_expanded = run.report.nodes_expanded,
        "degrees run complete"
    );
    Ok(run)
}

/// [`run_degrees`] with both endpoints given by name.
///
/// # Errors
///
/// Name resolution errors from [`resolve_person`], then anything
/// [`run_degrees`] returns.
pub fn run_degrees_by_name(
    graph: &CoStarGraph,
    source_name: &str,
    target_name: &str,
    policy: &SearchPolicy,
) -> Result<DegreesRun, RunError> {
    let source = resolve_person(graph, source_name)?;
    let target = resolve_person(graph, target_name)?;
    run_degrees(graph, &source, &target, policy)
}

fn links_from_path(source: &PersonId, path: Vec<(MovieId, PersonId)>) -> Vec<CoStarLink> {
    let mut from = source.clone();
    path.into_iter()
        .map(|(movie, to)| CoStarLink {
            from: std::mem::replace(&mut from, to.clone()),
            to,
            movie,
        })
        .collect()
}
