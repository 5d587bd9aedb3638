//! `SearchReport`: counters and termination reason for one search run.
//!
//! The report is diagnostic; correctness lives in the returned path. It is
//! rendered to canonical JSON so runs can be compared byte-for-byte.

use degrees_kernel::proof::canon::{canonical_json_bytes, CanonError};
use degrees_kernel::proof::hash::{canonical_hash, ContentHash};

use crate::policy::FrontierKind;

/// Domain prefix for search report content hashing.
pub const DOMAIN_SEARCH_REPORT: &[u8] = b"DEGREES::SEARCH_REPORT::V1\0";

/// Why the search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// A node with the target state was removed from the frontier.
    Found { node_id: u64, depth: u64 },
    /// The frontier emptied without reaching the target.
    Exhausted,
    /// The `max_expansions` budget was reached first.
    Aborted { max_expansions: u64 },
}

impl Termination {
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub space_id: String,
    pub frontier: FrontierKind,
    pub termination: Termination,
    /// Nodes removed from the frontier, the goal node included.
    pub nodes_expanded: u64,
    /// Nodes created, the root included.
    pub nodes_generated: u64,
    /// Neighbors skipped because their state was already in the frontier or explored.
    pub duplicates_suppressed: u64,
    /// Size of the explored set at termination.
    pub explored_count: u64,
    pub frontier_high_water: u64,
}

impl SearchReport {
    /// Edge count of the returned path, if one was found.
    #[must_use]
    pub fn path_length(&self) -> Option<u64> {
        match self.termination {
            Termination::Found { depth, .. } => Some(depth),
            _ => None,
        }
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "duplicates_suppressed": self.duplicates_suppressed,
            "explored_count": self.explored_count,
            "frontier": self.frontier.as_str(),
            "frontier_high_water": self.frontier_high_water,
            "nodes_expanded": self.nodes_expanded,
            "nodes_generated": self.nodes_generated,
            "path_length": self.path_length(),
            "space_id": self.space_id,
            "termination": termination_to_json(self.termination),
        })
    }

    /// Serialize the report to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Content hash of the canonical report bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        Ok(canonical_hash(
            DOMAIN_SEARCH_REPORT,
            &self.to_canonical_json_bytes()?,
        ))
    }
}

fn termination_to_json(t: Termination) -> serde_json::Value {
    match t {
        Termination::Found { node_id, depth } => {
            serde_json::json!({"depth": depth, "node_id": node_id, "type": "found"})
        }
        Termination::Exhausted => serde_json::json!({"type": "exhausted"}),
        Termination::Aborted { max_expansions } => {
            serde_json::json!({"max_expansions": max_expansions, "type": "aborted"})
        }
    }
}
