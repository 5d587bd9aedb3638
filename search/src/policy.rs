//! Search policy: which frontier to use and how long to run.

use serde::Deserialize;

use degrees_kernel::proof::canon::{canonical_json_bytes, CanonError};
use degrees_kernel::proof::hash::{canonical_hash, ContentHash};

use crate::error::SearchError;

/// Domain prefix for search policy content hashing.
pub const DOMAIN_SEARCH_POLICY: &[u8] = b"DEGREES::SEARCH_POLICY::V1\0";

/// Frontier selection policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrontierKind {
    /// LIFO: depth-first search.
    Stack,
    /// FIFO: breadth-first search, shortest in edge count.
    Queue,
    /// Lowest `g + h` first. With the zero heuristic this is uniform-cost search.
    #[default]
    Priority,
}

impl FrontierKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 3] = [Self::Stack, Self::Queue, Self::Priority];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stack => "stack",
            Self::Queue => "queue",
            Self::Priority => "priority",
        }
    }
}

impl std::fmt::Display for FrontierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Frontier choice plus an optional expansion budget.
///
/// The default is a priority frontier with no budget. Policies can be read
/// from JSON, e.g. `{"frontier": "queue", "max_expansions": 5000}`; missing
/// fields take their defaults and unknown fields are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchPolicy {
    pub frontier: FrontierKind,
    /// Hard cap on node expansions. Reaching it ends the search as
    /// `Aborted`; `None` runs to completion.
    pub max_expansions: Option<u64>,
}

impl SearchPolicy {
    /// A policy with the given frontier and no budget.
    #[must_use]
    pub fn with_frontier(frontier: FrontierKind) -> Self {
        Self {
            frontier,
            max_expansions: None,
        }
    }

    /// Parse and validate a JSON policy.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] on malformed JSON, unknown
    /// fields, or a policy that fails [`SearchPolicy::validate`].
    pub fn from_json_str(json: &str) -> Result<Self, SearchError> {
        let policy: Self = serde_json::from_str(json).map_err(|e| SearchError::InvalidPolicy {
            detail: e.to_string(),
        })?;
        policy.validate()?;
        Ok(policy)
    }

    /// Pre-flight validation.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `max_expansions` is zero,
    /// which would abort before the start node is examined.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "frontier": self.frontier.as_str(),
            "max_expansions": self.max_expansions,
        })
    }

    /// Content hash of the canonical policy JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonical serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = canonical_json_bytes(&self.to_json_value())?;
        Ok(canonical_hash(DOMAIN_SEARCH_POLICY, &bytes))
    }
}
