//! Typed search errors.
//!
//! "No path" and "budget reached" are not errors: they are expressed via
//! [`crate::report::Termination`] on a successful result. `SearchError`
//! covers pre-flight policy failures and frontier contract violations.

use crate::policy::FrontierKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// `remove` was called on an empty frontier.
    #[error("remove called on an empty {kind} frontier")]
    EmptyFrontier { kind: FrontierKind },

    /// The policy failed validation before any search step was taken.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
}
