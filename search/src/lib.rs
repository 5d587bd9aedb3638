//! Degrees Search: frontier-driven graph search with an auditable report.
//!
//! This crate provides the search layer. It depends only on
//! `degrees_kernel`; it does NOT depend on `degrees_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! degrees_kernel  ←  degrees_search  ←  degrees_harness
//! (graph, canon)      (frontier, nodes)    (worlds, runner)
//! ```
//!
//! # Key types
//!
//! - [`SearchNode`](node::SearchNode): immutable search-tree record
//! - [`Frontier`](frontier::Frontier): add/remove/contains capability with
//!   stack, queue and priority implementations
//! - [`SearchSpace`](contract::SearchSpace): the neighbor function a caller supplies
//! - [`Heuristic`](heuristic::Heuristic): remaining-cost estimate, zero by default
//! - [`SearchPolicy`](policy::SearchPolicy): frontier choice and expansion budget
//! - [`SearchReport`](report::SearchReport): counters and termination reason

#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod frontier;
pub mod heuristic;
pub mod node;
pub mod policy;
pub mod report;
pub mod search;
