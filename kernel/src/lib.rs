//! Degrees Kernel: the co-starring graph value and the canonical
//! serialization/hashing primitives every other crate builds on.
//!
//! # Module Dependency Direction
//!
//! `costar` ← `proof`
//!
//! `proof` depends on nothing internal. `costar` uses `proof` only to compute
//! its content digest.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod costar;
pub mod proof;
