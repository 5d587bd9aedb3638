//! Degrees Harness: concrete worlds and the degrees-of-separation runner.
//!
//! Worlds adapt a data set to [`degrees_search::contract::SearchSpace`].
//! The runner owns endpoint validation, name resolution and digest binding;
//! the search itself is delegated to `degrees_search`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod runner;
pub mod worlds;
