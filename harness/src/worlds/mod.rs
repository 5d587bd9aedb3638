//! World implementations for the harness runner.

pub mod costar;
pub mod grid;
pub mod small;
