//! Advent of Code puzzle solutions and the helpers they share
//!
//! [`utils`] holds the reusable pieces (geometry, grids, combinatorics,
//! graph search, math and input parsing). Puzzle solutions live under
//! `solutions`, organized by year, and register themselves with the solver
//! framework through the `AutoRegisterSolver` derive macro.

pub mod utils;

#[cfg(feature = "solutions")]
pub mod solutions;
